//! Checks that the installed packages actually landed in the project

use tokio::fs;
use tracing::{debug, error};

use crate::config::SetupConfig;
use crate::error::{Result, SetupError};
use crate::infrastructure::manifest::PackageManifest;

/// Verifies each configured package is declared in `package.json` and
/// present under `node_modules`
pub struct InstallVerifier<'a> {
    config: &'a SetupConfig,
}

impl<'a> InstallVerifier<'a> {
    pub fn new(config: &'a SetupConfig) -> Self {
        Self { config }
    }

    /// Verify every package in configuration order; the first failure wins
    pub async fn verify_all(&self) -> Result<()> {
        let manifest = match PackageManifest::load(self.config.project_dir()).await {
            Ok(manifest) => manifest,
            Err(e @ SetupError::ManifestNotFound(_)) => {
                error!("package.json not found");
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        for package in &self.config.packages {
            self.verify_package(&manifest, package).await?;
        }
        Ok(())
    }

    async fn verify_package(&self, manifest: &PackageManifest, package: &str) -> Result<()> {
        if !manifest.declares(package) {
            error!(package = %package, "{package} is not properly installed. Exiting.");
            return Err(SetupError::not_installed(
                package,
                "not listed in dependencies or devDependencies",
            ));
        }

        let package_dir = self.config.package_dir(package);
        if !fs::try_exists(&package_dir).await.unwrap_or(false) {
            error!(
                package = %package,
                path = %package_dir.display(),
                "{package} is not properly installed. Exiting."
            );
            return Err(SetupError::not_installed(
                package,
                format!("{} does not exist", package_dir.display()),
            ));
        }

        debug!(package = %package, "Package verified");
        Ok(())
    }
}
