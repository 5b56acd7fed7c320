//! Run configuration

use std::path::{Path, PathBuf};

/// Packages installed and verified on every run, in verification order
pub const MIRAGE_PACKAGES: [&str; 2] = ["miragejs", "@types/miragejs"];

/// Package manager used when none is given
pub const DEFAULT_PACKAGE_MANAGER: &str = "pnpm";

/// Settings for a single scaffolding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupConfig {
    /// Project root holding `package.json`; generated files land here
    pub project_dir: PathBuf,
    /// Command invoked as `<package_manager> add -D <packages...>`
    pub package_manager: String,
    pub packages: Vec<String>,
}

impl SetupConfig {
    pub fn new(project_dir: impl Into<PathBuf>, package_manager: impl Into<String>) -> Self {
        Self {
            project_dir: project_dir.into(),
            package_manager: package_manager.into(),
            packages: MIRAGE_PACKAGES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Shell command that installs the packages as dev dependencies
    pub fn install_command(&self) -> String {
        format!("{} add -D {}", self.package_manager, self.packages.join(" "))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.project_dir.join("package.json")
    }

    /// Directory a package is materialized into; scoped names nest
    pub fn package_dir(&self, package: &str) -> PathBuf {
        package
            .split('/')
            .fold(self.project_dir.join("node_modules"), |dir, part| {
                dir.join(part)
            })
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }
}
