//! The scaffolding pipeline: install, verify, then write the template set.
//!
//! Each step runs only when the previous one succeeded. Nothing is rolled
//! back: a failed write leaves earlier files on disk.

use chrono::{NaiveDate, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use crate::application::{InstallVerifier, OutputService};
use crate::config::SetupConfig;
use crate::error::{Result, SetupError};
use crate::generation::{MIRAGE_TEMPLATES, RenderContext, TeraTemplateRenderer};
use crate::infrastructure::shell::CommandExecutor;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    /// Files written, in write order
    pub written: Vec<PathBuf>,
}

/// Runs the install / verify / materialize pipeline
pub struct SetupRunner {
    config: SetupConfig,
    executor: Arc<dyn CommandExecutor>,
    output: Arc<dyn OutputService>,
    date: NaiveDate,
}

impl SetupRunner {
    /// Create a runner stamping today's UTC date into the templates
    pub fn new(
        config: SetupConfig,
        executor: Arc<dyn CommandExecutor>,
        output: Arc<dyn OutputService>,
    ) -> Self {
        Self {
            config,
            executor,
            output,
            date: Utc::now().date_naive(),
        }
    }

    /// Override the date interpolated into the templates
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub async fn run(&self) -> Result<SetupReport> {
        self.install().await?;
        InstallVerifier::new(&self.config).verify_all().await?;
        info!(
            "{} are successfully installed.",
            self.config.packages.join(" and ")
        );
        self.materialize().await
    }

    async fn install(&self) -> Result<()> {
        let command = self.config.install_command();
        info!(command = %command, "Installing {}...", self.config.packages.join(" and "));

        let result = match self
            .executor
            .execute(&command, self.config.project_dir())
            .await
        {
            Ok(result) => result,
            Err(e) => {
                error!(command = %command, error = %e, "Failed to run command: {command}");
                error!("Failed to install packages. Exiting.");
                return Err(e);
            }
        };

        if !result.is_success() {
            error!(
                command = %command,
                exit_code = result.exit_code,
                "Failed to run command: {command}"
            );
            error!("Failed to install packages. Exiting.");
            return Err(SetupError::InstallFailed {
                command,
                exit_code: result.exit_code,
            });
        }
        Ok(())
    }

    async fn materialize(&self) -> Result<SetupReport> {
        let renderer = TeraTemplateRenderer::new(&MIRAGE_TEMPLATES)?;
        let context = RenderContext::for_date(self.date);
        let artifacts =
            renderer.render_all(&MIRAGE_TEMPLATES, &context, self.config.project_dir())?;

        self.output.write_artifacts(&artifacts).await?;
        info!("All files have been created successfully.");

        Ok(SetupReport {
            written: artifacts.into_iter().map(|a| a.path).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::output::FileSystemOutputService;
    use crate::infrastructure::shell::MockCommandExecutor;
    use std::path::Path;
    use tempfile::TempDir;
    use tracing_test::traced_test;

    const INSTALL: &str = "pnpm add -D miragejs @types/miragejs";

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn installed_project() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("package.json"),
            r#"{ "devDependencies": { "miragejs": "^0.1.48", "@types/miragejs": "^0.1.0" } }"#,
        )
        .unwrap();
        for package in ["miragejs", "@types/miragejs"] {
            std::fs::create_dir_all(temp_dir.path().join("node_modules").join(package)).unwrap();
        }
        temp_dir
    }

    fn runner(dir: &Path, executor: Arc<MockCommandExecutor>) -> SetupRunner {
        SetupRunner::new(
            SetupConfig::new(dir, "pnpm"),
            executor,
            Arc::new(FileSystemOutputService::new()),
        )
        .with_date(date())
    }

    fn written_files(dir: &Path) -> Vec<&'static str> {
        ["mirage/config.ts", "app/app.ts", "config/environment.js", "tsconfig.json"]
            .into_iter()
            .filter(|p| dir.join(p).exists())
            .collect()
    }

    #[tokio::test]
    async fn test_run_writes_all_templates() {
        let project = installed_project();
        let executor = Arc::new(MockCommandExecutor::new().with_result(INSTALL, 0));

        let report = runner(project.path(), executor.clone()).run().await.unwrap();

        assert_eq!(executor.calls(), vec![INSTALL]);
        assert_eq!(report.written.len(), 4);
        assert_eq!(written_files(project.path()).len(), 4);
        for path in &report.written {
            let content = std::fs::read_to_string(path).unwrap();
            assert!(content.contains("Date: 2026-10-18"));
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn test_install_failure_skips_everything() {
        let project = installed_project();
        // verification would fail too if it ran
        std::fs::remove_file(project.path().join("package.json")).unwrap();
        let executor = Arc::new(MockCommandExecutor::new().with_result(INSTALL, 1));

        let result = runner(project.path(), executor).run().await;

        assert!(matches!(
            result,
            Err(SetupError::InstallFailed { exit_code: 1, .. })
        ));
        assert!(!logs_contain("package.json not found"));
        assert!(logs_contain("Failed to install packages. Exiting."));
        assert!(written_files(project.path()).is_empty());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_install_spawn_error_is_logged() {
        let project = installed_project();
        let executor = Arc::new(MockCommandExecutor::new());

        let result = runner(project.path(), executor).run().await;

        assert!(matches!(result, Err(SetupError::CommandSpawn { .. })));
        assert!(logs_contain("Failed to install packages. Exiting."));
        assert!(written_files(project.path()).is_empty());
    }

    #[tokio::test]
    async fn test_missing_package_writes_nothing() {
        let project = installed_project();
        std::fs::write(
            project.path().join("package.json"),
            r#"{ "devDependencies": { "miragejs": "^0.1.48" } }"#,
        )
        .unwrap();
        let executor = Arc::new(MockCommandExecutor::new().with_result(INSTALL, 0));

        let result = runner(project.path(), executor).run().await;

        assert!(matches!(result, Err(SetupError::NotInstalled { .. })));
        assert!(written_files(project.path()).is_empty());
    }

    #[tokio::test]
    async fn test_missing_manifest_writes_nothing() {
        let project = installed_project();
        std::fs::remove_file(project.path().join("package.json")).unwrap();
        let executor = Arc::new(MockCommandExecutor::new().with_result(INSTALL, 0));

        let result = runner(project.path(), executor).run().await;

        assert!(matches!(result, Err(SetupError::ManifestNotFound(_))));
        assert!(written_files(project.path()).is_empty());
    }

    #[tokio::test]
    async fn test_rerun_overwrites_identically() {
        let project = installed_project();
        let executor = Arc::new(MockCommandExecutor::new().with_result(INSTALL, 0));
        let runner = runner(project.path(), executor);

        let first = runner.run().await.unwrap();
        let before: Vec<String> = first
            .written
            .iter()
            .map(|p| std::fs::read_to_string(p).unwrap())
            .collect();

        std::fs::write(project.path().join("tsconfig.json"), "stale").unwrap();
        let second = runner.run().await.unwrap();
        let after: Vec<String> = second
            .written
            .iter()
            .map(|p| std::fs::read_to_string(p).unwrap())
            .collect();

        assert_eq!(first, second);
        assert_eq!(before, after);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_run_logs_progress() {
        let project = installed_project();
        let executor = Arc::new(MockCommandExecutor::new().with_result(INSTALL, 0));

        runner(project.path(), executor).run().await.unwrap();

        assert!(logs_contain("Installing miragejs and @types/miragejs..."));
        assert!(logs_contain("miragejs and @types/miragejs are successfully installed."));
        assert!(logs_contain("All files have been created successfully."));
    }
}
