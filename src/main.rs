//! mirage-scaffold CLI entrypoint
//! Parses command-line arguments and runs the scaffolding pipeline.
#![deny(unsafe_code)]

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use mirage_scaffold::config::DEFAULT_PACKAGE_MANAGER;
use mirage_scaffold::infrastructure::{FileSystemOutputService, ShellCommandExecutor};
use mirage_scaffold::{SetupConfig, SetupRunner};
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mirage-scaffold")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root containing package.json
    #[arg(long, env = "MIRAGE_SCAFFOLD_PROJECT_DIR", default_value = ".")]
    project_dir: PathBuf,

    /// Package manager invoked as `<CMD> add -D <packages>`
    #[arg(long, env = "MIRAGE_SCAFFOLD_PACKAGE_MANAGER", default_value = DEFAULT_PACKAGE_MANAGER)]
    package_manager: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    info!(project_dir = %cli.project_dir.display(), "Starting mirage-scaffold");

    let config = SetupConfig::new(cli.project_dir, cli.package_manager);
    let runner = SetupRunner::new(
        config,
        Arc::new(ShellCommandExecutor::new()),
        Arc::new(FileSystemOutputService::new()),
    );

    match runner.run().await {
        Ok(report) => {
            info!(files = report.written.len(), "Scaffolding complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Scaffolding failed");
            ExitCode::from(e.exit_code())
        }
    }
}
