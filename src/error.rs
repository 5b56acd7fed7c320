//! Error handling for the Mirage scaffolding run.
//!
//! Every failure is terminal for the run. The variants carry enough context
//! (command text, package name, or path) to be logged once at the boundary
//! and mapped to a process exit code.
//!
//! # Examples
//!
//! ```
//! use mirage_scaffold::error::{SetupError, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(SetupError::not_installed("miragejs", "missing from package.json"))
//! }
//!
//! assert_eq!(might_fail().unwrap_err().exit_code(), 1);
//! ```

use std::error::Error as StdError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for scaffolding operations
pub type Result<T> = std::result::Result<T, SetupError>;

/// Main error type for scaffolding operations
#[derive(Debug, Error)]
pub enum SetupError {
    /// The package-manager command could not be spawned
    #[error("Failed to run command: {command}: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The package-manager command exited unsuccessfully
    #[error("Failed to run command: {command} (exit code {exit_code})")]
    InstallFailed { command: String, exit_code: i32 },

    /// No `package.json` at the project root
    #[error("package.json not found at {}", .0.display())]
    ManifestNotFound(PathBuf),

    /// `package.json` exists but is not valid JSON
    #[error("Failed to parse {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A package is missing from the manifest or from `node_modules`
    #[error("{package} is not properly installed: {reason}")]
    NotInstalled { package: String, reason: String },

    /// Template rendering error
    #[error("Template error: {0}")]
    Render(String),

    /// Filesystem failure reading the manifest or writing an artifact
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SetupError {
    /// Create a new verification error for `package`
    pub fn not_installed<P: Into<String>, R: Into<String>>(package: P, reason: R) -> Self {
        Self::NotInstalled {
            package: package.into(),
            reason: reason.into(),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl From<tera::Error> for SetupError {
    fn from(err: tera::Error) -> Self {
        // tera nests the useful message in the source chain
        let mut message = err.to_string();
        let mut source = StdError::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = StdError::source(cause);
        }
        Self::Render(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_install_failed_display() {
        let error = SetupError::InstallFailed {
            command: "pnpm add -D miragejs @types/miragejs".to_string(),
            exit_code: 2,
        };
        assert_eq!(
            error.to_string(),
            "Failed to run command: pnpm add -D miragejs @types/miragejs (exit code 2)"
        );
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_not_installed_creation() {
        let error = SetupError::not_installed("@types/miragejs", "node_modules entry missing");
        assert!(matches!(error, SetupError::NotInstalled { .. }));
        assert_eq!(
            error.to_string(),
            "@types/miragejs is not properly installed: node_modules entry missing"
        );
    }

    #[test]
    fn test_manifest_not_found_display() {
        let error = SetupError::ManifestNotFound(PathBuf::from("/work/package.json"));
        assert_eq!(error.to_string(), "package.json not found at /work/package.json");
    }

    #[test]
    fn test_io_error_keeps_source() {
        let error = SetupError::Io {
            path: PathBuf::from("mirage/config.ts"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("mirage/config.ts"));
        assert!(StdError::source(&error).is_some());
    }

    #[test]
    fn test_from_tera_error() {
        let mut tera = tera::Tera::default();
        let tera_error = tera.add_raw_template("broken", "{{ unclosed").unwrap_err();
        let error: SetupError = tera_error.into();
        assert!(matches!(error, SetupError::Render(_)));
        assert!(error.to_string().starts_with("Template error:"));
    }
}
