//! Port interfaces for the application layer

use async_trait::async_trait;
use std::path::Path;

use crate::error::SetupError;
use crate::generation::Artifact;

/// Service for writing generated artifacts to the output destination
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write all artifacts in order, stopping at the first failure
    async fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<(), SetupError>;

    /// Ensure a directory exists
    async fn ensure_directory(&self, path: &Path) -> Result<(), SetupError>;
}
