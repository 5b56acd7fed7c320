//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::OutputService;
use crate::error::SetupError;
use crate::generation::Artifact;

/// Output service that writes artifacts to the filesystem, replacing
/// whatever is already at each path
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<(), SetupError> {
        for artifact in artifacts {
            if let Some(parent) = artifact.path.parent() {
                self.ensure_directory(parent).await?;
            }

            let io_err = |source| SetupError::Io {
                path: artifact.path.clone(),
                source,
            };

            let mut file = fs::File::create(&artifact.path).await.map_err(io_err)?;
            file.write_all(artifact.content.as_bytes())
                .await
                .map_err(io_err)?;
            file.flush().await.map_err(io_err)?;

            tracing::info!("Created file: {}", artifact.destination.display());
        }

        Ok(())
    }

    async fn ensure_directory(&self, path: &Path) -> Result<(), SetupError> {
        if path.as_os_str().is_empty() || fs::try_exists(path).await.unwrap_or(false) {
            return Ok(());
        }
        tracing::debug!(path = %path.display(), "Creating directory");
        fs::create_dir_all(path)
            .await
            .map_err(|source| SetupError::Io {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
