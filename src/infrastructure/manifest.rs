//! Project manifest (`package.json`) loading.
//!
//! Only the `dependencies` and `devDependencies` sections are read; every
//! other field of the document is ignored.

use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::error::{Result, SetupError};

/// File name of the manifest at the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Dependency sections of a `package.json`.
///
/// Sections stay untyped so a malformed one (an array, a string) reads as
/// "no entries" instead of rejecting the whole manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: Option<JsonValue>,
    #[serde(default)]
    pub dev_dependencies: Option<JsonValue>,
}

impl PackageManifest {
    /// Read and parse `<project_dir>/package.json`
    pub async fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(MANIFEST_FILE);
        debug!(path = %path.display(), "Loading package manifest");

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SetupError::ManifestNotFound(path));
            }
            Err(source) => return Err(SetupError::Io { path, source }),
        };

        Self::parse(&content).map_err(|source| SetupError::ManifestParse { path, source })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Whether `package` is declared under either dependency section.
    ///
    /// An entry with an empty, `null`, `false` or zero value counts as absent.
    pub fn declares(&self, package: &str) -> bool {
        [&self.dependencies, &self.dev_dependencies]
            .into_iter()
            .flatten()
            .filter_map(|section| section.as_object().and_then(|m| m.get(package)))
            .any(is_truthy)
    }
}

fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}
