//! Core types for the generation domain

use chrono::NaiveDate;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Date format interpolated into every template header
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A template bundled with the binary and the path it is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    /// Destination relative to the project directory
    pub destination: &'static str,
    /// Raw Tera source
    pub source: &'static str,
}

/// Generated artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Where the file is written
    pub path: PathBuf,
    /// Path relative to the project directory, as reported to the user
    pub destination: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new(root: &Path, destination: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let destination = destination.into();
        Self {
            path: root.join(&destination),
            destination,
            content: content.into(),
        }
    }
}

/// Variables available to every template
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub variables: HashMap<String, JsonValue>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context carrying `current_date` as `YYYY-MM-DD`
    pub fn for_date(date: NaiveDate) -> Self {
        let mut context = Self::new();
        context.add_variable(
            "current_date",
            JsonValue::String(date.format(DATE_FORMAT).to_string()),
        );
        context
    }

    pub fn add_variable(&mut self, key: &str, value: JsonValue) {
        self.variables.insert(key.to_string(), value);
    }

    pub fn to_tera_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (key, value) in &self.variables {
            context.insert(key, value);
        }
        context
    }
}
