//! Export module for Draagkracht
//!
//! Machine-readable output of calculator results and plans:
//! - JSON: for other tools
//! - YAML: human-readable, with a short header comment
//!
//! Every result is wrapped in a [`Report`] carrying a schema version and a
//! timestamp.

pub mod json;
pub mod yaml;

pub use json::export_json;
pub use yaml::export_yaml;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Output format of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Terminal tables
    #[default]
    Table,
    Json,
    Yaml,
}

/// Versioned wrapper around an exported result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report<T> {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub generated_at: DateTime<Utc>,

    /// Application version that produced the report
    pub app_version: String,

    /// Which calculation produced `data` ("fee", "plan", ...)
    pub kind: String,

    pub data: T,
}

impl<T> Report<T> {
    pub fn new(kind: impl Into<String>, data: T) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            kind: kind.into(),
            data,
        }
    }

    /// Check that the report can be read by this version
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != REPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                REPORT_SCHEMA_VERSION, self.schema_version
            ));
        }
        Ok(())
    }
}
