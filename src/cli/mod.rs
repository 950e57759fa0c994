//! CLI command handlers
//!
//! Bridges the clap argument parsing with the engine and planner service.

pub mod calc;
pub mod plan;

pub use calc::{handle_calc_command, CalcCommands};
pub use plan::{handle_plan_command, PlanCommands};

use serde::Serialize;
use std::io::Write;

use crate::error::{DraagkrachtError, DraagkrachtResult};
use crate::export::{export_json, export_yaml, OutputFormat, Report};

/// Print a result in the requested format
///
/// `table` is only rendered for [`OutputFormat::Table`].
pub(crate) fn emit<T, F>(format: OutputFormat, kind: &str, data: &T, table: F) -> DraagkrachtResult<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Table => {
            write!(out, "{}", table()).map_err(|e| DraagkrachtError::Io(e.to_string()))?
        }
        OutputFormat::Json => export_json(&Report::new(kind, data), &mut out, true)?,
        OutputFormat::Yaml => export_yaml(&Report::new(kind, data), &mut out)?,
    }

    Ok(())
}
