//! YAML export

use serde::Serialize;
use std::io::Write;

use super::Report;
use crate::error::{DraagkrachtError, DraagkrachtResult};

/// Write a report as YAML with a header comment
pub fn export_yaml<T: Serialize, W: Write>(
    report: &Report<T>,
    writer: &mut W,
) -> DraagkrachtResult<()> {
    let export_err = |e: std::io::Error| DraagkrachtError::Export(e.to_string());

    writeln!(writer, "# Draagkracht {} report", report.kind).map_err(export_err)?;
    writeln!(writer, "# Generated: {}", report.generated_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", report.app_version).map_err(export_err)?;

    serde_yaml::to_writer(writer, report).map_err(|e| DraagkrachtError::Export(e.to_string()))?;

    Ok(())
}
