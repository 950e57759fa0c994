//! JSON export

use serde::Serialize;
use std::io::Write;

use super::Report;
use crate::error::{DraagkrachtError, DraagkrachtResult};

/// Write a report as JSON
pub fn export_json<T: Serialize, W: Write>(
    report: &Report<T>,
    writer: &mut W,
    pretty: bool,
) -> DraagkrachtResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, report)
    } else {
        serde_json::to_writer(&mut *writer, report)
    }
    .map_err(|e| DraagkrachtError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| DraagkrachtError::Export(e.to_string()))?;
    Ok(())
}
