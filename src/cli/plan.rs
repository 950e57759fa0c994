//! Plan CLI commands
//!
//! Work on a household snapshot file instead of loose amounts.

use std::path::PathBuf;

use clap::Subcommand;
use tracing::info;

use super::emit;
use crate::config::{DraagkrachtPaths, Settings};
use crate::display::format_plan;
use crate::engine::DistributionStrategy;
use crate::error::{DraagkrachtError, DraagkrachtResult};
use crate::export::OutputFormat;
use crate::models::{Money, ReferenceMonth};
use crate::services::{PlanOptions, PlannerService};
use crate::storage::{initialize_snapshot, load_snapshot};

/// Snapshot subcommands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Compute the full plan for a household snapshot
    Plan {
        /// Snapshot file (JSON or YAML); defaults to the configured one
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Reference month (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<ReferenceMonth>,
        /// Distribution strategy (defaults to the configured one)
        #[arg(short, long)]
        strategy: Option<DistributionStrategy>,
        /// Leave a pot out of the distribution (repeatable)
        #[arg(short = 'x', long)]
        exclude: Vec<String>,
        /// Set a pot to a fixed amount after distribution (NAME=AMOUNT, repeatable)
        #[arg(long = "set", value_name = "NAME=AMOUNT")]
        overrides: Vec<String>,
        /// Keep the current pot budgets instead of distributing
        #[arg(short, long)]
        keep: bool,
    },

    /// Write a sample household snapshot
    Init {
        /// Target file; defaults to the configured snapshot file
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Handle a snapshot command
pub fn handle_plan_command(
    paths: &DraagkrachtPaths,
    settings: &Settings,
    format: OutputFormat,
    cmd: PlanCommands,
) -> DraagkrachtResult<()> {
    match cmd {
        PlanCommands::Plan {
            file,
            month,
            strategy,
            exclude,
            overrides,
            keep,
        } => {
            let path = resolve_snapshot_path(paths, settings, file);
            let snapshot = load_snapshot(&path)?;

            let mut options = PlanOptions::new(
                month.unwrap_or_else(ReferenceMonth::current),
                strategy.unwrap_or(settings.default_strategy),
            );
            options.exclude = exclude;
            options.overrides = overrides
                .iter()
                .map(|s| parse_override(s))
                .collect::<DraagkrachtResult<_>>()?;
            options.keep_current = keep;

            let plan = PlannerService::new(settings).plan(&snapshot, &options)?;
            emit(format, "plan", &plan, || {
                format_plan(&plan, &settings.currency_symbol)
            })
        }

        PlanCommands::Init { file, force } => {
            let path = resolve_snapshot_path(paths, settings, file);
            initialize_snapshot(&path, force)?;
            if !paths.is_initialized() {
                settings.save(paths)?;
            }
            info!(path = %path.display(), "wrote sample snapshot");

            println!("Sample household written to {}", path.display());
            println!("Edit it, then run 'draagkracht plan' to compute the plan.");
            Ok(())
        }
    }
}

fn resolve_snapshot_path(
    paths: &DraagkrachtPaths,
    settings: &Settings,
    file: Option<PathBuf>,
) -> PathBuf {
    file.unwrap_or_else(|| paths.snapshot_file(&settings.snapshot_file))
}

/// Parse `NAME=AMOUNT`; the amount is parsed strictly
fn parse_override(s: &str) -> DraagkrachtResult<(String, Money)> {
    let (name, amount) = s.rsplit_once('=').ok_or_else(|| {
        DraagkrachtError::Validation(format!("Expected NAME=AMOUNT, got '{}'", s))
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(DraagkrachtError::Validation(format!(
            "Missing pot name in '{}'",
            s
        )));
    }

    let amount = Money::parse(amount)
        .map_err(|e| DraagkrachtError::Validation(format!("Invalid amount in '{}': {}", s, e)))?;
    Ok((name.to_string(), amount))
}
