use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use draagkracht::cli::{handle_calc_command, handle_plan_command, CalcCommands, PlanCommands};
use draagkracht::config::{DraagkrachtPaths, Settings};
use draagkracht::export::OutputFormat;

/// Environment variable holding the log filter (e.g. "debug" or "draagkracht=trace")
const LOG_ENV: &str = "DRAAGKRACHT_LOG";

#[derive(Parser)]
#[command(
    name = "draagkracht",
    version,
    about = "Financial capacity and protection calculator",
    long_about = "Draagkracht computes collection fee caps, the protected income \
                  floor, the free budget after fixed obligations and a distribution \
                  of that budget over pots, for households in debt counselling."
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Calc(CalcCommands),

    #[command(flatten)]
    Plan(PlanCommands),

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let paths = DraagkrachtPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Calc(cmd)) => handle_calc_command(&settings, cli.format, cmd)?,
        Some(Commands::Plan(cmd)) => handle_plan_command(&paths, &settings, cli.format, cmd)?,
        Some(Commands::Config) => {
            println!("Draagkracht Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!(
                "Snapshot file:  {}",
                paths.snapshot_file(&settings.snapshot_file).display()
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Default strategy:  {}", settings.default_strategy);
            if settings.priority_keywords.is_empty() {
                println!("  Priority keywords: (built-in only)");
            } else {
                println!(
                    "  Priority keywords: {}",
                    settings.priority_keywords.join(", ")
                );
            }
        }
        None => {
            println!("Draagkracht - financial capacity and protection calculator");
            println!();
            println!("Run 'draagkracht --help' for usage information.");
            println!("Run 'draagkracht init' to write a sample household.");
        }
    }

    Ok(())
}
