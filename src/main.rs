use analytics::{Analysis, AnalyticsEngine};
use anyhow::Context;
use clap::{Parser, Subcommand};
use core_types::{PeriodWindow, SeriesSet, SeriesStore};
use projection::ViewProjector;
use std::path::PathBuf;

mod dataset;
mod render;

/// The main entry point for the macrodash dashboard shell.
fn main() {
    // Optional .env file with MACRODASH__* overrides
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Macroeconomic indicator dashboard: policy rate, inflation and exchange rate.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON file with `policy_rate`, `inflation` and `exchange_rate` observation lists.
    /// Defaults to the bundled central-bank sample.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Trailing period shown in tables and derived series (overrides the configuration).
    #[arg(long, global = true, value_enum)]
    period: Option<PeriodWindow>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Headline indicators and their card statuses.
    Kpis,
    /// Joined monthly table, newest month first.
    Table,
    /// Returns, rolling volatility and moving average of the exchange rate.
    Derived,
    /// Narrative alerts derived from the headline indicators.
    Insights,
    /// Snapshot and projected view as JSON.
    Json,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let _log_guard = configuration::init_logging(&config.logging)?;

    let store = load_store(cli.data.as_ref())?;
    let period = cli.period.unwrap_or(config.display.period);
    tracing::info!(%period, "Loaded series store.");

    let engine = AnalyticsEngine::new(config.indicators.clone())?;
    let Analysis { snapshot, derived } = engine
        .analyze(&store)
        .context("Failed to compute indicators")?;
    let view = ViewProjector::new(config.indicators.status.clone()).project(&store, &derived, period);

    match cli.command {
        Commands::Kpis => render::print_kpis(&snapshot),
        Commands::Table => render::print_table(&view),
        Commands::Derived => render::print_derived(&view),
        Commands::Insights => render::print_insights(&snapshot),
        Commands::Json => {
            let doc = serde_json::json!({ "snapshot": snapshot, "view": view });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    Ok(())
}

/// Reads the series from `path`, or falls back to the bundled sample.
fn load_store(path: Option<&PathBuf>) -> anyhow::Result<SeriesStore> {
    let set: SeriesSet = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read series file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse series file {}", path.display()))?
        }
        None => dataset::bcb_sample()?,
    };

    Ok(set.into_store()?)
}
