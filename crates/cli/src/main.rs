//! GPTA CLI - equipment reliability and maintenance dashboard.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gpta_dashboard::{Dashboard, DashboardConfig, SharedDashboard};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;
mod shell;

#[derive(Parser)]
#[command(name = "gpta")]
#[command(about = "Equipment reliability and maintenance dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reliability horizon T, in hours
    #[arg(long, global = true, allow_negative_numbers = true)]
    target_uptime: Option<f64>,

    /// Minimum acceptable reliability, in (0, 1]
    #[arg(long, global = true, allow_negative_numbers = true)]
    min_reliability: Option<f64>,

    /// Start without the built-in organs and failure history
    #[arg(long, global = true)]
    no_seed: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List organs with their metrics
    Organs,
    /// Show one organ's metrics and failure history
    Show {
        /// Organ name
        organ: String,
    },
    /// Failures per organ with cumulative percentage
    Pareto {
        /// Print chart-ready JSON
        #[arg(long)]
        json: bool,
    },
    /// Reliability over time for one organ
    Curve {
        /// Organ name
        organ: String,
        /// Print chart-ready JSON
        #[arg(long)]
        json: bool,
    },
    /// Export one organ's metrics and history as CSV
    Export {
        /// Organ name
        organ: String,
        /// Output file or directory (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Interactive session reading commands from stdin
    Shell,
}

fn init_logging(verbose: bool) {
    // stdout carries reports and CSV; logs go to stderr
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => DashboardConfig::load(path)
            .await
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if cli.no_seed {
        config.seed_defaults = false;
    }

    let mut dashboard = config.build_dashboard()?;
    if let Some(hours) = cli.target_uptime {
        dashboard.set_target_uptime_t(hours)?;
    }
    if let Some(threshold) = cli.min_reliability {
        dashboard.set_min_reliability_threshold(threshold)?;
    }

    match cli.command {
        Commands::Organs => {
            print!("{}", render::organ_table(&dashboard));
        }
        Commands::Show { organ } => {
            dashboard.select_organ(&organ)?;
            print!("{}", render::organ_details(&dashboard));
        }
        Commands::Pareto { json } => {
            let series = dashboard.pareto_series();
            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                print!("{}", render::pareto_table(&series));
            }
        }
        Commands::Curve { organ, json } => {
            dashboard.select_organ(&organ)?;
            let curve = dashboard.reliability_curve();
            if json {
                println!("{}", serde_json::to_string_pretty(&curve)?);
            } else {
                print!("{}", render::curve_table(&curve));
            }
        }
        Commands::Export { organ, out } => {
            dashboard.select_organ(&organ)?;
            export(&dashboard, out).await?;
        }
        Commands::Shell => {
            shell::run(SharedDashboard::new(dashboard)).await?;
        }
    }

    Ok(())
}

/// Write the selected organ's CSV to `out`, or to stdout.
///
/// A directory target gets the organ's report file name.
pub(crate) async fn export(dashboard: &Dashboard, out: Option<PathBuf>) -> Result<()> {
    let csv = dashboard.export_snapshot()?.to_csv();
    let Some(mut path) = out else {
        print!("{csv}");
        return Ok(());
    };

    let is_dir = tokio::fs::metadata(&path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if is_dir {
        path.push(dashboard.export_file_name());
    }

    tokio::fs::write(&path, csv)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Exported report to {}", path.display());
    println!("Exported to {}", path.display());
    Ok(())
}
