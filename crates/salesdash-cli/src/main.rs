mod insights;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "salesdash-cli")]
#[command(about = "Sales dashboard insight generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate AI insights from processed weekly sales data
    Insights {
        #[command(subcommand)]
        command: InsightsCommands,
    },
    /// Print the resolved configuration (credentials redacted)
    Config,
}

#[derive(Debug, Subcommand)]
enum InsightsCommands {
    /// Insights for a single brand
    Brand {
        /// Brand key as it appears in the weekly data file
        #[arg(long)]
        brand: String,

        /// Weekly data JSON file; defaults to the current week's file in the data dir
        #[arg(long)]
        data: Option<PathBuf>,

        /// Print the full result as JSON instead of the insight text
        #[arg(long)]
        json: bool,
    },
    /// Insights across all brands
    Overall {
        /// Weekly data JSON file; defaults to the current week's file in the data dir
        #[arg(long)]
        data: Option<PathBuf>,

        /// Print the full result as JSON instead of the insight text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("salesdash-cli: use --help to list commands");
        return Ok(());
    };

    let config = salesdash_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "configuration loaded");

    match command {
        Commands::Config => println!("{config:#?}"),
        Commands::Insights { command } => match command {
            InsightsCommands::Brand { brand, data, json } => {
                insights::run_brand_insights(&config, &brand, data.as_deref(), json).await?;
            }
            InsightsCommands::Overall { data, json } => {
                insights::run_overall_insights(&config, data.as_deref(), json).await?;
            }
        },
    }

    Ok(())
}
