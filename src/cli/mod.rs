//! CLI interface for clauselens.

pub mod handlers;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::init::AppContext;
use output::OutputMode;

/// Clauselens - Clause-level contract risk analysis
#[derive(Parser)]
#[command(name = "clauselens", version, about, long_about = None)]
pub struct Cli {
    /// Override data directory holding catalog files (default: ~/.clauselens)
    #[arg(long, env = "CLAUSELENS_DATA_PATH", global = true)]
    pub data_path: Option<PathBuf>,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a plain-text contract and render the risk report
    Analyze {
        /// Path to the contract text file
        file: PathBuf,

        /// Language tag recorded in the report (e.g. "en", "hi")
        #[arg(long, default_value = "en")]
        language: String,

        /// Also write the full JSON report to this file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// List loaded risk categories
    Catalog,

    /// List loaded template corpus entries
    Templates,
}

/// Execute a CLI command, dispatching to the appropriate handler.
pub async fn execute(command: &Commands, ctx: &AppContext, mode: OutputMode) -> anyhow::Result<()> {
    match command {
        Commands::Analyze {
            file,
            language,
            output,
        } => handlers::analyze::handle_analyze(ctx, file, language, output.as_deref(), mode).await,
        Commands::Catalog => handlers::catalog::handle_catalog(ctx, mode),
        Commands::Templates => handlers::catalog::handle_templates(ctx, mode),
    }
}
