//! Clauselens - Clause-level contract risk analysis
//!
//! Usage:
//!   clauselens analyze contract.txt    Analyze a plain-text contract
//!   clauselens analyze c.txt --json    Emit the full report as JSON
//!   clauselens catalog                 List loaded risk categories
//!   clauselens templates               List loaded template clauses
//!   clauselens --help                  Show all commands

use anyhow::Result;
use clap::Parser;

use clauselens::cli::output::OutputMode;
use clauselens::cli::{execute, Cli};
use clauselens::init::AppContext;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Tracing to stderr so JSON output on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clauselens=info".parse()?),
        )
        .init();

    let mode = OutputMode::from_json_flag(cli.json);
    let ctx = AppContext::new(cli.data_path.clone())?;
    execute(&cli.command, &ctx, mode).await
}
