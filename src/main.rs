//! promo CLI
//!
//! Turns free-form promotion messages into the canonical offer template.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::batch::{run_batch, BatchArgs};
use commands::extract::{run_extract, ExtractArgs};
use commands::format::{run_format, FormatArgs};
use commands::init::{run_init, InitArgs};

#[derive(Parser)]
#[command(name = "promo")]
#[command(version)]
#[command(about = "Extract and re-render promotional offers from chat messages")]
#[command(long_about = "Reads free-form promotion messages and re-renders them in a fixed template.\n\nCommands:\n  format   Relay one message and print the replies\n  extract  Print the extracted offer as JSON\n  batch    Relay every message in a set of files\n  init     Write a default promo.yaml")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Relay one message and print the replies a bot would send
    Format(FormatArgs),
    /// Print the extracted offer record as compact JSON
    Extract(ExtractArgs),
    /// Relay every message in files, directories or glob patterns
    Batch(BatchArgs),
    /// Create a promo.yaml config template
    Init(InitArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Format(args) => run_format(args).await,
        Commands::Extract(args) => run_extract(args).await,
        Commands::Batch(args) => run_batch(args).await,
        Commands::Init(args) => run_init(args).await,
    }
}
