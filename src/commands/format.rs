//! format command: relay one message and print the replies
//!
//! Prints what a chat bot would answer, replies separated by a blank line.

use super::MessageInput;
use anyhow::Result;
use clap::Args;
use promo_format::{Relay, RelayConfig, Reply};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args)]
pub struct FormatArgs {
    #[command(flatten)]
    input: MessageInput,

    /// Print a compact JSON report instead of plain replies
    #[arg(long)]
    json: bool,

    /// Relay config file (YAML)
    #[arg(long, env = "PROMO_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct FormatOutput {
    pub replies: Vec<Reply>,
}

pub async fn run_format(args: FormatArgs) -> Result<()> {
    let message = args.input.read().await?;
    let config = RelayConfig::load_or_default(args.config.as_deref())?;
    let relay = Relay::new(config);

    let replies = relay.handle(&message);

    if args.json {
        let output = FormatOutput { replies };
        println!("{}", serde_json::to_string(&output)?);
    } else if !replies.is_empty() {
        let texts: Vec<&str> = replies.iter().map(|r| r.text.as_str()).collect();
        println!("{}", texts.join("\n\n"));
    }

    Ok(())
}
