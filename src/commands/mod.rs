//! CLI commands
//!
//! Compact JSON goes to stdout, progress and logs to stderr.

pub mod batch;
pub mod extract;
pub mod format;
pub mod init;

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Where a single message comes from
#[derive(Args)]
pub struct MessageInput {
    /// File holding the message
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Message text given inline
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the message from stdin
    #[arg(long, conflicts_with_all = ["file", "text"])]
    pub stdin: bool,
}

impl MessageInput {
    /// Read the message from --text, FILE or --stdin.
    pub async fn read(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }

        if let Some(file) = &self.file {
            return tokio::fs::read_to_string(file)
                .await
                .with_context(|| format!("Failed to read file: {}", file.display()));
        }

        if self.stdin {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read stdin")?;
            return Ok(text);
        }

        bail!(
            "Usage:\n  promo <command> <FILE>       Read the message from a file\n  promo <command> --text <TEXT>  Pass the message inline\n  promo <command> --stdin      Read the message from stdin"
        )
    }
}
