//! batch command: relay every message found in a set of files
//!
//! Files hold messages separated by a line containing only the separator.
//! Messages are processed in parallel; results keep input order.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use futures::future::join_all;
use promo_format::{Relay, RelayConfig, Reply, ReplyKind};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;

#[derive(Args)]
pub struct BatchArgs {
    /// Files, directories or glob patterns holding messages
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Line separating messages inside a file
    #[arg(long, default_value = "---")]
    pub separator: String,

    /// Messages processed at once (1-64)
    #[arg(short, long, default_value = "4", value_parser = clap::value_parser!(u8).range(1..=64))]
    pub parallel: u8,

    /// Relay config file (YAML)
    #[arg(long, env = "PROMO_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Replies for one message
#[derive(Debug, Serialize)]
pub struct BatchResult {
    pub source: String,
    pub index: usize,
    pub replies: Vec<Reply>,
}

/// Summary of a batch run
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub offers: usize,
    pub rejected: usize,
    pub failed: usize,
    pub timestamp: String,
    pub results: Vec<BatchResult>,
}

pub async fn run_batch(args: BatchArgs) -> Result<()> {
    let files = expand_files(&args.files).await?;

    if files.is_empty() {
        let error = serde_json::json!({
            "error": "no_files",
            "message": "No files found matching patterns"
        });
        println!("{}", serde_json::to_string(&error)?);
        return Ok(());
    }

    let config = RelayConfig::load_or_default(args.config.as_deref())?;
    let relay = Arc::new(Relay::new(config));

    let mut messages = Vec::new();
    for file in &files {
        let content = tokio::fs::read_to_string(file)
            .await
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let source = file.display().to_string();
        for (index, message) in split_messages(&content, &args.separator)
            .into_iter()
            .enumerate()
        {
            messages.push((source.clone(), index, message));
        }
    }

    eprintln!(
        "Processing {} messages from {} files ({} parallel)...",
        messages.len(),
        files.len(),
        args.parallel
    );

    let semaphore = Arc::new(Semaphore::new(args.parallel as usize));
    let tasks: Vec<_> = messages
        .into_iter()
        .map(|(source, index, message)| {
            let relay = Arc::clone(&relay);
            let semaphore = Arc::clone(&semaphore);
            tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await?;
                let replies =
                    tokio::task::spawn_blocking(move || relay.handle(&message)).await?;
                anyhow::Ok(BatchResult {
                    source,
                    index,
                    replies,
                })
            })
        })
        .collect();

    let mut results = Vec::with_capacity(tasks.len());
    for joined in join_all(tasks).await {
        results.push(joined??);
    }

    let report = summarize(results);
    println!("{}", serde_json::to_string(&report)?);

    eprintln!(
        "Done: {} offers, {} rejected, {} failed",
        report.offers, report.rejected, report.failed
    );

    Ok(())
}

fn summarize(results: Vec<BatchResult>) -> BatchReport {
    let count = |kind: ReplyKind| {
        results
            .iter()
            .filter(|r| r.replies.iter().any(|reply| reply.kind == kind))
            .count()
    };

    BatchReport {
        total: results.len(),
        offers: count(ReplyKind::Offer),
        rejected: count(ReplyKind::NoOffer),
        failed: count(ReplyKind::Failure),
        timestamp: Utc::now().to_rfc3339(),
        results,
    }
}

/// Split file content into messages on separator lines. Blank messages are
/// dropped.
fn split_messages(content: &str, separator: &str) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim() == separator {
            messages.push(current.join("\n"));
            current.clear();
        } else {
            current.push(line);
        }
    }
    messages.push(current.join("\n"));

    messages.retain(|m| !m.trim().is_empty());
    messages
}

/// Expand file patterns to actual file paths
async fn expand_files(patterns: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let pattern_str = pattern.to_string_lossy();

        if pattern_str.contains('*') {
            for entry in glob::glob(&pattern_str)? {
                let path = entry?;
                if path.is_file() {
                    files.push(path);
                }
            }
        } else if pattern.is_file() {
            files.push(pattern.clone());
        } else if pattern.is_dir() {
            // Directories contribute their .txt files
            let mut entries = tokio::fs::read_dir(pattern).await?;
            let mut found = Vec::new();
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
                    found.push(path);
                }
            }
            found.sort();
            files.extend(found);
        }
    }

    Ok(files)
}
