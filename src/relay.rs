//! Message relay
//!
//! The boundary a chat transport talks to: one incoming message in, zero or
//! more replies out. Faults inside extraction never escape this module.

use crate::config::RelayConfig;
use crate::extract::process_message;
use crate::render::render;
use crate::text::truncate;
use serde::Serialize;
use std::panic::{self, UnwindSafe};

/// What a reply carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    /// Answer to `/start`
    Welcome,
    /// A rendered offer
    Offer,
    /// The message held no usable offer
    NoOffer,
    /// Processing failed; the fixed failure notice
    Failure,
}

/// One outgoing reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub kind: ReplyKind,
    pub text: String,
}

impl Reply {
    fn new(kind: ReplyKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Stateless relay; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Relay {
    config: RelayConfig,
}

impl Relay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Handle one incoming message.
    ///
    /// `/start` gets the welcome text and other commands are ignored. Any
    /// other text runs the offer pipeline: one reply per offer, or the
    /// no-offer notice when there is none.
    pub fn handle(&self, text: &str) -> Vec<Reply> {
        if let Some(command) = parse_command(text) {
            tracing::info!(command, "command received");
            return match command {
                "start" => vec![Reply::new(ReplyKind::Welcome, &self.config.welcome)],
                _ => Vec::new(),
            };
        }

        tracing::info!(
            message = %truncate(text, self.config.log_preview_chars),
            "message received"
        );

        self.guarded(|| process_message(text).iter().map(render).collect())
    }

    /// Run a rendering step, turning a panic into the failure notice.
    fn guarded<F>(&self, f: F) -> Vec<Reply>
    where
        F: FnOnce() -> Vec<String> + UnwindSafe,
    {
        match panic::catch_unwind(f) {
            Ok(rendered) if rendered.is_empty() => {
                vec![Reply::new(ReplyKind::NoOffer, &self.config.no_offer_notice)]
            }
            Ok(rendered) => rendered
                .into_iter()
                .map(|text| Reply::new(ReplyKind::Offer, text))
                .collect(),
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                tracing::error!(%reason, "failed to process message");
                vec![Reply::new(ReplyKind::Failure, &self.config.failure_notice)]
            }
        }
    }
}

/// Command name of a `/command[@bot] args` message.
fn parse_command(text: &str) -> Option<&str> {
    let word = text.trim_start().strip_prefix('/')?.split_whitespace().next()?;
    let name = word.split('@').next().unwrap_or(word);
    (!name.is_empty()).then_some(name)
}
