//! Offer record schema
//!
//! The structured form of one promotional message, produced by the
//! extractor and consumed by the renderer.

use serde::{Deserialize, Serialize};

/// Marker every finalized description starts with, exactly once.
pub const MARKER: &str = "🔥";

/// Description used when no line of the message could be used.
pub const SENTINEL_DESCRIPTION: &str = "🔥[descrição do produto]";

/// One extracted offer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferRecord {
    /// Product description, prefixed with the 🔥 marker
    pub description: String,
    /// Price digits and separators exactly as written ("1.299,90")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub price: String,
    /// Interest-free installment text ("10x sem juros")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub installment: String,
    /// Coupon code or redemption instruction
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub coupon: String,
    /// Purchase links, deduplicated, in message order
    #[serde(default)]
    pub links: Vec<String>,
}

impl OfferRecord {
    /// Whether the record carries a usable description.
    pub fn has_description(&self) -> bool {
        !self.description.is_empty() && self.description != SENTINEL_DESCRIPTION
    }
}
