//! promo-format: offer extraction for chat promotions
//!
//! Pipeline:
//! - gate: is the message an offer candidate?
//! - extract: description, price, installment, coupon, links
//! - render: canonical reply template
//! - relay: chat-facing boundary with fixed notices and fault isolation

pub mod config;
pub mod coupon;
pub mod description;
pub mod error;
pub mod extract;
pub mod gate;
pub mod offer;
pub mod price;
pub mod relay;
pub mod render;
pub mod text;
pub mod vocab;

pub use config::RelayConfig;
pub use coupon::extract_coupon;
pub use description::find_description;
pub use error::{ConfigError, ExtractError};
pub use extract::{extract_links, extract_offer, extract_record, process_message};
pub use gate::is_offer_candidate;
pub use offer::{OfferRecord, SENTINEL_DESCRIPTION};
pub use price::{extract_price, PriceInfo};
pub use relay::{Relay, Reply, ReplyKind};
pub use render::render;
