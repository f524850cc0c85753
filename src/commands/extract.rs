//! extract command: print the structured offer record
//!
//! LLM-optimized output - JSON compact only.

use super::MessageInput;
use anyhow::{bail, Result};
use clap::Args;
use promo_format::extract_offer;

#[derive(Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    input: MessageInput,
}

pub async fn run_extract(args: ExtractArgs) -> Result<()> {
    let message = args.input.read().await?;

    match extract_offer(&message) {
        Ok(record) => {
            println!("{}", serde_json::to_string(&record)?);
            Ok(())
        }
        Err(e) => {
            let error = serde_json::json!({
                "error": e.code(),
                "message": e.to_string()
            });
            println!("{}", serde_json::to_string(&error)?);
            bail!("No offer extracted: {}", e);
        }
    }
}
