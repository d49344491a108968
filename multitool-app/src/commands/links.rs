use anyhow::{Context, Result};
use multitool_core::CommandBridge;
use multitool_gateway::open_external;
use multitool_policy::evaluate_url;

use crate::config::Config;

/// Prints the allow-list verdict. Returns whether the URL is allowed.
pub fn check(url: &str) -> bool {
    match evaluate_url(url) {
        Ok(target) => {
            println!("✓ Allowed ({:?})", target);
            true
        }
        Err(reason) => {
            println!("✗ Rejected: {}", reason);
            false
        }
    }
}

pub async fn open<B: CommandBridge + ?Sized>(bridge: &B, url: &str) -> Result<()> {
    open_external(bridge, url)
        .await
        .with_context(|| format!("Failed to open {}", url))
}

/// Opens the release page, or the store listing when `store` is set.
pub async fn updates<B: CommandBridge + ?Sized>(
    bridge: &B,
    config: &Config,
    store: bool,
) -> Result<()> {
    let url = if store {
        config
            .store_url()
            .context("store_product_id is not configured")?
    } else {
        config.release_page_url.clone()
    };
    println!("🌐 Opening {}", url);
    open(bridge, &url).await
}
