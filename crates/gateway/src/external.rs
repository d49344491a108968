use multitool_core::{BridgeError, CommandBridge, CommandRequest};
use multitool_policy::approved_url;
use serde_json::json;
use tracing::{info, warn};

pub const OPEN_EXTERNAL_COMMAND: &str = "open_external";

/// Opens `url` through the backend if the allow-list admits it.
///
/// The backend receives the parsed form of the URL that was checked.
/// A rejected URL is logged and ignored. Backend failures are returned to the
/// caller untouched.
pub async fn open_external<B>(bridge: &B, url: &str) -> Result<(), BridgeError>
where
    B: CommandBridge + ?Sized,
{
    let target = match approved_url(url) {
        Ok(target) => target,
        Err(reason) => {
            warn!("Refusing to open external URL {}: {}", url, reason);
            return Ok(());
        }
    };

    let request = CommandRequest::from_value(OPEN_EXTERNAL_COMMAND, json!({ "url": target }))?;
    bridge.invoke(request).await?;
    info!("Opened external URL: {}", target);
    Ok(())
}
