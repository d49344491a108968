use async_trait::async_trait;
use multitool_core::{BridgeError, CommandBridge, CommandRequest};
use serde_json::Value;
use tracing::{error, warn};

/// Invokes a command when a backend is attached.
///
/// Returns `Ok(None)` without calling anything when the bridge is detached.
/// Unlike the toast helpers, failures are logged and handed back.
pub async fn safe_invoke<B>(
    bridge: &B,
    command: &str,
    args: Value,
) -> Result<Option<Value>, BridgeError>
where
    B: CommandBridge + ?Sized,
{
    if !bridge.is_available() {
        warn!("Command \"{}\" skipped: no native bridge attached", command);
        return Ok(None);
    }

    let request = CommandRequest::from_value(command, args)?;
    match bridge.invoke(request).await {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            error!("Native command \"{}\" failed: {}", command, e);
            Err(e)
        }
    }
}

/// Stand-in bridge for runs without a native backend, e.g. a plain browser build.
pub struct DetachedBridge;

#[async_trait]
impl CommandBridge for DetachedBridge {
    async fn invoke(&self, _request: CommandRequest) -> Result<Value, BridgeError> {
        Err(BridgeError::Unavailable)
    }

    fn is_available(&self) -> bool {
        false
    }
}
