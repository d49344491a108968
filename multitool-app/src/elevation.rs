use multitool_core::CommandBridge;
use multitool_gateway::safe_invoke;
use serde_json::{json, Value};
use tracing::warn;

use crate::config::Config;

pub const IS_RUNNING_AS_ADMIN_COMMAND: &str = "is_running_as_admin";

/// Whether the process runs with administrator rights, asked through the
/// bridge. `assume_elevated` in the config wins when set; a failed or
/// missing answer counts as not elevated.
pub async fn resolve<B>(bridge: &B, config: &Config) -> bool
where
    B: CommandBridge + ?Sized,
{
    if let Some(elevated) = config.assume_elevated {
        return elevated;
    }

    match safe_invoke(bridge, IS_RUNNING_AS_ADMIN_COMMAND, json!({})).await {
        Ok(Some(Value::Bool(elevated))) => elevated,
        Ok(Some(other)) => {
            warn!("Unexpected elevation status: {}", other);
            false
        }
        Ok(None) => false,
        Err(e) => {
            warn!("Could not read elevation status: {}", e);
            false
        }
    }
}

#[cfg(windows)]
pub fn process_is_elevated() -> bool {
    is_elevated::is_elevated()
}

#[cfg(unix)]
pub fn process_is_elevated() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(any(unix, windows)))]
pub fn process_is_elevated() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use multitool_gateway::DetachedBridge;

    #[tokio::test]
    async fn test_config_override_wins() {
        let config = Config {
            assume_elevated: Some(true),
            ..Config::default()
        };
        assert!(resolve(&DetachedBridge, &config).await);

        let config = Config {
            assume_elevated: Some(false),
            ..Config::default()
        };
        assert!(!resolve(&DetachedBridge, &config).await);
    }

    #[tokio::test]
    async fn test_detached_bridge_is_not_elevated() {
        assert!(!resolve(&DetachedBridge, &Config::default()).await);
    }
}
