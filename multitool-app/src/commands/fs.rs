use multitool_core::{CommandBridge, Notifier};
use multitool_gateway::{advise_protected_path, invoke_delete_with_toast};
use serde_json::json;

use crate::config::Config;
use crate::elevation;
use crate::handlers::DELETE_FOLDER_COMMAND;

/// Warns when `path` needs administrator rights the process lacks.
/// Returns whether a warning was shown.
pub async fn check_path<B, N>(bridge: &B, config: &Config, notifier: &N, path: &str) -> bool
where
    B: CommandBridge + ?Sized,
    N: Notifier + ?Sized,
{
    let elevated = elevation::resolve(bridge, config).await;
    let warned = advise_protected_path(path, elevated, notifier);
    if !warned {
        println!("✓ No elevation needed for {}", path);
    }
    warned
}

/// Deletes `path` through the bridge. Permission errors are reported with
/// the friendly hint.
pub async fn delete<B, N>(bridge: &B, notifier: &N, path: &str, label: Option<&str>) -> bool
where
    B: CommandBridge + ?Sized,
    N: Notifier + ?Sized,
{
    let item_name = label
        .map(str::to_string)
        .unwrap_or_else(|| format!("Le dossier {}", path));

    invoke_delete_with_toast(
        bridge,
        DELETE_FOLDER_COMMAND,
        json!({ "path": path }),
        notifier,
        &item_name,
        None,
        true,
    )
    .await
}
