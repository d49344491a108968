//! Native commands backing the CLI.

use async_trait::async_trait;
use multitool_core::{BridgeError, CommandRequest};
use multitool_gateway::{CommandHandler, CommandRegistry, OPEN_EXTERNAL_COMMAND};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::elevation::{process_is_elevated, IS_RUNNING_AS_ADMIN_COMMAND};

pub const DELETE_FOLDER_COMMAND: &str = "delete_folder";

/// Opens a URL with the system default handler.
pub struct OpenExternalHandler;

#[async_trait]
impl CommandHandler for OpenExternalHandler {
    fn name(&self) -> &str {
        OPEN_EXTERNAL_COMMAND
    }

    async fn handle(&self, request: CommandRequest) -> Result<Value, BridgeError> {
        let url = request.str_arg("url")?.to_string();
        if url.trim().is_empty() {
            return Err(BridgeError::InvalidRequest("url cannot be empty".into()));
        }

        tokio::task::spawn_blocking(move || open::that(&url))
            .await
            .map_err(|e| BridgeError::Message(format!("Opener task failed: {}", e)))?
            .map_err(|e| BridgeError::Message(e.to_string()))?;

        Ok(Value::Null)
    }
}

/// Removes a directory tree or a single file. OS error text is passed back verbatim.
pub struct DeleteFolderHandler;

#[async_trait]
impl CommandHandler for DeleteFolderHandler {
    fn name(&self) -> &str {
        DELETE_FOLDER_COMMAND
    }

    async fn handle(&self, request: CommandRequest) -> Result<Value, BridgeError> {
        let path = request.str_arg("path")?;
        if path.trim().is_empty() {
            return Err(BridgeError::InvalidRequest("path cannot be empty".into()));
        }

        let failed = |e: std::io::Error| {
            BridgeError::Message(format!("Erreur lors de la suppression de {}: {}", path, e))
        };
        let metadata = tokio::fs::metadata(path).await.map_err(failed)?;
        if metadata.is_dir() {
            tokio::fs::remove_dir_all(path).await.map_err(failed)?;
        } else {
            tokio::fs::remove_file(path).await.map_err(failed)?;
        }

        info!("Deleted: {}", path);
        Ok(Value::Bool(true))
    }
}

/// Reports whether the process has administrator rights.
pub struct IsRunningAsAdminHandler;

#[async_trait]
impl CommandHandler for IsRunningAsAdminHandler {
    fn name(&self) -> &str {
        IS_RUNNING_AS_ADMIN_COMMAND
    }

    async fn handle(&self, _request: CommandRequest) -> Result<Value, BridgeError> {
        Ok(Value::Bool(process_is_elevated()))
    }
}

pub fn build_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry
        .register(Arc::new(OpenExternalHandler))
        .register(Arc::new(DeleteFolderHandler))
        .register(Arc::new(IsRunningAsAdminHandler));
    registry
}
