use async_trait::async_trait;
use multitool_core::{BridgeError, CommandBridge, CommandRequest};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// A native command the registry can route to.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    fn name(&self) -> &str;

    async fn handle(&self, request: CommandRequest) -> Result<Value, BridgeError>;
}

/// In-process bridge that dispatches requests to registered handlers by name.
pub struct CommandRegistry {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) -> &mut Self {
        self.handlers.insert(handler.name().to_string(), handler);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn CommandHandler>> {
        self.handlers.get(name).cloned()
    }

    pub fn list(&self) -> Vec<String> {
        self.handlers.keys().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandBridge for CommandRegistry {
    async fn invoke(&self, request: CommandRequest) -> Result<Value, BridgeError> {
        let handler = self
            .get(&request.command)
            .ok_or_else(|| BridgeError::UnknownCommand(request.command.clone()))?;

        info!("Dispatching command: {}", request.command);
        handler.handle(request).await
    }
}
