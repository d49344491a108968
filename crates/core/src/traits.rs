use async_trait::async_trait;
use serde_json::Value;

use crate::error::BridgeError;
use crate::types::{CommandRequest, Notification};

/// Native command bridge
#[async_trait]
pub trait CommandBridge: Send + Sync {
    async fn invoke(&self, request: CommandRequest) -> Result<Value, BridgeError>;

    /// Whether a native backend is attached at all.
    fn is_available(&self) -> bool {
        true
    }
}

/// Notification surface
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

#[async_trait]
impl<B: CommandBridge + ?Sized> CommandBridge for std::sync::Arc<B> {
    async fn invoke(&self, request: CommandRequest) -> Result<Value, BridgeError> {
        (**self).invoke(request).await
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}
