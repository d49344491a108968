//! Uniform "run a native command and tell the user how it went" helpers.
//!
//! Every helper absorbs bridge failures: the outcome is reported through the
//! notifier and returned as a value, never propagated as an error.

use multitool_core::{
    BridgeError, CommandBridge, CommandOutcome, CommandRequest, Notification, Notifier,
    SuccessMessage,
};
use multitool_policy::to_friendly_message;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

pub const SUCCESS_TITLE: &str = "Succès";
pub const ERROR_TITLE: &str = "Erreur";
pub const FALLBACK_ERROR_MESSAGE: &str = "Une erreur est survenue";

pub type SuccessCallback<'a, T> = Box<dyn FnOnce(&T) + Send + 'a>;
pub type ErrorCallback<'a> = Box<dyn FnOnce(&BridgeError) + Send + 'a>;
pub type Continuation<'a> = Box<dyn FnOnce() + Send + 'a>;

/// Optional parts of an [`invoke_with_toast`] call.
pub struct InvokeOptions<'a, T> {
    success_message: Option<SuccessMessage>,
    on_success: Option<SuccessCallback<'a, T>>,
    on_error: Option<ErrorCallback<'a>>,
    friendly_errors: bool,
}

impl<'a, T> InvokeOptions<'a, T> {
    pub fn new() -> Self {
        Self {
            success_message: None,
            on_success: None,
            on_error: None,
            friendly_errors: false,
        }
    }

    pub fn success_message(mut self, message: SuccessMessage) -> Self {
        self.success_message = Some(message);
        self
    }

    pub fn on_success(mut self, callback: impl FnOnce(&T) + Send + 'a) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    pub fn on_error(mut self, callback: impl FnOnce(&BridgeError) + Send + 'a) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    /// Route failure messages through the permission-error classifier.
    pub fn friendly_errors(mut self, enabled: bool) -> Self {
        self.friendly_errors = enabled;
        self
    }
}

impl<T> Default for InvokeOptions<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn invoke_with_toast<T, B, N>(
    bridge: &B,
    command: &str,
    args: Value,
    notifier: &N,
    options: InvokeOptions<'_, T>,
) -> CommandOutcome<T>
where
    T: DeserializeOwned,
    B: CommandBridge + ?Sized,
    N: Notifier + ?Sized,
{
    let InvokeOptions {
        success_message,
        on_success,
        on_error,
        friendly_errors,
    } = options;

    let result = match CommandRequest::from_value(command, args) {
        Ok(request) => {
            debug!("Invoking native command: {}", command);
            bridge.invoke(request).await.and_then(|value| {
                serde_json::from_value::<T>(value).map_err(|e| BridgeError::Decode(e.to_string()))
            })
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(value) => {
            info!("Command {} succeeded", command);
            if let Some(message) = success_message {
                notifier.notify(message.into());
            }
            if let Some(callback) = on_success {
                callback(&value);
            }
            CommandOutcome::Success(value)
        }
        Err(error) => {
            warn!("Command {} failed: {}", command, error);
            let description = failure_description(&error, friendly_errors);
            notifier.notify(Notification::failure(ERROR_TITLE, description));
            if let Some(callback) = on_error {
                callback(&error);
            }
            CommandOutcome::Failure(error)
        }
    }
}

fn failure_description(error: &BridgeError, friendly_errors: bool) -> String {
    if friendly_errors {
        return to_friendly_message(error);
    }
    error
        .message()
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

/// Deletion shorthand: reports "<item_name> supprimé avec succès." on success.
pub async fn invoke_delete_with_toast<B, N>(
    bridge: &B,
    command: &str,
    args: Value,
    notifier: &N,
    item_name: &str,
    on_success: Option<Continuation<'_>>,
    friendly_errors: bool,
) -> bool
where
    B: CommandBridge + ?Sized,
    N: Notifier + ?Sized,
{
    let mut options = InvokeOptions::<Value>::new()
        .success_message(SuccessMessage::new(
            SUCCESS_TITLE,
            format!("{} supprimé avec succès.", item_name),
        ))
        .friendly_errors(friendly_errors);
    if let Some(callback) = on_success {
        options = options.on_success(move |_| callback());
    }

    invoke_with_toast(bridge, command, args, notifier, options)
        .await
        .is_success()
}

/// Restore/copy shorthand with a caller-provided success description.
pub async fn invoke_action_with_toast<B, N>(
    bridge: &B,
    command: &str,
    args: Value,
    notifier: &N,
    success_description: &str,
    on_success: Option<Continuation<'_>>,
) -> bool
where
    B: CommandBridge + ?Sized,
    N: Notifier + ?Sized,
{
    let mut options = InvokeOptions::<Value>::new()
        .success_message(SuccessMessage::new(SUCCESS_TITLE, success_description));
    if let Some(callback) = on_success {
        options = options.on_success(move |_| callback());
    }

    invoke_with_toast(bridge, command, args, notifier, options)
        .await
        .is_success()
}
