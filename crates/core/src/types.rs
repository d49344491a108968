use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One call to the native backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    pub command: String,
    pub args: Map<String, Value>,
    pub requested_at: String,
}

impl CommandRequest {
    pub fn new(command: impl Into<String>, args: Map<String, Value>) -> Self {
        Self {
            command: command.into(),
            args,
            requested_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Builds a request from a JSON value. `null` means no arguments; any
    /// other non-object value is rejected.
    pub fn from_value(command: impl Into<String>, args: Value) -> Result<Self, BridgeError> {
        let command = command.into();
        if command.trim().is_empty() {
            return Err(BridgeError::InvalidRequest("Empty command name".into()));
        }
        let args = match args {
            Value::Null => Map::new(),
            Value::Object(map) => map,
            other => {
                return Err(BridgeError::InvalidRequest(format!(
                    "Arguments for {} must be an object, got {}",
                    command, other
                )))
            }
        };
        Ok(Self::new(command, args))
    }

    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }

    pub fn str_arg(&self, name: &str) -> Result<&str, BridgeError> {
        self.arg(name).and_then(Value::as_str).ok_or_else(|| {
            BridgeError::InvalidRequest(format!(
                "Missing string argument '{}' for {}",
                name, self.command
            ))
        })
    }
}

/// Result of a command routed through the gateway.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome<T> {
    Success(T),
    Failure(BridgeError),
}

impl<T> CommandOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            CommandOutcome::Success(value) => Some(value),
            CommandOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&BridgeError> {
        match self {
            CommandOutcome::Success(_) => None,
            CommandOutcome::Failure(err) => Some(err),
        }
    }
}

impl<T> From<Result<T, BridgeError>> for CommandOutcome<T> {
    fn from(result: Result<T, BridgeError>) -> Self {
        match result {
            Ok(value) => CommandOutcome::Success(value),
            Err(err) => CommandOutcome::Failure(err),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    Destructive,
    Warning,
}

/// What the notification surface is asked to display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub variant: Variant,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
            variant: Variant::Default,
        }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: Variant::Destructive,
        }
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: Variant::Warning,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessMessage {
    pub title: String,
    pub description: Option<String>,
}

impl SuccessMessage {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn title_only(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }
}

impl From<SuccessMessage> for Notification {
    fn from(msg: SuccessMessage) -> Self {
        Notification::success(msg.title, msg.description)
    }
}
