use serde_json::Value;
use thiserror::Error;

/// Failure reported by the native command bridge.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// Plain-text rejection, the usual shape of a backend command error.
    #[error("{0}")]
    Message(String),

    /// Structured rejection payload.
    #[error("{0}")]
    Structured(Value),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to decode command result: {0}")]
    Decode(String),

    #[error("Native bridge unavailable")]
    Unavailable,
}

impl BridgeError {
    /// The human-readable message carried by the error, if any.
    ///
    /// Structured payloads only carry a message when they have a string
    /// `message` field. Empty strings count as no message.
    pub fn message(&self) -> Option<String> {
        let message = match self {
            BridgeError::Message(msg) => Some(msg.clone()),
            BridgeError::Structured(value) => value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            BridgeError::Unavailable => None,
            other => Some(other.to_string()),
        };
        message.filter(|msg| !msg.trim().is_empty())
    }
}

impl From<String> for BridgeError {
    fn from(msg: String) -> Self {
        BridgeError::Message(msg)
    }
}

impl From<&str> for BridgeError {
    fn from(msg: &str) -> Self {
        BridgeError::Message(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_from_plain_rejection() {
        let err = BridgeError::from("disk full");
        assert_eq!(err.message().as_deref(), Some("disk full"));
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn test_message_from_structured_payload() {
        let err = BridgeError::Structured(json!({"code": 5, "message": "Access is denied"}));
        assert_eq!(err.message().as_deref(), Some("Access is denied"));

        let err = BridgeError::Structured(json!({"code": 5}));
        assert_eq!(err.message(), None);
    }

    #[test]
    fn test_blank_message_counts_as_none() {
        assert_eq!(BridgeError::Message("   ".into()).message(), None);
        assert_eq!(BridgeError::Unavailable.message(), None);
    }
}
