#![allow(dead_code)]

use async_trait::async_trait;
use multitool_core::{BridgeError, CommandBridge, CommandRequest, Notification, Notifier};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Bridge that answers from a canned table and records every request.
pub struct MockBridge {
    responses: HashMap<String, Result<Value, BridgeError>>,
    requests: Mutex<Vec<CommandRequest>>,
}

impl MockBridge {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn ok(mut self, command: &str, value: Value) -> Self {
        self.responses.insert(command.to_string(), Ok(value));
        self
    }

    pub fn err(mut self, command: &str, error: BridgeError) -> Self {
        self.responses.insert(command.to_string(), Err(error));
        self
    }

    pub fn requests(&self) -> Vec<CommandRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandBridge for MockBridge {
    async fn invoke(&self, request: CommandRequest) -> Result<Value, BridgeError> {
        let response = self
            .responses
            .get(&request.command)
            .cloned()
            .unwrap_or_else(|| Err(BridgeError::UnknownCommand(request.command.clone())));
        self.requests.lock().unwrap().push(request);
        tokio::task::yield_now().await;
        response
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}
