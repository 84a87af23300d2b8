use super::ChatService;
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// In-memory [`ChatService`] that replays canned upstream bodies.
pub struct MockChatClient {
    responses: Arc<Mutex<Vec<Value>>>,
    error: Arc<Mutex<Option<String>>>,
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, response: Value) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Every call fails with [`Error::Unexpected`] carrying `message`.
    pub fn with_error(self, message: String) -> Self {
        *self.error.lock().unwrap() = Some(message);
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    /// Messages received so far, in call order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatService for MockChatClient {
    async fn send_message(&self, message: &str) -> Result<Value> {
        let count = {
            let mut messages = self.messages.lock().unwrap();
            messages.push(message.to_string());
            messages.len()
        };

        if let Some(error) = self.error.lock().unwrap().clone() {
            return Err(Error::Unexpected(error));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": format!("Echo: {}", message) }] }
                }]
            }))
        } else {
            let index = (count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
