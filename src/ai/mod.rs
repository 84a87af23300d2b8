//! Upstream generative-language integration
//!
//! [`ChatService`] is the seam between the HTTP handler and the remote API.
//! The handler only sees raw JSON; shaping it into display text is the job of
//! [`crate::extract`].

pub mod gemini;
pub mod mock;

pub use gemini::GeminiChatClient;
pub use mock::MockChatClient;

use crate::Result;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Forwards one user message upstream and returns the response body as JSON.
    async fn send_message(&self, message: &str) -> Result<Value>;
}
