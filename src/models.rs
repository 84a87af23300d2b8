//! Data models and structures
//!
//! Defines the browser-facing request/reply bodies and the process
//! configuration loaded at startup.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Body of `POST /chat`. A missing `message` is treated like an empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

impl ChatRequest {
    /// Decodes a `POST /chat` body. Only a JSON object is accepted; serde
    /// would otherwise also read a sequence like `["hi"]` into the struct.
    pub fn from_body(body: Value) -> crate::Result<Self> {
        if !body.is_object() {
            return Err(crate::Error::Unexpected(format!(
                "request body must be a JSON object, got {}",
                body
            )));
        }
        Ok(serde_json::from_value(body)?)
    }
}

/// Body returned by `POST /chat`: `{"response": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatReply {
    Response(String),
    Error(String),
}

impl ChatReply {
    pub fn response(text: impl Into<String>) -> Self {
        Self::Response(text.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                crate::Error::Config(
                    "API_KEY is missing from the .env file! Please add it.".to_string(),
                )
            })?;

        let api_url = lookup("GEMINI_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self { api_key, api_url })
    }
}
