//! Error handling and custom error types
//!
//! Every failure a request can hit is one variant of [`Error`]. The `Display`
//! text is exactly what the browser sees in the `error` field.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ChatReply;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please enter a message!")]
    EmptyMessage,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::EmptyMessage => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "chat request failed");
        }
        (status, Json(ChatReply::error(self.to_string()))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
