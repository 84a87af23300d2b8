//! Chat relay for the Gemini generative-language API
//!
//! Accepts a message from the browser on `POST /chat`, forwards it upstream
//! with a server-held API key, and answers with the reply text pulled out of
//! the upstream JSON.

pub mod ai;
pub mod app;
pub mod error;
pub mod extract;
pub mod models;

pub use error::{Error, Result};
