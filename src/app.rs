//! HTTP surface: the chat page and the `POST /chat` relay.

use crate::ai::ChatService;
use crate::extract::extract_response_text;
use crate::models::{ChatReply, ChatRequest};
use crate::{Error, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const NO_RESPONSE: &str = "No response received from API.";

const INDEX_HTML: &str = include_str!("../static/index.html");
const SCRIPT_JS: &str = include_str!("../static/script.js");

/// Shared per-process state. Read-only once the server is running.
#[derive(Clone)]
pub struct AppState {
    chat: Arc<dyn ChatService>,
}

impl AppState {
    pub fn new(chat: Arc<dyn ChatService>) -> Self {
        Self { chat }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/static/script.js", get(script))
        .route("/chat", post(chat))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serves the router on `listener` until the process is stopped.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], SCRIPT_JS)
}

async fn chat(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatReply>> {
    let Json(body) = payload.map_err(|rejection| Error::Unexpected(rejection.body_text()))?;
    let request = ChatRequest::from_body(body)?;

    let message = request.message.trim();
    if message.is_empty() {
        return Err(Error::EmptyMessage);
    }

    let body = state.chat.send_message(message).await?;
    let text = extract_response_text(&body);

    if text.is_empty() {
        return Ok(Json(ChatReply::response(NO_RESPONSE)));
    }
    Ok(Json(ChatReply::response(text)))
}
