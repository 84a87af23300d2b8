use crate::models::Config;
use crate::{Error, Result};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

/// Thin REST client for the `generateContent` endpoint.
///
/// The credential travels as the `key` query parameter. It is stripped from
/// every transport error so it can never end up in a reply body.
pub struct GeminiHttpClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl GeminiHttpClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
        }
    }

    /// POSTs `request` as JSON and returns the response body as an untyped
    /// JSON value. Non-2xx statuses are reported as [`Error::Http`].
    pub async fn post_json<Req: Serialize>(&self, request: &Req) -> Result<Value> {
        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Failed to send request to Gemini: {}", e);
                e
            })?;

        let status = response.status();
        let status_check = response.error_for_status_ref().map(|_| ());
        if let Err(e) = status_check {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error (status {}): {}", status, error_text);
            return Err(Error::Http(e.without_url()));
        }

        let body = response.text().await.map_err(|e| e.without_url())?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}\nBody: {}", e, body);
            Error::Serialization(e)
        })
    }
}
