use super::client::GeminiHttpClient;
use super::types::GenerateContentRequest;
use crate::ai::ChatService;
use crate::models::Config;
use crate::Result;
use async_trait::async_trait;
use serde_json::Value;

pub struct GeminiChatClient {
    http: GeminiHttpClient,
}

impl GeminiChatClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: GeminiHttpClient::new(config),
        }
    }
}

#[async_trait]
impl ChatService for GeminiChatClient {
    async fn send_message(&self, message: &str) -> Result<Value> {
        tracing::debug!(
            chars = message.chars().count(),
            "Sending generateContent request to Gemini"
        );
        let request = GenerateContentRequest::from_text(message);
        self.http.post_json(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_message_wraps_text_in_contents_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(query_param("key", "test-key"))
            .and(body_json(json!({
                "contents": [{ "parts": [{ "text": "What is a dream?" }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "A story the mind tells itself" }] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = Config {
            api_key: "test-key".to_string(),
            api_url: format!("{}/generate", server.uri()),
        };
        let client = GeminiChatClient::new(&config);

        let body = client.send_message("What is a dream?").await.unwrap();
        assert_eq!(
            body["candidates"][0]["content"]["parts"][0]["text"],
            "A story the mind tells itself"
        );
    }
}
