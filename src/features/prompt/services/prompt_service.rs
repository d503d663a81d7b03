use crate::core::config::ChatConfig;
use crate::core::error::{AppError, Result};
use crate::features::prompt::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Client for the external chat completion provider.
///
/// Holds no conversation state; every call is an independent single-turn
/// exchange.
pub struct PromptService {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl PromptService {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: config.base_url,
            api_key: config.api_key,
            model: config.model,
        }
    }

    /// Send `prompt` as the sole user message and return the generated text.
    ///
    /// Waits for the full completion; provider and transport failures map to
    /// `AppError::Upstream` with no retry.
    pub async fn ask(&self, prompt: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            stream: false,
        };

        let url = format!("{}/chat/completions", self.base_url);

        tracing::debug!("Requesting chat completion from {}", url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Chat completion request failed: {}", e);
                AppError::Upstream(format!("chat completion request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Chat provider returned {}: {}", status, body);
            return Err(AppError::Upstream(format!(
                "chat provider returned {}",
                status
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to decode chat completion: {}", e);
            AppError::Upstream(format!("invalid chat completion response: {}", e))
        })?;

        completion
            .into_content()
            .ok_or_else(|| AppError::Upstream("chat completion contained no content".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn service_for(mock_server: &MockServer) -> PromptService {
        PromptService::new(ChatConfig {
            base_url: mock_server.uri(),
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
        })
    }

    fn completion_body(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
            ]
        })
    }

    #[tokio::test]
    async fn ask_sends_single_user_message_and_returns_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "test-model",
                "messages": [{"role": "user", "content": "translate this"}],
                "stream": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("voila")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let service = service_for(&mock_server);
        let answer = service.ask("translate this").await.expect("completion");
        assert_eq!(answer, "voila");
    }

    #[tokio::test]
    async fn provider_error_propagates_as_upstream() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"error": "overloaded"})),
            )
            .mount(&mock_server)
            .await;

        let service = service_for(&mock_server);
        let err = service.ask("hi").await.expect_err("should fail");
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[tokio::test]
    async fn empty_choices_is_an_upstream_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&mock_server)
            .await;

        let service = service_for(&mock_server);
        let err = service.ask("hi").await.expect_err("should fail");
        assert!(matches!(err, AppError::Upstream(_)));
    }
}
