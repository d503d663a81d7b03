use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::prompt::handlers;
use crate::features::prompt::services::PromptService;

/// Create routes for the prompt gateway feature
pub fn routes(service: Arc<PromptService>) -> Router {
    Router::new()
        .route("/api/prompt", post(handlers::ask))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::core::config::ChatConfig;
    use crate::features::prompt::dtos::PromptResponseDto;

    async fn test_server(mock_server: &MockServer) -> TestServer {
        let service = Arc::new(PromptService::new(ChatConfig {
            base_url: mock_server.uri(),
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
        }));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn prompt_route_returns_completion_text() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "bonjour"}, "finish_reason": "stop"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let server = test_server(&mock_server).await;
        let response = server
            .post("/api/prompt")
            .json(&json!({"prompt": "say hello in french"}))
            .await;

        response.assert_status_ok();
        let body: PromptResponseDto = response.json();
        assert_eq!(body.response, "bonjour");
    }

    #[tokio::test]
    async fn provider_failure_surfaces_as_502() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let server = test_server(&mock_server).await;
        let response = server
            .post("/api/prompt")
            .json(&json!({"prompt": "hi"}))
            .await;

        response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
    }
}
