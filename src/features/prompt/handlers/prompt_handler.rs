use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::prompt::dtos::{PromptRequestDto, PromptResponseDto};
use crate::features::prompt::services::PromptService;

/// Forward a prompt to the chat completion provider
///
/// Sends the prompt as the sole user message of a single-turn conversation
/// and returns the full generated text.
#[utoipa::path(
    post,
    path = "/api/prompt",
    request_body = PromptRequestDto,
    responses(
        (status = 200, description = "Generated completion", body = PromptResponseDto),
        (status = 400, description = "Malformed request body"),
        (status = 502, description = "Provider or network failure")
    ),
    tag = "prompt"
)]
pub async fn ask(
    State(service): State<Arc<PromptService>>,
    AppJson(dto): AppJson<PromptRequestDto>,
) -> Result<Json<PromptResponseDto>> {
    let response = service.ask(&dto.prompt).await?;
    Ok(Json(PromptResponseDto { response }))
}
