use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request DTO for the prompt gateway
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PromptRequestDto {
    pub prompt: String,
}

/// Response DTO carrying the provider's textual completion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PromptResponseDto {
    pub response: String,
}
