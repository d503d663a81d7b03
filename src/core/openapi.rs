use utoipa::{Modify, OpenApi};

use crate::features::prompt::{dtos as prompt_dtos, handlers as prompt_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Users
        users_handlers::user_handler::save_user,
        users_handlers::user_handler::list_users,
        users_handlers::user_handler::get_user,
        users_handlers::user_handler::delete_user,
        // Prompt gateway
        prompt_handlers::prompt_handler::ask,
    ),
    components(
        schemas(
            // Users
            users_dtos::SaveUserDto,
            users_dtos::UserResponseDto,
            // Prompt gateway
            prompt_dtos::PromptRequestDto,
            prompt_dtos::PromptResponseDto,
        )
    ),
    tags(
        (name = "users", description = "User directory CRUD"),
        (name = "prompt", description = "Chat completion gateway")
    ),
    info(
        title = "User Directory API",
        version = "0.1.0",
        description = "API documentation for the user directory service",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
