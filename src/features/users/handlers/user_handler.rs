use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::users::dtos::{SaveUserDto, UserResponseDto};
use crate::features::users::services::UserService;

/// Create or update a user
///
/// Upserts by id: a null/absent id inserts a new record and assigns an id,
/// a present id overwrites the matching record.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = SaveUserDto,
    responses(
        (status = 200, description = "User saved", body = UserResponseDto),
        (status = 400, description = "Malformed request body")
    ),
    tag = "users"
)]
pub async fn save_user(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<SaveUserDto>,
) -> Result<Json<UserResponseDto>> {
    let user = service.save(dto).await?;
    Ok(Json(user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponseDto>)
    ),
    tag = "users"
)]
pub async fn list_users(
    State(service): State<Arc<UserService>>,
) -> Result<Json<Vec<UserResponseDto>>> {
    let users = service.list_all().await?;
    Ok(Json(users))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponseDto),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user(
    State(service): State<Arc<UserService>>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponseDto>> {
    let user = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))?;

    Ok(Json(user))
}

/// Delete a user by id
///
/// Returns 204 whether or not the record existed.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 204, description = "User deleted")
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(service): State<Arc<UserService>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
