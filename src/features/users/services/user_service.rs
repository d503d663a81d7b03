use std::sync::Arc;

use crate::core::error::Result;
use crate::features::users::dtos::{SaveUserDto, UserResponseDto};
use crate::features::users::models::UserDraft;
use crate::features::users::repository::UserRepository;

/// Service for user directory operations.
///
/// Delegates straight to the repository; no business logic beyond DTO
/// conversion lives here.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Create or update a user (upsert by id)
    pub async fn save(&self, dto: SaveUserDto) -> Result<UserResponseDto> {
        let draft = UserDraft {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            department: dto.department,
        };
        let user = self.repository.save(dto.id, draft).await?;

        tracing::info!("User saved: id={}", user.id);

        Ok(user.into())
    }

    /// All users, storage order
    pub async fn list_all(&self) -> Result<Vec<UserResponseDto>> {
        let users = self.repository.list_all().await?;
        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    /// Get user by id; `None` when absent (never an error)
    pub async fn get_by_id(&self, id: i64) -> Result<Option<UserResponseDto>> {
        let user = self.repository.find_by_id(id).await?;
        Ok(user.map(|u| u.into()))
    }

    /// Delete user by id; no-op when absent
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.repository.delete_by_id(id).await?;

        tracing::info!("User deleted: id={}", id);

        Ok(())
    }
}
