use sqlx::FromRow;

use crate::features::users::dtos::UserResponseDto;

/// Database model for a user row.
///
/// The schema is externally defined: a generated identifier plus the
/// directory's contact fields, all nullable at the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
}

/// Field values for a save, before storage has assigned (or confirmed) an id
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            department: user.department,
        }
    }
}
