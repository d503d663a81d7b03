use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request DTO for creating or updating a user.
///
/// A null/absent `id` inserts a new record and lets storage assign one;
/// a present `id` overwrites the matching record (insert if absent).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveUserDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// A saved user as returned on the wire, e.g. `{"id":1,"name":"A",...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
}
