use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::users::models::{User, UserDraft};

/// Storage abstraction for the user directory.
///
/// Implementations must be thread-safe; the production implementation issues
/// its statements directly against the Postgres driver.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Upsert keyed by id. A `None` id inserts and lets storage assign one.
    async fn save(&self, id: Option<i64>, draft: UserDraft) -> Result<User>;

    /// All records in primary-key order.
    async fn list_all(&self) -> Result<Vec<User>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    /// Removes the record if present; no-op when absent.
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

/// Postgres-backed repository over the `users` table
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn save(&self, id: Option<i64>, draft: UserDraft) -> Result<User> {
        let user = match id {
            Some(id) => {
                let user = sqlx::query_as::<_, User>(
                    r#"
                    INSERT INTO users (id, name, email, phone, department)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (id) DO UPDATE SET
                        name = EXCLUDED.name,
                        email = EXCLUDED.email,
                        phone = EXCLUDED.phone,
                        department = EXCLUDED.department
                    RETURNING id, name, email, phone, department
                    "#,
                )
                .bind(id)
                .bind(draft.name)
                .bind(draft.email)
                .bind(draft.phone)
                .bind(draft.department)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to save user: {:?}", e);
                    AppError::Database(e)
                })?;

                // An explicit-id insert bypasses the id sequence; advance it so
                // later storage-assigned ids cannot collide with this row.
                sqlx::query(
                    r#"
                    SELECT setval(
                        pg_get_serial_sequence('users', 'id'),
                        GREATEST((SELECT MAX(id) FROM users), 1)
                    )
                    "#,
                )
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to advance users id sequence: {:?}", e);
                    AppError::Database(e)
                })?;

                user
            }
            None => {
                sqlx::query_as::<_, User>(
                    r#"
                    INSERT INTO users (name, email, phone, department)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, name, email, phone, department
                    "#,
                )
                .bind(draft.name)
                .bind(draft.email)
                .bind(draft.phone)
                .bind(draft.department)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to save user: {:?}", e);
                    AppError::Database(e)
                })?
            }
        };

        Ok(user)
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone, department
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list users: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone, department
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user by id: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(user)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete user: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(())
    }
}

#[cfg(test)]
pub mod in_memory {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::UserRepository;
    use crate::core::error::Result;
    use crate::features::users::models::{User, UserDraft};

    /// Map-backed repository mirroring the upsert and id-assignment
    /// semantics of the users table
    #[derive(Default)]
    pub struct InMemoryUserRepository {
        rows: Mutex<BTreeMap<i64, UserDraft>>,
    }

    fn materialize(id: i64, draft: &UserDraft) -> User {
        User {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            department: draft.department.clone(),
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn save(&self, id: Option<i64>, draft: UserDraft) -> Result<User> {
            let mut rows = self.rows.lock().unwrap();
            let id = id.unwrap_or_else(|| rows.keys().next_back().copied().unwrap_or(0) + 1);
            let user = materialize(id, &draft);
            rows.insert(id, draft);
            Ok(user)
        }

        async fn list_all(&self) -> Result<Vec<User>> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .map(|(&id, draft)| materialize(id, draft))
                .collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.get(&id).map(|draft| materialize(id, draft)))
        }

        async fn delete_by_id(&self, id: i64) -> Result<()> {
            self.rows.lock().unwrap().remove(&id);
            Ok(())
        }
    }
}
