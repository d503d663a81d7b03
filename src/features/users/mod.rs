//! User directory feature.
//!
//! CRUD over the `users` table. The service delegates to a repository
//! abstraction; the production repository talks to Postgres directly.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/users` | Create or update (upsert by id) |
//! | GET | `/api/users` | List all users |
//! | GET | `/api/users/{id}` | Get user by id, 404 if absent |
//! | DELETE | `/api/users/{id}` | Delete user by id |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{PgUserRepository, UserRepository};
pub use services::UserService;
