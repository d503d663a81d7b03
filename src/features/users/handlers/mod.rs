pub mod user_handler;

pub use user_handler::{delete_user, get_user, list_users, save_user};
