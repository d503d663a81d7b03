pub mod prompt;
pub mod users;
