//! Prompt gateway feature.
//!
//! Forwards a text prompt to an OpenAI-compatible chat-completions endpoint
//! as a single-turn conversation and returns the generated text. Stateless;
//! one outbound call per invocation.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::PromptService;
