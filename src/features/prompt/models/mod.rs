mod chat;

pub use chat::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
