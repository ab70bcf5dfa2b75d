use serde::{Deserialize, Serialize};

pub const USER_ROLE: &str = "user";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: USER_ROLE.to_string(),
            content: content.into(),
        }
    }
}

/// Body of one chat-completion call. Built fresh for every prompt.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PromptRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
}

impl PromptRequest {
    pub fn single(model: &str, temperature: f64, text: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![Message::user(text)],
            temperature,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PromptInput {
    pub prompt: String,
}
