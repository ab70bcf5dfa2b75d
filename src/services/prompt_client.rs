use super::transport::JsonHttpClient;
use crate::error::{Error, Result};
use crate::models::prompt::PromptRequest;
use log::{debug, trace};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// What `prompt` hands back once the transport has answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// Drop the reply and return `None`.
    #[default]
    Discard,
    /// Return the transport's parsed reply untouched.
    PassThrough,
}

impl FromStr for ResponseMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "discard" => Ok(ResponseMode::Discard),
            "pass-through" | "passthrough" => Ok(ResponseMode::PassThrough),
            other => Err(Error::Config(format!("unknown response mode `{}`", other))),
        }
    }
}

impl fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseMode::Discard => f.write_str("discard"),
            ResponseMode::PassThrough => f.write_str("pass-through"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromptOptions {
    pub model: String,
    pub temperature: f64,
    pub endpoint: String,
    pub response_mode: ResponseMode,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            endpoint: OPENAI_ENDPOINT.to_string(),
            response_mode: ResponseMode::default(),
        }
    }
}

/// Sends a single user prompt to a chat-completion endpoint.
///
/// Holds a shared transport and the API key; both are read-only after construction,
/// so one client can serve concurrent callers.
pub struct PromptClient {
    http: Arc<dyn JsonHttpClient>,
    api_key: String,
    options: PromptOptions,
}

impl PromptClient {
    pub fn new(http: Arc<dyn JsonHttpClient>, api_key: impl Into<String>) -> Self {
        Self::with_options(http, api_key, PromptOptions::default())
    }

    pub fn with_options(
        http: Arc<dyn JsonHttpClient>,
        api_key: impl Into<String>,
        options: PromptOptions,
    ) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            options,
        }
    }

    /// Submits `text` as one user message. Exactly one POST per call, never retried.
    ///
    /// Transport failures come back as `Error::Transport` unchanged.
    pub async fn prompt(&self, text: &str) -> Result<Option<Value>> {
        let headers = HashMap::from([
            ("Authorization".to_string(), format!("Bearer {}", self.api_key)),
            ("Content-Type".to_string(), "application/json".to_string()),
        ]);
        let request = PromptRequest::single(&self.options.model, self.options.temperature, text);
        let body = serde_json::to_value(&request)?;

        debug!(
            "prompt endpoint={} model={} prompt_len={}",
            self.options.endpoint,
            self.options.model,
            text.len()
        );

        let response = self
            .http
            .post(&self.options.endpoint, &headers, &body)
            .await?;

        trace!("prompt response={}", response);

        match self.options.response_mode {
            ResponseMode::Discard => Ok(None),
            ResponseMode::PassThrough => Ok(Some(response)),
        }
    }
}
