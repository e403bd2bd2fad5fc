//! Generation backend used by the interactive shell

mod ollama;
mod template;

pub use ollama::OllamaClient;
pub use template::instruction_prompt;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed ({status})")]
    Status { status: u16 },

    #[error("Provider error: {0}")]
    Provider(String),
}

impl ApiError {
    /// Connection refused, DNS failure or timeout, as opposed to a bad reply
    pub fn is_connection(&self) -> bool {
        matches!(self, ApiError::Http(e) if e.is_connect() || e.is_timeout())
    }
}

/// Something that turns a user request into a JSON prompt template
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, ApiError>;

    /// Base URL or other label for display
    fn endpoint(&self) -> String;
}
