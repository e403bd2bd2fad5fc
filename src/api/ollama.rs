//! Ollama `/api/generate` client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::template::instruction_prompt;
use super::{ApiError, Generator};
use crate::config::OllamaSettings;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// Non-streaming client for a local Ollama server
pub struct OllamaClient {
    base_url: String,
    client: Client,
}

impl OllamaClient {
    pub fn new(settings: &OllamaSettings) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: settings.url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl Generator for OllamaClient {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, ApiError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model,
            prompt: instruction_prompt(prompt),
            stream: false,
        };

        info!("POST {} (model: {})", url, model);
        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Ollama API request failed with status {}", status);
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        debug!("Ollama responded with {}", status);

        let parsed: GenerateResponse = response.json().await?;
        parsed
            .response
            .ok_or_else(|| ApiError::Provider("No response field".to_string()))
    }

    fn endpoint(&self) -> String {
        self.base_url.clone()
    }
}
