//! Ollama provider implementation
//!
//! Talks to a local Ollama API, non-streaming.

use crate::assist::AssistProvider;
use crate::error::{NomGuardError, Result};
use crate::types::AssistConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub struct OllamaAssist {
    client: Client,
    model: String,
    base_url: String,
    temperature: f32,
}

impl OllamaAssist {
    pub fn new(config: &AssistConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60)) // Longer timeout for local inference
            .build()
            .map_err(|e| NomGuardError::network(e.to_string(), None, None))?;

        Ok(Self {
            client,
            model: config.model.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| "http://localhost:11434".to_string()),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl AssistProvider for OllamaAssist {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = OllamaRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            temperature: self.temperature,
            stream: false,
        };

        let url = format!("{}/api/generate", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                NomGuardError::network(
                    format!("Failed to connect to Ollama: {}", e),
                    None,
                    Some(url.clone()),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            let error_msg = match status.as_u16() {
                404 => format!(
                    "Model '{}' not found. Please pull the model first: ollama pull {}",
                    self.model, self.model
                ),
                500..=599 => format!(
                    "Ollama server error ({}). Make sure Ollama is running",
                    status
                ),
                _ => format!("Ollama API request failed ({}): {}", status, error_text),
            };

            return Err(NomGuardError::network(
                error_msg,
                Some(status.as_u16()),
                Some(url),
            ));
        }

        let ollama_response: OllamaResponse = response
            .json()
            .await
            .map_err(|e| NomGuardError::parse(e.to_string(), None))?;

        Ok(ollama_response.response.trim().to_string())
    }

    fn name(&self) -> &'static str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// Ollama API structures
#[derive(Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    temperature: f32,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaResponse {
    response: String,
}
