// src/providers/gemini.rs

use reqwest::Client;
use serde_json::{Value, json};
use std::time::Instant;

use crate::config::GeminiConfig;
use crate::errors::{AnalysisError, Result};
use crate::providers::{Completion, LlmProvider};

/// A provider for interacting with Google's Gemini models.
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`.
    pub fn new(client: Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }
}

/// Pulls the first candidate's text and finish reason out of a
/// `generateContent` response. A response without candidates yields an empty
/// `Completion`.
pub fn parse_completion(response: &Value, latency_ms: u64) -> Result<Completion> {
    if let Some(error) = response.get("error") {
        return Err(AnalysisError::ApiResponse(error.to_string()));
    }

    let candidate = response.get("candidates").and_then(|c| c.get(0));
    let text = candidate
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(|t| t.as_str())
        .map(str::to_string);
    let finish_reason = candidate
        .and_then(|c| c.get("finishReason"))
        .and_then(|r| r.as_str())
        .map(str::to_string);

    Ok(Completion { text, finish_reason, latency_ms })
}

impl LlmProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<Completion> {
        let url = self.url();

        log::info!("📡 Calling Gemini model {}", self.config.model);

        let body = json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {
                "temperature": 0.2,
                "maxOutputTokens": 2048
            }
        });

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::info!("📥 Gemini response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(AnalysisError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let response_json: Value = resp.json().await?;
        parse_completion(&response_json, latency_ms)
    }
}
