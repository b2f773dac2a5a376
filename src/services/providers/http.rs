//! HTTP-backed text generator.

use super::{GenerationError, GenerationParams, GenerationResult, TextGenerator};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Fixed timeout applied to every generation call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the remote generation service.
pub struct HttpTextGenerator {
    base_url: String,
    client: Client,
}

impl HttpTextGenerator {
    /// Build a client for the service at `base_url`. The URL is fixed for
    /// the lifetime of the client.
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    max_new_tokens: u32,
    temperature: f32,
    top_p: f32,
    do_sample: bool,
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GenerationResult, GenerationError> {
        let url = format!("{}/generate", self.base_url);
        let payload = GenerateRequest {
            prompt,
            max_new_tokens: params.max_new_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
            do_sample: params.do_sample,
        };

        tracing::debug!(url = %url, prompt_len = prompt.len(), "Sending generation request");

        let started = Instant::now();
        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Http {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;
        let elapsed = started.elapsed().as_secs_f64();

        let mut result: GenerationResult = serde_json::from_slice(&body)
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;
        result.total_request_time = elapsed;

        tracing::debug!(
            elapsed_secs = result.total_request_time,
            "Generation request completed"
        );

        Ok(result)
    }
}
