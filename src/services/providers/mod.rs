//! Text-generation provider abstraction and implementations.
//!
//! The handler talks to a [`TextGenerator`] so tests can swap the HTTP
//! client for a mock without touching the request path.

pub mod http;
pub mod mock;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

pub use http::HttpTextGenerator;
pub use mock::MockTextGenerator;

/// Error type for generation calls.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("generation service returned HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("generation service unreachable: {0}")]
    Network(String),

    #[error("generation service returned an undecodable body: {0}")]
    InvalidResponse(String),
}

/// Generation-control parameters sent with every request.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub do_sample: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 512,
            temperature: 0.7,
            top_p: 0.9,
            do_sample: true,
        }
    }
}

/// Decoded generation response.
///
/// Either text field may be absent; [`GenerationResult::assistant_text`]
/// applies the fallback rule.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub generated_text: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Round-trip wall-clock seconds, measured by the client rather than
    /// reported by the service.
    #[serde(skip)]
    pub total_request_time: f64,
}

impl GenerationResult {
    /// Assistant reply text: `generated_text`, then `text`, then empty.
    pub fn assistant_text(&self) -> &str {
        self.generated_text
            .as_deref()
            .or(self.text.as_deref())
            .unwrap_or("")
    }
}

/// Trait for text-generation backends.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply for `prompt`. Exactly one outbound attempt; no
    /// retries.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GenerationResult, GenerationError>;
}
