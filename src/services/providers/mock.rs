//! Mock generator implementation for testing.

use super::{GenerationError, GenerationParams, GenerationResult, TextGenerator};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

enum MockBehavior {
    Reply(GenerationResult),
    Http { status: u16, reason: String },
    Network(String),
}

/// Scripted [`TextGenerator`] that records how often it was called.
pub struct MockTextGenerator {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockTextGenerator {
    /// Mock that replies with the given result on every call.
    pub fn replying(result: GenerationResult) -> Self {
        Self {
            behavior: MockBehavior::Reply(result),
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock that fails every call with an HTTP error.
    pub fn failing_http(status: u16, reason: &str) -> Self {
        Self {
            behavior: MockBehavior::Http {
                status,
                reason: reason.to_string(),
            },
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock that fails every call with a transport error.
    pub fn failing_network(reason: &str) -> Self {
        Self {
            behavior: MockBehavior::Network(reason.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<GenerationResult, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Reply(result) => Ok(result.clone()),
            MockBehavior::Http { status, reason } => Err(GenerationError::Http {
                status: *status,
                reason: reason.clone(),
            }),
            MockBehavior::Network(reason) => Err(GenerationError::Network(reason.clone())),
        }
    }
}
