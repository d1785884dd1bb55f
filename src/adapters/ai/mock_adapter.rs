//! Mock text-generation adapter for testing without API calls.
//!
//! Returns a scripted reply or error, records prompts, and can simulate latency.

use crate::domain::DomainError;
use crate::ports::TextGenerationService;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

/// Scripted `TextGenerationService`.
pub struct MockTextService {
    reply: Result<String, String>,
    delay: Duration,
    available: bool,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockTextService {
    /// Always answers with `reply`.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::scripted(Ok(reply.into()))
    }

    /// Always fails with `ServiceUnavailable(message)`.
    pub fn with_error(message: impl Into<String>) -> Self {
        Self::scripted(Err(message.into()))
    }

    fn scripted(reply: Result<String, String>) -> Self {
        Self {
            reply,
            delay: Duration::ZERO,
            available: true,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Simulate network latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Report the service as unavailable (as if no credential were set).
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }
}

#[async_trait::async_trait]
impl TextGenerationService for MockTextService {
    fn name(&self) -> &str {
        "mock"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }
        info!(prompt_len = prompt.len(), "[MOCK] simulating text generation");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.reply
            .clone()
            .map_err(DomainError::ServiceUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_prompt() {
        let mock = MockTextService::with_reply("ok");
        assert_eq!(mock.generate("hello").await.unwrap(), "ok");
        assert_eq!(mock.calls(), 1);
        assert_eq!(mock.last_prompt().as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_mock_error() {
        let mock = MockTextService::with_error("down");
        assert_eq!(
            mock.generate("hello").await.unwrap_err(),
            DomainError::ServiceUnavailable("down".to_string())
        );
    }
}
