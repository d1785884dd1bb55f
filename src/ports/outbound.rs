//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;

/// Capability to turn a prompt into completion text (hosted LLM).
///
/// Real services talk HTTP; the disabled service stands in when no credential is
/// configured so the rest of the application can keep one code path.
#[async_trait::async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Short provider name for logs and the UI (e.g. "gemini").
    fn name(&self) -> &str;

    /// False when the service can never succeed (no credential). Callers must not
    /// call `generate` on an unavailable service.
    fn is_available(&self) -> bool {
        true
    }

    /// Send `prompt` and return the completion text.
    ///
    /// # Errors
    /// `ServiceUnavailable` on transport/API failure, `MissingCredential` when disabled.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}
