//! Stand-in used when no API credential is configured.

use crate::domain::DomainError;
use crate::ports::TextGenerationService;

/// Always unavailable. `generate` fails with `MissingCredential`.
#[derive(Debug, Default)]
pub struct DisabledService;

impl DisabledService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl TextGenerationService for DisabledService {
    fn name(&self) -> &str {
        "disabled"
    }

    fn is_available(&self) -> bool {
        false
    }

    async fn generate(&self, _prompt: &str) -> Result<String, DomainError> {
        Err(DomainError::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_reports_missing_credential() {
        let svc = DisabledService::new();
        assert!(!svc.is_available());
        assert_eq!(
            svc.generate("x").await.unwrap_err(),
            DomainError::MissingCredential
        );
    }
}
