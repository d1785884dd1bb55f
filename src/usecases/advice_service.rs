//! Advice service. Builds the health-assistant prompt and calls the text-generation port.
//!
//! Every call is time-bounded; failures come back as `DomainError` for the UI to show.

use crate::domain::{AdviceRequest, AdviceResponse, DomainError};
use crate::ports::TextGenerationService;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Redirect the model must give for any medication question.
pub const DOCTOR_REDIRECT: &str = "Check with a nearby doctor for the medication";

/// Service for AI-generated health advice.
pub struct AdviceService {
    generator: Arc<dyn TextGenerationService>,
    timeout: Duration,
}

impl AdviceService {
    /// # Arguments
    /// * `generator` - Text generation port (Gemini, OpenAI, Disabled, Mock)
    /// * `timeout` - Upper bound for a single call
    pub fn new(generator: Arc<dyn TextGenerationService>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// True when a credential is configured and advice can be requested.
    pub fn is_enabled(&self) -> bool {
        self.generator.is_available()
    }

    pub fn provider_name(&self) -> &str {
        self.generator.name()
    }

    /// Ask the assistant `request.question` in the context of `request.bmi`.
    ///
    /// Never reaches the service when it is disabled or the question is blank.
    pub async fn generate_advice(
        &self,
        request: &AdviceRequest,
    ) -> Result<AdviceResponse, DomainError> {
        if !self.is_enabled() {
            return Err(DomainError::MissingCredential);
        }
        let question = request.question.trim();
        if question.is_empty() {
            return Err(DomainError::EmptyQuestion);
        }

        let prompt = build_prompt(request.bmi, question);
        info!(
            provider = self.generator.name(),
            bmi = request.bmi,
            question_len = question.len(),
            "requesting advice"
        );
        debug!(prompt_len = prompt.len(), "prompt built");

        let text = match tokio::time::timeout(self.timeout, self.generator.generate(&prompt)).await
        {
            Ok(result) => result?,
            Err(_) => {
                warn!(
                    timeout_secs = self.timeout.as_secs(),
                    "advice request timed out"
                );
                return Err(DomainError::ServiceUnavailable(format!(
                    "no answer within {} seconds",
                    self.timeout.as_secs()
                )));
            }
        };

        let text = text.trim().to_string();
        if text.is_empty() {
            warn!("advice service returned an empty completion");
            return Err(DomainError::ServiceUnavailable(
                "empty response from service".to_string(),
            ));
        }

        info!(answer_len = text.len(), "advice received");
        Ok(AdviceResponse { text })
    }

    /// `generate_advice`, abandoned with `Cancelled` as soon as `cancel` resolves.
    pub async fn generate_advice_until<F>(
        &self,
        request: &AdviceRequest,
        cancel: F,
    ) -> Result<AdviceResponse, DomainError>
    where
        F: Future,
    {
        tokio::select! {
            res = self.generate_advice(request) => res,
            _ = cancel => {
                info!("advice request cancelled by user");
                Err(DomainError::Cancelled)
            }
        }
    }
}

/// Compose the single prompt sent to the model: role, BMI context, diet/exercise ask,
/// medication redirect, then the user's question.
pub fn build_prompt(bmi: f64, question: &str) -> String {
    format!(
        "You are a health assistant. Answer fitness and other health related questions.\n\
         The user's BMI is {bmi:.2}; use it for your suggestions.\n\
         You can suggest a diet to follow and some fitness exercises for the user.\n\
         If any medication or medicine related question is asked, always answer: \
         '{DOCTOR_REDIRECT}'.\n\n\
         Question: {question}"
    )
}
