//! OpenAI-compatible adapter for advice generation (chat completions, bearer auth).

use crate::domain::DomainError;
use crate::ports::TextGenerationService;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Text-generation adapter for any endpoint speaking the OpenAI chat completions
/// protocol. Only wired when a non-blank API key is configured.
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - Bearer token
    /// * `model` - Model name (e.g., "gpt-4o-mini")
    /// * `timeout` - Request timeout applied by the HTTP client
    pub fn new(api_url: String, api_key: String, model: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            api_url,
            api_key,
            model,
        }
    }

    fn request_body(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: 0.7,
        }
    }

    /// First choice's content, trimmed.
    fn extract_text(response: ChatResponse) -> Result<String, DomainError> {
        response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| DomainError::ServiceUnavailable("No response choices returned".into()))
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

#[async_trait::async_trait]
impl TextGenerationService for OpenAiAdapter {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        info!(
            model = %self.model,
            prompt_len = prompt.len(),
            "sending prompt to OpenAI-compatible API"
        );

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| DomainError::ServiceUnavailable(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "OpenAI API returned error");
            return Err(DomainError::ServiceUnavailable(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            DomainError::ServiceUnavailable(format!("Failed to parse API response: {}", e))
        })?;

        let text = Self::extract_text(chat_response)?;
        debug!(answer_len = text.len(), "received completion");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let adapter = OpenAiAdapter::new(
            "http://localhost".into(),
            "k".into(),
            "gpt-4o-mini".into(),
            Duration::from_secs(5),
        );
        let body = serde_json::to_value(adapter.request_body("hello")).unwrap();
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_extract_text_first_choice() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  Drink water. "}}]}"#,
        )
        .unwrap();
        assert_eq!(OpenAiAdapter::extract_text(resp).unwrap(), "Drink water.");
    }

    #[test]
    fn test_extract_text_no_choices() {
        let resp: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            OpenAiAdapter::extract_text(resp),
            Err(DomainError::ServiceUnavailable(_))
        ));
    }
}
