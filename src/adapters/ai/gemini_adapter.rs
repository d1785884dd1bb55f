//! Google Gemini adapter (`generateContent` REST endpoint).

use crate::domain::DomainError;
use crate::ports::TextGenerationService;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct GeminiAdapter {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl GeminiAdapter {
    /// # Arguments
    /// * `api_base` - API root (e.g. `DEFAULT_GEMINI_API_BASE`); a trailing slash is ignored
    /// * `api_key` - Google AI Studio key
    /// * `model` - Model name (e.g. "gemini-1.5-flash")
    /// * `timeout` - Request timeout applied by the HTTP client
    pub fn new(api_base: String, api_key: String, model: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    fn request_body(prompt: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }

    /// Concatenate the text parts of the first candidate.
    fn extract_text(response: GenerateResponse) -> Result<String, DomainError> {
        let candidate = response.candidates.into_iter().next().ok_or_else(|| {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            DomainError::ServiceUnavailable(format!("Gemini returned no answer: {}", reason))
        })?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();
        Ok(text.trim().to_string())
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[async_trait::async_trait]
impl TextGenerationService for GeminiAdapter {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        info!(
            model = %self.model,
            prompt_len = prompt.len(),
            "sending prompt to Gemini"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(prompt))
            .send()
            .await
            .map_err(|e| DomainError::ServiceUnavailable(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "Gemini API returned error");
            return Err(DomainError::ServiceUnavailable(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| {
            DomainError::ServiceUnavailable(format!("Failed to parse API response: {}", e))
        })?;

        let text = Self::extract_text(parsed)?;
        debug!(answer_len = text.len(), "received completion");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::DEFAULT_GEMINI_API_BASE;

    #[test]
    fn test_endpoint() {
        let adapter = GeminiAdapter::new(
            format!("{}/", DEFAULT_GEMINI_API_BASE),
            "k".into(),
            "gemini-1.5-flash".into(),
            Duration::from_secs(5),
        );
        assert_eq!(
            adapter.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GeminiAdapter::request_body("hi")).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hi");
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let resp: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Eat "},{"text":"greens.\n"}]},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(GeminiAdapter::extract_text(resp).unwrap(), "Eat greens.");
    }

    #[test]
    fn test_extract_text_blocked_prompt() {
        let resp: GenerateResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        let err = GeminiAdapter::extract_text(resp).unwrap_err();
        assert!(matches!(err, DomainError::ServiceUnavailable(msg) if msg.contains("SAFETY")));
    }
}
