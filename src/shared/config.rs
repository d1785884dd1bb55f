//! Application configuration. AI provider, credentials, timeouts.

use serde::Deserialize;
use tracing::warn;

/// Default model per provider.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default upper bound for one advice call, in seconds.
pub const DEFAULT_ADVICE_TIMEOUT_SECS: u64 = 30;

/// Which hosted text-generation API to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiProvider {
    #[default]
    Gemini,
    OpenAi,
}

impl AiProvider {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Some(AiProvider::Gemini),
            "openai" => Some(AiProvider::OpenAi),
            _ => None,
        }
    }

    /// Provider-specific env vars accepted as credential fallback.
    fn key_env_vars(self) -> &'static [&'static str] {
        match self {
            AiProvider::Gemini => &["GOOGLE_API_KEY", "Google_API_KEY"],
            AiProvider::OpenAi => &["OPENAI_API_KEY"],
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // AI Advice Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Provider: "gemini" (default) or "openai". Read from BMI_AI_PROVIDER.
    #[serde(default)]
    pub ai_provider: Option<String>,

    /// API key. Read from BMI_AI_API_KEY, falling back to GOOGLE_API_KEY / OPENAI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// API URL. For Gemini this is the API root, for OpenAI the chat completions endpoint.
    /// Read from BMI_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// Model name. Read from BMI_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Timeout for one advice call in seconds (default 30). Read from BMI_ADVICE_TIMEOUT_SECS.
    /// Parsed outside `config` so a malformed value cannot discard the other settings.
    #[serde(skip)]
    pub advice_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("BMI"));
        if let Ok(path) = std::env::var("BMI_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        if let Ok(raw) = std::env::var("BMI_ADVICE_TIMEOUT_SECS") {
            cfg.advice_timeout_secs = parse_timeout_secs(&raw);
            if cfg.advice_timeout_secs.is_none() {
                warn!(value = %raw, "ignoring BMI_ADVICE_TIMEOUT_SECS (expected whole seconds)");
            }
        }
        Ok(cfg)
    }

    /// Configured provider. Unknown names fall back to Gemini.
    pub fn ai_provider_or_default(&self) -> AiProvider {
        self.ai_provider
            .as_deref()
            .and_then(AiProvider::parse)
            .unwrap_or_default()
    }

    /// Returns the API key if configured and non-blank. Reads config, then provider env vars.
    pub fn ai_api_key(&self) -> Option<String> {
        let provider_env = self
            .ai_provider_or_default()
            .key_env_vars()
            .iter()
            .find_map(|name| std::env::var(name).ok());
        self.ai_api_key
            .clone()
            .or(provider_env)
            .filter(|k| !k.trim().is_empty())
    }

    /// Returns the API URL for the configured provider.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url.clone().unwrap_or_else(|| {
            match self.ai_provider_or_default() {
                AiProvider::Gemini => DEFAULT_GEMINI_API_BASE,
                AiProvider::OpenAi => DEFAULT_OPENAI_URL,
            }
            .to_string()
        })
    }

    /// Returns the model name for the configured provider.
    pub fn ai_model_or_default(&self) -> String {
        self.ai_model.clone().unwrap_or_else(|| {
            match self.ai_provider_or_default() {
                AiProvider::Gemini => DEFAULT_GEMINI_MODEL,
                AiProvider::OpenAi => DEFAULT_OPENAI_MODEL,
            }
            .to_string()
        })
    }

    /// Returns advice timeout in seconds. Zero is treated as unset.
    pub fn advice_timeout_secs_or_default(&self) -> u64 {
        self.advice_timeout_secs
            .filter(|&s| s > 0)
            .unwrap_or(DEFAULT_ADVICE_TIMEOUT_SECS)
    }

    /// Returns true if AI is configured (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }
}

/// Whole seconds, surrounding whitespace allowed.
fn parse_timeout_secs(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}
