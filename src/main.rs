//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use bmi_advisor::adapters::ai::{DisabledService, GeminiAdapter, OpenAiAdapter};
use bmi_advisor::adapters::ui::tui::TuiInputPort;
use bmi_advisor::ports::{InputPort, TextGenerationService};
use bmi_advisor::shared::config::{AiProvider, AppConfig};
use bmi_advisor::usecases::AdviceService;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // Logs go to stderr and default to warn so they do not interleave with prompts.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });

    let timeout = Duration::from_secs(cfg.advice_timeout_secs_or_default());
    let generator = build_generator(&cfg, timeout);
    let advice = Arc::new(AdviceService::new(generator, timeout));

    bmi_advisor::adapters::ui::init_ui();

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(advice));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}

/// Pick the text-generation adapter. No credential means the disabled stand-in.
fn build_generator(cfg: &AppConfig, timeout: Duration) -> Arc<dyn TextGenerationService> {
    let Some(api_key) = cfg.ai_api_key() else {
        warn!("no API key configured (BMI_AI_API_KEY / GOOGLE_API_KEY), AI advice disabled");
        return Arc::new(DisabledService::new());
    };

    let provider = cfg.ai_provider_or_default();
    info!(
        provider = ?provider,
        model = %cfg.ai_model_or_default(),
        url = %cfg.ai_api_url_or_default(),
        timeout_secs = timeout.as_secs(),
        "AI advice enabled"
    );
    match provider {
        AiProvider::Gemini => Arc::new(GeminiAdapter::new(
            cfg.ai_api_url_or_default(),
            api_key,
            cfg.ai_model_or_default(),
            timeout,
        )),
        AiProvider::OpenAi => Arc::new(OpenAiAdapter::new(
            cfg.ai_api_url_or_default(),
            api_key,
            cfg.ai_model_or_default(),
            timeout,
        )),
    }
}
