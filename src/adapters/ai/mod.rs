//! AI adapter module. Implements TextGenerationService for LLM integration.
//!
//! Gemini and OpenAI-compatible adapters, a disabled stand-in, and a mock for testing.

pub mod disabled_adapter;
pub mod gemini_adapter;
pub mod mock_adapter;
pub mod openai_adapter;

pub use disabled_adapter::DisabledService;
pub use gemini_adapter::GeminiAdapter;
pub use mock_adapter::MockTextService;
pub use openai_adapter::OpenAiAdapter;
