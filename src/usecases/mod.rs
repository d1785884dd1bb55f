//! Application use cases. Orchestrate domain logic via ports.

pub mod advice_service;
pub mod session;

pub use advice_service::{AdviceService, build_prompt};
pub use session::Session;
