//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. None of them is fatal to the process.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Height or weight not strictly positive. User is re-prompted.
    #[error(
        "Invalid measurement: height {height_cm} cm, weight {weight_kg} kg (both must be positive)"
    )]
    InvalidMeasurement { height_cm: f64, weight_kg: f64 },

    /// No API credential configured. The advice feature is disabled.
    #[error("AI advice is disabled: no API key configured")]
    MissingCredential,

    #[error("Advice service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Question must not be empty")]
    EmptyQuestion,

    #[error("Request cancelled")]
    Cancelled,

    #[error("UI error: {0}")]
    Ui(String),
}

impl DomainError {
    /// Errors that should end the interactive loop rather than be shown and skipped.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DomainError::Ui(_))
    }
}
