//! Session-scoped state: the last computed BMI for one interactive user.
//!
//! Owned by the UI loop and passed explicitly into advice requests.

use crate::domain::{self, AdviceRequest, BmiResult, DomainError, Measurement};
use tracing::info;

#[derive(Debug, Default)]
pub struct Session {
    last: Option<BmiResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute and store a new result. An invalid measurement leaves the previous
    /// result untouched.
    pub fn recompute(&mut self, measurement: &Measurement) -> Result<BmiResult, DomainError> {
        let result = domain::compute(measurement)?;
        info!(
            height_cm = measurement.height_cm,
            weight_kg = measurement.weight_kg,
            bmi = result.value,
            category = %result.category,
            "bmi computed"
        );
        self.last = Some(result);
        Ok(result)
    }

    pub fn last_result(&self) -> Option<BmiResult> {
        self.last
    }

    /// Bind `question` to the current BMI. `None` until a BMI has been computed.
    pub fn advice_request(&self, question: impl Into<String>) -> Option<AdviceRequest> {
        self.last
            .map(|result| AdviceRequest::new(result.value, question))
    }
}
