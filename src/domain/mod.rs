//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the BMI engine and errors live here. Dependencies flow inward.

pub mod bmi;
pub mod entities;
pub mod errors;

pub use bmi::{GAUGE_MAX, classify, compute, compute_bmi, gauge_fraction};
pub use entities::{AdviceRequest, AdviceResponse, BmiCategory, BmiResult, Measurement};
pub use errors::DomainError;
