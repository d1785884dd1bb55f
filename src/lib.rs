//! bmi-advisor: BMI calculator with optional AI health advice, Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
