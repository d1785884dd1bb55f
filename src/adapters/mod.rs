//! Infrastructure adapters. Implement ports.
//!
//! Text-generation services and the terminal UI. Map errors to DomainError.

pub mod ai;
pub mod ui;
