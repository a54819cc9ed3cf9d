//! Core domain types and logic.

pub mod bar;
pub mod config_validation;
pub mod engine;
pub mod error;
pub mod intent;
pub mod position;
pub mod replay;
pub mod strategy;
pub mod trend;
