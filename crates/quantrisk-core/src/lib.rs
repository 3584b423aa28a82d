//! # quantrisk-core
//!
//! Core types, errors, configuration, tracing, and constants shared by the
//! QuantRisk scoring and simulation engine.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
