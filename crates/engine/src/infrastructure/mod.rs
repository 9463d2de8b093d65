//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod config;
pub mod correlation;
pub mod netrunnerdb;
pub mod ports;
