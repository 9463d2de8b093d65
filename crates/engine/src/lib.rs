//! nrdbot engine library.
//!
//! Chat-webhook bot that looks up Netrunner cards on NetrunnerDB.
//!
//! ## Structure
//!
//! - `use_cases/` - The card lookup pipeline
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP webhook entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// HTML fixtures shared by unit and scenario tests.
#[cfg(test)]
pub mod test_fixtures;

/// End-to-end lookup scenarios against a mocked card source.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
