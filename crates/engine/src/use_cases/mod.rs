//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod lookup;

pub use lookup::{LookupCard, LookupError, LookupTables};
