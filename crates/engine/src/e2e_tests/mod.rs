//! End-to-end lookup tests.
//!
//! These run the full stack: the real `NetrunnerDbClient` talking HTTP to an
//! in-process fake card database, wired through `App` exactly as `main` does.

mod e2e_helpers;
mod lookup_scenarios;

pub use e2e_helpers::*;
