//! API layer - HTTP webhook entry points.

pub mod http;
