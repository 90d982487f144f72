//! Middleware labeling HTTP traffic with route templates.

pub mod metrics;

pub use metrics::*;
