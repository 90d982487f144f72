//! Services consuming resolved route templates.

pub mod metrics;

pub use metrics::*;
