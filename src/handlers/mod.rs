//! HTTP handlers and the application factory.

pub mod app;
pub mod metrics;
pub mod routes;

pub use app::*;
pub use metrics::*;
pub use routes::*;
