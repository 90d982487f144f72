//! Configuration structures loaded from the environment.

pub mod logging;
pub mod metrics;
pub mod server;

pub use logging::*;
pub use metrics::*;
pub use server::*;
