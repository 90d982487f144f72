//! Route Template - stable route labels for traced handler invocations
//!
//! Derives a low-cardinality path template for each handler method by
//! combining the base path declared on its type with the sub-path declared
//! on the method. Path parameters collapse to `*`, so `/users/{id}` and
//! `/users/42` both group under `users/*`.
//!
//! ## Architecture
//!
//! - `template` - pure fragment normalization and combination
//! - `descriptor` - handler identity and the resolved, immutable descriptor
//! - `source` - fragment lookup capability, static sources and JSON manifests
//! - `diagnostics` - sink for recovered lookup failures
//! - `cache` - per-handler descriptor cache
//! - `services/` - Prometheus metrics labeled by route template
//! - `middleware/` - actix-web middleware recording route metrics
//! - `handlers/` - HTTP endpoints and the app factory
//! - `config/` - environment-driven configuration
//! - `telemetry` - tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```
//! use route_template::{combine, HandlerMethod, HandlerMethodDescriptor};
//!
//! assert_eq!(combine(Some("/users"), Some("{id}")), "users/*");
//!
//! let method = HandlerMethod::new("app::UserResource", "get");
//! let descriptor = HandlerMethodDescriptor::from_fragments(&method, Some("/users"), Some("{id}"));
//! assert_eq!(descriptor.owner_simple_name(), "UserResource");
//! assert_eq!(descriptor.template(), "users/*");
//! ```

pub mod cache;
pub mod config;
pub mod descriptor;
pub mod diagnostics;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod source;
pub mod telemetry;
pub mod template;
pub mod utils;

pub use cache::DescriptorCache;
pub use config::{LoggingConfig, MetricsConfig, ServerConfig};
pub use descriptor::{HandlerMethod, HandlerMethodDescriptor};
pub use diagnostics::{DiagnosticsSink, SilentDiagnostics, TracingDiagnostics};
pub use handlers::{create_app, get_metrics, list_routes, resolve_route, AppState};
pub use middleware::{RouteMetricsMiddleware, RouteMetricsService};
pub use services::{RouteMetrics, METRICS_ROUTE};
pub use source::{
    FragmentTarget, LookupError, ManifestError, PathFragmentSource, RouteManifest,
    StaticFragmentSource,
};
pub use telemetry::{init_tracing, TelemetryError};
pub use template::{collapse_placeholders, combine, normalize_segment, WILDCARD};
pub use utils::{extract_route_pattern, UNMATCHED_ROUTE};
