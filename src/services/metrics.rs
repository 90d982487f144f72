//! Route-labeled Prometheus metrics.
//!
//! `http_requests_*` are fed by the route metrics middleware. The
//! `handler_invocations_*` series are library hooks: they stay empty until
//! the embedding application calls [`RouteMetrics::record_invocation`] or
//! [`RouteMetrics::observe`] around its own handler methods.

use crate::descriptor::HandlerMethodDescriptor;
use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::time::{Duration, Instant};

/// Route label of the metrics endpoint, which is never recorded
pub const METRICS_ROUTE: &str = "api/metrics";

const DURATION_BUCKETS: [f64; 11] = [
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Prometheus collectors labeled by path template
#[derive(Clone)]
pub struct RouteMetrics {
    pub registry: Registry,
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,
    pub handler_invocations_total: CounterVec,
    pub handler_invocation_duration_seconds: HistogramVec,
}

impl RouteMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "status", "route"],
        )?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .buckets(DURATION_BUCKETS.to_vec()),
            &["method", "route"],
        )?;

        let handler_invocations_total = CounterVec::new(
            Opts::new(
                "handler_invocations_total",
                "Total number of handler method invocations",
            ),
            &["owner", "method", "route"],
        )?;

        let handler_invocation_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "handler_invocation_duration_seconds",
                "Handler method invocation duration in seconds",
            )
            .buckets(DURATION_BUCKETS.to_vec()),
            &["route"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(handler_invocations_total.clone()))?;
        registry.register(Box::new(handler_invocation_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            handler_invocations_total,
            handler_invocation_duration_seconds,
        })
    }

    /// Record an HTTP request under its route template
    pub fn record_request(&self, method: &str, route: &str, status: u16, duration: Duration) {
        if route == METRICS_ROUTE {
            return;
        }

        self.http_requests_total
            .with_label_values(&[method, &status.to_string(), route])
            .inc();

        self.http_request_duration_seconds
            .with_label_values(&[method, route])
            .observe(duration.as_secs_f64());
    }

    /// Record one completed invocation of a handler method
    pub fn record_invocation(&self, descriptor: &HandlerMethodDescriptor, duration: Duration) {
        self.handler_invocations_total
            .with_label_values(&[
                descriptor.owner_simple_name(),
                descriptor.method_name(),
                descriptor.template(),
            ])
            .inc();

        self.handler_invocation_duration_seconds
            .with_label_values(&[descriptor.template()])
            .observe(duration.as_secs_f64());
    }

    /// Run `f` inside the descriptor's span and record it as an invocation
    pub fn observe<T>(&self, descriptor: &HandlerMethodDescriptor, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = descriptor.span().in_scope(f);
        self.record_invocation(descriptor, start.elapsed());
        result
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder.encode_to_string(&metric_families)
    }
}
