//! Route metrics middleware.

use crate::{config::MetricsConfig, services::RouteMetrics, utils::route::extract_route_pattern};
use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    web,
};
use std::{
    future::{Ready, ready},
    pin::Pin,
    time::Instant,
};

/// Records request count and latency labeled by the matched route template.
///
/// Requires `web::Data<RouteMetrics>` in app data; requests are passed
/// through untouched when it is missing or when a `web::Data<MetricsConfig>`
/// has metrics disabled.
pub struct RouteMetricsMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RouteMetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RouteMetricsService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RouteMetricsService { service }))
    }
}

pub struct RouteMetricsService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RouteMetricsService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start_time = Instant::now();
        let method = req.method().to_string();

        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            let duration = start_time.elapsed();

            // The resource pattern is only known after routing.
            let route = extract_route_pattern(res.request());
            let status = res.status().as_u16();

            tracing::debug!(
                target: "request",
                method = %method,
                route = %route,
                status = status,
                duration_ms = %duration.as_millis(),
                "Request completed"
            );

            let enabled = res
                .request()
                .app_data::<web::Data<MetricsConfig>>()
                .is_none_or(|config| config.enabled);

            if enabled {
                if let Some(metrics) = res.request().app_data::<web::Data<RouteMetrics>>() {
                    metrics.record_request(&method, &route, status, duration);
                }
            }

            Ok(res)
        })
    }
}
