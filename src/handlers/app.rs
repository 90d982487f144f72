//! Application factory.

use crate::{
    cache::DescriptorCache,
    config::MetricsConfig,
    handlers::{get_metrics, list_routes, resolve_route},
    middleware::RouteMetricsMiddleware,
    services::RouteMetrics,
};
use actix_web::{App, web};

/// Shared state handed to every worker
#[derive(Clone)]
pub struct AppState {
    pub cache: web::Data<DescriptorCache>,
    pub metrics: web::Data<RouteMetrics>,
    pub metrics_config: web::Data<MetricsConfig>,
}

/// Build the application with route metrics and descriptor endpoints
pub fn create_app(
    state: AppState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(RouteMetricsMiddleware)
        .app_data(state.cache)
        .app_data(state.metrics)
        .app_data(state.metrics_config)
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .service(web::resource("/api/routes").route(web::get().to(list_routes)))
        .service(
            web::resource("/api/routes/{owner}/{method}").route(web::get().to(resolve_route)),
        )
}
