use actix_web::{HttpServer, web};
use route_template::{
    AppState, DescriptorCache, LoggingConfig, MetricsConfig, RouteManifest, RouteMetrics,
    ServerConfig, StaticFragmentSource, TracingDiagnostics, create_app, init_tracing,
};
use std::{io, sync::Arc};
use tracing::{info, warn};

fn load_manifest(config: &ServerConfig) -> io::Result<RouteManifest> {
    let Some(path) = &config.manifest_path else {
        warn!("ROUTE_MANIFEST_PATH not set, starting with an empty route manifest");
        return Ok(RouteManifest::default());
    };

    let manifest = RouteManifest::load(path).map_err(io::Error::other)?;
    info!(
        path = %path.display(),
        resources = manifest.resources.len(),
        "Route manifest loaded"
    );
    Ok(manifest)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing(&LoggingConfig::from_env()).map_err(io::Error::other)?;

    let server_config = ServerConfig::from_env();
    let manifest = load_manifest(&server_config)?;

    let cache = DescriptorCache::new(
        Arc::new(StaticFragmentSource::from_manifest(&manifest)),
        Arc::new(TracingDiagnostics),
    );
    let warmed = cache.warm(manifest.handlers());
    info!(handlers = warmed, "Route descriptors resolved");

    let metrics = RouteMetrics::new().map_err(io::Error::other)?;
    let state = AppState {
        cache: web::Data::new(cache),
        metrics: web::Data::new(metrics),
        metrics_config: web::Data::new(MetricsConfig::from_env()),
    };

    info!(bind_address = %server_config.bind_address, "Server starting");

    HttpServer::new(move || create_app(state.clone()))
        .bind(&server_config.bind_address)?
        .run()
        .await
}
