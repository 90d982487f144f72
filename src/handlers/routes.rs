//! Route descriptor handlers.

use crate::{
    cache::DescriptorCache,
    descriptor::{HandlerMethod, HandlerMethodDescriptor},
};
use actix_web::{web, Result};

/// Every descriptor resolved so far, ordered by handler
pub async fn list_routes(
    cache: web::Data<DescriptorCache>,
) -> Result<web::Json<Vec<HandlerMethodDescriptor>>> {
    let descriptors = cache
        .descriptors()
        .iter()
        .map(|descriptor| descriptor.as_ref().clone())
        .collect();

    Ok(web::Json(descriptors))
}

/// Descriptor for one known handler.
///
/// Only handlers already in the cache are served; unknown identities get a
/// 404 and are never inserted.
pub async fn resolve_route(
    cache: web::Data<DescriptorCache>,
    path: web::Path<(String, String)>,
) -> Result<web::Json<HandlerMethodDescriptor>> {
    let (owner, method) = path.into_inner();
    let handler = HandlerMethod::new(owner, method);

    match cache.get(&handler) {
        Some(descriptor) => Ok(web::Json(descriptor.as_ref().clone())),
        None => Err(actix_web::error::ErrorNotFound(format!(
            "Unknown handler {handler}"
        ))),
    }
}
