//! Route label extraction for HTTP requests.

use crate::template::combine;
use actix_web::HttpRequest;

/// Label for requests that matched no registered resource
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Route template for the resource the request matched.
///
/// The resource pattern (e.g. `/users/{id}`) is normalized like a
/// method-level fragment, so the label is `users/*` regardless of the
/// concrete id. Unmatched requests share the [`UNMATCHED_ROUTE`] label.
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    match req.match_pattern() {
        Some(pattern) => combine(None, Some(&pattern)),
        None => UNMATCHED_ROUTE.to_string(),
    }
}
