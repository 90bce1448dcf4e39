//! Permissive cross-origin headers attached to every response.

use axum::{
    Router,
    http::{
        HeaderValue, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
};
use tower_http::set_header::SetResponseHeaderLayer;

/// The value of `Access-Control-Allow-Origin`.
pub const ALLOW_ORIGIN: &str = "*";
/// The value of `Access-Control-Allow-Methods`.
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
/// The value of `Access-Control-Allow-Headers`.
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Add the CORS headers to every response produced by `router`, including the
/// responses axum generates itself such as 405 Method Not Allowed.
///
/// This must be the last layer added so that it wraps the fallback as well.
pub fn add_cors_layers(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
}

/// A route handler for CORS preflight requests, responds with 204 and no body.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
