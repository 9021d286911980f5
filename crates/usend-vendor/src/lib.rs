/// Usend Vendor - authenticating proxy in front of the MailChannels relay
///
/// Callers present a bearer API key; when the sending domain publishes a
/// DKIM record the supplied private key must match it. Accepted requests are
/// forwarded to the relay and its response is returned unchanged.
pub mod api;
pub mod auth;
pub mod config;
pub mod context;
pub mod dkim;
pub mod error;
pub mod lambda;
pub mod middleware;

pub use config::VendorConfig;
pub use context::VendorContext;
pub use error::VendorError;
pub use lambda::handler;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header},
    middleware as axum_middleware,
    routing::post,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use usend_core::constants::{MAX_SEND_BODY_BYTES, VENDOR_SEND_PATH};

/// Build the vendor router
///
/// Only `POST /send` exists. The API key is checked on that handler alone, so
/// unknown paths and other methods answer 404 without authentication.
pub fn router(ctx: Arc<VendorContext>) -> Router {
    let send = post(api::send::handler)
        .route_layer(axum_middleware::from_fn_with_state(
            Arc::clone(&ctx),
            auth::auth_middleware,
        ))
        .fallback(api::not_found);

    Router::new()
        .route(VENDOR_SEND_PATH, send)
        .fallback(api::not_found)
        .layer(DefaultBodyLimit::max(MAX_SEND_BODY_BYTES))
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
        )
        .with_state(ctx)
}
