/// Bearer API key authentication
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::warn;
use usend_core::constants::LOG_TARGET_SECURITY;

use crate::context::VendorContext;
use crate::error::{UNAUTHORIZED_MESSAGE, VendorError};

/// Extract the bearer token from an Authorization header
pub fn extract_token(auth_header: Option<&str>) -> Result<&str, String> {
    let auth_header = auth_header.ok_or_else(|| "Missing Authorization header".to_string())?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| "Authorization header must start with 'Bearer '".to_string())
}

/// Rejects any request whose bearer token is not the configured API key
pub async fn auth_middleware(
    State(ctx): State<Arc<VendorContext>>,
    request: Request,
    next: Next,
) -> Result<Response, VendorError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = extract_token(auth_header).map_err(|reason| {
        warn!(target: LOG_TARGET_SECURITY, reason = %reason, "Rejected unauthenticated request");
        VendorError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string())
    })?;

    if token != ctx.config.api_key {
        warn!(target: LOG_TARGET_SECURITY, "Rejected request with invalid API key");
        return Err(VendorError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()));
    }

    Ok(next.run(request).await)
}
