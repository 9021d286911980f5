/// Send endpoint - authenticates, enforces DKIM, forwards to the relay
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::Response,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use usend_core::RelayResponse;
use usend_core::utils::logging::log_domain;

use crate::context::VendorContext;
use crate::dkim::{DkimParams, enforce_dkim};
use crate::error::{INVALID_JSON_MESSAGE, VendorError};

#[tracing::instrument(name = "vendor.send", skip_all, fields(bytes = body.len()))]
pub async fn handler(
    State(ctx): State<Arc<VendorContext>>,
    body: Bytes,
) -> Result<Response, VendorError> {
    let request: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Rejected send request with invalid JSON");
        VendorError::BadRequest(INVALID_JSON_MESSAGE.to_string())
    })?;

    let sender_domain = request["from"]["email"].as_str().map_or("unknown", log_domain);
    info!(from_domain = %sender_domain, "Processing send request");

    let params = DkimParams::from_request(&request, &ctx.config.dkim_selector);
    enforce_dkim(ctx.dkim_lookup.as_ref(), &params).await?;

    // The relay receives the caller's bytes untouched
    let upstream = ctx
        .relay
        .send(body)
        .await
        .inspect_err(|e| error!(error = %e, "Relay call failed"))?;

    info!(status = upstream.status, "Relay accepted request");
    Ok(passthrough(upstream))
}

/// Converts the relay's answer into a response with the same status and body
fn passthrough(upstream: RelayResponse) -> Response {
    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .content_type
        .as_deref()
        .and_then(|value| HeaderValue::from_str(value).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));

    let mut response = Response::new(Body::from(upstream.body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, content_type);
    response
}
