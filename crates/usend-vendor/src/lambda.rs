/// Lambda entry point - bridges API Gateway events and the axum router
use axum::body::Body as AxumBody;
use lambda_http::{Body, Error as LambdaError, Request, Response};
use std::sync::Arc;
use tower::ServiceExt;
use tracing::error;

use crate::context::VendorContext;
use crate::router;

/// Handles one Lambda HTTP event
pub async fn handler(
    ctx: Arc<VendorContext>,
    event: Request,
) -> Result<Response<Body>, LambdaError> {
    let response = match router(ctx).oneshot(into_axum_request(event)).await {
        Ok(response) => response,
        Err(err) => {
            error!(error = %err, "Router failed to produce a response");
            return Ok(Response::builder()
                .status(500)
                .header("content-type", "application/json")
                .body(Body::from(r#"{"errors":["internal server error"]}"#))?);
        }
    };

    from_axum_response(response).await
}

fn into_axum_request(event: Request) -> http::Request<AxumBody> {
    let (parts, body) = event.into_parts();
    http::Request::from_parts(parts, AxumBody::from(body.to_vec()))
}

async fn from_axum_response(
    response: http::Response<AxumBody>,
) -> Result<Response<Body>, LambdaError> {
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await?;

    let body = if bytes.is_empty() {
        Body::Empty
    } else {
        match String::from_utf8(bytes.to_vec()) {
            Ok(text) => Body::Text(text),
            Err(err) => Body::Binary(err.into_bytes()),
        }
    };

    Ok(Response::from_parts(parts, body))
}
