/// Vendor error types
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const UNAUTHORIZED_MESSAGE: &str = "unauthorized - invalid or missing API key";
pub const INVALID_JSON_MESSAGE: &str = "bad request - invalid JSON body";
pub const DKIM_VERSION_MESSAGE: &str = "bad request - DKIM version must be DKIM1";
pub const DKIM_MISMATCH_MESSAGE: &str = "bad request - DKIM public key and private key mismatch";
pub const RELAY_UNREACHABLE_MESSAGE: &str = "bad gateway - upstream relay unreachable";

/// Vendor Error
#[derive(Debug, thiserror::Error)]
pub enum VendorError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Not Found")]
    NotFound,

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    Internal(String),
}

impl VendorError {
    pub fn missing_private_key(domain: &str) -> Self {
        VendorError::BadRequest(format!(
            "bad request - DKIM private key is required for {}",
            domain
        ))
    }
}

impl IntoResponse for VendorError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            VendorError::NotFound => {
                return (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" })))
                    .into_response();
            }
            VendorError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            VendorError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            VendorError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            VendorError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(json!({ "errors": [message] }))).into_response()
    }
}

/// Convert usend-core errors to vendor errors
impl From<usend_core::UsendError> for VendorError {
    fn from(err: usend_core::UsendError) -> Self {
        match err {
            usend_core::UsendError::Relay(_) => {
                VendorError::BadGateway(RELAY_UNREACHABLE_MESSAGE.to_string())
            }
            err if err.is_client_error() => VendorError::BadRequest(err.to_string()),
            other => VendorError::Internal(other.to_string()),
        }
    }
}
