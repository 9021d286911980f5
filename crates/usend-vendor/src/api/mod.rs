/// API endpoint modules
pub mod send;

use crate::error::VendorError;

/// Fallback for unknown paths and methods
pub async fn not_found() -> VendorError {
    VendorError::NotFound
}
