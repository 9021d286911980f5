/// Error types for the usend system
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UsendError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("DNS error: {0}")]
    Dns(String),

    #[error("Relay error: {0}")]
    Relay(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Attachment error: {0}")]
    Attachment(String),
}

impl UsendError {
    /// Whether the error was caused by the caller's input rather than by
    /// infrastructure the request depends on
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Attachment(_) => true,
            Self::Dns(_) => false,
            Self::Relay(_) => false,
            Self::Config(_) => false,
        }
    }
}

// Implement conversions for common error types
impl From<serde_json::Error> for UsendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<std::env::VarError> for UsendError {
    fn from(err: std::env::VarError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<reqwest::Error> for UsendError {
    fn from(err: reqwest::Error) -> Self {
        Self::Relay(err.to_string())
    }
}
