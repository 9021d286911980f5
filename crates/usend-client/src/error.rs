/// Client error types
use thiserror::Error;
use usend_core::UsendError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid Vendor URL: {0}")]
    InvalidVendorUrl(String),

    #[error("Vendor API Key is required")]
    MissingApiKey,

    #[error("Configuration error: {0}")]
    Config(String),

    /// Pretty-printed `{"errors": [...]}` document
    #[error("{0}")]
    Validation(String),

    #[error("Attachment error: {0}")]
    Attachment(String),

    #[error("Vendor responded with status {status}: {body}")]
    Vendor {
        status: u16,
        body: serde_json::Value,
    },

    #[error("Transport error: {0}")]
    Transport(String),
}

impl ClientError {
    /// Builds a validation error from `"path: message"` entries
    pub fn validation(errors: Vec<String>) -> Self {
        let document = serde_json::json!({ "errors": errors });
        let message = serde_json::to_string_pretty(&document).unwrap_or_else(|_| document.to_string());
        Self::Validation(message)
    }

    /// Individual validation messages, if this is a validation error
    pub fn validation_errors(&self) -> Option<Vec<String>> {
        let Self::Validation(message) = self else {
            return None;
        };

        let document: serde_json::Value = serde_json::from_str(message).ok()?;
        let errors = document["errors"]
            .as_array()?
            .iter()
            .filter_map(|e| e.as_str().map(str::to_string))
            .collect();
        Some(errors)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<UsendError> for ClientError {
    fn from(err: UsendError) -> Self {
        match err {
            UsendError::Validation(msg) => Self::validation(vec![msg]),
            UsendError::Config(msg) => Self::Config(msg),
            UsendError::Attachment(msg) => Self::Attachment(msg),
            other => Self::Transport(other.to_string()),
        }
    }
}
