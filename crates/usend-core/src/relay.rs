/// Upstream relay client
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{error, info};

use crate::constants::MAILCHANNELS_SEND_URL;
use crate::error::UsendError;

/// Status, content type and raw body returned by the relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[async_trait]
pub trait Relay: Send + Sync {
    /// Posts an already serialized send request.
    ///
    /// Any HTTP response, successful or not, is returned as-is; only transport
    /// failures are errors.
    async fn send(&self, body: Bytes) -> Result<RelayResponse, UsendError>;
}

/// MailChannels transactional API
#[derive(Debug, Clone)]
pub struct MailChannelsRelay {
    client: Client,
    endpoint: String,
}

impl Default for MailChannelsRelay {
    fn default() -> Self {
        Self::new(Client::new(), MAILCHANNELS_SEND_URL)
    }
}

impl MailChannelsRelay {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Relay for MailChannelsRelay {
    async fn send(&self, body: Bytes) -> Result<RelayResponse, UsendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, mime::APPLICATION_JSON.essence_str())
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!(endpoint = %self.endpoint, error = %e, "Relay request failed");
                UsendError::Relay(format!("Failed to reach relay: {}", e))
            })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| UsendError::Relay(format!("Failed to read relay response: {}", e)))?;

        info!(status, bytes = body.len(), "Relay responded");

        Ok(RelayResponse {
            status,
            content_type,
            body,
        })
    }
}
