/// HTTP client for the vendor proxy
use reqwest::Client;
use serde::Serialize;
use std::env;
use tracing::{debug, info, warn};
use url::Url;
use usend_core::constants::{
    DEFAULT_DKIM_SELECTOR, ENV_VENDOR_API_KEY, ENV_VENDOR_URL, VENDOR_SEND_PATH,
};
use usend_core::utils::{redact_email, redact_subject};

use crate::error::ClientError;
use crate::options::{SendEmailOptions, UsendOptions};
use crate::payload::{DkimSigning, build_payload};
use crate::schema;

/// Successful vendor response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendEmailResponse {
    pub status: u16,
    /// Response body as JSON, `null` when empty or not JSON
    pub data: serde_json::Value,
}

pub struct Usend {
    client: Client,
    send_url: String,
    api_key: String,
    dkim: Option<DkimSigning>,
}

impl Usend {
    /// Creates a client, falling back to environment variables for the
    /// vendor URL and API key
    pub fn new(options: UsendOptions) -> Result<Self, ClientError> {
        Self::with_env(options, |key| env::var(key).ok())
    }

    /// Like [`Usend::new`] with a custom environment source
    pub fn with_env<F>(options: UsendOptions, env_source: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit_url = options.vendor_url.filter(|url| !url.is_empty());
        let explicit_key = options.vendor_api_key.filter(|key| !key.is_empty());

        if let Some(url) = &explicit_url {
            parse_vendor_url(url)?;
            if explicit_key.is_none() {
                return Err(ClientError::MissingApiKey);
            }
        }

        let vendor_url = explicit_url
            .or_else(|| env_source(ENV_VENDOR_URL).filter(|url| !url.is_empty()))
            .ok_or_else(|| {
                ClientError::Config(format!("vendor URL is not set ({})", ENV_VENDOR_URL))
            })?;
        let base_url = parse_vendor_url(&vendor_url)?;

        let api_key = explicit_key
            .or_else(|| env_source(ENV_VENDOR_API_KEY).filter(|key| !key.is_empty()))
            .ok_or(ClientError::MissingApiKey)?;

        let dkim = options
            .dkim_private_key
            .filter(|key| !key.is_empty())
            .map(|private_key| DkimSigning {
                selector: options
                    .dkim_selector
                    .filter(|selector| !selector.is_empty())
                    .unwrap_or_else(|| DEFAULT_DKIM_SELECTOR.to_string()),
                private_key,
            });

        let mut builder = Client::builder().user_agent(format!("usend/{}", crate::VERSION));
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {}", e)))?;

        let send_url = format!(
            "{}{}",
            base_url.as_str().trim_end_matches('/'),
            VENDOR_SEND_PATH
        );
        debug!(send_url = %send_url, dkim = dkim.is_some(), "Usend client configured");

        Ok(Self {
            client,
            send_url,
            api_key,
            dkim,
        })
    }

    /// Endpoint messages are posted to
    pub fn send_url(&self) -> &str {
        &self.send_url
    }

    /// Validates, builds and posts a message to the vendor
    #[tracing::instrument(name = "usend.send_email", skip_all)]
    pub async fn send_email(
        &self,
        options: SendEmailOptions,
    ) -> Result<SendEmailResponse, ClientError> {
        schema::validate(&options)?;

        let payload = build_payload(&options, self.dkim.as_ref()).await?;

        info!(
            from = %redact_email(options.from.email().unwrap_or_default()),
            recipients = options.to.len(),
            subject = %redact_subject(&options.subject),
            attachments = payload.attachments.len(),
            "Sending email via vendor"
        );

        let response = self
            .client
            .post(&self.send_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            info!(status = status.as_u16(), "Email accepted by vendor");
            return Ok(SendEmailResponse {
                status: status.as_u16(),
                data: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
            });
        }

        let body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            if body.is_empty() {
                serde_json::Value::Null
            } else {
                serde_json::Value::String(String::from_utf8_lossy(&body).into_owned())
            }
        });
        warn!(status = status.as_u16(), "Vendor rejected email");

        Err(ClientError::Vendor {
            status: status.as_u16(),
            body,
        })
    }
}

fn parse_vendor_url(url: &str) -> Result<Url, ClientError> {
    Url::parse(url)
        .ok()
        .filter(|parsed| matches!(parsed.scheme(), "http" | "https"))
        .ok_or_else(|| ClientError::InvalidVendorUrl(url.to_string()))
}
