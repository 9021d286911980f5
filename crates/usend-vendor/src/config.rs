/// Vendor configuration - loaded once from environment variables
use std::fmt;
use std::time::Duration;
use url::Url;
use usend_core::UsendError;
use usend_core::constants::{
    DEFAULT_DKIM_SELECTOR, DEFAULT_HTTP_TIMEOUT_SECS, DNS_RESOLVER_URL, ENV_DKIM_SELECTOR,
    ENV_DNS_RESOLVER_URL, ENV_HTTP_TIMEOUT_SECS, ENV_RELAY_URL, ENV_VENDOR_API_KEY,
    MAILCHANNELS_SEND_URL,
};

#[derive(Clone)]
pub struct VendorConfig {
    /// Bearer key every caller must present
    pub api_key: String,
    pub relay_url: String,
    pub dns_resolver_url: String,
    /// Selector used when a request names none
    pub dkim_selector: String,
    /// Timeout applied to DNS and relay calls
    pub http_timeout: Duration,
}

impl fmt::Debug for VendorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VendorConfig")
            .field("api_key", &"***")
            .field("relay_url", &self.relay_url)
            .field("dns_resolver_url", &self.dns_resolver_url)
            .field("dkim_selector", &self.dkim_selector)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

impl VendorConfig {
    pub fn from_env() -> Result<Self, UsendError> {
        Self::from_source(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source
    pub fn from_source<F>(get: F) -> Result<Self, UsendError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = get(ENV_VENDOR_API_KEY)
            .ok_or_else(|| UsendError::Config(format!("Missing {} env var", ENV_VENDOR_API_KEY)))?;

        let http_timeout = match get(ENV_HTTP_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                UsendError::Config(format!("Invalid {}: {}", ENV_HTTP_TIMEOUT_SECS, e))
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let config = Self {
            api_key,
            relay_url: get(ENV_RELAY_URL).unwrap_or_else(|| MAILCHANNELS_SEND_URL.to_string()),
            dns_resolver_url: get(ENV_DNS_RESOLVER_URL)
                .unwrap_or_else(|| DNS_RESOLVER_URL.to_string()),
            dkim_selector: get(ENV_DKIM_SELECTOR)
                .unwrap_or_else(|| DEFAULT_DKIM_SELECTOR.to_string()),
            http_timeout: Duration::from_secs(http_timeout),
        };

        config
            .validate()
            .map_err(|e| UsendError::Config(format!("Invalid configuration: {}", e)))?;

        tracing::info!(
            relay_url = %config.relay_url,
            dns_resolver_url = %config.dns_resolver_url,
            dkim_selector = %config.dkim_selector,
            "Configuration validated successfully"
        );

        Ok(config)
    }

    /// Validates configuration is valid
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("API key must not be empty".to_string());
        }

        validate_http_url("relay URL", &self.relay_url)?;
        validate_http_url("DNS resolver URL", &self.dns_resolver_url)?;

        if self.dkim_selector.is_empty()
            || !self
                .dkim_selector
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(format!("Invalid DKIM selector: {}", self.dkim_selector));
        }

        if self.http_timeout.is_zero() {
            return Err("HTTP timeout must be > 0".to_string());
        }

        Ok(())
    }
}

fn validate_http_url(label: &str, value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| format!("Invalid {} {}: {}", label, value, e))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!("Unsupported scheme for {}: {}", label, scheme)),
    }
}
