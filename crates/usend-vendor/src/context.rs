/// Vendor Context - shared state for all handlers
use crate::config::VendorConfig;
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;
use usend_core::{DkimLookup, DohResolver, MailChannelsRelay, Relay, UsendError};

/// Vendor Context contains the configuration and the upstream collaborators
#[derive(Clone)]
pub struct VendorContext {
    pub config: VendorConfig,

    /// DKIM record lookup (DNS-over-HTTPS)
    pub dkim_lookup: Arc<dyn DkimLookup>,

    /// Upstream relay
    pub relay: Arc<dyn Relay>,
}

impl VendorContext {
    /// Create a new vendor context from environment variables
    pub fn from_env() -> Result<Arc<Self>, UsendError> {
        Self::from_config(VendorConfig::from_env()?)
    }

    /// Create a context talking to the configured resolver and relay
    pub fn from_config(config: VendorConfig) -> Result<Arc<Self>, UsendError> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(concat!("usend-vendor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UsendError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let dkim_lookup = Arc::new(DohResolver::new(
            client.clone(),
            config.dns_resolver_url.clone(),
        ));
        let relay = Arc::new(MailChannelsRelay::new(client, config.relay_url.clone()));
        debug!(
            resolver = dkim_lookup.resolver_url(),
            relay = relay.endpoint(),
            "Vendor collaborators ready"
        );

        Ok(Self::with_services(config, dkim_lookup, relay))
    }

    /// Create a context from explicit collaborators
    pub fn with_services(
        config: VendorConfig,
        dkim_lookup: Arc<dyn DkimLookup>,
        relay: Arc<dyn Relay>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            dkim_lookup,
            relay,
        })
    }
}
