/// DKIM enforcement for proxied send requests
///
/// When the sending domain publishes a DKIM record under the requested
/// selector, the request must carry the matching private key. Domains that
/// publish nothing are forwarded without checks.
use serde_json::Value;
use tracing::{debug, info, warn};
use usend_core::constants::LOG_TARGET_SECURITY;
use usend_core::dkim::keypair::validate_key_pair_async;
use usend_core::models::email_domain;
use usend_core::{DkimLookup, DkimRecord};

use crate::error::{DKIM_MISMATCH_MESSAGE, DKIM_VERSION_MESSAGE, VendorError};

/// DKIM settings carried by a send request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DkimParams {
    pub domain: Option<String>,
    pub selector: String,
    pub private_key: Option<String>,
}

impl DkimParams {
    /// Reads `personalizations[0]` of a relay request.
    ///
    /// The domain falls back to the sender's address and the selector to
    /// `default_selector`.
    pub fn from_request(request: &Value, default_selector: &str) -> Self {
        let personalization = &request["personalizations"][0];

        let domain = non_empty(&personalization["dkim_domain"])
            .or_else(|| {
                let from = &request["from"];
                from["email"]
                    .as_str()
                    .or_else(|| from.as_str())
                    .and_then(email_domain)
            })
            .map(str::to_ascii_lowercase);

        let selector = non_empty(&personalization["dkim_selector"])
            .unwrap_or(default_selector)
            .to_string();

        let private_key = non_empty(&personalization["dkim_private_key"]).map(str::to_string);

        Self {
            domain,
            selector,
            private_key,
        }
    }
}

fn non_empty(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

/// Query name for `domain`, without the root dot
///
/// Only values that cannot be a DNS name at all are refused; whether a record
/// exists is left to the lookup.
fn dns_name(domain: &str) -> Option<&str> {
    let name = domain.strip_suffix('.').unwrap_or(domain);
    let unusable = name.is_empty() || name.contains(|c: char| c.is_whitespace() || c == '/');
    (!unusable).then_some(name)
}

/// Checks the request's DKIM key against the domain's published record
pub async fn enforce_dkim(lookup: &dyn DkimLookup, params: &DkimParams) -> Result<(), VendorError> {
    let Some(domain) = params.domain.as_deref() else {
        debug!("No sender domain in request, skipping DKIM validation");
        return Ok(());
    };

    let Some(domain) = dns_name(domain) else {
        debug!(domain = %domain, "Sender domain is not a DNS name, skipping DKIM validation");
        return Ok(());
    };

    let Some(record) = lookup
        .fetch_dkim_record(domain, &params.selector)
        .await
        .filter(DkimRecord::is_published)
    else {
        info!(
            domain = %domain,
            selector = %params.selector,
            "No DKIM record published, skipping key validation"
        );
        return Ok(());
    };

    if !record.has_valid_version() {
        warn!(
            target: LOG_TARGET_SECURITY,
            domain = %domain,
            version = record.version().unwrap_or_default(),
            "Unsupported DKIM record version"
        );
        return Err(VendorError::BadRequest(DKIM_VERSION_MESSAGE.to_string()));
    }

    let Some(private_key) = params.private_key.clone() else {
        warn!(target: LOG_TARGET_SECURITY, domain = %domain, "DKIM private key missing");
        return Err(VendorError::missing_private_key(domain));
    };

    let public_key = record.public_key().unwrap_or_default();
    if !validate_key_pair_async(public_key, private_key).await {
        warn!(target: LOG_TARGET_SECURITY, domain = %domain, "DKIM key pair mismatch");
        return Err(VendorError::BadRequest(DKIM_MISMATCH_MESSAGE.to_string()));
    }

    info!(domain = %domain, selector = %params.selector, "DKIM key pair validated");
    Ok(())
}
