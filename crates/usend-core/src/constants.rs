/// Application constants
///
/// This module contains all hardcoded values used throughout the workspace.
/// Constants are organized by category for easy maintenance.
// ============================================================================
// Upstream Endpoints
// ============================================================================
/// MailChannels transactional send endpoint
pub const MAILCHANNELS_SEND_URL: &str = "https://api.mailchannels.net/tx/v1/send";

/// DNS-over-HTTPS resolver used for DKIM lookups
pub const DNS_RESOLVER_URL: &str = "https://cloudflare-dns.com/dns-query";

/// Accept header value for the DNS JSON API
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// Path of the send route on the vendor proxy
pub const VENDOR_SEND_PATH: &str = "/send";

/// Largest send request the vendor accepts (Lambda's synchronous payload limit)
pub const MAX_SEND_BODY_BYTES: usize = 6 * 1024 * 1024;

// ============================================================================
// DKIM
// ============================================================================

/// Selector used when the caller does not name one
pub const DEFAULT_DKIM_SELECTOR: &str = "mailchannels";

/// Only DKIM record version accepted by the vendor
pub const DKIM_VERSION: &str = "DKIM1";

/// DKIM tag holding the record version
pub const DKIM_TAG_VERSION: &str = "v";

/// DKIM tag holding the base64 SPKI public key
pub const DKIM_TAG_PUBLIC_KEY: &str = "p";

/// Plaintext encrypted and decrypted to probe a key pair
pub const KEY_PAIR_PROBE: &[u8] = b"abc";

// ============================================================================
// Content
// ============================================================================

/// Doctype prepended to component-rendered HTML bodies
pub const XHTML_DOCTYPE: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#;

/// Header carrying unsubscribe targets (RFC 2369)
pub const LIST_UNSUBSCRIBE_HEADER: &str = "List-Unsubscribe";

/// Header enabling one-click unsubscribe (RFC 8058)
pub const LIST_UNSUBSCRIBE_POST_HEADER: &str = "List-Unsubscribe-Post";

/// Value of the one-click unsubscribe header
pub const LIST_UNSUBSCRIBE_ONE_CLICK: &str = "List-Unsubscribe=One-Click";

// ============================================================================
// Environment
// ============================================================================

/// Vendor base URL used by the client when none is passed explicitly
pub const ENV_VENDOR_URL: &str = "USEND_VENDOR_URL";

/// API key shared by the client and the vendor
pub const ENV_VENDOR_API_KEY: &str = "USEND_VENDOR_API_KEY";

/// Overrides the upstream relay endpoint
pub const ENV_RELAY_URL: &str = "USEND_RELAY_URL";

/// Overrides the DNS-over-HTTPS resolver
pub const ENV_DNS_RESOLVER_URL: &str = "USEND_DNS_RESOLVER_URL";

/// Overrides the default DKIM selector
pub const ENV_DKIM_SELECTOR: &str = "USEND_DKIM_SELECTOR";

/// Timeout in seconds for outbound HTTP calls made by the vendor
pub const ENV_HTTP_TIMEOUT_SECS: &str = "USEND_HTTP_TIMEOUT_SECS";

/// Default outbound HTTP timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Logging
// ============================================================================

/// Log target for authentication and DKIM enforcement events
pub const LOG_TARGET_SECURITY: &str = "security";
