/// Usend Core - Shared library for the usend client and vendor proxy
///
/// This crate contains the relay payload models, the DKIM record parser and
/// key pair validator, and the HTTP collaborators (DNS-over-HTTPS lookup and
/// relay client) used by the vendor proxy.
pub mod constants;
pub mod dkim;
pub mod dns;
pub mod error;
pub mod models;
pub mod relay;
pub mod utils;

// Re-export commonly used types
pub use dkim::{DkimRecord, validate_key_pair};
pub use dns::{DkimLookup, DohResolver};
pub use error::UsendError;
pub use relay::{MailChannelsRelay, Relay, RelayResponse};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
