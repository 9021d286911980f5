/// Usend Client - send email through a usend vendor proxy
///
/// Messages are validated, converted into MailChannels send payloads
/// (optionally carrying DKIM signing settings) and posted to the vendor's
/// `/send` route with the configured API key.
pub mod client;
pub mod error;
pub mod options;
pub mod payload;
pub mod schema;

pub use client::{SendEmailResponse, Usend};
pub use error::ClientError;
pub use options::{
    AttachmentFile, EmailComponent, EmailContact, ListUnsubscribe, Recipients, SendEmailOptions,
    UsendOptions,
};
pub use usend_core::utils::replace_html;

/// Library version, sent in the `User-Agent` header
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
