/// Data models for the usend system
pub mod dns;
pub mod mail;

// Re-export commonly used types
pub use dns::*;
pub use mail::*;
