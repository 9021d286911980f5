/// PII redaction helpers for log fields
///
/// Addresses and subjects pass through the client and the vendor on every
/// message. Only domains and short subject prefixes may reach the logs.
use regex::Regex;
use std::sync::LazyLock;

use crate::models::email_domain;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@([A-Za-z0-9.-]+\.[A-Za-z]{2,})\b").unwrap());

/// Masks the local part of every address in `text`
///
/// # Examples
/// ```
/// use usend_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("noreply@example.com"), "***@example.com");
/// assert_eq!(redact_email("to: a@x.io, b@y.io"), "to: ***@x.io, ***@y.io");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN.replace_all(text, "***@$1").into_owned()
}

/// Keeps the first three characters of long subjects plus their length
///
/// # Examples
/// ```
/// use usend_core::utils::logging::redact_subject;
///
/// assert_eq!(redact_subject("Your order has shipped"), "You...[22 chars]");
/// assert_eq!(redact_subject("Hi"), "Hi");
/// ```
pub fn redact_subject(subject: &str) -> String {
    const VISIBLE: usize = 3;
    const REDACT_FROM: usize = 6;

    let length = subject.chars().count();
    if length < REDACT_FROM {
        return subject.to_string();
    }

    let prefix: String = subject.chars().take(VISIBLE).collect();
    format!("{}...[{} chars]", prefix, length)
}

/// Domain of an address for log fields, `"unknown"` without one
pub fn log_domain(email: &str) -> &str {
    email_domain(email).unwrap_or("unknown")
}
