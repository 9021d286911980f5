/// Relay payload models (MailChannels send API)
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request body accepted by the relay's send endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MailSendBody {
    pub personalizations: Vec<Personalization>,
    pub from: Contact,
    pub subject: String,
    pub content: Vec<Content>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

/// Per-envelope recipients and DKIM settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Personalization {
    pub to: Vec<Contact>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<Contact>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dkim_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dkim_selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dkim_private_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Contact {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }

    /// Domain part of the address, if it has one
    pub fn domain(&self) -> Option<&str> {
        email_domain(&self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Content {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

impl Content {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            content_type: mime::TEXT_PLAIN.essence_str().to_string(),
            value: value.into(),
        }
    }

    pub fn html(value: impl Into<String>) -> Self {
        Self {
            content_type: mime::TEXT_HTML.essence_str().to_string(),
            value: value.into(),
        }
    }
}

/// Attachment as the relay expects it: base64 content plus metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    pub content: String,
    pub filename: String,
    #[serde(rename = "type")]
    pub content_type: String,
}

/// Returns the domain part of an email address
pub fn email_domain(email: &str) -> Option<&str> {
    email
        .rsplit_once('@')
        .map(|(_, domain)| domain.trim())
        .filter(|domain| !domain.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_omitted() {
        let body = MailSendBody {
            personalizations: vec![Personalization {
                to: vec![Contact::new("recipient@example.com")],
                ..Default::default()
            }],
            from: Contact::new("sender@example.com"),
            subject: "Hello".to_string(),
            content: vec![Content::text("Hi")],
            headers: BTreeMap::new(),
            attachments: vec![],
        };

        let json = serde_json::to_value(&body).unwrap();
        let personalization = &json["personalizations"][0];

        assert!(personalization.get("cc").is_none());
        assert!(personalization.get("reply_to").is_none());
        assert!(personalization.get("dkim_private_key").is_none());
        assert!(json.get("headers").is_none());
        assert!(json.get("attachments").is_none());
        assert_eq!(json["content"][0]["type"], "text/plain");
        assert_eq!(json["from"], serde_json::json!({ "email": "sender@example.com" }));
    }

    #[test]
    fn test_contact_domain() {
        assert_eq!(
            Contact::new("noreply@example.com").domain(),
            Some("example.com")
        );
        assert_eq!(Contact::new("invalid").domain(), None);
        assert_eq!(email_domain("user@"), None);
    }

    #[test]
    fn test_html_content_type() {
        let content = Content::html("<p>Hi</p>");
        let json = serde_json::to_string(&content).unwrap();
        assert_eq!(json, r#"{"type":"text/html","value":"<p>Hi</p>"}"#);
    }
}
