/// Client and message options
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use typed_builder::TypedBuilder;
use usend_core::models::Contact;

/// Settings used to build a [`crate::Usend`] client.
///
/// Everything is optional: the vendor URL and API key fall back to
/// `USEND_VENDOR_URL` and `USEND_VENDOR_API_KEY`.
#[derive(Clone, Default, TypedBuilder)]
pub struct UsendOptions {
    #[builder(default, setter(strip_option, into))]
    pub vendor_url: Option<String>,

    #[builder(default, setter(strip_option, into))]
    pub vendor_api_key: Option<String>,

    /// Base64 PKCS8 key; enables DKIM fields on every message
    #[builder(default, setter(strip_option, into))]
    pub dkim_private_key: Option<String>,

    #[builder(default, setter(strip_option, into))]
    pub dkim_selector: Option<String>,

    #[builder(default, setter(strip_option))]
    pub timeout: Option<Duration>,
}

impl fmt::Debug for UsendOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UsendOptions")
            .field("vendor_url", &self.vendor_url)
            .field("vendor_api_key", &self.vendor_api_key.as_ref().map(|_| "***"))
            .field("dkim_private_key", &self.dkim_private_key.as_ref().map(|_| "***"))
            .field("dkim_selector", &self.dkim_selector)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Sender or recipient: a bare address or an address with a display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailContact {
    Address(String),
    Contact {
        email: Option<String>,
        name: Option<String>,
    },
}

impl EmailContact {
    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Contact {
            email: Some(email.into()),
            name: Some(name.into()),
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Address(email) => Some(email),
            Self::Contact { email, .. } => email.as_deref(),
        }
    }

    /// Normalized `{email, name?}` form, `None` without an address
    pub fn to_contact(&self) -> Option<Contact> {
        match self {
            Self::Address(email) => Some(Contact::new(email.as_str())),
            Self::Contact { email, name } => email.as_ref().map(|email| Contact {
                email: email.clone(),
                name: name.clone(),
            }),
        }
    }
}

impl From<&str> for EmailContact {
    fn from(email: &str) -> Self {
        Self::Address(email.to_string())
    }
}

impl From<String> for EmailContact {
    fn from(email: String) -> Self {
        Self::Address(email)
    }
}

impl From<Contact> for EmailContact {
    fn from(contact: Contact) -> Self {
        Self::Contact {
            email: Some(contact.email),
            name: contact.name,
        }
    }
}

/// One contact or a list of contacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipients {
    One(EmailContact),
    Many(Vec<EmailContact>),
}

impl Recipients {
    pub fn as_slice(&self) -> &[EmailContact] {
        match self {
            Self::One(contact) => std::slice::from_ref(contact),
            Self::Many(contacts) => contacts,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<EmailContact> for Recipients {
    fn from(contact: EmailContact) -> Self {
        Self::One(contact)
    }
}

impl From<&str> for Recipients {
    fn from(email: &str) -> Self {
        Self::One(email.into())
    }
}

impl From<String> for Recipients {
    fn from(email: String) -> Self {
        Self::One(email.into())
    }
}

impl<T: Into<EmailContact>> From<Vec<T>> for Recipients {
    fn from(contacts: Vec<T>) -> Self {
        Self::Many(contacts.into_iter().map(Into::into).collect())
    }
}

/// File to attach, read from disk at send time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentFile {
    pub path: PathBuf,
    /// Overrides the file name shown to recipients
    pub name: Option<String>,
}

impl AttachmentFile {
    pub fn named(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: Some(name.into()),
        }
    }
}

impl From<&str> for AttachmentFile {
    fn from(path: &str) -> Self {
        Self {
            path: path.into(),
            name: None,
        }
    }
}

impl From<PathBuf> for AttachmentFile {
    fn from(path: PathBuf) -> Self {
        Self { path, name: None }
    }
}

/// `List-Unsubscribe` targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListUnsubscribe {
    /// A mailto address or an http(s) URL
    Link(String),
    Targets {
        email: Option<String>,
        url: Option<String>,
    },
}

impl From<&str> for ListUnsubscribe {
    fn from(link: &str) -> Self {
        Self::Link(link.to_string())
    }
}

impl From<String> for ListUnsubscribe {
    fn from(link: String) -> Self {
        Self::Link(link)
    }
}

/// Produces the HTML body of a message
pub trait EmailComponent: Send + Sync {
    fn render(&self) -> String;
}

impl<F> EmailComponent for F
where
    F: Fn() -> String + Send + Sync,
{
    fn render(&self) -> String {
        self()
    }
}

/// A single message to send
#[derive(Clone, TypedBuilder)]
pub struct SendEmailOptions {
    #[builder(setter(into))]
    pub from: EmailContact,

    #[builder(setter(into))]
    pub to: Recipients,

    #[builder(default, setter(strip_option, into))]
    pub cc: Option<Recipients>,

    #[builder(default, setter(strip_option, into))]
    pub bcc: Option<Recipients>,

    #[builder(default, setter(strip_option, into))]
    pub reply_to: Option<EmailContact>,

    #[builder(setter(into))]
    pub subject: String,

    #[builder(default, setter(strip_option, into))]
    pub text: Option<String>,

    #[builder(default, setter(strip_option, into))]
    pub html: Option<String>,

    #[builder(default, setter(strip_option))]
    pub component: Option<Arc<dyn EmailComponent>>,

    #[builder(default)]
    pub attachments: Vec<AttachmentFile>,

    #[builder(default, setter(strip_option, into))]
    pub unsubscribe: Option<ListUnsubscribe>,
}

impl fmt::Debug for SendEmailOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SendEmailOptions")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("cc", &self.cc)
            .field("bcc", &self.bcc)
            .field("reply_to", &self.reply_to)
            .field("subject", &self.subject)
            .field("text", &self.text.is_some())
            .field("html", &self.html.is_some())
            .field("component", &self.component.is_some())
            .field("attachments", &self.attachments)
            .field("unsubscribe", &self.unsubscribe)
            .finish()
    }
}
