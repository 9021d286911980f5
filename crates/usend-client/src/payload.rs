/// Conversion of message options into the relay payload
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures::future::try_join_all;
use mime::Mime;
use std::collections::BTreeMap;
use std::path::Path;
use usend_core::constants::{
    LIST_UNSUBSCRIBE_HEADER, LIST_UNSUBSCRIBE_ONE_CLICK, LIST_UNSUBSCRIBE_POST_HEADER,
    XHTML_DOCTYPE,
};
use usend_core::models::{
    Attachment, Contact, Content, MailSendBody, Personalization, email_domain,
};

use crate::error::ClientError;
use crate::options::{AttachmentFile, EmailContact, ListUnsubscribe, Recipients, SendEmailOptions};
use crate::schema::is_http_url;

/// DKIM signing settings applied to every message
#[derive(Clone)]
pub struct DkimSigning {
    pub selector: String,
    pub private_key: String,
}

/// Builds the relay request body for `options`
pub async fn build_payload(
    options: &SendEmailOptions,
    dkim: Option<&DkimSigning>,
) -> Result<MailSendBody, ClientError> {
    let from = to_contact("from", &options.from)?;

    let mut personalization = Personalization {
        to: to_contacts("to", &options.to)?,
        cc: match &options.cc {
            Some(cc) => to_contacts("cc", cc)?,
            None => vec![],
        },
        bcc: match &options.bcc {
            Some(bcc) => to_contacts("bcc", bcc)?,
            None => vec![],
        },
        reply_to: options
            .reply_to
            .as_ref()
            .map(|c| to_contact("reply_to", c))
            .transpose()?,
        ..Default::default()
    };

    if let Some(dkim) = dkim {
        personalization.dkim_domain = email_domain(&from.email).map(str::to_string);
        personalization.dkim_selector = Some(dkim.selector.clone());
        personalization.dkim_private_key = Some(dkim.private_key.clone());
    }

    let headers = options
        .unsubscribe
        .as_ref()
        .map(unsubscribe_headers)
        .unwrap_or_default();

    Ok(MailSendBody {
        personalizations: vec![personalization],
        from,
        subject: options.subject.clone(),
        content: build_content(options),
        headers,
        attachments: read_attachments(&options.attachments).await?,
    })
}

pub fn build_content(options: &SendEmailOptions) -> Vec<Content> {
    let mut content = Vec::new();

    if let Some(text) = options.text.as_deref().filter(|t| !t.is_empty()) {
        content.push(Content::text(text));
    }

    if let Some(html) = options.html.as_deref().filter(|h| !h.is_empty()) {
        content.push(Content::html(html));
    } else if let Some(component) = &options.component {
        content.push(Content::html(format!("{}{}", XHTML_DOCTYPE, component.render())));
    }

    content
}

pub fn unsubscribe_headers(unsubscribe: &ListUnsubscribe) -> BTreeMap<String, String> {
    let (email, url) = match unsubscribe {
        ListUnsubscribe::Link(link) if is_http_url(link) => (None, Some(link.as_str())),
        ListUnsubscribe::Link(link) => (Some(link.strip_prefix("mailto:").unwrap_or(link)), None),
        ListUnsubscribe::Targets { email, url } => (email.as_deref(), url.as_deref()),
    };

    let targets: Vec<String> = email
        .map(|email| format!("<mailto:{}>", email))
        .into_iter()
        .chain(url.map(|url| format!("<{}>", url)))
        .collect();

    let mut headers = BTreeMap::new();
    if targets.is_empty() {
        return headers;
    }

    headers.insert(LIST_UNSUBSCRIBE_HEADER.to_string(), targets.join(", "));
    if url.is_some() {
        headers.insert(
            LIST_UNSUBSCRIBE_POST_HEADER.to_string(),
            LIST_UNSUBSCRIBE_ONE_CLICK.to_string(),
        );
    }
    headers
}

/// Reads all attachments concurrently
pub async fn read_attachments(files: &[AttachmentFile]) -> Result<Vec<Attachment>, ClientError> {
    try_join_all(files.iter().map(read_attachment)).await
}

async fn read_attachment(file: &AttachmentFile) -> Result<Attachment, ClientError> {
    let filename = match &file.name {
        Some(name) => name.clone(),
        None => file
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ClientError::Attachment(format!("{}: not a file path", file.path.display()))
            })?,
    };

    let bytes = tokio::fs::read(&file.path)
        .await
        .map_err(|e| ClientError::Attachment(format!("{}: {}", file.path.display(), e)))?;

    Ok(Attachment {
        content: STANDARD.encode(bytes),
        filename,
        content_type: guess_mime(&file.path).essence_str().to_string(),
    })
}

/// Content type from the file extension, `application/octet-stream` if unknown
pub fn guess_mime(path: &Path) -> Mime {
    mime_guess::from_path(path).first_or_octet_stream()
}

fn to_contact(field: &str, contact: &EmailContact) -> Result<Contact, ClientError> {
    contact
        .to_contact()
        .ok_or_else(|| ClientError::validation(vec![format!("{}.email: Required", field)]))
}

fn to_contacts(field: &str, recipients: &Recipients) -> Result<Vec<Contact>, ClientError> {
    recipients
        .as_slice()
        .iter()
        .map(|contact| to_contact(field, contact))
        .collect()
}
