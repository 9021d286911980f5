/// Validation of message options before they are sent
///
/// Every problem is reported as a `"path: message"` string; list members are
/// addressed as `<field>.<index>`.
use url::Url;
use usend_core::utils::is_valid_email;

use crate::error::ClientError;
use crate::options::{EmailContact, ListUnsubscribe, Recipients, SendEmailOptions};

const INVALID_EMAIL: &str = "Invalid email";
const INVALID_URL: &str = "Invalid url";
const INVALID_INPUT: &str = "Invalid input";
const REQUIRED: &str = "Required";

/// Validates `options`, collecting every problem into one error
pub fn validate(options: &SendEmailOptions) -> Result<(), ClientError> {
    let errors = collect_errors(options);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ClientError::validation(errors))
    }
}

pub fn collect_errors(options: &SendEmailOptions) -> Vec<String> {
    let mut errors = Vec::new();

    check_contact(&mut errors, "from", &options.from);

    if options.to.is_empty() {
        errors.push("to: At least one recipient is required".to_string());
    }
    check_recipients(&mut errors, "to", &options.to);

    if let Some(cc) = &options.cc {
        check_recipients(&mut errors, "cc", cc);
    }
    if let Some(bcc) = &options.bcc {
        check_recipients(&mut errors, "bcc", bcc);
    }
    if let Some(reply_to) = &options.reply_to {
        check_contact(&mut errors, "reply_to", reply_to);
    }

    let has_html = is_set(&options.html);
    if !is_set(&options.text) && !has_html && options.component.is_none() {
        errors.push(
            "text, html or component: At least one of these parameters is required".to_string(),
        );
    }
    if has_html && options.component.is_some() {
        errors.push("html, component: Only one of these parameters may be set".to_string());
    }

    if let Some(unsubscribe) = &options.unsubscribe {
        check_unsubscribe(&mut errors, unsubscribe);
    }

    for (i, attachment) in options.attachments.iter().enumerate() {
        if attachment.path.as_os_str().is_empty() {
            errors.push(format!("attachments.{}.path: {}", i, REQUIRED));
        }
    }

    errors
}

/// Empty strings count as absent
pub(crate) fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

pub(crate) fn is_http_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

fn check_contact(errors: &mut Vec<String>, path: &str, contact: &EmailContact) {
    match contact {
        EmailContact::Address(email) => {
            if !is_valid_email(email) {
                errors.push(format!("{}: {}", path, INVALID_EMAIL));
            }
        }
        EmailContact::Contact { email: None, .. } => {
            errors.push(format!("{}.email: {}", path, REQUIRED));
        }
        EmailContact::Contact {
            email: Some(email), ..
        } => {
            if !is_valid_email(email) {
                errors.push(format!("{}.email: {}", path, INVALID_EMAIL));
            }
        }
    }
}

fn check_recipients(errors: &mut Vec<String>, field: &str, recipients: &Recipients) {
    match recipients {
        Recipients::One(contact) => check_contact(errors, field, contact),
        Recipients::Many(contacts) => {
            for (i, contact) in contacts.iter().enumerate() {
                check_contact(errors, &format!("{}.{}", field, i), contact);
            }
        }
    }
}

fn check_unsubscribe(errors: &mut Vec<String>, unsubscribe: &ListUnsubscribe) {
    match unsubscribe {
        ListUnsubscribe::Link(link) => {
            let mailto = link.strip_prefix("mailto:").unwrap_or(link);
            if !is_valid_email(mailto) && !is_http_url(link) {
                errors.push(format!("unsubscribe: {}", INVALID_INPUT));
            }
        }
        ListUnsubscribe::Targets {
            email: None,
            url: None,
        } => {
            errors.push(format!("unsubscribe: {}", INVALID_INPUT));
        }
        ListUnsubscribe::Targets { email, url } => {
            if let Some(email) = email
                && !is_valid_email(email)
            {
                errors.push(format!("unsubscribe.email: {}", INVALID_EMAIL));
            }
            if let Some(url) = url
                && !is_http_url(url)
            {
                errors.push(format!("unsubscribe.url: {}", INVALID_URL));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::AttachmentFile;
    use std::sync::Arc;

    fn base() -> SendEmailOptions {
        SendEmailOptions::builder()
            .from("sender@example.com")
            .to("recipient@example.com")
            .subject("Test Subject")
            .text("Test plain text")
            .build()
    }

    #[test]
    fn test_valid_options() {
        assert!(validate(&base()).is_ok());
    }

    #[test]
    fn test_invalid_contacts() {
        let options = SendEmailOptions {
            to: "invalid_email".into(),
            bcc: Some(vec![EmailContact::Contact {
                email: Some("invalid_email".to_string()),
                name: None,
            }]
            .into()),
            cc: Some(vec![EmailContact::Contact {
                email: None,
                name: Some("Name with no email".to_string()),
            }]
            .into()),
            reply_to: Some("invalid_email".into()),
            ..base()
        };

        let errors = collect_errors(&options);
        assert!(errors.contains(&"to: Invalid email".to_string()));
        assert!(errors.contains(&"bcc.0.email: Invalid email".to_string()));
        assert!(errors.contains(&"cc.0.email: Required".to_string()));
        assert!(errors.contains(&"reply_to: Invalid email".to_string()));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_empty_to_list() {
        let options = SendEmailOptions {
            to: Recipients::Many(vec![]),
            ..base()
        };

        assert_eq!(
            collect_errors(&options),
            vec!["to: At least one recipient is required".to_string()]
        );
    }

    #[test]
    fn test_missing_body() {
        let options = SendEmailOptions {
            text: Some(String::new()),
            ..base()
        };

        assert_eq!(
            collect_errors(&options),
            vec!["text, html or component: At least one of these parameters is required".to_string()]
        );
    }

    #[test]
    fn test_html_and_component_conflict() {
        let options = SendEmailOptions {
            html: Some("<p>Hi</p>".to_string()),
            component: Some(Arc::new(|| "<p>Hi</p>".to_string())),
            ..base()
        };

        assert_eq!(
            collect_errors(&options),
            vec!["html, component: Only one of these parameters may be set".to_string()]
        );
    }

    #[test]
    fn test_unsubscribe_rules() {
        for link in ["unsubscribe@example.com", "mailto:unsubscribe@example.com", "https://example.com/u"] {
            let options = SendEmailOptions {
                unsubscribe: Some(link.into()),
                ..base()
            };
            assert!(collect_errors(&options).is_empty(), "{} should be accepted", link);
        }

        let options = SendEmailOptions {
            unsubscribe: Some("not a target".into()),
            ..base()
        };
        assert_eq!(collect_errors(&options), vec!["unsubscribe: Invalid input".to_string()]);

        let options = SendEmailOptions {
            unsubscribe: Some(ListUnsubscribe::Targets { email: None, url: None }),
            ..base()
        };
        assert_eq!(collect_errors(&options), vec!["unsubscribe: Invalid input".to_string()]);

        let options = SendEmailOptions {
            unsubscribe: Some(ListUnsubscribe::Targets {
                email: Some("nope".to_string()),
                url: Some("ftp://example.com".to_string()),
            }),
            ..base()
        };
        assert_eq!(
            collect_errors(&options),
            vec![
                "unsubscribe.email: Invalid email".to_string(),
                "unsubscribe.url: Invalid url".to_string(),
            ]
        );
    }

    #[test]
    fn test_attachment_path_required() {
        let options = SendEmailOptions {
            attachments: vec![AttachmentFile::from("report.pdf"), AttachmentFile::from("")],
            ..base()
        };

        assert_eq!(collect_errors(&options), vec!["attachments.1.path: Required".to_string()]);
    }

    #[test]
    fn test_validation_error_lists_all_problems() {
        let options = SendEmailOptions {
            from: "nope".into(),
            text: None,
            ..base()
        };

        let err = validate(&options).unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], "from: Invalid email");
    }
}
