/// DKIM TXT record parser
use crate::constants::{DKIM_TAG_PUBLIC_KEY, DKIM_TAG_VERSION, DKIM_VERSION};
use std::collections::BTreeMap;

/// Tags of a DKIM TXT record (`v=DKIM1; k=rsa; p=...`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DkimRecord {
    tags: BTreeMap<String, String>,
}

impl DkimRecord {
    /// Parses the data of a TXT answer.
    ///
    /// Quotes are stripped and the text is split on `;`. Each segment is split
    /// on its first `=` so base64 padding in values survives. Segments that are
    /// empty, lack `=`, or have an empty tag name are skipped, and a later tag
    /// overwrites an earlier one with the same name.
    ///
    /// Returns `None` when no tag could be read.
    pub fn parse(data: &str) -> Option<Self> {
        let unquoted = data.replace('"', "");

        let tags: BTreeMap<String, String> = unquoted
            .split(';')
            .filter_map(|segment| {
                let (key, value) = segment.split_once('=')?;
                let key = key.trim();
                if key.is_empty() {
                    return None;
                }
                Some((key.to_string(), value.trim().to_string()))
            })
            .collect();

        if tags.is_empty() {
            None
        } else {
            Some(Self { tags })
        }
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.tags.get(tag).map(String::as_str)
    }

    pub fn version(&self) -> Option<&str> {
        self.get(DKIM_TAG_VERSION)
    }

    /// Public key with embedded whitespace removed.
    ///
    /// Long keys are published as several TXT strings; once quotes are gone
    /// the pieces are separated by blanks.
    pub fn public_key(&self) -> Option<String> {
        self.get(DKIM_TAG_PUBLIC_KEY)
            .map(|key| key.chars().filter(|c| !c.is_ascii_whitespace()).collect())
    }

    /// A record is published when it carries both a version and a key
    pub fn is_published(&self) -> bool {
        self.version().is_some() && self.get(DKIM_TAG_PUBLIC_KEY).is_some()
    }

    pub fn has_valid_version(&self) -> bool {
        self.version() == Some(DKIM_VERSION)
    }
}
