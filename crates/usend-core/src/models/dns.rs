/// DNS-over-HTTPS JSON response models
use serde::{Deserialize, Serialize};

/// Response of a `application/dns-json` query
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DnsQuery {
    #[serde(rename = "Status", default)]
    pub status: u32,
    #[serde(rename = "TC", default)]
    pub truncated: bool,
    #[serde(rename = "RD", default)]
    pub recursion_desired: bool,
    #[serde(rename = "RA", default)]
    pub recursion_available: bool,
    #[serde(rename = "AD", default)]
    pub authenticated_data: bool,
    #[serde(rename = "CD", default)]
    pub checking_disabled: bool,
    #[serde(rename = "Question", default)]
    pub question: Option<Vec<DnsQuestion>>,
    #[serde(rename = "Answer", default)]
    pub answer: Option<Vec<DnsAnswer>>,
}

impl DnsQuery {
    /// Data of the first answer, if the resolver returned any
    pub fn first_answer_data(&self) -> Option<&str> {
        self.answer
            .as_ref()
            .and_then(|answers| answers.first())
            .map(|answer| answer.data.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsQuestion {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsAnswer {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
    #[serde(rename = "TTL", default)]
    pub ttl: u32,
    pub data: String,
}
