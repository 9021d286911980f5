//! Common test utilities and helpers for vendor integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::sync::{Arc, LazyLock, Mutex};
use std::time::Duration;
use usend_core::{DkimLookup, DkimRecord, Relay, RelayResponse, UsendError};
use usend_vendor::{VendorConfig, VendorContext, router};

pub const API_KEY: &str = "test-api-key";

/// Base64 SPKI public key and PKCS8 private key
pub struct KeyPair {
    pub public: String,
    pub private: String,
}

fn generate_pair() -> KeyPair {
    let mut rng = rand::thread_rng();
    let private_key = RsaPrivateKey::new(&mut rng, 1024).unwrap();
    let public_key = RsaPublicKey::from(&private_key);

    KeyPair {
        public: STANDARD.encode(public_key.to_public_key_der().unwrap().as_bytes()),
        private: STANDARD.encode(private_key.to_pkcs8_der().unwrap().as_bytes()),
    }
}

pub static PAIR: LazyLock<KeyPair> = LazyLock::new(generate_pair);
pub static OTHER_PAIR: LazyLock<KeyPair> = LazyLock::new(generate_pair);

/// DKIM lookup answering with a fixed TXT payload and recording queries
pub struct FakeLookup {
    txt: Option<String>,
    pub queries: Mutex<Vec<(String, String)>>,
}

impl FakeLookup {
    pub fn none() -> Self {
        Self {
            txt: None,
            queries: Mutex::new(vec![]),
        }
    }

    pub fn txt(data: impl Into<String>) -> Self {
        Self {
            txt: Some(data.into()),
            queries: Mutex::new(vec![]),
        }
    }

    pub fn published(public_key: &str) -> Self {
        Self::txt(format!("\"v=DKIM1; p={}\"", public_key))
    }
}

#[async_trait]
impl DkimLookup for FakeLookup {
    async fn fetch_dkim_record(&self, domain: &str, selector: &str) -> Option<DkimRecord> {
        self.queries
            .lock()
            .unwrap()
            .push((domain.to_string(), selector.to_string()));
        self.txt.as_deref().and_then(DkimRecord::parse)
    }
}

/// Relay returning a canned response and recording forwarded bodies
pub struct FakeRelay {
    response: Result<RelayResponse, String>,
    pub bodies: Mutex<Vec<Bytes>>,
}

impl FakeRelay {
    pub fn responding(status: u16, body: &'static str) -> Self {
        Self {
            response: Ok(RelayResponse {
                status,
                content_type: Some("application/json".to_string()),
                body: Bytes::from_static(body.as_bytes()),
            }),
            bodies: Mutex::new(vec![]),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: Err("connection refused".to_string()),
            bodies: Mutex::new(vec![]),
        }
    }

    pub fn forwarded(&self) -> Vec<Bytes> {
        self.bodies.lock().unwrap().clone()
    }
}

#[async_trait]
impl Relay for FakeRelay {
    async fn send(&self, body: Bytes) -> Result<RelayResponse, UsendError> {
        self.bodies.lock().unwrap().push(body);
        self.response.clone().map_err(UsendError::Relay)
    }
}

pub fn test_config() -> VendorConfig {
    VendorConfig {
        api_key: API_KEY.to_string(),
        relay_url: "https://relay.invalid/tx/v1/send".to_string(),
        dns_resolver_url: "https://dns.invalid/dns-query".to_string(),
        dkim_selector: "mailchannels".to_string(),
        http_timeout: Duration::from_secs(5),
    }
}

pub fn test_app(lookup: Arc<FakeLookup>, relay: Arc<FakeRelay>) -> Router {
    router(VendorContext::with_services(test_config(), lookup, relay))
}

pub fn send_request(api_key: Option<&str>, body: &serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/send")
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(key) = api_key {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", key));
    }

    builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

/// Relay payload as produced by the client library
pub fn mail_body(private_key: Option<&str>) -> serde_json::Value {
    let mut personalization = serde_json::json!({
        "to": [{ "email": "recipient@example.com" }],
    });

    if let Some(key) = private_key {
        personalization["dkim_domain"] = "example.com".into();
        personalization["dkim_selector"] = "mailchannels".into();
        personalization["dkim_private_key"] = key.into();
    }

    serde_json::json!({
        "personalizations": [personalization],
        "from": { "email": "sender@example.com" },
        "subject": "Test Subject",
        "content": [{ "type": "text/plain", "value": "Test plain text" }]
    })
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
