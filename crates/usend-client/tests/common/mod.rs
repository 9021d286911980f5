//! Common test utilities for client integration tests
#![allow(dead_code)]

use std::path::PathBuf;
use usend_client::{SendEmailOptions, Usend, UsendOptions};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const API_KEY: &str = "API_KEY";
pub const DKIM_PRIVATE_KEY: &str = "DKIM_PRIVATE_KEY";

/// Client pointed at `server` with the test API key and DKIM key
pub fn create_client(server: &MockServer) -> Usend {
    Usend::new(
        UsendOptions::builder()
            .vendor_url(server.uri())
            .vendor_api_key(API_KEY)
            .dkim_private_key(DKIM_PRIVATE_KEY)
            .build(),
    )
    .unwrap()
}

pub fn create_client_without_dkim(server: &MockServer) -> Usend {
    Usend::new(
        UsendOptions::builder()
            .vendor_url(server.uri())
            .vendor_api_key(API_KEY)
            .build(),
    )
    .unwrap()
}

pub async fn mount_send(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn default_options() -> SendEmailOptions {
    SendEmailOptions::builder()
        .from("sender@example.com")
        .to("recipient@example.com")
        .subject("Test Subject")
        .text("Test plain text")
        .build()
}

/// The single request the vendor received
pub async fn received_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one vendor request");
    requests.remove(0)
}

pub async fn received_payload(server: &MockServer) -> serde_json::Value {
    received_request(server).await.body_json().unwrap()
}

/// Writes `contents` to a fresh file under the temp dir
pub fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("usend-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
