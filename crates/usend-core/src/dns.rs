//! DKIM record lookup over DNS-over-HTTPS

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::constants::{DNS_JSON_CONTENT_TYPE, DNS_RESOLVER_URL};
use crate::dkim::DkimRecord;
use crate::error::UsendError;
use crate::models::DnsQuery;

/// Resolves the DKIM record a domain publishes under a selector
#[async_trait]
pub trait DkimLookup: Send + Sync {
    /// Returns `None` when no DKIM data is available, whether because the
    /// domain publishes nothing or because the lookup failed
    async fn fetch_dkim_record(&self, domain: &str, selector: &str) -> Option<DkimRecord>;
}

/// DNS JSON API client (Cloudflare, Google and compatible resolvers)
#[derive(Debug, Clone)]
pub struct DohResolver {
    client: Client,
    resolver_url: String,
}

impl Default for DohResolver {
    fn default() -> Self {
        Self::new(Client::new(), DNS_RESOLVER_URL)
    }
}

impl DohResolver {
    pub fn new(client: Client, resolver_url: impl Into<String>) -> Self {
        Self {
            client,
            resolver_url: resolver_url.into(),
        }
    }

    pub fn resolver_url(&self) -> &str {
        &self.resolver_url
    }

    /// Queries the TXT records of `name`
    pub async fn query_txt(&self, name: &str) -> Result<DnsQuery, UsendError> {
        let response = self
            .client
            .get(&self.resolver_url)
            .query(&[("name", name), ("type", "TXT")])
            .header(reqwest::header::ACCEPT, DNS_JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| UsendError::Dns(format!("DNS query for {} failed: {}", name, e)))?;

        if !response.status().is_success() {
            return Err(UsendError::Dns(format!(
                "DNS query for {} returned {}",
                name,
                response.status()
            )));
        }

        response
            .json::<DnsQuery>()
            .await
            .map_err(|e| UsendError::Dns(format!("Invalid DNS JSON for {}: {}", name, e)))
    }
}

/// Name under which a selector's DKIM key is published
pub fn dkim_record_name(domain: &str, selector: &str) -> String {
    format!("{}._domainkey.{}", selector, domain)
}

#[async_trait]
impl DkimLookup for DohResolver {
    async fn fetch_dkim_record(&self, domain: &str, selector: &str) -> Option<DkimRecord> {
        let name = dkim_record_name(domain, selector);

        let query = match self.query_txt(&name).await {
            Ok(query) => query,
            Err(e) => {
                warn!(name = %name, error = %e, "DKIM lookup failed, treating as absent");
                return None;
            }
        };

        let Some(data) = query.first_answer_data() else {
            debug!(name = %name, status = query.status, "No DKIM record published");
            return None;
        };

        let record = DkimRecord::parse(data);
        debug!(name = %name, found = record.is_some(), "Parsed DKIM record");
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_resolver(mock_server: &MockServer) -> DohResolver {
        DohResolver::new(Client::new(), format!("{}/dns-query", mock_server.uri()))
    }

    #[test]
    fn test_dkim_record_name() {
        assert_eq!(
            dkim_record_name("example.com", "mailchannels"),
            "mailchannels._domainkey.example.com"
        );
    }

    #[tokio::test]
    async fn test_fetch_dkim_record_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/dns-query"))
            .and(query_param("name", "mailchannels._domainkey.example.com"))
            .and(query_param("type", "TXT"))
            .and(header("accept", "application/dns-json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Status": 0,
                "TC": false,
                "RD": true,
                "RA": true,
                "AD": false,
                "CD": false,
                "Answer": [{
                    "name": "mailchannels._domainkey.example.com",
                    "type": 16,
                    "TTL": 300,
                    "data": "\"v=DKIM1; p=MIIBIjANBgkq\""
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resolver = create_resolver(&mock_server);
        let record = resolver
            .fetch_dkim_record("example.com", "mailchannels")
            .await
            .unwrap();

        assert_eq!(record.version(), Some("DKIM1"));
        assert_eq!(record.public_key().as_deref(), Some("MIIBIjANBgkq"));
    }

    #[tokio::test]
    async fn test_fetch_dkim_record_no_answer() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Status": 3,
                "TC": false,
                "RD": true,
                "RA": true,
                "AD": false,
                "CD": false
            })))
            .mount(&mock_server)
            .await;

        let resolver = create_resolver(&mock_server);
        assert!(
            resolver
                .fetch_dkim_record("example.com", "mailchannels")
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_fetch_dkim_record_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let resolver = create_resolver(&mock_server);
        assert!(resolver.query_txt("example.com").await.is_err());
        assert!(
            resolver
                .fetch_dkim_record("example.com", "mailchannels")
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_fetch_dkim_record_malformed_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let resolver = create_resolver(&mock_server);
        let result = resolver.query_txt("example.com").await;
        assert!(matches!(result, Err(UsendError::Dns(_))));
        assert!(
            resolver
                .fetch_dkim_record("example.com", "mailchannels")
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_fetch_dkim_record_unreachable_resolver() {
        let resolver = DohResolver::new(Client::new(), "http://127.0.0.1:1/dns-query");
        assert!(
            resolver
                .fetch_dkim_record("example.com", "mailchannels")
                .await
                .is_none()
        );
    }
}
