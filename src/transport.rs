// HTTP exchange behind a trait so the dispatcher can run against any transport
use crate::config::{CallContext, ClientConfig};
use crate::error::{ClientError, TransportError};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_AGENCY_ID: &str = "API-AgencyID";
pub const HEADER_OPERATION: &str = "API-Operation";
pub const HEADER_ACCEPT: &str = "Accept";

pub const CONTENT_TYPE_XML: &str = "text/xml; charset=utf-8";
// Kept for compatibility; replies are XML envelopes regardless
pub const ACCEPT_JSON: &str = "application/json";

#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub url: String,
    pub body: String,
    pub headers: Vec<(String, String)>,
}

impl TransportRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    // The context is passed through as-is; deadlines are the transport's business
    async fn send(
        &self,
        request: TransportRequest,
        context: &CallContext,
    ) -> Result<TransportResponse, TransportError>;
}

// reqwest-backed transport. Gzip replies are inflated transparently when
// enabled in the configuration.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .gzip(config.gzip);

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|e| ClientError::InitError(e.to_string()))?;

        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        request: TransportRequest,
        context: &CallContext,
    ) -> Result<TransportResponse, TransportError> {
        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = context.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.body(request.body).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!(
            correlation_id = %context.correlation_id,
            status,
            bytes = body.len(),
            "HTTP exchange completed"
        );

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = TransportRequest {
            url: "http://localhost".to_string(),
            body: String::new(),
            headers: vec![(HEADER_OPERATION.to_string(), "BOOKING_CANCEL_REQUEST".to_string())],
        };
        assert_eq!(request.header("api-operation"), Some("BOOKING_CANCEL_REQUEST"));
        assert_eq!(request.header("API-AgencyID"), None);
    }

    #[test]
    fn test_success_range() {
        let response = |status| TransportResponse {
            status,
            body: Bytes::new(),
        };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(404).is_success());
        assert!(!response(500).is_success());
        assert!(response(404).is_client_error());
        assert!(!response(500).is_client_error());
        assert!(!response(200).is_client_error());
    }

    #[test]
    fn test_http_transport_builds_from_config() {
        let config = ClientConfig {
            user_agent: Some("booking-agent/1.0".to_string()),
            ..ClientConfig::new("https://example.com/xmlwebservice.asmx")
        };
        assert!(HttpTransport::new(&config).is_ok());
    }
}
