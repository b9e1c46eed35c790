//! HTTP client that forwards leads to the external form-processing endpoint
//!
//! The endpoint accepts a JSON body but does not expose a readable response
//! to this client, so a request that completes without a transport error
//! counts as delivered. The status line and body are never inspected.

use crate::config::LeadTuiConfig;
use crate::state::Lead;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use super::traits::LeadSink;

/// Default delivery endpoint (the campaign's form-processing script)
const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbw1XWnxDcsC5QkggN8er1uYL79fgwxUTejKwM2zzP3ByrilH0u4iF2YvktMDoB0E88e/exec";

/// Request timeout applied when the config does not override it
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// The single failure mode of lead delivery: something went wrong while
/// attempting the network call. There is no server-side error kind because
/// the response is unobservable.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("transmission failed: {0}")]
    Transmission(String),
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transmission(err.to_string())
    }
}

/// Client for delivering leads over HTTP
pub struct WebhookClient {
    http: reqwest::Client,
    endpoint: String,
}

impl WebhookClient {
    /// Create a new client from configuration.
    ///
    /// Endpoint precedence: `LEADFORM_ENDPOINT` env var, then the config
    /// file, then the built-in campaign endpoint.
    pub fn new(config: &LeadTuiConfig) -> Result<Self> {
        let endpoint = std::env::var("LEADFORM_ENDPOINT")
            .ok()
            .or_else(|| config.endpoint_url.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout = Duration::from_secs(
            config.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        );
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http, endpoint })
    }

    /// The resolved delivery endpoint
    #[allow(dead_code)]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LeadSink for WebhookClient {
    async fn deliver(&self, lead: Lead) -> Result<(), DeliveryError> {
        tracing::info!(endpoint = %self.endpoint, "delivering lead");

        // Serializes the lead as a JSON body with Content-Type:
        // application/json. The response is intentionally dropped.
        self.http
            .post(&self.endpoint)
            .json(&lead)
            .send()
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_endpoint_overrides_default() {
        let config = LeadTuiConfig {
            endpoint_url: Some("http://localhost:9999/collect".to_string()),
            ..Default::default()
        };
        let client = WebhookClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9999/collect");
    }

    #[test]
    fn test_default_endpoint_when_unconfigured() {
        let config = LeadTuiConfig::default();
        let client = WebhookClient::new(&config).unwrap();
        assert!(client.endpoint().starts_with("https://script.google.com/"));
    }

    #[test]
    fn test_custom_timeout_accepted() {
        let config = LeadTuiConfig {
            request_timeout_secs: Some(3),
            ..Default::default()
        };
        assert!(WebhookClient::new(&config).is_ok());
    }

    #[test]
    fn test_transmission_error_display() {
        let err = DeliveryError::Transmission("connection refused".to_string());
        assert_eq!(err.to_string(), "transmission failed: connection refused");
    }

    #[tokio::test]
    async fn test_deliver_to_unreachable_endpoint_fails() {
        // Reserved TEST-NET-1 address; the connection attempt cannot succeed.
        let config = LeadTuiConfig {
            endpoint_url: Some("http://192.0.2.1:9/collect".to_string()),
            request_timeout_secs: Some(1),
            ..Default::default()
        };
        let client = WebhookClient::new(&config).unwrap();
        let lead = Lead {
            name: "박현우".to_string(),
            email: "x@y.com".to_string(),
            phone: "010-1234-5678".to_string(),
        };
        let result = client.deliver(lead).await;
        assert!(matches!(result, Err(DeliveryError::Transmission(_))));
    }
}
