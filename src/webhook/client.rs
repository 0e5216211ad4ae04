//! HTTP client for the lead webhook
//!
//! The body is JSON but sent as `text/plain` so browser-facing endpoints
//! (e.g. spreadsheet script hooks) accept it without a CORS preflight.

use super::traits::{LeadTransport, TransportError};
use crate::state::LeadPayload;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Url;
use std::time::Duration;

const PLAIN_TEXT_UTF8: &str = "text/plain;charset=utf-8";

/// Client that posts leads to a fixed endpoint
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    endpoint: Url,
    /// Accept any response as delivered without looking at the status
    opaque_delivery: bool,
}

impl WebhookClient {
    /// Create a client for `endpoint`; `timeout` of `None` waits indefinitely
    pub fn new(endpoint: &str, timeout: Option<Duration>, opaque_delivery: bool) -> Result<Self> {
        let endpoint =
            Url::parse(endpoint).map_err(|e| anyhow!("Invalid webhook URL `{endpoint}`: {e}"))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(anyhow!(
                "Webhook URL must use http or https, got `{}`",
                endpoint.scheme()
            ));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint,
            opaque_delivery,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Build the POST for a payload without sending it
    fn request(&self, payload: &LeadPayload) -> Result<reqwest::Request, TransportError> {
        let body = serde_json::to_string(payload)?;
        self.client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static(PLAIN_TEXT_UTF8))
            .body(body)
            .build()
            .map_err(|e| TransportError::Unreachable(e.to_string()))
    }
}

#[async_trait]
impl LeadTransport for WebhookClient {
    async fn deliver(&self, payload: &LeadPayload) -> Result<(), TransportError> {
        let request = self.request(payload)?;
        tracing::info!(
            endpoint = %self.endpoint,
            source = payload.lead_source.as_str(),
            "delivering lead"
        );

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;

        let status = response.status();
        if self.opaque_delivery || status.is_success() {
            tracing::debug!(status = status.as_u16(), "webhook accepted lead");
            Ok(())
        } else {
            Err(TransportError::Status(status.as_u16()))
        }
    }
}
