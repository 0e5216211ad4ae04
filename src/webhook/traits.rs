//! Trait abstraction for lead delivery to enable mocking in tests

use crate::state::LeadPayload;
use async_trait::async_trait;
use thiserror::Error;

/// Why a lead could not be handed to the webhook
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, DNS, TLS or timeout failure
    #[error("webhook unreachable: {0}")]
    Unreachable(String),
    /// The endpoint answered with a non-success status
    #[error("webhook answered with status {0}")]
    Status(u16),
    #[error("could not encode lead: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Fire-and-forget delivery of one lead
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadTransport: Send + Sync {
    /// Send the payload once. No retries.
    async fn deliver(&self, payload: &LeadPayload) -> Result<(), TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormField, LeadSource};

    #[test]
    fn test_mock_transport_through_trait_object() {
        let mut mock = MockLeadTransport::new();
        mock.expect_deliver()
            .withf(|payload| payload.lead_source == LeadSource::Download)
            .times(1)
            .returning(|_| Err(TransportError::Status(503)));

        let transport: Box<dyn LeadTransport> = Box::new(mock);
        let fields: Vec<FormField> = Vec::new();
        let payload = LeadPayload::build(&fields, LeadSource::Download);
        let result = tokio_test::block_on(transport.deliver(&payload));

        assert!(matches!(result, Err(TransportError::Status(503))));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TransportError::Status(404).to_string(),
            "webhook answered with status 404"
        );
        assert_eq!(
            TransportError::Unreachable("timed out".to_string()).to_string(),
            "webhook unreachable: timed out"
        );
    }
}
