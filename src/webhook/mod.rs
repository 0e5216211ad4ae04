//! Webhook delivery of captured leads

mod client;
mod traits;

pub use client::WebhookClient;
pub use traits::{LeadTransport, TransportError};

#[cfg(test)]
pub use traits::MockLeadTransport;
