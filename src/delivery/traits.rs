//! Trait abstraction for the lead sink to enable mocking in tests

use crate::state::Lead;
use async_trait::async_trait;

use super::client::DeliveryError;

/// Destination for captured leads
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Deliver one lead to the configured endpoint
    async fn deliver(&self, lead: Lead) -> Result<(), DeliveryError>;
}
