//! Lead delivery to the external form-processing endpoint

mod client;
mod traits;

pub use client::{DeliveryError, WebhookClient};
pub use traits::LeadSink;
#[cfg(test)]
pub use traits::MockLeadSink;
