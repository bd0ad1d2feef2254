//! Invocation handlers
//!
//! Transport-agnostic: the Lambda binaries and the local dev server both call
//! into these.

use crate::envelope::EventEnvelope;
use crate::error::PublishError;
use crate::publisher::EventPublisher;
use serde::{Deserialize, Deserializer, Serialize};

/// Greeting returned by the trigger handler for every invocation
pub const TRIGGER_GREETING: &str = "Hello from trigger lambda!";

/// Input of the publish handler
///
/// A missing or `null` id reads as `""` and is published like any other id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Output of the trigger handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerResponse {
    pub message: String,
}

/// Build the envelope for `request.id`, publish it, and return the
/// confirmation message
///
/// The id is forwarded without validation; an empty id is published as an
/// empty `id` field.
pub async fn handle_publish(
    publisher: &EventPublisher,
    request: PublishRequest,
) -> Result<String, PublishError> {
    tracing::info!(id = %request.id, "Publish invocation received");

    let envelope = EventEnvelope::new(request.id);
    let receipt = publisher.publish(&envelope).await?;

    Ok(receipt.confirmation_message())
}

/// Acknowledge any payload with the fixed greeting
pub fn handle_trigger(event: &serde_json::Value) -> TriggerResponse {
    tracing::info!("Trigger lambda invoked");
    tracing::info!(event = %event, "Trigger event received");

    TriggerResponse {
        message: TRIGGER_GREETING.to_string(),
    }
}
