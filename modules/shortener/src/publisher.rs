use crate::config::{BusType, Config};
use crate::envelope::EventEnvelope;
use crate::error::PublishError;
use crate::receipt::PublishReceipt;
use event_bus::{EventBridgeBus, EventBus, InMemoryBus};
use std::sync::Arc;

/// Submits envelopes to the configured event bus
///
/// Holds the bus client for the lifetime of the process. Cloning is cheap and
/// every clone shares the same client.
#[derive(Clone, Debug)]
pub struct EventPublisher {
    bus: Arc<dyn EventBus>,
}

impl EventPublisher {
    pub fn new(bus: Arc<dyn EventBus>) -> Self {
        Self { bus }
    }

    /// Resolve the bus selected by `config` and wrap it
    pub async fn from_config(config: &Config) -> Result<Self, PublishError> {
        Self::for_bus_type(config.bus_type).await
    }

    /// Resolve the bus of the given type and wrap it
    ///
    /// # Errors
    /// `PublishError::Config` when the EventBridge client configuration
    /// cannot be resolved.
    pub async fn for_bus_type(bus_type: BusType) -> Result<Self, PublishError> {
        let bus: Arc<dyn EventBus> = match bus_type {
            BusType::EventBridge => {
                tracing::info!("Resolving EventBridge client configuration");
                Arc::new(EventBridgeBus::from_env().await?)
            }
            BusType::InMemory => {
                tracing::info!("Using in-memory event bus");
                Arc::new(InMemoryBus::new())
            }
        };

        Ok(Self::new(bus))
    }

    /// Publish one envelope
    ///
    /// Makes exactly one submission attempt. Acceptance means the bus took the
    /// entry, not that any consumer has seen it.
    pub async fn publish(&self, envelope: &EventEnvelope) -> Result<PublishReceipt, PublishError> {
        let entry = envelope.to_bus_entry()?;

        match self.bus.publish(&entry).await {
            Ok(receipt) => {
                tracing::info!(
                    id = %envelope.id(),
                    bus = %entry.event_bus_name,
                    event_id = ?receipt.event_id,
                    "Event published"
                );
                Ok(PublishReceipt::new(envelope.id(), receipt.event_id))
            }
            Err(e) => {
                tracing::error!(
                    id = %envelope.id(),
                    bus = %entry.event_bus_name,
                    error = %e,
                    "Failed to publish event"
                );
                Err(e.into())
            }
        }
    }
}
