//! # EventBus Abstraction
//!
//! A platform-level abstraction for handing event entries to a durable bus
//! that fans them out to downstream consumers.
//!
//! ## Why This Lives in Tier 1
//!
//! Every producer (Lambda handlers, local dev servers) publishes through the
//! same trait, so the bus client can be swapped by configuration:
//! - Producers never talk to the AWS SDK directly
//! - Tests run against an in-memory bus with no credentials
//! - Config-driven swap between EventBridge (production) and InMemory (dev/test)
//!
//! ## Implementations
//!
//! - **EventBridgeBus**: Production implementation using Amazon EventBridge `PutEvents`
//! - **InMemoryBus**: Test/dev implementation that records accepted entries
//!
//! ## Usage
//!
//! ```rust,no_run
//! use event_bus::{BusEntry, EventBridgeBus, EventBus, InMemoryBus};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Production: EventBridge, credentials and region from the environment
//! let bus: Arc<dyn EventBus> = Arc::new(EventBridgeBus::from_env().await?);
//!
//! // Dev/Test: In-Memory
//! let bus: Arc<dyn EventBus> = Arc::new(InMemoryBus::new());
//!
//! // Publish one entry
//! let entry = BusEntry::new("orders", "order.created", r#"{"order_id":"123"}"#, "default");
//! let receipt = bus.publish(&entry).await?;
//! println!("accepted as {:?}", receipt.event_id);
//! # Ok(())
//! # }
//! ```

mod envelope;
mod eventbridge_bus;
mod inmemory_bus;

pub use envelope::{validate_entry_fields, BusEntry};
pub use eventbridge_bus::EventBridgeBus;
pub use inmemory_bus::InMemoryBus;

use async_trait::async_trait;
use std::fmt;

/// Acknowledgement returned once the bus has accepted an entry
///
/// Acceptance only means the bus took ownership of the entry. It says nothing
/// about whether any consumer has processed it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BusReceipt {
    /// Identifier the bus assigned to the entry, when it reports one
    pub event_id: Option<String>,
}

impl BusReceipt {
    pub fn new(event_id: Option<String>) -> Self {
        Self { event_id }
    }
}

/// Errors that can occur when using the event bus
#[derive(Debug, Clone, thiserror::Error)]
pub enum BusError {
    #[error("failed to publish entry: {0}")]
    PublishError(String),

    #[error("bus rejected entry ({code}): {message}")]
    Rejected { code: String, message: String },

    #[error("connection error: {0}")]
    ConnectionError(String),

    #[error("invalid entry: {0}")]
    InvalidEntry(String),

    #[error("bus configuration could not be resolved: {0}")]
    ConfigError(String),
}

/// Result type for event bus operations
pub type BusResult<T> = Result<T, BusError>;

/// Core event bus abstraction for publishing entries
///
/// Implementations submit exactly one entry per call. They never retry on
/// their own; a failed submission is reported to the caller as-is.
#[async_trait]
pub trait EventBus: Send + Sync {
    /// Publish a single entry to the bus named in `entry.event_bus_name`
    ///
    /// # Returns
    /// * `Ok(BusReceipt)` if the bus accepted the entry
    /// * `Err(BusError)` if the bus could not be reached or rejected the entry
    async fn publish(&self, entry: &BusEntry) -> BusResult<BusReceipt>;
}

impl fmt::Debug for dyn EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventBus")
    }
}
