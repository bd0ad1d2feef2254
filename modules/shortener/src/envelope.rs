//! # Event Envelope
//!
//! Builds the entry published for every shortener trigger event.
//!
//! Only `id` changes between invocations. Source, detail type, bus name and
//! the note are fixed for this producer, and downstream rules on the bus
//! match on them.

use crate::error::PublishError;
use event_bus::BusEntry;
use serde::{Deserialize, Serialize};

/// Producing system tag
pub const EVENT_SOURCE: &str = "shortener";

/// Event kind tag
pub const EVENT_DETAIL_TYPE: &str = "trigger";

/// Destination bus
pub const EVENT_BUS_NAME: &str = "bridge";

/// Annotation embedded in every detail payload
pub const EVENT_NOTE: &str = "Triggered by Go Lambda";

/// The serialized part of the entry
///
/// Field order is the encoding order, so the JSON is always
/// `{"id":...,"note":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetail {
    pub id: String,
    pub note: String,
}

/// Event ready for publication
///
/// The identifier is taken as-is. Empty or unusual ids are not rejected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEnvelope {
    detail: EventDetail,
}

impl EventEnvelope {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            detail: EventDetail {
                id: id.into(),
                note: EVENT_NOTE.to_string(),
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.detail.id
    }

    pub fn source(&self) -> &'static str {
        EVENT_SOURCE
    }

    pub fn detail_type(&self) -> &'static str {
        EVENT_DETAIL_TYPE
    }

    pub fn bus_name(&self) -> &'static str {
        EVENT_BUS_NAME
    }

    /// Compact JSON encoding of the detail
    pub fn detail_json(&self) -> Result<String, PublishError> {
        serde_json::to_string(&self.detail).map_err(|e| PublishError::Serialization(e.to_string()))
    }

    /// Assemble the entry handed to the bus
    pub fn to_bus_entry(&self) -> Result<BusEntry, PublishError> {
        Ok(BusEntry::new(
            self.source(),
            self.detail_type(),
            self.detail_json()?,
            self.bus_name(),
        ))
    }
}
