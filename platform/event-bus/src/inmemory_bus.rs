//! In-memory implementation of the EventBus trait for testing and development

use crate::{validate_entry_fields, BusEntry, BusError, BusReceipt, BusResult, EventBus};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// EventBus implementation that keeps accepted entries in memory
///
/// This implementation is suitable for:
/// - Unit tests (no AWS credentials needed)
/// - Local development without an EventBridge bus
/// - Asserting exactly what a handler submitted, and how many times
///
/// Clones share the same recorded state, so a test can hand one clone to the
/// code under test and inspect the other.
///
/// At most `capacity` accepted entries are kept (1000 by default); past that
/// the oldest are dropped, so a long-running local server does not grow
/// without bound.
///
/// # Example
/// ```rust
/// use event_bus::{BusEntry, EventBus, InMemoryBus};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let bus = InMemoryBus::new();
///
/// let entry = BusEntry::new("shortener", "trigger", r#"{"id":"abc"}"#, "bridge");
/// bus.publish(&entry).await?;
///
/// assert_eq!(bus.published(), vec![entry]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct InMemoryBus {
    state: Arc<Mutex<State>>,
}

struct State {
    published: VecDeque<BusEntry>,
    capacity: usize,
    attempts: usize,
    // When set, every publish fails with this error
    failure: Option<BusError>,
}

impl InMemoryBus {
    /// Create a new in-memory event bus that accepts everything
    ///
    /// The bus keeps the last 1000 accepted entries.
    pub fn new() -> Self {
        Self::with_capacity(1000)
    }

    /// Create a new in-memory event bus with a custom retention limit
    ///
    /// # Arguments
    /// * `capacity` - The maximum number of accepted entries to keep before dropping old ones
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                published: VecDeque::new(),
                capacity,
                attempts: 0,
                failure: None,
            })),
        }
    }

    /// Create a bus whose every publish fails with `error`
    pub fn failing(error: BusError) -> Self {
        let bus = Self::new();
        bus.set_failure(Some(error));
        bus
    }

    /// Switch failure simulation on (`Some`) or off (`None`)
    pub fn set_failure(&self, error: Option<BusError>) {
        self.lock().failure = error;
    }

    /// Retained entries the bus accepted, in publish order
    pub fn published(&self) -> Vec<BusEntry> {
        self.lock().published.iter().cloned().collect()
    }

    /// Number of publish calls made, accepted or not
    pub fn attempts(&self) -> usize {
        self.lock().attempts
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // Recorded state stays readable after a panic elsewhere
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for InMemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventBus for InMemoryBus {
    async fn publish(&self, entry: &BusEntry) -> BusResult<BusReceipt> {
        let mut state = self.lock();
        state.attempts += 1;

        if let Some(error) = state.failure.clone() {
            tracing::debug!(bus = %entry.event_bus_name, error = %error, "InMemoryBus: simulated failure");
            return Err(error);
        }

        validate_entry_fields(entry).map_err(BusError::InvalidEntry)?;

        if state.capacity > 0 {
            if state.published.len() == state.capacity {
                state.published.pop_front();
            }
            state.published.push_back(entry.clone());
        }

        let event_id = Uuid::new_v4().to_string();

        tracing::debug!(
            bus = %entry.event_bus_name,
            event_id = %event_id,
            "InMemoryBus: entry accepted"
        );

        Ok(BusReceipt::new(Some(event_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry(id: &str) -> BusEntry {
        BusEntry::new(
            "shortener",
            "trigger",
            format!(r#"{{"id":"{}"}}"#, id),
            "bridge",
        )
    }

    #[tokio::test]
    async fn test_publish_records_entry() {
        let bus = InMemoryBus::new();

        let receipt = bus.publish(&sample_entry("abc")).await.unwrap();

        assert!(receipt.event_id.is_some());
        assert_eq!(bus.published(), vec![sample_entry("abc")]);
        assert_eq!(bus.attempts(), 1);
    }

    #[tokio::test]
    async fn test_multiple_entries_in_order() {
        let bus = InMemoryBus::new();

        for i in 0..5 {
            bus.publish(&sample_entry(&format!("id-{}", i)))
                .await
                .unwrap();
        }

        let published = bus.published();
        assert_eq!(published.len(), 5);
        for (i, entry) in published.iter().enumerate() {
            assert_eq!(entry.detail, format!(r#"{{"id":"id-{}"}}"#, i));
        }
    }

    #[tokio::test]
    async fn test_event_ids_are_unique() {
        let bus = InMemoryBus::new();

        let first = bus.publish(&sample_entry("a")).await.unwrap();
        let second = bus.publish(&sample_entry("a")).await.unwrap();

        assert_ne!(first.event_id, second.event_id);
    }

    #[tokio::test]
    async fn test_failing_bus_records_nothing() {
        let bus = InMemoryBus::failing(BusError::ConnectionError("unreachable".to_string()));

        let result = bus.publish(&sample_entry("abc")).await;

        assert!(matches!(result, Err(BusError::ConnectionError(_))));
        assert!(bus.published().is_empty());
        assert_eq!(bus.attempts(), 1);
    }

    #[tokio::test]
    async fn test_failure_can_be_cleared() {
        let bus = InMemoryBus::failing(BusError::PublishError("down".to_string()));
        assert!(bus.publish(&sample_entry("a")).await.is_err());

        bus.set_failure(None);
        assert!(bus.publish(&sample_entry("b")).await.is_ok());

        assert_eq!(bus.published(), vec![sample_entry("b")]);
        assert_eq!(bus.attempts(), 2);
    }

    #[tokio::test]
    async fn test_invalid_entry_is_rejected() {
        let bus = InMemoryBus::new();
        let entry = BusEntry::new("", "trigger", "{}", "bridge");

        let result = bus.publish(&entry).await;

        assert!(matches!(result, Err(BusError::InvalidEntry(_))));
        assert!(bus.published().is_empty());
    }

    #[tokio::test]
    async fn test_oldest_entries_dropped_past_capacity() {
        let bus = InMemoryBus::with_capacity(3);

        for i in 0..5 {
            bus.publish(&sample_entry(&format!("id-{}", i)))
                .await
                .unwrap();
        }

        assert_eq!(
            bus.published(),
            vec![sample_entry("id-2"), sample_entry("id-3"), sample_entry("id-4")]
        );
        assert_eq!(bus.attempts(), 5);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let bus = InMemoryBus::new();
        let handle = bus.clone();

        handle.publish(&sample_entry("shared")).await.unwrap();

        assert_eq!(bus.published().len(), 1);
    }
}
