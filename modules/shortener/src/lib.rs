//! # Shortener trigger events
//!
//! Turns an identifier into a `shortener`/`trigger` event and publishes it to
//! the `bridge` event bus.
//!
//! Per invocation: [`EventEnvelope`] builds the entry, [`EventPublisher`]
//! submits it once, and [`PublishReceipt::confirmation_message`] produces the
//! caller-facing string. Failures surface as [`PublishError`].
//!
//! ```rust
//! use event_bus::InMemoryBus;
//! use shortener_rs::{handle_publish, EventPublisher, PublishRequest};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), shortener_rs::PublishError> {
//! let publisher = EventPublisher::new(Arc::new(InMemoryBus::new()));
//! let message = handle_publish(&publisher, PublishRequest { id: "abc123".to_string() }).await?;
//! assert_eq!(message, "Event with ID abc123 sent!");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod publisher;
pub mod receipt;
pub mod routes;

pub use config::{AppEnv, BusType, Config};
pub use envelope::{EventDetail, EventEnvelope};
pub use error::PublishError;
pub use handlers::{handle_publish, handle_trigger, PublishRequest, TriggerResponse};
pub use publisher::EventPublisher;
pub use receipt::PublishReceipt;
