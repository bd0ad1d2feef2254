use event_bus::BusError;

/// Everything that can stop an event from being published
///
/// None of these are recovered locally: each one fails the invocation and is
/// handed back to the host as-is.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// Environment or client configuration could not be resolved
    #[error("configuration could not be resolved: {0}")]
    Config(String),

    /// The event detail could not be encoded
    #[error("error marshaling event detail: {0}")]
    Serialization(String),

    /// The bus could not be reached or did not accept the entry
    #[error("failed to put event: {0}")]
    Delivery(#[source] BusError),
}

impl From<BusError> for PublishError {
    fn from(err: BusError) -> Self {
        match err {
            BusError::ConfigError(msg) => PublishError::Config(msg),
            other => PublishError::Delivery(other),
        }
    }
}
