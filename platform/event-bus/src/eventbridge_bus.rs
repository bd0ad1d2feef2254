//! EventBridge-based implementation of the EventBus trait

use crate::{validate_entry_fields, BusEntry, BusError, BusReceipt, BusResult, EventBus};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_eventbridge::error::{DisplayErrorContext, SdkError};
use aws_sdk_eventbridge::operation::put_events::PutEventsOutput;
use aws_sdk_eventbridge::types::PutEventsRequestEntry;
use aws_sdk_eventbridge::Client;

/// EventBus implementation using Amazon EventBridge
///
/// This is the production implementation. It wraps an
/// `aws_sdk_eventbridge::Client` and submits each entry with a single
/// `PutEvents` call.
///
/// Build it once per process and share it: resolving credentials and region
/// is the expensive part, the client itself is cheap to clone.
///
/// # Example
/// ```rust,no_run
/// use event_bus::{BusEntry, EventBridgeBus, EventBus};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let bus = EventBridgeBus::from_env().await?;
///
/// let entry = BusEntry::new("shortener", "trigger", r#"{"id":"abc"}"#, "bridge");
/// bus.publish(&entry).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct EventBridgeBus {
    client: Client,
}

impl EventBridgeBus {
    /// Create a new EventBridgeBus from an existing SDK client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a bus from an already-resolved SDK configuration
    ///
    /// # Errors
    /// Returns `BusError::ConfigError` when the configuration carries no
    /// region, since every request would fail without one.
    pub fn from_config(config: &SdkConfig) -> BusResult<Self> {
        if config.region().is_none() {
            return Err(BusError::ConfigError(
                "no AWS region resolved (set AWS_REGION)".to_string(),
            ));
        }

        Ok(Self::new(Client::new(config)))
    }

    /// Resolve configuration from the default provider chain and build a bus
    pub async fn from_env() -> BusResult<Self> {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::from_config(&config)
    }

    /// Get a reference to the underlying EventBridge client
    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Turn a `PutEvents` response into a receipt
///
/// EventBridge answers a partially failed request with HTTP 200 and a
/// non-zero `FailedEntryCount`, so a successful call is not yet an accepted
/// entry.
pub(crate) fn receipt_from_output(output: &PutEventsOutput) -> BusResult<BusReceipt> {
    if output.failed_entry_count() > 0 {
        let failed = output.entries().iter().find(|e| e.error_code().is_some());

        return Err(BusError::Rejected {
            code: failed
                .and_then(|e| e.error_code())
                .unwrap_or("Unknown")
                .to_string(),
            message: failed
                .and_then(|e| e.error_message())
                .unwrap_or("entry was not accepted")
                .to_string(),
        });
    }

    let event_id = output
        .entries()
        .first()
        .and_then(|e| e.event_id())
        .map(str::to_string);

    Ok(BusReceipt::new(event_id))
}

/// Map an SDK failure onto the bus error taxonomy
fn classify_sdk_error<E, R>(err: &SdkError<E, R>) -> BusError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(err).to_string();

    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            BusError::ConnectionError(message)
        }
        _ => BusError::PublishError(message),
    }
}

#[async_trait]
impl EventBus for EventBridgeBus {
    async fn publish(&self, entry: &BusEntry) -> BusResult<BusReceipt> {
        validate_entry_fields(entry).map_err(BusError::InvalidEntry)?;

        let request_entry = PutEventsRequestEntry::builder()
            .source(&entry.source)
            .detail_type(&entry.detail_type)
            .detail(&entry.detail)
            .event_bus_name(&entry.event_bus_name)
            .build();

        tracing::debug!(
            source = %entry.source,
            detail_type = %entry.detail_type,
            bus = %entry.event_bus_name,
            "Submitting entry to EventBridge"
        );

        let output = self
            .client
            .put_events()
            .entries(request_entry)
            .send()
            .await
            .map_err(|e| classify_sdk_error(&e))?;

        let receipt = receipt_from_output(&output).inspect_err(|e| {
            tracing::warn!(bus = %entry.event_bus_name, error = %e, "EventBridge rejected entry");
        })?;

        Ok(receipt)
    }
}
