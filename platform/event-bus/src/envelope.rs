//! # Bus Entry
//!
//! The record submitted to the bus for every published event.
//!
//! ## Entry Fields
//!
//! - `source`: System that produced the event
//! - `detail_type`: Classifies the event kind; rules on the bus match on it
//! - `detail`: Event payload, already serialized to a JSON object string
//! - `event_bus_name`: Destination bus
//!
//! Field names serialize in EventBridge's own casing (`Source`, `DetailType`,
//! `Detail`, `EventBusName`) so recorded entries read like the wire request.

use serde::Serialize;

/// One entry of a `PutEvents` request
///
/// # Examples
///
/// ```rust
/// use event_bus::BusEntry;
///
/// let entry = BusEntry::new(
///     "shortener",
///     "trigger",
///     r#"{"id":"abc123"}"#,
///     "bridge",
/// );
///
/// assert_eq!(entry.detail_value().unwrap()["id"], "abc123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusEntry {
    /// Producing system (e.g., "shortener")
    pub source: String,

    /// Event kind (e.g., "trigger")
    pub detail_type: String,

    /// Serialized JSON object carried as an opaque string
    pub detail: String,

    /// Name of the destination bus
    pub event_bus_name: String,
}

impl BusEntry {
    /// Create a new bus entry from an already-serialized detail payload
    pub fn new(
        source: impl Into<String>,
        detail_type: impl Into<String>,
        detail: impl Into<String>,
        event_bus_name: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            detail_type: detail_type.into(),
            detail: detail.into(),
            event_bus_name: event_bus_name.into(),
        }
    }

    /// Decode the detail string back into JSON
    pub fn detail_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.detail)
    }
}

/// Validate a bus entry before submission
///
/// # Validation Rules
///
/// - `source`: Must be non-empty
/// - `detail_type`: Must be non-empty
/// - `event_bus_name`: Must be non-empty
/// - `detail`: Must decode to a JSON object
///
/// EventBridge refuses entries that break any of these, so both bus
/// implementations check them up front.
///
/// # Errors
///
/// Returns a descriptive error string if validation fails
pub fn validate_entry_fields(entry: &BusEntry) -> Result<(), String> {
    if entry.source.is_empty() {
        return Err("source cannot be empty".to_string());
    }

    if entry.detail_type.is_empty() {
        return Err("detail_type cannot be empty".to_string());
    }

    if entry.event_bus_name.is_empty() {
        return Err("event_bus_name cannot be empty".to_string());
    }

    let detail = entry
        .detail_value()
        .map_err(|e| format!("detail is not valid JSON: {}", e))?;

    if !detail.is_object() {
        return Err("detail must be a JSON object".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with_detail(detail: &str) -> BusEntry {
        BusEntry::new("shortener", "trigger", detail, "bridge")
    }

    #[test]
    fn test_entry_creation() {
        let entry = entry_with_detail(r#"{"id":"abc"}"#);

        assert_eq!(entry.source, "shortener");
        assert_eq!(entry.detail_type, "trigger");
        assert_eq!(entry.event_bus_name, "bridge");
        assert_eq!(entry.detail, r#"{"id":"abc"}"#);
    }

    #[test]
    fn test_entry_serializes_with_eventbridge_field_names() {
        let entry = entry_with_detail(r#"{"id":"abc"}"#);
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["Source"], "shortener");
        assert_eq!(value["DetailType"], "trigger");
        assert_eq!(value["Detail"], r#"{"id":"abc"}"#);
        assert_eq!(value["EventBusName"], "bridge");
    }

    #[test]
    fn test_validate_entry_fields_valid() {
        let entry = entry_with_detail(r#"{"id":"abc","note":"x"}"#);
        assert!(validate_entry_fields(&entry).is_ok());
    }

    #[test]
    fn test_validate_entry_fields_empty_source() {
        let mut entry = entry_with_detail(r#"{"id":"abc"}"#);
        entry.source.clear();
        assert!(validate_entry_fields(&entry).is_err());
    }

    #[test]
    fn test_validate_entry_fields_empty_bus_name() {
        let mut entry = entry_with_detail(r#"{"id":"abc"}"#);
        entry.event_bus_name.clear();
        assert_eq!(
            validate_entry_fields(&entry),
            Err("event_bus_name cannot be empty".to_string())
        );
    }

    #[test]
    fn test_validate_entry_fields_rejects_non_object_detail() {
        assert!(validate_entry_fields(&entry_with_detail("not json")).is_err());
        assert!(validate_entry_fields(&entry_with_detail(r#"["a"]"#)).is_err());
        assert!(validate_entry_fields(&entry_with_detail(r#""abc""#)).is_err());
    }

    #[test]
    fn test_empty_id_is_still_a_valid_object() {
        // The bus only cares about shape, not the values inside
        let entry = entry_with_detail(r#"{"id":""}"#);
        assert!(validate_entry_fields(&entry).is_ok());
    }
}
