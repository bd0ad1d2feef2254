/// Outcome of an accepted publish
///
/// There is no "rejected" receipt: a failed publish is a `PublishError`, so
/// callers cannot mistake "not sent" for "sent".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    /// Identifier the caller asked to publish
    pub id: String,
    /// Identifier the bus assigned to the entry, if it reported one
    pub event_id: Option<String>,
}

impl PublishReceipt {
    pub fn new(id: impl Into<String>, event_id: Option<String>) -> Self {
        Self {
            id: id.into(),
            event_id,
        }
    }

    /// Message returned to the caller, with the id verbatim
    pub fn confirmation_message(&self) -> String {
        format!("Event with ID {} sent!", self.id)
    }
}
