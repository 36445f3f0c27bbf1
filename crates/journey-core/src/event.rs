//! Domain event abstractions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;

/// Metadata attached to every domain event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Type name for routing on the observer side.
    pub event_type: String,
    /// The encounter, ledger or other object that published the event.
    pub source_id: Uuid,
    /// Monotonically increasing position within the publisher's stream.
    pub sequence_number: i64,
    /// Timestamp of event creation.
    pub occurred_at: DateTime<Utc>,
}

impl EventMetadata {
    /// Builds metadata for the next event of a publisher stream.
    #[must_use]
    pub fn next(
        event_type: &'static str,
        source_id: Uuid,
        sequence_number: i64,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event_type: event_type.to_owned(),
            source_id,
            sequence_number,
            occurred_at: clock.now(),
        }
    }
}

/// Trait that all domain events implement.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Returns the event type name (used for observer routing).
    fn event_type(&self) -> &'static str;

    /// Serializes the event payload to JSON.
    fn to_payload(&self) -> serde_json::Value;

    /// Returns the metadata for this event.
    fn metadata(&self) -> &EventMetadata;
}
