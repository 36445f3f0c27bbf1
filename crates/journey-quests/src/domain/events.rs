//! Domain events for the Quests context.

use journey_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::Reward;

/// Emitted when a quest becomes active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestStarted {
    /// The ledger identifier.
    pub ledger_id: Uuid,
    /// The quest identifier.
    pub quest_id: String,
}

/// Emitted when a quest's objective counter changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdated {
    /// The ledger identifier.
    pub ledger_id: Uuid,
    /// The quest identifier.
    pub quest_id: String,
    /// Objectives done.
    pub objectives_completed: u32,
    /// Objectives required.
    pub objectives_total: u32,
}

/// Emitted once when a quest completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestCompleted {
    /// The ledger identifier.
    pub ledger_id: Uuid,
    /// The quest identifier.
    pub quest_id: String,
    /// The reward granted.
    pub reward: Reward,
    /// Flag unlocked, if any.
    pub unlocks: Option<String>,
}

/// Event payload variants for the Quests context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestEventKind {
    /// A quest was started.
    QuestStarted(QuestStarted),
    /// Progress was recorded.
    ProgressUpdated(ProgressUpdated),
    /// A quest was completed.
    QuestCompleted(QuestCompleted),
}

impl QuestEventKind {
    /// Event type name used for routing.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            QuestEventKind::QuestStarted(_) => "quests.quest_started",
            QuestEventKind::ProgressUpdated(_) => "quests.progress_updated",
            QuestEventKind::QuestCompleted(_) => "quests.quest_completed",
        }
    }
}

/// Domain event envelope for the Quests context.
#[derive(Debug, Clone)]
pub struct QuestEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: QuestEventKind,
}

impl DomainEvent for QuestEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("QuestEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
