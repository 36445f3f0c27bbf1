//! Query handlers for the Quests context.

use serde::Serialize;

use crate::domain::aggregates::QuestLedger;
use crate::domain::catalog::{Quest, QuestType, Reward};

/// Read-only view of one quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestView {
    /// The quest identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Category.
    #[serde(rename = "type")]
    pub kind: QuestType,
    /// Objectives done.
    pub objectives_completed: u32,
    /// Objectives required.
    pub objectives_total: u32,
    /// Completion reward.
    pub reward: Reward,
}

impl From<&Quest> for QuestView {
    fn from(quest: &Quest) -> Self {
        Self {
            id: quest.id.clone(),
            title: quest.title.clone(),
            kind: quest.kind,
            objectives_completed: quest.objectives_completed,
            objectives_total: quest.objectives_total,
            reward: quest.reward,
        }
    }
}

/// Read-only view of a ledger, as shown in the quest journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestLogView {
    /// Active quests in start order.
    pub active: Vec<QuestView>,
    /// Completed quest identifiers in completion order.
    pub completed: Vec<String>,
    /// The tracked quest identifier, if any.
    pub tracked: Option<String>,
}

/// Builds the quest journal view.
#[must_use]
pub fn get_quest_log(ledger: &QuestLedger) -> QuestLogView {
    QuestLogView {
        active: ledger
            .active_quests()
            .into_iter()
            .map(QuestView::from)
            .collect(),
        completed: ledger
            .completed_quests()
            .into_iter()
            .map(|quest| quest.id.clone())
            .collect(),
        tracked: ledger.tracked_quest().map(|quest| quest.id.clone()),
    }
}
