//! The quest ledger.

use journey_core::clock::Clock;
use journey_core::event::EventMetadata;
use journey_core::publisher::EventPublisher;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::{Quest, QuestType, Reward, all_quests};
use super::events::{ProgressUpdated, QuestCompleted, QuestEvent, QuestEventKind, QuestStarted};

/// Saved ledger state, by quest identifier only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestLedgerRecord {
    /// Active quest ids in start order.
    #[serde(default)]
    pub active: Vec<String>,
    /// Completed quest ids in completion order.
    #[serde(default)]
    pub completed: Vec<String>,
    /// The tracked quest id, if any.
    #[serde(default)]
    pub tracked: Option<String>,
}

/// Per-save quest state built over the fixed catalog.
///
/// A quest moves from available to active to completed. Completion is
/// one-way and idempotent.
#[derive(Debug)]
pub struct QuestLedger {
    /// Ledger identifier.
    pub id: Uuid,
    quests: Vec<Quest>,
    active: Vec<String>,
    completed: Vec<String>,
    tracked: Option<String>,
    emitted: i64,
    uncommitted_events: Vec<QuestEvent>,
}

impl QuestLedger {
    /// Creates a ledger with every catalog quest available.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            quests: all_quests(),
            active: Vec::new(),
            completed: Vec::new(),
            tracked: None,
            emitted: 0,
            uncommitted_events: Vec::new(),
        }
    }

    /// Rebuilds a ledger from a saved record against the catalog.
    ///
    /// Identifiers missing from the catalog are skipped. Objective counters
    /// are not saved and restart at zero for active quests.
    #[must_use]
    pub fn deserialize(id: Uuid, record: &QuestLedgerRecord) -> Self {
        let mut ledger = Self::new(id);
        for quest_id in &record.active {
            if ledger.quest(quest_id).is_some() && !ledger.is_active(quest_id) {
                ledger.active.push(quest_id.clone());
            } else {
                tracing::debug!(quest_id = %quest_id, "saved active quest skipped");
            }
        }
        for quest_id in &record.completed {
            match ledger.quest_mut(quest_id) {
                Some(quest) if !quest.completed => {
                    quest.completed = true;
                    quest.objectives_completed = quest.objectives_total;
                    ledger.active.retain(|active| active != quest_id);
                    ledger.completed.push(quest_id.clone());
                }
                _ => tracing::debug!(quest_id = %quest_id, "saved completed quest skipped"),
            }
        }
        ledger.tracked = record
            .tracked
            .clone()
            .filter(|quest_id| ledger.quest(quest_id).is_some());
        ledger
    }

    /// Captures the saved state.
    #[must_use]
    pub fn serialize(&self) -> QuestLedgerRecord {
        QuestLedgerRecord {
            active: self.active.clone(),
            completed: self.completed.clone(),
            tracked: self.tracked.clone(),
        }
    }

    // --- queries ---

    /// Looks up a quest.
    #[must_use]
    pub fn quest(&self, quest_id: &str) -> Option<&Quest> {
        self.quests.iter().find(|quest| quest.id == quest_id)
    }

    fn quest_mut(&mut self, quest_id: &str) -> Option<&mut Quest> {
        self.quests.iter_mut().find(|quest| quest.id == quest_id)
    }

    /// Every quest in catalog order.
    #[must_use]
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// Active quests in start order.
    #[must_use]
    pub fn active_quests(&self) -> Vec<&Quest> {
        self.active.iter().filter_map(|id| self.quest(id)).collect()
    }

    /// Completed quests in completion order.
    #[must_use]
    pub fn completed_quests(&self) -> Vec<&Quest> {
        self.completed.iter().filter_map(|id| self.quest(id)).collect()
    }

    /// The tracked quest, if any.
    #[must_use]
    pub fn tracked_quest(&self) -> Option<&Quest> {
        self.tracked.as_deref().and_then(|id| self.quest(id))
    }

    /// True once the quest is complete. Unknown ids are never complete.
    #[must_use]
    pub fn is_completed(&self, quest_id: &str) -> bool {
        self.quest(quest_id).is_some_and(|quest| quest.completed)
    }

    /// True while the quest is active.
    #[must_use]
    pub fn is_active(&self, quest_id: &str) -> bool {
        self.active.iter().any(|id| id == quest_id)
    }

    /// Incomplete quests of a type, in catalog order.
    #[must_use]
    pub fn quests_by_type(&self, kind: QuestType) -> Vec<&Quest> {
        self.quests
            .iter()
            .filter(|quest| quest.kind == kind && !quest.completed)
            .collect()
    }

    // --- transitions ---

    /// Starts a quest and tracks it.
    ///
    /// Returns `false` for unknown, already active, or completed quests.
    pub fn start_quest(&mut self, quest_id: &str, clock: &dyn Clock) -> bool {
        let Some(quest) = self.quest(quest_id) else {
            tracing::debug!(quest_id, "start ignored: unknown quest");
            return false;
        };
        if quest.completed || self.is_active(quest_id) {
            tracing::debug!(quest_id, "start ignored: quest already taken");
            return false;
        }
        tracing::info!(quest_id, title = %quest.title, "quest started");
        self.active.push(quest_id.to_owned());
        self.tracked = Some(quest_id.to_owned());
        let started = QuestStarted {
            ledger_id: self.id,
            quest_id: quest_id.to_owned(),
        };
        self.publish(QuestEventKind::QuestStarted(started), clock);
        true
    }

    /// Sets a quest's objective counter, clamped to its total. Reaching the
    /// total completes the quest and returns its reward.
    pub fn update_progress(
        &mut self,
        quest_id: &str,
        objectives_completed: u32,
        clock: &dyn Clock,
    ) -> Option<Reward> {
        let ledger_id = self.id;
        let quest = self.quest_mut(quest_id)?;
        if quest.completed {
            return None;
        }
        quest.objectives_completed = objectives_completed.min(quest.objectives_total);
        let updated = ProgressUpdated {
            ledger_id,
            quest_id: quest_id.to_owned(),
            objectives_completed: quest.objectives_completed,
            objectives_total: quest.objectives_total,
        };
        let done = quest.objectives_completed >= quest.objectives_total;
        self.publish(QuestEventKind::ProgressUpdated(updated), clock);
        if done {
            self.complete_quest(quest_id, clock)
        } else {
            None
        }
    }

    /// Completes a quest and returns its reward.
    ///
    /// Returns `None` for unknown or already completed quests, so a reward
    /// is handed out at most once.
    pub fn complete_quest(&mut self, quest_id: &str, clock: &dyn Clock) -> Option<Reward> {
        let ledger_id = self.id;
        let quest = self.quest_mut(quest_id)?;
        if quest.completed {
            tracing::debug!(quest_id, "completion ignored: already complete");
            return None;
        }
        quest.completed = true;
        quest.objectives_completed = quest.objectives_total;
        let reward = quest.reward;
        let completed = QuestCompleted {
            ledger_id,
            quest_id: quest_id.to_owned(),
            reward,
            unlocks: quest.unlocks.clone(),
        };
        tracing::info!(quest_id, xp = reward.xp, gold = reward.gold, "quest completed");

        self.active.retain(|id| id != quest_id);
        self.completed.push(quest_id.to_owned());
        if self.tracked.as_deref() == Some(quest_id) {
            self.tracked = None;
        }
        self.publish(QuestEventKind::QuestCompleted(completed), clock);
        Some(reward)
    }

    /// Tracks a quest. Returns `false` for unknown quests.
    pub fn track_quest(&mut self, quest_id: &str) -> bool {
        if self.quest(quest_id).is_none() {
            return false;
        }
        self.tracked = Some(quest_id.to_owned());
        true
    }

    fn publish(&mut self, kind: QuestEventKind, clock: &dyn Clock) {
        self.emitted += 1;
        let metadata = EventMetadata::next(kind.event_type(), self.id, self.emitted, clock);
        self.uncommitted_events.push(QuestEvent { metadata, kind });
    }
}

impl EventPublisher for QuestLedger {
    type Event = QuestEvent;

    fn pending_events(&self) -> &[QuestEvent] {
        &self.uncommitted_events
    }

    fn clear_pending_events(&mut self) {
        self.uncommitted_events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journey_test_support::fixed_clock;

    fn ledger() -> QuestLedger {
        QuestLedger::new(Uuid::new_v4())
    }

    #[test]
    fn test_start_quest_activates_and_tracks() {
        // Arrange
        let clock = fixed_clock();
        let mut ledger = ledger();

        // Act
        let started = ledger.start_quest("explore_floor_1", &clock);

        // Assert
        assert!(started);
        assert!(ledger.is_active("explore_floor_1"));
        assert_eq!(ledger.tracked_quest().unwrap().id, "explore_floor_1");
        assert_eq!(ledger.pending_events().len(), 1);
    }

    #[test]
    fn test_start_quest_rejects_unknown_and_duplicate() {
        let clock = fixed_clock();
        let mut ledger = ledger();
        ledger.start_quest("find_truth", &clock);

        assert!(!ledger.start_quest("find_truth", &clock));
        assert!(!ledger.start_quest("build_ark", &clock));
        assert_eq!(ledger.active_quests().len(), 1);
    }

    #[test]
    fn test_update_progress_completes_at_total() {
        // Arrange
        let clock = fixed_clock();
        let mut ledger = ledger();
        ledger.start_quest("explore_floor_1", &clock);

        // Act
        let partial = ledger.update_progress("explore_floor_1", 4, &clock);
        let finished = ledger.update_progress("explore_floor_1", 12, &clock);

        // Assert
        assert_eq!(partial, None);
        assert_eq!(finished, Some(Reward { xp: 50, gold: 25 }));
        let quest = ledger.quest("explore_floor_1").unwrap();
        assert!(quest.completed);
        assert_eq!(quest.objectives_completed, 9);
        assert!(!ledger.is_active("explore_floor_1"));
        assert!(ledger.tracked_quest().is_none());
    }

    #[test]
    fn test_complete_quest_is_idempotent() {
        let clock = fixed_clock();
        let mut ledger = ledger();
        ledger.start_quest("defeat_deceiver", &clock);

        let first = ledger.complete_quest("defeat_deceiver", &clock);
        let second = ledger.complete_quest("defeat_deceiver", &clock);

        assert_eq!(first, Some(Reward { xp: 200, gold: 100 }));
        assert_eq!(second, None);
        assert_eq!(ledger.completed_quests().len(), 1);
        assert!(!ledger.start_quest("defeat_deceiver", &clock));
    }

    #[test]
    fn test_completing_an_unstarted_quest_still_counts() {
        let clock = fixed_clock();
        let mut ledger = ledger();

        assert!(ledger.complete_quest("find_truth", &clock).is_some());
        assert!(ledger.is_completed("find_truth"));
    }

    #[test]
    fn test_quests_by_type_excludes_completed() {
        let clock = fixed_clock();
        let mut ledger = ledger();
        ledger.complete_quest("find_truth", &clock);

        let main: Vec<&str> = ledger
            .quests_by_type(QuestType::Main)
            .iter()
            .map(|quest| quest.id.as_str())
            .collect();

        assert_eq!(main, ["defeat_deceiver"]);
    }

    #[test]
    fn test_track_quest_requires_known_id() {
        let mut ledger = ledger();

        assert!(ledger.track_quest("speak_with_npcs"));
        assert!(!ledger.track_quest("slay_goliath"));
        assert_eq!(ledger.tracked_quest().unwrap().id, "speak_with_npcs");
    }

    #[test]
    fn test_record_round_trip_restores_state() {
        // Arrange
        let clock = fixed_clock();
        let mut ledger = ledger();
        ledger.start_quest("explore_floor_1", &clock);
        ledger.start_quest("speak_with_npcs", &clock);
        ledger.complete_quest("find_truth", &clock);

        // Act
        let record = ledger.serialize();
        let restored = QuestLedger::deserialize(Uuid::new_v4(), &record);

        // Assert
        assert_eq!(restored.serialize(), record);
        assert!(restored.is_completed("find_truth"));
        assert!(restored.is_active("explore_floor_1"));
        assert_eq!(restored.tracked_quest().unwrap().id, "speak_with_npcs");
        assert!(restored.pending_events().is_empty());
    }

    #[test]
    fn test_deserialize_skips_unknown_ids() {
        let record = QuestLedgerRecord {
            active: vec!["build_ark".to_owned(), "find_truth".to_owned()],
            completed: vec!["cross_jordan".to_owned()],
            tracked: Some("build_ark".to_owned()),
        };

        let ledger = QuestLedger::deserialize(Uuid::new_v4(), &record);

        assert_eq!(ledger.serialize().active, ["find_truth"]);
        assert!(ledger.completed_quests().is_empty());
        assert!(ledger.tracked_quest().is_none());
    }

    #[test]
    fn test_events_follow_quest_lifecycle() {
        let clock = fixed_clock();
        let mut ledger = ledger();
        ledger.start_quest("find_truth", &clock);
        ledger.update_progress("find_truth", 1, &clock);

        let kinds: Vec<&str> = ledger
            .drain_events()
            .iter()
            .map(|event| event.kind.event_type())
            .collect();

        assert_eq!(
            kinds,
            [
                "quests.quest_started",
                "quests.progress_updated",
                "quests.quest_completed",
            ]
        );
    }
}
