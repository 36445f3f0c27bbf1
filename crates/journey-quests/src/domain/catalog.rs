//! The fixed quest catalog.

use std::fmt;
use std::str::FromStr;

use journey_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Quest category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestType {
    /// Story quest.
    Main,
    /// Room discovery.
    Exploration,
    /// Optional quest.
    Side,
}

impl QuestType {
    /// Lower-case type name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuestType::Main => "main",
            QuestType::Exploration => "exploration",
            QuestType::Side => "side",
        }
    }
}

impl fmt::Display for QuestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [QuestType::Main, QuestType::Exploration, QuestType::Side]
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown quest type: {s}")))
    }
}

/// What completing a quest grants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// Experience.
    pub xp: u32,
    /// Currency.
    pub gold: u32,
}

/// A quest and its live progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Catalog identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Category.
    #[serde(rename = "type")]
    pub kind: QuestType,
    /// Where the quest takes place.
    pub location: String,
    /// Completion reward.
    pub reward: Reward,
    /// Objectives done so far, never above `objectives_total`.
    pub objectives_completed: u32,
    /// Objectives required.
    pub objectives_total: u32,
    /// Set once the quest is complete.
    pub completed: bool,
    /// Flag unlocked on completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocks: Option<String>,
}

/// Identifiers of every catalog quest, in catalog order.
pub const QUEST_IDS: [&str; 4] = [
    "find_truth",
    "explore_floor_1",
    "speak_with_npcs",
    "defeat_deceiver",
];

#[allow(clippy::too_many_arguments)]
fn fresh(
    id: &str,
    title: &str,
    description: &str,
    kind: QuestType,
    location: &str,
    xp: u32,
    gold: u32,
    objectives_total: u32,
) -> Quest {
    Quest {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        kind,
        location: location.to_owned(),
        reward: Reward { xp, gold },
        objectives_completed: 0,
        objectives_total,
        completed: false,
        unlocks: None,
    }
}

/// Returns a fresh copy of a catalog quest.
#[must_use]
pub fn quest(id: &str) -> Option<Quest> {
    let quest = match id {
        "find_truth" => fresh(
            id,
            "Find the Truth",
            "Find the hidden chamber of the Deceiver",
            QuestType::Main,
            "Floor 1",
            100,
            50,
            1,
        ),
        "explore_floor_1" => fresh(
            id,
            "Explore the Palace",
            "Discover all rooms on Floor 1",
            QuestType::Exploration,
            "Floor 1",
            50,
            25,
            9,
        ),
        "speak_with_npcs" => fresh(
            id,
            "Meet the Pilgrims",
            "Speak with all NPCs on Floor 1",
            QuestType::Side,
            "Floor 1",
            75,
            30,
            9,
        ),
        "defeat_deceiver" => Quest {
            unlocks: Some("floor2_access".to_owned()),
            ..fresh(
                id,
                "Defeat The Deceiver",
                "Defeat The Deceiver and claim victory on Floor 1",
                QuestType::Main,
                "Floor 1: Boss Chamber",
                200,
                100,
                1,
            )
        },
        _ => return None,
    };
    Some(quest)
}

/// Fresh copies of every catalog quest, in catalog order.
#[must_use]
pub fn all_quests() -> Vec<Quest> {
    QUEST_IDS.iter().filter_map(|id| quest(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_every_listed_quest_fresh() {
        let quests = all_quests();

        assert_eq!(quests.len(), QUEST_IDS.len());
        for (quest, id) in quests.iter().zip(QUEST_IDS) {
            assert_eq!(quest.id, id);
            assert!(!quest.completed);
            assert_eq!(quest.objectives_completed, 0);
        }
    }

    #[test]
    fn test_only_the_boss_quest_unlocks_a_flag() {
        assert_eq!(
            quest("defeat_deceiver").unwrap().unlocks.as_deref(),
            Some("floor2_access")
        );
        assert!(quest("find_truth").unwrap().unlocks.is_none());
    }

    #[test]
    fn test_quest_type_parses() {
        assert_eq!("side".parse::<QuestType>().unwrap(), QuestType::Side);
        assert!("epic".parse::<QuestType>().is_err());
    }
}
