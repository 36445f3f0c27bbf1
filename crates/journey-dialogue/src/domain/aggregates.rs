//! Conversation flow over NPC dialogue tables.

use std::collections::{BTreeMap, BTreeSet};

use journey_core::error::DomainError;
use journey_quests::QuestLedger;
use serde::{Deserialize, Serialize};

use super::npc::{DialogueAction, FAREWELL, MenuOption, NpcDialogue, builtin_npcs};

/// A menu option as offered to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogueOption {
    /// Number to pick.
    pub number: u32,
    /// What the player says.
    pub text: String,
    /// Response key the NPC answers with.
    pub response_key: String,
}

/// What the player sees after starting a conversation or picking an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogueView {
    /// NPC display name.
    pub npc: String,
    /// Line spoken by the NPC.
    pub text: String,
    /// Options now available. Empty once the conversation has ended.
    pub options: Vec<DialogueOption>,
    /// Set when the chosen option asked for the game to be saved.
    pub save_requested: bool,
}

/// The outcome of picking an option, before its action runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// NPC identifier.
    pub npc_id: String,
    /// NPC display name.
    pub npc: String,
    /// Response key reached.
    pub response_key: String,
    /// Response text.
    pub text: String,
    /// Action attached to the option.
    pub action: Option<DialogueAction>,
    /// True if the option ended the conversation.
    pub ended: bool,
}

/// Saved dialogue state: response keys visited per NPC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueRecord {
    /// Visited response keys by NPC id.
    #[serde(default)]
    pub visited: BTreeMap<String, BTreeSet<String>>,
}

/// Conversation state machine: idle, or talking to one NPC.
#[derive(Debug, Clone)]
pub struct DialogueSystem {
    npcs: BTreeMap<String, NpcDialogue>,
    current_npc: Option<String>,
    current_key: Option<String>,
    visited: BTreeMap<String, BTreeSet<String>>,
}

impl DialogueSystem {
    /// Creates an idle system over the given tables.
    #[must_use]
    pub fn new(npcs: BTreeMap<String, NpcDialogue>) -> Self {
        Self {
            npcs,
            current_npc: None,
            current_key: None,
            visited: BTreeMap::new(),
        }
    }

    /// Creates an idle system over the shipped NPC tables.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Content` if the embedded tables fail to load.
    pub fn with_builtin_npcs() -> Result<Self, DomainError> {
        Ok(Self::new(builtin_npcs()?))
    }

    /// Rebuilds a system from saved state. Visits to NPCs missing from the
    /// tables are dropped.
    #[must_use]
    pub fn deserialize(npcs: BTreeMap<String, NpcDialogue>, record: &DialogueRecord) -> Self {
        let mut system = Self::new(npcs);
        system.visited = record
            .visited
            .iter()
            .filter(|(npc_id, _)| system.npcs.contains_key(*npc_id))
            .map(|(npc_id, keys)| (npc_id.clone(), keys.clone()))
            .collect();
        system
    }

    /// Captures the saved state.
    #[must_use]
    pub fn serialize(&self) -> DialogueRecord {
        DialogueRecord {
            visited: self.visited.clone(),
        }
    }

    /// Looks up an NPC table.
    #[must_use]
    pub fn npc(&self, npc_id: &str) -> Option<&NpcDialogue> {
        self.npcs.get(npc_id)
    }

    /// True while a conversation is open.
    #[must_use]
    pub fn is_in_dialogue(&self) -> bool {
        self.current_npc.is_some()
    }

    /// Identifier of the NPC being talked to.
    #[must_use]
    pub fn current_npc(&self) -> Option<&str> {
        self.current_npc.as_deref()
    }

    /// The last response key reached in the open conversation.
    #[must_use]
    pub fn current_key(&self) -> Option<&str> {
        self.current_key.as_deref()
    }

    /// Response keys visited for an NPC.
    #[must_use]
    pub fn visited(&self, npc_id: &str) -> Option<&BTreeSet<String>> {
        self.visited.get(npc_id)
    }

    /// Opens a conversation with an NPC. Returns `None` for unknown NPCs.
    pub fn start_dialogue(&mut self, npc_id: &str, quests: &QuestLedger) -> Option<DialogueView> {
        let npc = self.npcs.get(npc_id)?;
        let view = DialogueView {
            npc: npc.label.clone(),
            text: npc.greeting.clone(),
            options: offered(npc, quests),
            save_requested: false,
        };
        self.current_npc = Some(npc_id.to_owned());
        self.current_key = Some("greeting".to_owned());
        tracing::debug!(npc_id, "dialogue started");
        Some(view)
    }

    /// Picks a numbered option in the open conversation.
    ///
    /// Returns `None` when idle, or when the number is missing or its
    /// requirement is not met. Reaching the farewell response closes the
    /// conversation. The option's action is returned, not run.
    pub fn select(&mut self, number: u32, quests: &QuestLedger) -> Option<Selection> {
        let npc_id = self.current_npc.clone()?;
        let npc = self.npcs.get(&npc_id)?;
        let option = npc.main_menu.get(&number)?;
        if !requirement_met(option, quests) {
            tracing::debug!(npc_id = %npc_id, number, "option ignored: requirement not met");
            return None;
        }
        let response_key = option.response.clone();
        let selection = Selection {
            npc: npc.label.clone(),
            text: npc.responses.get(&response_key).cloned().unwrap_or_default(),
            action: option.action.clone(),
            ended: response_key == FAREWELL,
            response_key: response_key.clone(),
            npc_id: npc_id.clone(),
        };

        self.visited
            .entry(npc_id)
            .or_default()
            .insert(response_key.clone());
        if selection.ended {
            self.end_dialogue();
        } else {
            self.current_key = Some(response_key);
        }
        Some(selection)
    }

    /// Options an NPC currently offers.
    #[must_use]
    pub fn options(&self, npc_id: &str, quests: &QuestLedger) -> Vec<DialogueOption> {
        self.npcs
            .get(npc_id)
            .map(|npc| offered(npc, quests))
            .unwrap_or_default()
    }

    /// Closes the open conversation, if any.
    pub fn end_dialogue(&mut self) {
        self.current_npc = None;
        self.current_key = None;
    }
}

fn requirement_met(option: &MenuOption, quests: &QuestLedger) -> bool {
    option
        .requires
        .as_deref()
        .is_none_or(|quest_id| quests.is_completed(quest_id))
}

fn offered(npc: &NpcDialogue, quests: &QuestLedger) -> Vec<DialogueOption> {
    npc.main_menu
        .iter()
        .filter(|(_, option)| requirement_met(option, quests))
        .map(|(number, option)| DialogueOption {
            number: *number,
            text: option.text.clone(),
            response_key: option.response.clone(),
        })
        .collect()
}
