//! NPC dialogue tables and their YAML loader.

use std::collections::BTreeMap;

use journey_core::error::DomainError;
use serde::{Deserialize, Serialize};

const BUILTIN_NPCS: &str = include_str!("../../content/npcs.yaml");

/// Response key that ends a conversation.
pub const FAREWELL: &str = "farewell";

/// Side effect of choosing a menu option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DialogueAction {
    /// Starts a quest.
    StartQuest {
        /// Quest identifier.
        quest_id: String,
    },
    /// Completes a quest and rewards the character.
    CompleteQuest {
        /// Quest identifier.
        quest_id: String,
    },
    /// Heals the character.
    Heal,
    /// Asks the caller to save the game.
    Save,
}

/// One numbered entry of an NPC's main menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOption {
    /// What the player says.
    pub text: String,
    /// Response key the NPC answers with.
    pub response: String,
    /// Quest that must be complete before the option is offered.
    #[serde(default)]
    pub requires: Option<String>,
    /// Action run when the option is chosen.
    #[serde(default)]
    pub action: Option<DialogueAction>,
}

/// A full NPC dialogue table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcDialogue {
    /// Display name.
    pub label: String,
    /// Opening line.
    pub greeting: String,
    /// Options keyed by the number the player picks.
    #[serde(default)]
    pub main_menu: BTreeMap<u32, MenuOption>,
    /// Response text by key.
    #[serde(default)]
    pub responses: BTreeMap<String, String>,
}

/// Parses NPC dialogue tables from YAML, keyed by NPC id.
///
/// # Errors
///
/// Returns `DomainError::Content` if the YAML is malformed or an option
/// points at a response the NPC does not have.
pub fn load_npcs(yaml: &str) -> Result<BTreeMap<String, NpcDialogue>, DomainError> {
    let npcs: BTreeMap<String, NpcDialogue> = serde_yaml::from_str(yaml)
        .map_err(|e| DomainError::Content(format!("failed to parse NPC dialogue: {e}")))?;
    for (npc_id, npc) in &npcs {
        for (number, option) in &npc.main_menu {
            if !npc.responses.contains_key(&option.response) {
                return Err(DomainError::Content(format!(
                    "NPC {npc_id} option {number} points at missing response {}",
                    option.response
                )));
            }
        }
    }
    Ok(npcs)
}

/// The NPC tables shipped with the game.
///
/// # Errors
///
/// Returns `DomainError::Content` if the embedded tables fail to load.
pub fn builtin_npcs() -> Result<BTreeMap<String, NpcDialogue>, DomainError> {
    load_npcs(BUILTIN_NPCS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_npcs_load() {
        let npcs = builtin_npcs().unwrap();

        let ezra = &npcs["priest_ezra"];
        assert_eq!(ezra.label, "Priest Ezra");
        assert_eq!(ezra.main_menu[&1].action, Some(DialogueAction::Heal));
        assert_eq!(ezra.main_menu[&4].requires.as_deref(), Some("defeat_deceiver"));
        assert!(npcs.values().all(|npc| npc.responses.contains_key(FAREWELL)));
    }

    #[test]
    fn test_load_npcs_reads_quest_actions() {
        let npcs = builtin_npcs().unwrap();

        assert_eq!(
            npcs["gate_keeper_samuel"].main_menu[&3].action,
            Some(DialogueAction::StartQuest {
                quest_id: "explore_floor_1".to_owned()
            })
        );
    }

    #[test]
    fn test_load_npcs_rejects_dangling_response() {
        let yaml = r"
hermit:
  label: Hermit
  greeting: Hm?
  main_menu:
    1:
      text: Hello
      response: hello
  responses:
    farewell: Go.
";

        let result = load_npcs(yaml);

        match result.unwrap_err() {
            DomainError::Content(message) => assert!(message.contains("hello")),
            other => panic!("expected Content, got {other:?}"),
        }
    }

    #[test]
    fn test_load_npcs_rejects_malformed_yaml() {
        assert!(matches!(
            load_npcs("hermit: [unterminated"),
            Err(DomainError::Content(_))
        ));
    }
}
