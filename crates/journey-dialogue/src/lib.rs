//! Journey Through Scripture — Dialogue context.
//!
//! Responsible for NPC dialogue tables, the conversation flow over a table,
//! and the actions a conversation can trigger against the quest ledger and
//! the player's character.

pub mod application;
pub mod domain;

pub use application::command_handlers::{DialogueContext, execute_action};
pub use domain::aggregates::{
    DialogueOption, DialogueRecord, DialogueSystem, DialogueView, Selection,
};
pub use domain::npc::{DialogueAction, MenuOption, NpcDialogue, builtin_npcs, load_npcs};
