//! Journey Through Scripture — Quests context.
//!
//! Responsible for the fixed quest catalog, the per-save quest ledger
//! (start, progress, completion, tracking), quest events, and crediting
//! quest rewards into a character.

pub mod application;
pub mod domain;

pub use application::command_handlers::{complete_and_reward, start_quest};
pub use application::query_handlers::{QuestLogView, QuestView, get_quest_log};
pub use domain::aggregates::{QuestLedger, QuestLedgerRecord};
pub use domain::catalog::{QUEST_IDS, Quest, QuestType, Reward};
pub use domain::events::{QuestEvent, QuestEventKind};
