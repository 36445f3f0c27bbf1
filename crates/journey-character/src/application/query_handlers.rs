//! Query handlers for the Character context.
//!
//! Projections here are read-only snapshots for display layers; they never
//! feed back into the aggregate.

use journey_core::stats::StatSet;
use journey_inventory::Equipment;
use serde::Serialize;

use crate::domain::aggregates::Character;
use crate::domain::archetypes::{Calling, CharacterClass};

/// Read-only view of a character.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterSheet {
    /// Character name.
    pub name: String,
    /// Class archetype.
    pub class: CharacterClass,
    /// Current level.
    pub level: u32,
    /// Experience toward the next level.
    pub xp: u32,
    /// Experience needed for the next level.
    pub xp_to_level: u32,
    /// Current health.
    pub health: u32,
    /// Maximum health.
    pub max_health: u32,
    /// Current mana.
    pub mana: u32,
    /// Maximum mana.
    pub max_mana: u32,
    /// Stat totals including equipment and active buffs.
    pub stats: StatSet,
    /// Equipped items.
    pub equipment: Equipment,
    /// Number of carried items.
    pub inventory_count: usize,
    /// Chosen calling, if any.
    pub calling: Option<Calling>,
    /// Unspent skill points.
    pub skill_points: u32,
    /// Shekels carried.
    pub currency: u32,
    /// Number of completed quests.
    pub completed_quests: usize,
}

/// Builds the character sheet.
#[must_use]
pub fn get_character_sheet(character: &Character) -> CharacterSheet {
    CharacterSheet {
        name: character.name().to_owned(),
        class: character.class(),
        level: character.level(),
        xp: character.xp(),
        xp_to_level: character.xp_to_level(),
        health: character.health(),
        max_health: character.max_health(),
        mana: character.mana(),
        max_mana: character.max_mana(),
        stats: character.stat_totals(),
        equipment: character.equipment().clone(),
        inventory_count: character.inventory().len(),
        calling: character.calling(),
        skill_points: character.skill_points(),
        currency: character.currency(),
        completed_quests: character.completed_quests().len(),
    }
}
