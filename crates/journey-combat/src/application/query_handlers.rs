//! Query handlers for the Combat context.
//!
//! The status view is the only channel renderers and UI panels use to
//! observe an encounter.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::CombatEncounter;
use crate::domain::participant::{CombatParticipant, Side};

/// Read-only view of an encounter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombatStatus {
    /// The encounter identifier.
    pub encounter_id: Uuid,
    /// Player health.
    pub player_health: u32,
    /// Player maximum health.
    pub player_max_health: u32,
    /// Player mana.
    pub player_mana: u32,
    /// Player maximum mana.
    pub player_max_mana: u32,
    /// Enemy health.
    pub enemy_health: u32,
    /// Enemy maximum health.
    pub enemy_max_health: u32,
    /// Enemy display label.
    pub enemy_label: String,
    /// Side whose turn it is.
    pub current_turn: Side,
    /// Completed rounds.
    pub round: u32,
    /// Every log line so far.
    pub log: Vec<String>,
    /// False once the encounter has ended.
    pub combat_active: bool,
}

/// Builds the status view of an encounter.
#[must_use]
pub fn get_combat_status(encounter: &CombatEncounter<'_>) -> CombatStatus {
    let player = encounter.player();
    let enemy = encounter.enemy();
    CombatStatus {
        encounter_id: encounter.id,
        player_health: player.health(),
        player_max_health: player.max_health(),
        player_mana: player.mana(),
        player_max_mana: player.max_mana(),
        enemy_health: enemy.health(),
        enemy_max_health: enemy.max_health(),
        enemy_label: enemy.label().to_owned(),
        current_turn: encounter.current_turn(),
        round: encounter.round(),
        log: encounter.log().to_vec(),
        combat_active: encounter.is_active(),
    }
}
