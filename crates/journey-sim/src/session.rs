//! One paced encounter driven by a simple autopilot.

use journey_character::{Character, CharacterSheet, get_character_sheet};
use journey_combat::{
    CombatEncounter, CombatParticipant, CombatStatus, Side, Spell, get_combat_status, spawn,
};
use journey_core::clock::Clock;
use journey_core::publisher::EventPublisher;
use journey_core::rng::DeterministicRng;
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::config::SimConfig;
use crate::error::AppError;

/// Health share, in percent, below which the autopilot heals.
pub const HEAL_BELOW_PERCENT: u32 = 35;

/// Enemy health at or below which the autopilot saves mana and attacks.
pub const SMITE_THRESHOLD: u32 = 15;

/// A move the autopilot picks for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMove {
    /// Weapon attack.
    Attack,
    /// Spell cast.
    Cast(Spell),
}

/// Final state of a finished session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    /// The character after the encounter.
    pub sheet: CharacterSheet,
    /// The encounter's final status.
    pub status: CombatStatus,
    /// The winning side, if the encounter ended before the round limit.
    pub winner: Option<Side>,
    /// Number of combat events published.
    pub events_published: usize,
}

/// Picks the player's next move.
///
/// Heals when health is below 35% and mana allows; otherwise smites when
/// affordable and the enemy is above the smite threshold; otherwise attacks.
#[must_use]
pub fn choose_move(encounter: &CombatEncounter<'_>) -> PlayerMove {
    let player = encounter.player();
    let wounded = u64::from(player.health()) * 100
        < u64::from(player.max_health()) * u64::from(HEAL_BELOW_PERCENT);
    if wounded && player.mana() >= Spell::Heal.cost() {
        return PlayerMove::Cast(Spell::Heal);
    }
    if player.mana() >= Spell::Smite.cost() && encounter.enemy().health() > SMITE_THRESHOLD {
        return PlayerMove::Cast(Spell::Smite);
    }
    PlayerMove::Attack
}

/// Plays one encounter from the configuration and reports the outcome.
///
/// Each enemy counter-move waits `config.enemy_delay` first. The session
/// stops when the encounter ends or after `config.max_rounds` rounds.
///
/// # Errors
///
/// Returns `AppError::Domain` if the class or creature is unknown.
#[instrument(skip_all, fields(player = %config.player_name, creature = %config.creature))]
pub async fn run_session(
    config: &SimConfig,
    clock: &dyn Clock,
    rng: &mut dyn DeterministicRng,
) -> Result<SessionReport, AppError> {
    let mut character = Character::new(&config.player_name, &config.player_class)?;
    let enemy = spawn(&config.creature, config.creature_level)?;

    let mut encounter = CombatEncounter::start(Uuid::new_v4(), &mut character, enemy, clock, rng);
    let mut events_published = encounter.drain_events().len();

    while encounter.is_active() && encounter.round() < config.max_rounds {
        match encounter.current_turn() {
            Side::Player => match choose_move(&encounter) {
                PlayerMove::Attack => encounter.player_attack(clock, rng),
                PlayerMove::Cast(spell) => encounter.player_cast_spell(spell.as_str(), clock),
            },
            Side::Enemy => {
                tokio::time::sleep(config.enemy_delay).await;
                encounter.enemy_attack(clock);
            }
        }
        for event in encounter.drain_events() {
            tracing::debug!(event_type = event.kind.event_type(), "combat event");
            events_published += 1;
        }
    }

    if encounter.is_active() {
        tracing::warn!(rounds = encounter.round(), "round limit reached");
    }
    let winner = encounter.winner();
    let status = get_combat_status(&encounter);
    drop(encounter);

    tracing::info!(
        winner = ?winner,
        rounds = status.round,
        level = character.level(),
        "session finished"
    );
    Ok(SessionReport {
        sheet: get_character_sheet(&character),
        status,
        winner,
        events_published,
    })
}
