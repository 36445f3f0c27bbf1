//! The capability contract shared by everything that can fight.

use journey_character::Character;
use journey_core::stats::Stat;
use serde::{Deserialize, Serialize};

/// Which side of an encounter acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The player-controlled character.
    Player,
    /// The enemy participant.
    Enemy,
}

impl Side {
    /// The other side.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Operations combat needs from a participant.
///
/// Implemented by [`Character`] for the player and by
/// [`EnemyCharacter`](crate::domain::bestiary::EnemyCharacter) for enemies.
pub trait CombatParticipant {
    /// Display name used in log lines.
    fn label(&self) -> &str;

    /// Total value of a stat.
    fn stat(&self, stat: Stat) -> u32;

    /// Applies incoming damage and returns the amount actually lost.
    fn take_damage(&mut self, amount: u32) -> u32;

    /// Outgoing damage before the defender's defense is subtracted.
    fn calculate_damage(&self, bonus: u32) -> u32;

    /// Defense subtracted from incoming damage. May be fractional.
    fn calculate_defense(&self) -> f64;

    /// True while health is above zero.
    fn is_alive(&self) -> bool;

    /// Current health.
    fn health(&self) -> u32;

    /// Maximum health.
    fn max_health(&self) -> u32;
}

impl CombatParticipant for Character {
    fn label(&self) -> &str {
        self.name()
    }

    fn stat(&self, stat: Stat) -> u32 {
        Character::stat(self, stat)
    }

    fn take_damage(&mut self, amount: u32) -> u32 {
        Character::take_damage(self, amount)
    }

    fn calculate_damage(&self, bonus: u32) -> u32 {
        Character::calculate_damage(self, bonus)
    }

    fn calculate_defense(&self) -> f64 {
        Character::calculate_defense(self)
    }

    fn is_alive(&self) -> bool {
        Character::is_alive(self)
    }

    fn health(&self) -> u32 {
        Character::health(self)
    }

    fn max_health(&self) -> u32 {
        Character::max_health(self)
    }
}

/// Resolves one strike from `attacker` against `defender`.
///
/// Damage is the attacker's output minus the defender's defense, rounded
/// down and never below 1. The defender then applies its own mitigation in
/// `take_damage`. Returns the health the defender actually lost.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn resolve_strike(
    attacker: &dyn CombatParticipant,
    defender: &mut dyn CombatParticipant,
    bonus: u32,
) -> u32 {
    let raw = f64::from(attacker.calculate_damage(bonus)) - defender.calculate_defense();
    let damage = raw.floor().max(1.0) as u32;
    defender.take_damage(damage)
}

/// Critical-hit chance: 5% per point of wisdom, capped at 50%.
#[must_use]
pub fn crit_chance(wisdom: u32) -> f64 {
    (f64::from(wisdom) * 0.05).min(0.5)
}
