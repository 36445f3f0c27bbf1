//! The player's spell table.

use std::fmt;
use std::str::FromStr;

use journey_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Health restored by `heal`.
pub const HEAL_AMOUNT: u32 = 30;
/// Damage bonus added by `smite`.
pub const SMITE_BONUS: u32 = 15;
/// Faith granted by `shield` for the rest of the encounter.
pub const SHIELD_FAITH: u32 = 2;

/// A castable spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spell {
    /// Restores the caster's health.
    Heal,
    /// Strikes the enemy with bonus damage.
    Smite,
    /// Raises the caster's faith until the encounter ends.
    Shield,
}

impl Spell {
    /// Every spell.
    pub const ALL: [Spell; 3] = [Spell::Heal, Spell::Smite, Spell::Shield];

    /// Name used to cast the spell.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Spell::Heal => "heal",
            Spell::Smite => "smite",
            Spell::Shield => "shield",
        }
    }

    /// Mana cost.
    #[must_use]
    pub fn cost(self) -> u32 {
        match self {
            Spell::Heal => 20,
            Spell::Smite => 25,
            Spell::Shield => 15,
        }
    }
}

impl fmt::Display for Spell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Spell {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Spell::ALL
            .into_iter()
            .find(|spell| spell.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown spell: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell_costs() {
        assert_eq!(Spell::Heal.cost(), 20);
        assert_eq!(Spell::Smite.cost(), 25);
        assert_eq!(Spell::Shield.cost(), 15);
    }

    #[test]
    fn test_spell_parses_only_known_names() {
        assert_eq!("smite".parse::<Spell>().unwrap(), Spell::Smite);
        assert!("fireball".parse::<Spell>().is_err());
        assert!("Heal".parse::<Spell>().is_err());
    }
}
