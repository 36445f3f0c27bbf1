//! Temporary stat modifiers (buffs).
//!
//! Buffs never patch the stat block. They sit in a list on the character and
//! are folded in last during stat aggregation, so removing one restores the
//! exact previous totals.

use journey_core::stats::StatSet;
use serde::{Deserialize, Serialize};

/// When a modifier stops applying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierExpiry {
    /// Lasts until the current encounter ends.
    EndOfCombat,
    /// Lasts this many more combat rounds.
    Rounds(u32),
}

/// A named, removable stat bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatModifier {
    /// What granted the modifier (spell or item id).
    pub source: String,
    /// Bonus per stat.
    pub bonuses: StatSet,
    /// Expiry rule.
    pub expiry: ModifierExpiry,
}

impl StatModifier {
    /// Creates a modifier.
    #[must_use]
    pub fn new(source: impl Into<String>, bonuses: StatSet, expiry: ModifierExpiry) -> Self {
        Self {
            source: source.into(),
            bonuses,
            expiry,
        }
    }

    /// Advances one round. Returns `false` once the modifier has run out.
    pub(crate) fn tick(&mut self) -> bool {
        match &mut self.expiry {
            ModifierExpiry::EndOfCombat => true,
            ModifierExpiry::Rounds(remaining) => {
                *remaining = remaining.saturating_sub(1);
                *remaining > 0
            }
        }
    }
}
