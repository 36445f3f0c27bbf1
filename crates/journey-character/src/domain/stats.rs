//! The stat block: permanent base and bonus values per attribute.

use journey_core::stats::{Stat, StatSet};
use serde::{Deserialize, Serialize};

use super::modifiers::StatModifier;

/// Base stats plus permanent bonuses (callings, devotions).
///
/// Equipment and buffs are owned elsewhere and only enter through
/// [`StatBlock::total`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    /// Base values from the class archetype.
    pub base: StatSet,
    /// Permanent bonuses.
    pub bonus: StatSet,
}

impl StatBlock {
    /// Creates a block with the given base values and no bonus.
    #[must_use]
    pub fn new(base: StatSet) -> Self {
        Self {
            base,
            bonus: StatSet::default(),
        }
    }

    /// Base plus permanent bonus for one stat.
    #[must_use]
    pub fn effective(&self, stat: Stat) -> u32 {
        self.base.get(stat).saturating_add(self.bonus.get(stat))
    }

    /// Full stat totals.
    ///
    /// Folds, in order: base, equipment bonuses (already folded weapon,
    /// armor, shield, accessory), permanent bonus, then each active modifier.
    /// Recomputed on every call.
    #[must_use]
    pub fn total(&self, equipment: &StatSet, modifiers: &[StatModifier]) -> StatSet {
        let mut total = self.base.plus(equipment).plus(&self.bonus);
        for modifier in modifiers {
            total.add_all(&modifier.bonuses);
        }
        total
    }
}
