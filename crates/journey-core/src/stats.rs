//! The five attributes every participant is measured by, and the additive
//! bundle used for base values, item bonuses, buffs and totals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A character attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    /// Mitigates incoming damage and adds to defense.
    Faith,
    /// Drives turn order and critical-hit chance.
    Wisdom,
    /// Drives outgoing damage.
    Strength,
    /// Courage.
    Courage,
    /// Righteousness.
    Righteousness,
}

impl Stat {
    /// Every stat, in canonical order.
    pub const ALL: [Stat; 5] = [
        Stat::Faith,
        Stat::Wisdom,
        Stat::Strength,
        Stat::Courage,
        Stat::Righteousness,
    ];

    /// Lower-case name used in logs, saves and content files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Stat::Faith => "faith",
            Stat::Wisdom => "wisdom",
            Stat::Strength => "strength",
            Stat::Courage => "courage",
            Stat::Righteousness => "righteousness",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stat::ALL
            .into_iter()
            .find(|stat| stat.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown stat: {s}")))
    }
}

/// One non-negative value per stat. Absent entries are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatSet {
    /// Faith.
    pub faith: u32,
    /// Wisdom.
    pub wisdom: u32,
    /// Strength.
    pub strength: u32,
    /// Courage.
    pub courage: u32,
    /// Righteousness.
    pub righteousness: u32,
}

impl StatSet {
    /// Creates a set from explicit values, in canonical stat order.
    #[must_use]
    pub const fn new(faith: u32, wisdom: u32, strength: u32, courage: u32, righteousness: u32) -> Self {
        Self {
            faith,
            wisdom,
            strength,
            courage,
            righteousness,
        }
    }

    /// A set with `amount` in every stat.
    #[must_use]
    pub const fn uniform(amount: u32) -> Self {
        Self::new(amount, amount, amount, amount, amount)
    }

    /// A set with `amount` in one stat and zero elsewhere.
    #[must_use]
    pub fn single(stat: Stat, amount: u32) -> Self {
        let mut set = Self::default();
        set.add(stat, amount);
        set
    }

    /// Returns the value of one stat.
    #[must_use]
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Faith => self.faith,
            Stat::Wisdom => self.wisdom,
            Stat::Strength => self.strength,
            Stat::Courage => self.courage,
            Stat::Righteousness => self.righteousness,
        }
    }

    /// Adds `amount` to one stat, saturating at `u32::MAX`.
    pub fn add(&mut self, stat: Stat, amount: u32) {
        let slot = match stat {
            Stat::Faith => &mut self.faith,
            Stat::Wisdom => &mut self.wisdom,
            Stat::Strength => &mut self.strength,
            Stat::Courage => &mut self.courage,
            Stat::Righteousness => &mut self.righteousness,
        };
        *slot = slot.saturating_add(amount);
    }

    /// Folds another set in, stat by stat.
    pub fn add_all(&mut self, other: &StatSet) {
        for stat in Stat::ALL {
            self.add(stat, other.get(stat));
        }
    }

    /// Returns the per-stat sum of two sets.
    #[must_use]
    pub fn plus(mut self, other: &StatSet) -> Self {
        self.add_all(other);
        self
    }

    /// True when every stat is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Stat::ALL.into_iter().all(|stat| self.get(stat) == 0)
    }
}
