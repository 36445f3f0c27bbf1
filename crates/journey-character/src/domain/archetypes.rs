//! Class archetypes and callings.
//!
//! Both are fixed enumerations. A class decides starting stats, pools and
//! gear; a calling is chosen once, later in the story, and grants a
//! permanent stat bundle.

use std::fmt;
use std::str::FromStr;

use journey_core::error::DomainError;
use journey_core::stats::{Stat, StatSet};
use serde::{Deserialize, Serialize};

/// Character class archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    /// Divine caster, healer, buffer.
    Prophet,
    /// Melee fighter, tank, protector.
    Warrior,
    /// Balanced support, leader, versatile.
    Shepherd,
    /// Knowledge-based, strategic, spell variety.
    Scribe,
}

/// Starting values for a class archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDefinition {
    /// Display name.
    pub name: &'static str,
    /// One-line role summary.
    pub description: &'static str,
    /// Base stats at level 1.
    pub stats: StatSet,
    /// Starting (and maximum) health.
    pub health: u32,
    /// Starting (and maximum) mana.
    pub mana: u32,
    /// Catalog ids of the starting gear.
    pub starting_equipment: [&'static str; 3],
}

const PROPHET: ClassDefinition = ClassDefinition {
    name: "Prophet",
    description: "Divine caster, healer, buffer",
    stats: StatSet::new(5, 5, 2, 3, 4),
    health: 80,
    mana: 80,
    starting_equipment: ["staff_of_moses", "simple_robe", "scroll_wisdom"],
};

const WARRIOR: ClassDefinition = ClassDefinition {
    name: "Warrior",
    description: "Melee fighter, tank, protector",
    stats: StatSet::new(3, 2, 5, 5, 4),
    health: 120,
    mana: 40,
    starting_equipment: ["bronze_sword", "leather_armor", "shield"],
};

const SHEPHERD: ClassDefinition = ClassDefinition {
    name: "Shepherd",
    description: "Balanced support, leader, versatile",
    stats: StatSet::new(4, 4, 4, 4, 4),
    health: 100,
    mana: 60,
    starting_equipment: ["staff", "sling", "shepherds_cloak"],
};

const SCRIBE: ClassDefinition = ClassDefinition {
    name: "Scribe",
    description: "Knowledge-based, strategic, spell variety",
    stats: StatSet::new(4, 5, 2, 3, 5),
    health: 70,
    mana: 100,
    starting_equipment: ["quill", "tome", "scholars_robe"],
};

impl CharacterClass {
    /// Every class, in menu order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Prophet,
        CharacterClass::Warrior,
        CharacterClass::Shepherd,
        CharacterClass::Scribe,
    ];

    /// Lower-case identifier used in saves and configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CharacterClass::Prophet => "prophet",
            CharacterClass::Warrior => "warrior",
            CharacterClass::Shepherd => "shepherd",
            CharacterClass::Scribe => "scribe",
        }
    }

    /// Starting values for this class.
    #[must_use]
    pub fn definition(self) -> &'static ClassDefinition {
        match self {
            CharacterClass::Prophet => &PROPHET,
            CharacterClass::Warrior => &WARRIOR,
            CharacterClass::Shepherd => &SHEPHERD,
            CharacterClass::Scribe => &SCRIBE,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterClass::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| DomainError::UnknownClass(s.to_owned()))
    }
}

/// The path a character commits to after the first trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calling {
    /// Wisdom.
    Wisdom,
    /// Service.
    Service,
    /// Trial.
    Trial,
    /// Sacrifice.
    Sacrifice,
    /// Revelation.
    Revelation,
}

impl Calling {
    /// Every calling.
    pub const ALL: [Calling; 5] = [
        Calling::Wisdom,
        Calling::Service,
        Calling::Trial,
        Calling::Sacrifice,
        Calling::Revelation,
    ];

    /// Lower-case identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Calling::Wisdom => "wisdom",
            Calling::Service => "service",
            Calling::Trial => "trial",
            Calling::Sacrifice => "sacrifice",
            Calling::Revelation => "revelation",
        }
    }

    /// The permanent bonus bundle this calling grants.
    #[must_use]
    pub fn bonuses(self) -> StatSet {
        let (first, second) = match self {
            Calling::Wisdom => ((Stat::Wisdom, 2), (Stat::Faith, 1)),
            Calling::Service => ((Stat::Wisdom, 1), (Stat::Courage, 2)),
            Calling::Trial => ((Stat::Strength, 2), (Stat::Courage, 1)),
            Calling::Sacrifice => ((Stat::Righteousness, 2), (Stat::Faith, 1)),
            Calling::Revelation => ((Stat::Wisdom, 2), (Stat::Righteousness, 1)),
        };
        StatSet::single(first.0, first.1).plus(&StatSet::single(second.0, second.1))
    }
}

impl fmt::Display for Calling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Calling {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Calling::ALL
            .into_iter()
            .find(|calling| calling.as_str() == s)
            .ok_or_else(|| DomainError::InvalidCalling(s.to_owned()))
    }
}
