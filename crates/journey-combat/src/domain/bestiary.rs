//! Enemy participants and the creature table they are spawned from.

use journey_core::error::DomainError;
use journey_core::stats::{Stat, StatSet};

use super::participant::CombatParticipant;

/// Experience granted when an enemy has no configured reward.
pub const DEFAULT_XP_REWARD: u32 = 50;
/// Currency granted when an enemy has no configured reward.
pub const DEFAULT_GOLD_REWARD: u32 = 25;

const FALLBACK_LABEL: &str = "Enemy";

/// An enemy combatant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyCharacter {
    kind: String,
    label: String,
    level: u32,
    stats: StatSet,
    health: u32,
    max_health: u32,
    damage: u32,
    xp_reward: u32,
    gold_reward: u32,
}

impl EnemyCharacter {
    /// Creates a level-1 enemy at full health with the default rewards.
    #[must_use]
    pub fn new(
        kind: impl Into<String>,
        label: impl Into<String>,
        stats: StatSet,
        max_health: u32,
        damage: u32,
    ) -> Self {
        Self {
            kind: kind.into(),
            label: label.into(),
            level: 1,
            stats,
            health: max_health,
            max_health,
            damage,
            xp_reward: DEFAULT_XP_REWARD,
            gold_reward: DEFAULT_GOLD_REWARD,
        }
    }

    /// Sets the victory rewards.
    #[must_use]
    pub fn with_rewards(mut self, xp: u32, gold: u32) -> Self {
        self.xp_reward = xp;
        self.gold_reward = gold;
        self
    }

    /// Sets the level shown to the player.
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Bestiary kind identifier.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Level.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Damage rating.
    #[must_use]
    pub fn damage(&self) -> u32 {
        self.damage
    }

    /// Experience granted on defeat.
    #[must_use]
    pub fn xp_reward(&self) -> u32 {
        self.xp_reward
    }

    /// Currency granted on defeat.
    #[must_use]
    pub fn gold_reward(&self) -> u32 {
        self.gold_reward
    }
}

impl CombatParticipant for EnemyCharacter {
    fn label(&self) -> &str {
        if self.label.is_empty() {
            FALLBACK_LABEL
        } else {
            &self.label
        }
    }

    fn stat(&self, stat: Stat) -> u32 {
        self.stats.get(stat)
    }

    fn take_damage(&mut self, amount: u32) -> u32 {
        let mitigation = self.stats.faith / 2;
        let actual = amount.saturating_sub(mitigation).max(1);
        self.health = self.health.saturating_sub(actual);
        actual
    }

    /// Damage rating, plus half of any strength above 5, plus `bonus`.
    fn calculate_damage(&self, bonus: u32) -> u32 {
        let strength_bonus = self.stats.strength.saturating_sub(5) / 2;
        self.damage
            .saturating_add(strength_bonus)
            .saturating_add(bonus)
    }

    fn calculate_defense(&self) -> f64 {
        f64::from(self.stats.faith) * 0.5
    }

    fn is_alive(&self) -> bool {
        self.health > 0
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn max_health(&self) -> u32 {
        self.max_health
    }
}

struct CreatureTemplate {
    kind: &'static str,
    label: &'static str,
    health: u32,
    damage: u32,
    // faith, wisdom, strength, courage
    stats: [u32; 4],
    xp_reward: u32,
    gold_reward: u32,
}

const CREATURES: [CreatureTemplate; 7] = [
    CreatureTemplate {
        kind: "orc",
        label: "Orc",
        health: 30,
        damage: 8,
        stats: [1, 2, 7, 6],
        xp_reward: 100,
        gold_reward: 50,
    },
    CreatureTemplate {
        kind: "demon",
        label: "Demon",
        health: 45,
        damage: 12,
        stats: [2, 5, 8, 7],
        xp_reward: 150,
        gold_reward: 75,
    },
    CreatureTemplate {
        kind: "leviathan",
        label: "Leviathan",
        health: 100,
        damage: 18,
        stats: [4, 6, 10, 9],
        xp_reward: 300,
        gold_reward: 200,
    },
    CreatureTemplate {
        kind: "behemoth",
        label: "Behemoth",
        health: 80,
        damage: 15,
        stats: [4, 3, 9, 8],
        xp_reward: 250,
        gold_reward: 150,
    },
    CreatureTemplate {
        kind: "nephilim",
        label: "Nephilim",
        health: 60,
        damage: 14,
        stats: [3, 4, 9, 8],
        xp_reward: 200,
        gold_reward: 100,
    },
    CreatureTemplate {
        kind: "dark_knight",
        label: "Dark Knight",
        health: 55,
        damage: 13,
        stats: [4, 4, 8, 8],
        xp_reward: 180,
        gold_reward: 90,
    },
    CreatureTemplate {
        kind: "serpent",
        label: "Ancient Serpent",
        health: 40,
        damage: 10,
        stats: [2, 8, 7, 7],
        xp_reward: 120,
        gold_reward: 60,
    },
];

/// Kind identifiers accepted by [`spawn`].
pub const CREATURE_KINDS: [&str; 7] = [
    "orc",
    "demon",
    "leviathan",
    "behemoth",
    "nephilim",
    "dark_knight",
    "serpent",
];

/// Spawns a bestiary creature at `level`.
///
/// Health, damage and rewards scale by `1 + (level − 1) × 0.25`, rounded
/// down. Stats do not scale.
///
/// # Errors
///
/// Returns `DomainError::UnknownCreature` if `kind` is not in the table, and
/// `DomainError::Validation` if `level` is 0.
pub fn spawn(kind: &str, level: u32) -> Result<EnemyCharacter, DomainError> {
    if level == 0 {
        return Err(DomainError::Validation(
            "creature level must be at least 1".to_owned(),
        ));
    }
    let template = CREATURES
        .iter()
        .find(|creature| creature.kind == kind)
        .ok_or_else(|| DomainError::UnknownCreature(kind.to_owned()))?;

    let [faith, wisdom, strength, courage] = template.stats;
    let stats = StatSet::new(faith, wisdom, strength, courage, 0);
    let scale = |value: u32| -> u32 {
        let scaled = u64::from(value) * (u64::from(level) + 3) / 4;
        u32::try_from(scaled).unwrap_or(u32::MAX)
    };

    tracing::debug!(kind, level, "creature spawned");
    Ok(EnemyCharacter::new(
        template.kind,
        template.label,
        stats,
        scale(template.health),
        scale(template.damage),
    )
    .with_rewards(scale(template.xp_reward), scale(template.gold_reward))
    .with_level(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_level_one_uses_table_values() {
        let orc = spawn("orc", 1).unwrap();

        assert_eq!(orc.kind(), "orc");
        assert_eq!(orc.label(), "Orc");
        assert_eq!(orc.health(), 30);
        assert_eq!(orc.max_health(), 30);
        assert_eq!(orc.damage(), 8);
        assert_eq!(orc.xp_reward(), 100);
        assert_eq!(orc.gold_reward(), 50);
        assert_eq!(orc.stat(Stat::Strength), 7);
    }

    #[test]
    fn test_spawn_scales_by_quarter_per_level_rounding_down() {
        // Arrange / Act
        let orc = spawn("orc", 3).unwrap();
        let serpent = spawn("serpent", 2).unwrap();

        // Assert: ×1.5 and ×1.25
        assert_eq!(orc.max_health(), 45);
        assert_eq!(orc.damage(), 12);
        assert_eq!(orc.xp_reward(), 150);
        assert_eq!(orc.gold_reward(), 75);
        assert_eq!(serpent.max_health(), 50);
        assert_eq!(serpent.damage(), 12);
        assert_eq!(serpent.gold_reward(), 75);
        assert_eq!(serpent.level(), 2);
    }

    #[test]
    fn test_spawn_rejects_unknown_kind() {
        match spawn("golden_calf", 1).unwrap_err() {
            DomainError::UnknownCreature(kind) => assert_eq!(kind, "golden_calf"),
            other => panic!("expected UnknownCreature, got {other:?}"),
        }
    }

    #[test]
    fn test_spawn_rejects_level_zero() {
        assert!(matches!(spawn("orc", 0), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_every_listed_kind_spawns() {
        for kind in CREATURE_KINDS {
            let creature = spawn(kind, 1).unwrap();
            assert_eq!(creature.kind(), kind);
            assert!(creature.is_alive());
        }
    }

    #[test]
    fn test_unlabelled_enemy_falls_back_to_generic_label() {
        let enemy = EnemyCharacter::new("shade", "", StatSet::default(), 10, 3);

        assert_eq!(enemy.label(), "Enemy");
        assert_eq!(enemy.xp_reward(), DEFAULT_XP_REWARD);
        assert_eq!(enemy.gold_reward(), DEFAULT_GOLD_REWARD);
    }

    #[test]
    fn test_enemy_damage_adds_half_excess_strength() {
        let demon = spawn("demon", 1).unwrap();

        assert_eq!(demon.calculate_damage(0), 13);
        assert_eq!(demon.calculate_damage(15), 28);
    }

    #[test]
    fn test_enemy_takes_at_least_one_damage_and_floors_at_zero() {
        let mut leviathan = spawn("leviathan", 1).unwrap();

        assert_eq!(leviathan.take_damage(1), 1);
        assert_eq!(leviathan.take_damage(500), 498);
        assert_eq!(leviathan.health(), 0);
        assert!(!leviathan.is_alive());
    }
}
