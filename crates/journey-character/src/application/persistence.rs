//! Save-record contract for characters.
//!
//! A record is the flat, serde-friendly form of a [`Character`]. Buffs are
//! transient and are not saved.

use std::collections::{BTreeMap, BTreeSet};

use journey_core::error::DomainError;
use journey_core::stats::StatSet;
use journey_inventory::{Equipment, EquipmentSlot, Inventory, Item};
use serde::{Deserialize, Serialize};

use crate::domain::aggregates::Character;
use crate::domain::archetypes::{Calling, CharacterClass};
use crate::domain::stats::StatBlock;

/// Serialized character state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub class: CharacterClass,
    pub level: u32,
    pub xp: u32,
    pub xp_to_level: u32,
    pub health: u32,
    pub max_health: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub base_stats: StatSet,
    #[serde(default)]
    pub bonus_stats: StatSet,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub inventory: Vec<Item>,
    #[serde(default)]
    pub calling: Option<Calling>,
    #[serde(default)]
    pub skill_points: u32,
    #[serde(default)]
    pub currency: u32,
    #[serde(default)]
    pub completed_quests: BTreeSet<String>,
    #[serde(default)]
    pub active_quests: BTreeSet<String>,
    #[serde(default)]
    pub defeated_enemies: Vec<String>,
    #[serde(default)]
    pub npc_memory: BTreeMap<String, serde_json::Value>,
}

impl Character {
    /// Captures the saved state of this character.
    #[must_use]
    pub fn serialize(&self) -> CharacterRecord {
        CharacterRecord {
            name: self.name.clone(),
            class: self.class,
            level: self.level,
            xp: self.xp,
            xp_to_level: self.xp_to_level,
            health: self.health,
            max_health: self.max_health,
            mana: self.mana,
            max_mana: self.max_mana,
            base_stats: self.stats.base,
            bonus_stats: self.stats.bonus,
            equipment: self.equipment.clone(),
            inventory: self.inventory.items().to_vec(),
            calling: self.calling,
            skill_points: self.skill_points,
            currency: self.currency,
            completed_quests: self.completed_quests.clone(),
            active_quests: self.active_quests.clone(),
            defeated_enemies: self.defeated_enemies.clone(),
            npc_memory: self.npc_memory.clone(),
        }
    }

    /// Rebuilds a character from a saved record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Persistence` if the record breaks a character
    /// invariant: level or threshold below 1, a pool above its maximum, an
    /// item in the wrong equipment slot, or an overfull inventory.
    pub fn deserialize(record: CharacterRecord) -> Result<Self, DomainError> {
        validate(&record)?;
        let inventory = Inventory::from_items(record.inventory)?;
        Ok(Self {
            name: record.name,
            class: record.class,
            stats: StatBlock {
                base: record.base_stats,
                bonus: record.bonus_stats,
            },
            modifiers: Vec::new(),
            health: record.health,
            max_health: record.max_health,
            mana: record.mana,
            max_mana: record.max_mana,
            level: record.level,
            xp: record.xp,
            xp_to_level: record.xp_to_level,
            skill_points: record.skill_points,
            calling: record.calling,
            currency: record.currency,
            inventory,
            equipment: record.equipment,
            completed_quests: record.completed_quests,
            active_quests: record.active_quests,
            defeated_enemies: record.defeated_enemies,
            npc_memory: record.npc_memory,
        })
    }

    /// Serializes the save record as JSON.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Persistence` if encoding fails.
    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(&self.serialize())
            .map_err(|e| DomainError::Persistence(format!("failed to encode character: {e}")))
    }

    /// Parses and validates a JSON save record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Persistence` if the JSON is malformed or the
    /// record is invalid.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let record: CharacterRecord = serde_json::from_str(json)
            .map_err(|e| DomainError::Persistence(format!("failed to decode character: {e}")))?;
        Self::deserialize(record)
    }
}

fn validate(record: &CharacterRecord) -> Result<(), DomainError> {
    if record.level < 1 {
        return Err(invalid("level must be at least 1"));
    }
    if record.xp_to_level < 1 {
        return Err(invalid("xp_to_level must be at least 1"));
    }
    if record.health > record.max_health {
        return Err(invalid(&format!(
            "health {} exceeds max_health {}",
            record.health, record.max_health
        )));
    }
    if record.mana > record.max_mana {
        return Err(invalid(&format!(
            "mana {} exceeds max_mana {}",
            record.mana, record.max_mana
        )));
    }
    for slot in EquipmentSlot::ALL {
        if let Some(item) = record.equipment.get(slot) {
            if item.slot() != Some(slot) {
                return Err(invalid(&format!("item {} cannot be worn in {slot}", item.id)));
            }
        }
    }
    Ok(())
}

fn invalid(reason: &str) -> DomainError {
    DomainError::Persistence(format!("invalid character record: {reason}"))
}

#[cfg(test)]
mod tests {
    use journey_core::error::DomainError;
    use journey_inventory::catalog;

    use crate::domain::aggregates::Character;
    use crate::domain::archetypes::CharacterClass;

    fn seasoned_shepherd() -> Character {
        let mut character = Character::from_class("David", CharacterClass::Shepherd);
        character.set_calling("trial").unwrap();
        character.gain_xp(250);
        character.take_damage(40);
        character.spend_mana(12);
        character.credit_currency(75);
        character.add_item(catalog::item("prayer_shawl").unwrap());
        character.equip_item("prayer_shawl");
        character.mark_quest_active("explore_floor_1");
        character.mark_quest_completed("find_truth");
        character.record_defeated_enemy("orc");
        character.remember_npc("elderly_pilgrim", serde_json::json!(["start"]));
        character
    }

    #[test]
    fn test_round_trip_preserves_every_saved_field() {
        // Arrange
        let original = seasoned_shepherd();

        // Act
        let restored = Character::deserialize(original.serialize()).unwrap();

        // Assert
        assert_eq!(restored, original);
        assert_eq!(restored.stat_totals(), original.stat_totals());
    }

    #[test]
    fn test_json_round_trip() {
        let original = seasoned_shepherd();

        let json = original.to_json().unwrap();
        let restored = Character::from_json(&json).unwrap();

        assert_eq!(restored.serialize(), original.serialize());
    }

    #[test]
    fn test_buffs_are_not_saved() {
        let mut character = seasoned_shepherd();
        character.add_item(catalog::item("anointing_oil").unwrap());
        character.use_item("anointing_oil");

        let restored = Character::deserialize(character.serialize()).unwrap();

        assert!(restored.modifiers().is_empty());
    }

    #[test]
    fn test_deserialize_rejects_health_above_max() {
        let mut record = seasoned_shepherd().serialize();
        record.health = record.max_health + 1;

        let result = Character::deserialize(record);

        assert!(matches!(result, Err(DomainError::Persistence(_))));
    }

    #[test]
    fn test_deserialize_rejects_level_zero() {
        let mut record = seasoned_shepherd().serialize();
        record.level = 0;

        assert!(matches!(
            Character::deserialize(record),
            Err(DomainError::Persistence(_))
        ));
    }

    #[test]
    fn test_deserialize_rejects_item_in_wrong_slot() {
        let mut record = seasoned_shepherd().serialize();
        record.equipment.shield = catalog::item("sling");

        assert!(matches!(
            Character::deserialize(record),
            Err(DomainError::Persistence(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = Character::from_json("{\"name\": \"David\"");

        match result.unwrap_err() {
            DomainError::Persistence(message) => assert!(message.contains("decode")),
            other => panic!("expected Persistence, got {other:?}"),
        }
    }
}
