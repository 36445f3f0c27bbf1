//! Item records and the slot each kind of item occupies.

use std::fmt;
use std::str::FromStr;

use journey_core::error::DomainError;
use journey_core::stats::{Stat, StatSet};
use serde::{Deserialize, Serialize};

/// Equipment slot on a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    /// Main-hand weapon.
    Weapon,
    /// Body armor.
    Armor,
    /// Off-hand shield.
    Shield,
    /// Ring, scroll, cloak or similar trinket.
    Accessory,
}

impl EquipmentSlot {
    /// Slots in stat-aggregation order.
    pub const ALL: [EquipmentSlot; 4] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Armor,
        EquipmentSlot::Shield,
        EquipmentSlot::Accessory,
    ];

    /// Lower-case slot name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "weapon",
            EquipmentSlot::Armor => "armor",
            EquipmentSlot::Shield => "shield",
            EquipmentSlot::Accessory => "accessory",
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EquipmentSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown equipment slot: {s}")))
    }
}

/// What an item is. Equippable kinds map onto a slot of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Equips into the weapon slot.
    Weapon,
    /// Equips into the armor slot.
    Armor,
    /// Equips into the shield slot.
    Shield,
    /// Equips into the accessory slot.
    Accessory,
    /// Used up when applied.
    Consumable,
    /// Story item.
    Quest,
    /// Readable flavour item.
    Lore,
    /// Crafting or trade material.
    Material,
}

impl ItemKind {
    /// The slot this kind equips into, if any.
    #[must_use]
    pub fn slot(self) -> Option<EquipmentSlot> {
        match self {
            ItemKind::Weapon => Some(EquipmentSlot::Weapon),
            ItemKind::Armor => Some(EquipmentSlot::Armor),
            ItemKind::Shield => Some(EquipmentSlot::Shield),
            ItemKind::Accessory => Some(EquipmentSlot::Accessory),
            ItemKind::Consumable | ItemKind::Quest | ItemKind::Lore | ItemKind::Material => None,
        }
    }
}

/// What happens when a consumable is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemEffect {
    /// Restores health, capped at the maximum.
    Heal {
        /// Health restored.
        amount: u32,
    },
    /// Raises every stat for a number of combat rounds.
    Blessing {
        /// Bonus applied to each stat.
        amount: u32,
        /// Rounds the blessing lasts.
        rounds: u32,
    },
    /// Permanently raises one base stat.
    Devotion {
        /// The stat raised.
        stat: Stat,
        /// Amount added to the base value.
        amount: u32,
    },
}

/// An item as carried in an inventory or held in an equipment slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Catalog identifier, unique within an inventory lookup.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Item kind; decides the equipment slot.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Stat bonuses granted while equipped.
    #[serde(default, skip_serializing_if = "StatSet::is_empty")]
    pub stat_bonuses: StatSet,
    /// Damage rating added to attacks while equipped as a weapon.
    #[serde(default)]
    pub damage: u32,
    /// Defense rating added while equipped as armor or shield.
    #[serde(default)]
    pub defense: u32,
    /// Effect applied when a consumable is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<ItemEffect>,
}

impl Item {
    /// Creates an item with no bonuses, ratings or effect.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            stat_bonuses: StatSet::default(),
            damage: 0,
            defense: 0,
            effect: None,
        }
    }

    /// Sets the equipped stat bonuses.
    #[must_use]
    pub fn with_bonuses(mut self, bonuses: StatSet) -> Self {
        self.stat_bonuses = bonuses;
        self
    }

    /// Sets the weapon damage rating.
    #[must_use]
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    /// Sets the defense rating.
    #[must_use]
    pub fn with_defense(mut self, defense: u32) -> Self {
        self.defense = defense;
        self
    }

    /// Sets the consumable effect.
    #[must_use]
    pub fn with_effect(mut self, effect: ItemEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// The slot this item equips into, if it is equippable.
    #[must_use]
    pub fn slot(&self) -> Option<EquipmentSlot> {
        self.kind.slot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_gear_kinds_map_to_slots() {
        assert_eq!(ItemKind::Weapon.slot(), Some(EquipmentSlot::Weapon));
        assert_eq!(ItemKind::Shield.slot(), Some(EquipmentSlot::Shield));
        assert_eq!(ItemKind::Consumable.slot(), None);
        assert_eq!(ItemKind::Lore.slot(), None);
    }

    #[test]
    fn test_item_record_uses_type_field_and_omits_empty_optionals() {
        let item = Item::new("olive_branch", "Olive Branch", ItemKind::Material);

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["type"], "material");
        assert!(json.get("stat_bonuses").is_none());
        assert!(json.get("effect").is_none());
        assert_eq!(json["damage"], 0);
    }

    #[test]
    fn test_item_record_without_optional_fields_deserializes() {
        let item: Item =
            serde_json::from_str(r#"{"id": "x", "name": "X", "type": "armor", "defense": 2}"#)
                .unwrap();

        assert_eq!(item.defense, 2);
        assert_eq!(item.damage, 0);
        assert!(item.stat_bonuses.is_empty());
        assert_eq!(item.slot(), Some(EquipmentSlot::Armor));
    }

    #[test]
    fn test_slot_parses_from_name() {
        assert_eq!("shield".parse::<EquipmentSlot>().unwrap(), EquipmentSlot::Shield);
        assert!("belt".parse::<EquipmentSlot>().is_err());
    }
}
