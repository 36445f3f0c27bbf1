//! Built-in item catalog: class starting gear and the floor-one loot table.

use journey_core::stats::{Stat, StatSet};

use super::item::{Item, ItemEffect, ItemKind};

/// Identifiers of every catalog item.
pub const ITEM_IDS: [&str; 18] = [
    "staff_of_moses",
    "simple_robe",
    "scroll_wisdom",
    "bronze_sword",
    "leather_armor",
    "shield",
    "staff",
    "sling",
    "shepherds_cloak",
    "quill",
    "tome",
    "scholars_robe",
    "worn_walking_staff",
    "prayer_shawl",
    "healing_bread",
    "fountain_water",
    "scroll_of_psalms",
    "anointing_oil",
];

/// Looks up a catalog item by identifier, returning a fresh copy.
#[must_use]
pub fn item(id: &str) -> Option<Item> {
    let item = match id {
        // Prophet
        "staff_of_moses" => Item::new(id, "Staff of Moses", ItemKind::Weapon)
            .with_damage(4)
            .with_bonuses(StatSet::single(Stat::Faith, 1)),
        "simple_robe" => Item::new(id, "Simple Robe", ItemKind::Armor).with_defense(1),
        "scroll_wisdom" => Item::new(id, "Scroll of Wisdom", ItemKind::Accessory)
            .with_bonuses(StatSet::single(Stat::Wisdom, 1)),

        // Warrior
        "bronze_sword" => Item::new(id, "Bronze Sword", ItemKind::Weapon)
            .with_damage(6)
            .with_bonuses(StatSet::single(Stat::Strength, 1)),
        "leather_armor" => Item::new(id, "Leather Armor", ItemKind::Armor).with_defense(3),
        "shield" => Item::new(id, "Wooden Shield", ItemKind::Shield).with_defense(2),

        // Shepherd
        "staff" => Item::new(id, "Shepherd's Staff", ItemKind::Weapon).with_damage(3),
        "sling" => Item::new(id, "Sling", ItemKind::Weapon)
            .with_damage(5)
            .with_bonuses(StatSet::single(Stat::Courage, 1)),
        "shepherds_cloak" => Item::new(id, "Shepherd's Cloak", ItemKind::Armor)
            .with_defense(2)
            .with_bonuses(StatSet::single(Stat::Courage, 1)),

        // Scribe
        "quill" => Item::new(id, "Quill", ItemKind::Weapon).with_damage(1),
        "tome" => Item::new(id, "Tome of the Law", ItemKind::Accessory)
            .with_bonuses(StatSet::single(Stat::Wisdom, 2)),
        "scholars_robe" => Item::new(id, "Scholar's Robe", ItemKind::Armor)
            .with_defense(1)
            .with_bonuses(StatSet::single(Stat::Righteousness, 1)),

        // Floor one
        "worn_walking_staff" => Item::new(id, "Worn Walking Staff", ItemKind::Weapon)
            .with_damage(3)
            .with_bonuses(StatSet::single(Stat::Strength, 1)),
        "prayer_shawl" => Item::new(id, "Prayer Shawl", ItemKind::Accessory)
            .with_bonuses(StatSet::single(Stat::Faith, 2)),
        "healing_bread" => Item::new(id, "Healing Bread", ItemKind::Consumable)
            .with_effect(ItemEffect::Heal { amount: 10 }),
        "fountain_water" => Item::new(id, "Fountain Water", ItemKind::Consumable)
            .with_effect(ItemEffect::Heal { amount: 5 }),
        "scroll_of_psalms" => Item::new(id, "Scroll of Psalms", ItemKind::Consumable)
            .with_effect(ItemEffect::Devotion {
                stat: Stat::Faith,
                amount: 1,
            }),
        "anointing_oil" => Item::new(id, "Anointing Oil", ItemKind::Consumable)
            .with_effect(ItemEffect::Blessing {
                amount: 2,
                rounds: 10,
            }),
        _ => return None,
    };
    Some(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_id_resolves_to_an_item_with_that_id() {
        for id in ITEM_IDS {
            let found = item(id).unwrap_or_else(|| panic!("missing catalog item {id}"));
            assert_eq!(found.id, id);
        }
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert!(item("golden_calf").is_none());
    }

    #[test]
    fn test_consumables_carry_effects_and_gear_does_not() {
        for id in ITEM_IDS {
            let found = item(id).unwrap();
            assert_eq!(
                found.kind == ItemKind::Consumable,
                found.effect.is_some(),
                "item {id}"
            );
        }
    }
}
