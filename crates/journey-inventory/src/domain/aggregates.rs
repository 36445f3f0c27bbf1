//! Bounded carry inventory and slot-based equipment.

use journey_core::error::DomainError;
use journey_core::stats::StatSet;
use serde::{Deserialize, Serialize};

use super::item::{EquipmentSlot, Item, ItemKind};

/// Maximum number of items a character can carry.
pub const INVENTORY_CAPACITY: usize = 20;

/// Ordered, bounded item storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// Creates an empty inventory with the standard capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INVENTORY_CAPACITY)
    }

    /// Creates an empty inventory with a custom capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Rebuilds an inventory from saved items, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Persistence` if there are more items than the
    /// standard capacity allows.
    pub fn from_items(items: Vec<Item>) -> Result<Self, DomainError> {
        if items.len() > INVENTORY_CAPACITY {
            return Err(DomainError::Persistence(format!(
                "inventory holds {} items, capacity is {INVENTORY_CAPACITY}",
                items.len()
            )));
        }
        Ok(Self {
            items,
            capacity: INVENTORY_CAPACITY,
        })
    }

    /// Appends an item. Returns `false` and leaves the inventory untouched
    /// when it is full.
    pub fn add_item(&mut self, item: Item) -> bool {
        if self.is_full() {
            tracing::debug!(item_id = %item.id, "inventory full, item rejected");
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes the first item with `item_id`, returning it.
    pub fn remove_item(&mut self, item_id: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == item_id)?;
        Some(self.items.remove(index))
    }

    /// Finds the first item with `item_id`.
    #[must_use]
    pub fn find_item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Removes and returns a consumable. Non-consumables stay put and yield
    /// `None`.
    pub fn take_consumable(&mut self, item_id: &str) -> Option<Item> {
        match self.find_item(item_id) {
            Some(item) if item.kind == ItemKind::Consumable => self.remove_item(item_id),
            _ => None,
        }
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of carried items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is carried.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when no further item can be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}

/// The four equipment slots, each empty or holding one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    /// Weapon slot.
    pub weapon: Option<Item>,
    /// Armor slot.
    pub armor: Option<Item>,
    /// Shield slot.
    pub shield: Option<Item>,
    /// Accessory slot.
    pub accessory: Option<Item>,
}

impl Equipment {
    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Shield => &mut self.shield,
            EquipmentSlot::Accessory => &mut self.accessory,
        }
    }

    /// Returns the item in `slot`.
    #[must_use]
    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_ref(),
            EquipmentSlot::Armor => self.armor.as_ref(),
            EquipmentSlot::Shield => self.shield.as_ref(),
            EquipmentSlot::Accessory => self.accessory.as_ref(),
        }
    }

    /// Places `item` in `slot`, returning the previous occupant.
    pub fn equip(&mut self, slot: EquipmentSlot, item: Item) -> Option<Item> {
        self.slot_mut(slot).replace(item)
    }

    /// Empties `slot`, returning what it held.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.slot_mut(slot).take()
    }

    /// The slot currently holding an item with `item_id`, if any.
    #[must_use]
    pub fn slot_of(&self, item_id: &str) -> Option<EquipmentSlot> {
        EquipmentSlot::ALL
            .into_iter()
            .find(|slot| self.get(*slot).is_some_and(|item| item.id == item_id))
    }

    /// Sum of equipped stat bonuses, folded weapon, armor, shield, accessory.
    #[must_use]
    pub fn stat_bonuses(&self) -> StatSet {
        EquipmentSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot))
            .fold(StatSet::default(), |acc, item| acc.plus(&item.stat_bonuses))
    }

    /// Damage rating of the equipped weapon, or zero.
    #[must_use]
    pub fn weapon_damage(&self) -> u32 {
        self.weapon.as_ref().map_or(0, |item| item.damage)
    }

    /// Defense of the equipped armor plus the equipped shield.
    #[must_use]
    pub fn armor_defense(&self) -> u32 {
        let armor = self.armor.as_ref().map_or(0, |item| item.defense);
        let shield = self.shield.as_ref().map_or(0, |item| item.defense);
        armor.saturating_add(shield)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;
    use journey_core::stats::Stat;

    fn potion(n: usize) -> Item {
        Item::new(format!("potion_{n}"), "Potion", ItemKind::Consumable)
    }

    #[test]
    fn test_add_item_rejects_when_full() {
        // Arrange
        let mut inventory = Inventory::new();
        for n in 0..INVENTORY_CAPACITY {
            assert!(inventory.add_item(potion(n)));
        }

        // Act
        let added = inventory.add_item(potion(99));

        // Assert
        assert!(!added);
        assert!(inventory.is_full());
        assert_eq!(inventory.len(), INVENTORY_CAPACITY);
        assert!(inventory.find_item("potion_99").is_none());
    }

    #[test]
    fn test_remove_item_returns_first_match_and_keeps_order() {
        let mut inventory = Inventory::new();
        inventory.add_item(potion(1));
        inventory.add_item(potion(2));
        inventory.add_item(potion(3));

        let removed = inventory.remove_item("potion_2").unwrap();

        assert_eq!(removed.id, "potion_2");
        let ids: Vec<&str> = inventory.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["potion_1", "potion_3"]);
        assert!(inventory.remove_item("potion_2").is_none());
    }

    #[test]
    fn test_take_consumable_ignores_gear() {
        let mut inventory = Inventory::new();
        inventory.add_item(catalog::item("bronze_sword").unwrap());
        inventory.add_item(catalog::item("healing_bread").unwrap());

        assert!(inventory.take_consumable("bronze_sword").is_none());
        assert_eq!(inventory.len(), 2);
        assert_eq!(
            inventory.take_consumable("healing_bread").unwrap().id,
            "healing_bread"
        );
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_from_items_rejects_overfull_save() {
        let items: Vec<Item> = (0..=INVENTORY_CAPACITY).map(potion).collect();

        let result = Inventory::from_items(items);

        assert!(matches!(result, Err(DomainError::Persistence(_))));
    }

    #[test]
    fn test_equip_returns_previous_occupant() {
        // Arrange
        let mut equipment = Equipment::default();
        equipment.equip(EquipmentSlot::Weapon, catalog::item("staff").unwrap());

        // Act
        let previous = equipment.equip(EquipmentSlot::Weapon, catalog::item("sling").unwrap());

        // Assert
        assert_eq!(previous.unwrap().id, "staff");
        assert_eq!(equipment.get(EquipmentSlot::Weapon).unwrap().id, "sling");
        assert_eq!(equipment.slot_of("sling"), Some(EquipmentSlot::Weapon));
        assert_eq!(equipment.slot_of("staff"), None);
    }

    #[test]
    fn test_equipment_aggregates_bonuses_and_ratings() {
        let mut equipment = Equipment::default();
        equipment.equip(EquipmentSlot::Weapon, catalog::item("bronze_sword").unwrap());
        equipment.equip(EquipmentSlot::Armor, catalog::item("leather_armor").unwrap());
        equipment.equip(EquipmentSlot::Shield, catalog::item("shield").unwrap());
        equipment.equip(EquipmentSlot::Accessory, catalog::item("prayer_shawl").unwrap());

        let bonuses = equipment.stat_bonuses();

        assert_eq!(bonuses.get(Stat::Strength), 1);
        assert_eq!(bonuses.get(Stat::Faith), 2);
        assert_eq!(equipment.weapon_damage(), 6);
        assert_eq!(equipment.armor_defense(), 5);
    }

    #[test]
    fn test_armor_defense_saturates_on_oversized_ratings() {
        // Arrange
        let mut equipment = Equipment::default();
        equipment.equip(
            EquipmentSlot::Armor,
            Item::new("mail", "Mail", ItemKind::Armor).with_defense(u32::MAX),
        );
        equipment.equip(
            EquipmentSlot::Shield,
            Item::new("buckler", "Buckler", ItemKind::Shield).with_defense(5),
        );

        // Act
        let defense = equipment.armor_defense();

        // Assert
        assert_eq!(defense, u32::MAX);
    }

    #[test]
    fn test_empty_equipment_contributes_nothing() {
        let equipment = Equipment::default();

        assert!(equipment.stat_bonuses().is_empty());
        assert_eq!(equipment.weapon_damage(), 0);
        assert_eq!(equipment.armor_defense(), 0);
    }
}
