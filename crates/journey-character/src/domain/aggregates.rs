//! The player character.

use std::collections::{BTreeMap, BTreeSet};

use journey_core::error::DomainError;
use journey_core::stats::{Stat, StatSet};
use journey_inventory::{Equipment, EquipmentSlot, Inventory, Item, ItemEffect, catalog};

use super::archetypes::{Calling, CharacterClass};
use super::modifiers::{ModifierExpiry, StatModifier};
use super::stats::StatBlock;

/// Experience needed to reach level 2.
pub const STARTING_XP_TO_LEVEL: u32 = 100;
/// Skill points granted per level.
pub const SKILL_POINTS_PER_LEVEL: u32 = 3;
/// Maximum health gained per level.
pub const HEALTH_PER_LEVEL: u32 = 10;
/// Maximum mana gained per level.
pub const MANA_PER_LEVEL: u32 = 5;

/// A player character.
///
/// Fields are private: collaborators read through accessors and mutate only
/// through the operations below.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub(crate) name: String,
    pub(crate) class: CharacterClass,
    pub(crate) stats: StatBlock,
    pub(crate) modifiers: Vec<StatModifier>,
    pub(crate) health: u32,
    pub(crate) max_health: u32,
    pub(crate) mana: u32,
    pub(crate) max_mana: u32,
    pub(crate) level: u32,
    pub(crate) xp: u32,
    pub(crate) xp_to_level: u32,
    pub(crate) skill_points: u32,
    pub(crate) calling: Option<Calling>,
    pub(crate) currency: u32,
    pub(crate) inventory: Inventory,
    pub(crate) equipment: Equipment,
    pub(crate) completed_quests: BTreeSet<String>,
    pub(crate) active_quests: BTreeSet<String>,
    pub(crate) defeated_enemies: Vec<String>,
    pub(crate) npc_memory: BTreeMap<String, serde_json::Value>,
}

impl Character {
    /// Creates a level-1 character of the named class.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownClass` if `class_type` is not one of the
    /// fixed archetypes. No character is built in that case.
    pub fn new(name: impl Into<String>, class_type: &str) -> Result<Self, DomainError> {
        let class: CharacterClass = class_type.parse()?;
        Ok(Self::from_class(name, class))
    }

    /// Creates a level-1 character of a known class, carrying and wearing
    /// the class's starting gear.
    #[must_use]
    pub fn from_class(name: impl Into<String>, class: CharacterClass) -> Self {
        let definition = class.definition();
        let mut character = Self {
            name: name.into(),
            class,
            stats: StatBlock::new(definition.stats),
            modifiers: Vec::new(),
            health: definition.health,
            max_health: definition.health,
            mana: definition.mana,
            max_mana: definition.mana,
            level: 1,
            xp: 0,
            xp_to_level: STARTING_XP_TO_LEVEL,
            skill_points: 0,
            calling: None,
            currency: 0,
            inventory: Inventory::new(),
            equipment: Equipment::default(),
            completed_quests: BTreeSet::new(),
            active_quests: BTreeSet::new(),
            defeated_enemies: Vec::new(),
            npc_memory: BTreeMap::new(),
        };

        for item in definition.starting_equipment.iter().filter_map(|id| catalog::item(id)) {
            let free_slot = item
                .slot()
                .is_some_and(|slot| character.equipment.get(slot).is_none());
            let item_id = item.id.clone();
            character.inventory.add_item(item);
            if free_slot {
                character.equip_item(&item_id);
            }
        }
        character
    }

    // --- accessors ---

    /// Character name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class archetype.
    #[must_use]
    pub fn class(&self) -> CharacterClass {
        self.class
    }

    /// Base and permanent bonus stats.
    #[must_use]
    pub fn stat_block(&self) -> &StatBlock {
        &self.stats
    }

    /// Active buffs.
    #[must_use]
    pub fn modifiers(&self) -> &[StatModifier] {
        &self.modifiers
    }

    /// Current health.
    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    /// Maximum health.
    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Current mana.
    #[must_use]
    pub fn mana(&self) -> u32 {
        self.mana
    }

    /// Maximum mana.
    #[must_use]
    pub fn max_mana(&self) -> u32 {
        self.max_mana
    }

    /// Current level, starting at 1.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Experience toward the next level.
    #[must_use]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// Experience needed for the next level.
    #[must_use]
    pub fn xp_to_level(&self) -> u32 {
        self.xp_to_level
    }

    /// Unspent skill points.
    #[must_use]
    pub fn skill_points(&self) -> u32 {
        self.skill_points
    }

    /// The chosen calling, if any.
    #[must_use]
    pub fn calling(&self) -> Option<Calling> {
        self.calling
    }

    /// Shekels carried.
    #[must_use]
    pub fn currency(&self) -> u32 {
        self.currency
    }

    /// Carried items.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Equipped items.
    #[must_use]
    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    /// Identifiers of completed quests.
    #[must_use]
    pub fn completed_quests(&self) -> &BTreeSet<String> {
        &self.completed_quests
    }

    /// Identifiers of quests in progress.
    #[must_use]
    pub fn active_quests(&self) -> &BTreeSet<String> {
        &self.active_quests
    }

    /// Kinds of enemies defeated, in order.
    #[must_use]
    pub fn defeated_enemies(&self) -> &[String] {
        &self.defeated_enemies
    }

    /// Free-form memory of NPC interactions.
    #[must_use]
    pub fn npc_memory(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.npc_memory
    }

    // --- stats ---

    /// All five stat totals: base, equipment, permanent bonus and buffs.
    #[must_use]
    pub fn stat_totals(&self) -> StatSet {
        self.stats
            .total(&self.equipment.stat_bonuses(), &self.modifiers)
    }

    /// Total value of one stat.
    #[must_use]
    pub fn stat(&self, stat: Stat) -> u32 {
        self.stat_totals().get(stat)
    }

    /// Outgoing damage: strength × 2 + weapon damage + `weapon_bonus`.
    #[must_use]
    pub fn calculate_damage(&self, weapon_bonus: u32) -> u32 {
        self.stat(Stat::Strength)
            .saturating_mul(2)
            .saturating_add(self.equipment.weapon_damage())
            .saturating_add(weapon_bonus)
    }

    /// Defense: faith × 0.5 + armor defense + shield defense. May be
    /// fractional; combat rounds down only at the final damage step.
    #[must_use]
    pub fn calculate_defense(&self) -> f64 {
        f64::from(self.stat(Stat::Faith)) * 0.5 + f64::from(self.equipment.armor_defense())
    }

    /// True while health is above zero.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    // --- resources ---

    /// Applies incoming damage after faith mitigation and returns the amount
    /// actually lost. At least 1 damage always lands; health floors at 0.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let mitigation = self.stat(Stat::Faith) / 2;
        let actual = amount.saturating_sub(mitigation).max(1);
        self.health = self.health.saturating_sub(actual);
        tracing::debug!(
            character = %self.name,
            amount,
            mitigation,
            actual,
            health = self.health,
            "damage taken"
        );
        actual
    }

    /// Restores health up to the maximum and returns the amount restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }

    /// Deducts `cost` mana. Returns `false` without change if short.
    pub fn spend_mana(&mut self, cost: u32) -> bool {
        if self.mana < cost {
            return false;
        }
        self.mana -= cost;
        true
    }

    /// Restores health and mana to their maxima. Level, experience and
    /// inventory are untouched. This is the only consequence of defeat.
    pub fn reset(&mut self) {
        self.health = self.max_health;
        self.mana = self.max_mana;
    }

    /// Adds shekels.
    pub fn credit_currency(&mut self, amount: u32) {
        self.currency = self.currency.saturating_add(amount);
    }

    // --- progression ---

    /// Adds experience and levels up as many times as the total allows.
    pub fn gain_xp(&mut self, amount: u32) {
        self.xp = self.xp.saturating_add(amount);
        while self.xp >= self.xp_to_level {
            self.level_up();
        }
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.xp -= self.xp_to_level;
        self.xp_to_level = next_threshold(self.xp_to_level);
        self.skill_points += SKILL_POINTS_PER_LEVEL;
        self.max_health += HEALTH_PER_LEVEL;
        self.health = self.max_health;
        self.max_mana += MANA_PER_LEVEL;
        self.mana = self.max_mana;
        tracing::info!(character = %self.name, level = self.level, "level up");
    }

    /// Chooses a calling by name and applies its bonus bundle.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCalling` for a name outside the fixed set.
    pub fn set_calling(&mut self, calling: &str) -> Result<(), DomainError> {
        let calling: Calling = calling.parse()?;
        self.choose_calling(calling);
        Ok(())
    }

    /// Records a calling and folds its bonus bundle into the permanent
    /// bonuses. A later calling replaces the recorded one and its bundle
    /// stacks on top of the earlier one.
    pub fn choose_calling(&mut self, calling: Calling) {
        if let Some(previous) = self.calling {
            tracing::debug!(character = %self.name, %previous, %calling, "calling replaced");
        }
        self.stats.bonus.add_all(&calling.bonuses());
        self.calling = Some(calling);
        tracing::info!(character = %self.name, %calling, "calling chosen");
    }

    // --- buffs ---

    /// Adds a buff.
    pub fn add_modifier(&mut self, modifier: StatModifier) {
        self.modifiers.push(modifier);
    }

    /// Advances round-limited buffs by one round, dropping expired ones.
    pub fn tick_modifiers(&mut self) {
        self.modifiers.retain_mut(StatModifier::tick);
    }

    /// Drops buffs that last only for the current encounter.
    pub fn clear_combat_modifiers(&mut self) {
        self.modifiers
            .retain(|modifier| modifier.expiry != ModifierExpiry::EndOfCombat);
    }

    // --- inventory & equipment ---

    /// Adds an item. Returns `false` if the inventory is full.
    pub fn add_item(&mut self, item: Item) -> bool {
        self.inventory.add_item(item)
    }

    /// Removes an item, unequipping it if it was worn and no other copy
    /// remains.
    pub fn remove_item(&mut self, item_id: &str) -> Option<Item> {
        let removed = self.inventory.remove_item(item_id)?;
        if self.inventory.find_item(item_id).is_none() {
            if let Some(slot) = self.equipment.slot_of(item_id) {
                self.equipment.unequip(slot);
            }
        }
        Some(removed)
    }

    /// Finds a carried item.
    #[must_use]
    pub fn find_item(&self, item_id: &str) -> Option<&Item> {
        self.inventory.find_item(item_id)
    }

    /// Equips a carried item into its slot.
    ///
    /// Returns `false` if the item is not carried or cannot be equipped. If
    /// the slot is occupied the previous item is unequipped first; it stays
    /// in the inventory.
    pub fn equip_item(&mut self, item_id: &str) -> bool {
        let Some(item) = self.inventory.find_item(item_id) else {
            tracing::debug!(character = %self.name, item_id, "equip ignored: item not carried");
            return false;
        };
        let Some(slot) = item.slot() else {
            tracing::debug!(character = %self.name, item_id, "equip ignored: item not equippable");
            return false;
        };
        let item = item.clone();
        if let Some(previous) = self.equipment.unequip(slot) {
            tracing::debug!(character = %self.name, %slot, previous = %previous.id, "unequipped");
        }
        self.equipment.equip(slot, item);
        true
    }

    /// Empties an equipment slot. Returns `false` if it was already empty.
    pub fn unequip_item(&mut self, slot: EquipmentSlot) -> bool {
        self.equipment.unequip(slot).is_some()
    }

    /// Uses a carried consumable, removing it and applying its effect.
    /// Returns `false` if the item is not carried or not consumable.
    pub fn use_item(&mut self, item_id: &str) -> bool {
        let Some(item) = self.inventory.take_consumable(item_id) else {
            return false;
        };
        match item.effect {
            Some(ItemEffect::Heal { amount }) => {
                self.heal(amount);
            }
            Some(ItemEffect::Blessing { amount, rounds }) => {
                self.add_modifier(StatModifier::new(
                    item.id.clone(),
                    StatSet::uniform(amount),
                    ModifierExpiry::Rounds(rounds),
                ));
            }
            Some(ItemEffect::Devotion { stat, amount }) => {
                self.stats.base.add(stat, amount);
            }
            None => {}
        }
        true
    }

    // --- quest & dialogue memory ---

    /// Records a quest as in progress.
    pub fn mark_quest_active(&mut self, quest_id: &str) {
        if !self.completed_quests.contains(quest_id) {
            self.active_quests.insert(quest_id.to_owned());
        }
    }

    /// Records a quest as completed.
    pub fn mark_quest_completed(&mut self, quest_id: &str) {
        self.active_quests.remove(quest_id);
        self.completed_quests.insert(quest_id.to_owned());
    }

    /// Records a defeated enemy kind.
    pub fn record_defeated_enemy(&mut self, kind: impl Into<String>) {
        self.defeated_enemies.push(kind.into());
    }

    /// Stores a memory value for an NPC, replacing any previous one.
    pub fn remember_npc(&mut self, npc_id: impl Into<String>, memory: serde_json::Value) {
        self.npc_memory.insert(npc_id.into(), memory);
    }
}

/// Next level threshold: ×1.1, rounded down.
fn next_threshold(current: u32) -> u32 {
    let next = u64::from(current) * 11 / 10;
    u32::try_from(next).unwrap_or(u32::MAX)
}
