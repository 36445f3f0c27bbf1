//! Journey Through Scripture — Inventory & Equipment context.
//!
//! Responsible for the item record shape, the built-in item catalog, the
//! bounded carry inventory and the four equipment slots.

pub mod domain;

pub use domain::aggregates::{Equipment, INVENTORY_CAPACITY, Inventory};
pub use domain::catalog;
pub use domain::item::{EquipmentSlot, Item, ItemEffect, ItemKind};
