//! Domain events for the Combat context.

use journey_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::participant::Side;
use super::spells::Spell;

/// Emitted once when an encounter is created and turn order is decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterStarted {
    /// The encounter identifier.
    pub encounter_id: Uuid,
    /// Player name.
    pub player: String,
    /// Enemy label.
    pub enemy: String,
    /// The side that acts first.
    pub first_turn: Side,
}

/// Emitted when a plain attack lands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResolved {
    /// The encounter identifier.
    pub encounter_id: Uuid,
    /// The attacking side.
    pub attacker: Side,
    /// Health the defender lost.
    pub damage: u32,
    /// Whether the attack was a critical hit.
    pub critical: bool,
    /// Defender health after the attack.
    pub defender_health: u32,
}

/// Emitted when the player casts a spell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCast {
    /// The encounter identifier.
    pub encounter_id: Uuid,
    /// The spell cast.
    pub spell: Spell,
    /// Mana deducted.
    pub mana_spent: u32,
    /// Health restored (heal), damage dealt (smite), or faith granted (shield).
    pub amount: u32,
}

/// Why an action was ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectionReason {
    /// It was the other side's turn.
    WrongTurn,
    /// The spell name is not in the table.
    UnknownSpell {
        /// The name requested.
        name: String,
    },
    /// The player cannot pay the spell's cost.
    InsufficientMana {
        /// Mana required.
        need: u32,
        /// Mana available.
        have: u32,
    },
}

/// Emitted when an action is ignored while the encounter is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRejected {
    /// The encounter identifier.
    pub encounter_id: Uuid,
    /// The side that attempted the action.
    pub actor: Side,
    /// Why it was ignored.
    pub reason: RejectionReason,
}

/// Emitted once when the encounter ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterEnded {
    /// The encounter identifier.
    pub encounter_id: Uuid,
    /// The winning side.
    pub winner: Side,
    /// Experience granted to the player.
    pub xp_awarded: u32,
    /// Currency granted to the player.
    pub gold_awarded: u32,
    /// Completed rounds.
    pub rounds: u32,
}

/// Event payload variants for the Combat context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEventKind {
    /// The encounter began.
    EncounterStarted(EncounterStarted),
    /// An attack landed.
    AttackResolved(AttackResolved),
    /// A spell was cast.
    SpellCast(SpellCast),
    /// An action was ignored.
    ActionRejected(ActionRejected),
    /// The encounter ended.
    EncounterEnded(EncounterEnded),
}

impl CombatEventKind {
    /// Event type name used for routing.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            CombatEventKind::EncounterStarted(_) => "combat.encounter_started",
            CombatEventKind::AttackResolved(_) => "combat.attack_resolved",
            CombatEventKind::SpellCast(_) => "combat.spell_cast",
            CombatEventKind::ActionRejected(_) => "combat.action_rejected",
            CombatEventKind::EncounterEnded(_) => "combat.encounter_ended",
        }
    }
}

/// Domain event envelope for the Combat context.
#[derive(Debug, Clone)]
pub struct CombatEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: CombatEventKind,
}

impl DomainEvent for CombatEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("CombatEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
