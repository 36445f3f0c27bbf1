//! The combat encounter state machine.

use journey_character::{Character, ModifierExpiry, StatModifier};
use journey_core::clock::Clock;
use journey_core::event::EventMetadata;
use journey_core::publisher::EventPublisher;
use journey_core::rng::DeterministicRng;
use journey_core::stats::{Stat, StatSet};
use uuid::Uuid;

use super::bestiary::EnemyCharacter;
use super::events::{
    ActionRejected, AttackResolved, CombatEvent, CombatEventKind, EncounterEnded,
    EncounterStarted, RejectionReason, SpellCast,
};
use super::participant::{CombatParticipant, Side, crit_chance, resolve_strike};
use super::spells::{HEAL_AMOUNT, SHIELD_FAITH, SMITE_BONUS, Spell};

/// A fight between the player's character and one enemy.
///
/// The encounter holds the only mutable borrow of the character for its
/// lifetime. Once either side falls the encounter is permanently inactive
/// and every further action is ignored.
#[derive(Debug)]
pub struct CombatEncounter<'a> {
    /// Encounter identifier.
    pub id: Uuid,
    player: &'a mut Character,
    enemy: EnemyCharacter,
    current_turn: Side,
    opening_side: Side,
    active: bool,
    winner: Option<Side>,
    round: u32,
    log: Vec<String>,
    emitted: i64,
    uncommitted_events: Vec<CombatEvent>,
}

impl<'a> CombatEncounter<'a> {
    /// Pairs the player with an enemy and decides turn order once.
    ///
    /// Each side rolls wisdom plus a uniform draw in `[0, 10)`; the player
    /// opens on a tie.
    pub fn start(
        id: Uuid,
        player: &'a mut Character,
        enemy: EnemyCharacter,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Self {
        let player_roll = f64::from(player.stat(Stat::Wisdom)) + rng.next_f64() * 10.0;
        let enemy_roll = f64::from(enemy.stat(Stat::Wisdom)) + rng.next_f64() * 10.0;
        let first = if player_roll >= enemy_roll {
            Side::Player
        } else {
            Side::Enemy
        };

        let mut encounter = Self {
            id,
            player,
            enemy,
            current_turn: first,
            opening_side: first,
            active: true,
            winner: None,
            round: 0,
            log: Vec::new(),
            emitted: 0,
            uncommitted_events: Vec::new(),
        };
        tracing::info!(
            encounter_id = %id,
            player = %encounter.player.name(),
            enemy = %encounter.enemy.label(),
            first_turn = ?first,
            "encounter started"
        );
        let started = EncounterStarted {
            encounter_id: id,
            player: encounter.player.name().to_owned(),
            enemy: encounter.enemy.label().to_owned(),
            first_turn: first,
        };
        encounter.publish(CombatEventKind::EncounterStarted(started), clock);
        encounter
    }

    // --- accessors ---

    /// The player's character.
    #[must_use]
    pub fn player(&self) -> &Character {
        &*self.player
    }

    /// The enemy.
    #[must_use]
    pub fn enemy(&self) -> &EnemyCharacter {
        &self.enemy
    }

    /// The side whose turn it is.
    #[must_use]
    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    /// True until the encounter ends.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The winner, once the encounter has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Completed rounds. A round completes each time the turn returns to
    /// the side that opened the encounter.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Human-readable log lines in order.
    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.log
    }

    // --- actions ---

    /// The player attacks with their equipped weapon.
    ///
    /// A critical-hit roll of `next_f64() < min(0.5, wisdom × 0.05)` changes
    /// only the log message.
    pub fn player_attack(&mut self, clock: &dyn Clock, rng: &mut dyn DeterministicRng) {
        if !self.accepts(Side::Player, clock) {
            return;
        }

        let damage = resolve_strike(&*self.player, &mut self.enemy, 0);
        let critical = rng.next_f64() < crit_chance(self.player.stat(Stat::Wisdom));
        let message = if critical {
            format!("{} lands a CRITICAL HIT for {damage} damage!", self.player.name())
        } else {
            format!("{} attacks for {damage} damage!", self.player.name())
        };
        self.record(message);
        let resolved = AttackResolved {
            encounter_id: self.id,
            attacker: Side::Player,
            damage,
            critical,
            defender_health: self.enemy.health(),
        };
        self.publish(CombatEventKind::AttackResolved(resolved), clock);
        self.settle(clock);
    }

    /// The player casts a spell by name.
    ///
    /// Unknown names and unaffordable spells are logged and ignored, leaving
    /// the turn with the player. Mana is deducted before the effect applies.
    pub fn player_cast_spell(&mut self, spell_name: &str, clock: &dyn Clock) {
        if !self.accepts(Side::Player, clock) {
            return;
        }

        let Ok(spell) = spell_name.parse::<Spell>() else {
            self.record(format!("Unknown spell: {spell_name}"));
            self.reject(
                Side::Player,
                RejectionReason::UnknownSpell {
                    name: spell_name.to_owned(),
                },
                clock,
            );
            return;
        };

        let cost = spell.cost();
        let have = self.player.mana();
        if !self.player.spend_mana(cost) {
            self.record(format!("Not enough mana! (need {cost}, have {have})"));
            self.reject(
                Side::Player,
                RejectionReason::InsufficientMana { need: cost, have },
                clock,
            );
            return;
        }

        let name = self.player.name().to_owned();
        let amount = match spell {
            Spell::Heal => {
                let healed = self.player.heal(HEAL_AMOUNT);
                self.record(format!("{name} casts Heal, restoring {healed} health!"));
                healed
            }
            Spell::Smite => {
                let damage = resolve_strike(&*self.player, &mut self.enemy, SMITE_BONUS);
                self.record(format!("{name} casts Smite for {damage} damage!"));
                damage
            }
            Spell::Shield => {
                self.player.add_modifier(StatModifier::new(
                    spell.as_str(),
                    StatSet::single(Stat::Faith, SHIELD_FAITH),
                    ModifierExpiry::EndOfCombat,
                ));
                self.record(format!("{name} casts Shield, increasing defense!"));
                SHIELD_FAITH
            }
        };
        let cast = SpellCast {
            encounter_id: self.id,
            spell,
            mana_spent: cost,
            amount,
        };
        self.publish(CombatEventKind::SpellCast(cast), clock);
        self.settle(clock);
    }

    /// The enemy's counter-move: always a plain attack.
    pub fn enemy_attack(&mut self, clock: &dyn Clock) {
        if !self.accepts(Side::Enemy, clock) {
            return;
        }

        let damage = resolve_strike(&self.enemy, &mut *self.player, 0);
        self.record(format!("{} attacks for {damage} damage!", self.enemy.label()));
        let resolved = AttackResolved {
            encounter_id: self.id,
            attacker: Side::Enemy,
            damage,
            critical: false,
            defender_health: self.player.health(),
        };
        self.publish(CombatEventKind::AttackResolved(resolved), clock);
        self.settle(clock);
    }

    /// Ends the encounter in favour of `winner`. Later calls are ignored.
    ///
    /// A player victory grants the enemy's experience and currency rewards.
    /// A defeat restores the player to full health and mana; there is no
    /// other penalty. Either way encounter-long buffs are removed.
    pub fn end_combat(&mut self, winner: Side, clock: &dyn Clock) {
        if !self.active {
            return;
        }
        self.active = false;
        self.winner = Some(winner);

        let (xp_awarded, gold_awarded) = match winner {
            Side::Player => {
                let xp = self.enemy.xp_reward();
                let gold = self.enemy.gold_reward();
                self.player.gain_xp(xp);
                self.player.credit_currency(gold);
                self.player.record_defeated_enemy(self.enemy.kind());
                self.record(format!("Victory! Gained {xp} XP and {gold} gold!"));
                (xp, gold)
            }
            Side::Enemy => {
                self.record("Defeat! You have been defeated...".to_owned());
                self.player.reset();
                (0, 0)
            }
        };
        self.player.clear_combat_modifiers();

        tracing::info!(
            encounter_id = %self.id,
            winner = ?winner,
            rounds = self.round,
            xp_awarded,
            gold_awarded,
            "encounter ended"
        );
        let ended = EncounterEnded {
            encounter_id: self.id,
            winner,
            xp_awarded,
            gold_awarded,
            rounds: self.round,
        };
        self.publish(CombatEventKind::EncounterEnded(ended), clock);
    }

    // --- internals ---

    /// Gate shared by every action. Inactive encounters ignore the call
    /// silently; out-of-turn calls leave a log line and a rejection event.
    fn accepts(&mut self, actor: Side, clock: &dyn Clock) -> bool {
        if !self.active {
            tracing::debug!(encounter_id = %self.id, actor = ?actor, "action ignored: encounter over");
            return false;
        }
        if self.current_turn != actor {
            let name = match actor {
                Side::Player => self.player.name().to_owned(),
                Side::Enemy => self.enemy.label().to_owned(),
            };
            self.record(format!("It is not {name}'s turn."));
            self.reject(actor, RejectionReason::WrongTurn, clock);
            return false;
        }
        true
    }

    fn settle(&mut self, clock: &dyn Clock) {
        if !self.enemy.is_alive() {
            self.end_combat(Side::Player, clock);
        } else if !self.player.is_alive() {
            self.end_combat(Side::Enemy, clock);
        } else {
            self.pass_turn();
        }
    }

    fn pass_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
        if self.current_turn == self.opening_side {
            self.round += 1;
            self.player.tick_modifiers();
        }
    }

    fn reject(&mut self, actor: Side, reason: RejectionReason, clock: &dyn Clock) {
        tracing::debug!(encounter_id = %self.id, actor = ?actor, reason = ?reason, "action rejected");
        let rejected = ActionRejected {
            encounter_id: self.id,
            actor,
            reason,
        };
        self.publish(CombatEventKind::ActionRejected(rejected), clock);
    }

    fn record(&mut self, message: String) {
        tracing::debug!(encounter_id = %self.id, %message, "combat log");
        self.log.push(message);
    }

    fn publish(&mut self, kind: CombatEventKind, clock: &dyn Clock) {
        self.emitted += 1;
        let metadata = EventMetadata::next(kind.event_type(), self.id, self.emitted, clock);
        self.uncommitted_events.push(CombatEvent { metadata, kind });
    }
}

impl EventPublisher for CombatEncounter<'_> {
    type Event = CombatEvent;

    fn pending_events(&self) -> &[CombatEvent] {
        &self.uncommitted_events
    }

    fn clear_pending_events(&mut self) {
        self.uncommitted_events.clear();
    }
}
