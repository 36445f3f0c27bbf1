//! Command handlers for the Dialogue context.

use journey_character::Character;
use journey_core::clock::Clock;
use journey_quests::{QuestLedger, complete_and_reward, start_quest};

use crate::domain::aggregates::{DialogueSystem, DialogueView};
use crate::domain::npc::DialogueAction;

/// Health restored by an NPC's healing.
pub const NPC_HEAL_AMOUNT: u32 = 100;

/// Everything a dialogue action may touch.
pub struct DialogueContext<'a> {
    /// The player's quest ledger.
    pub quests: &'a mut QuestLedger,
    /// The player's character.
    pub character: &'a mut Character,
    /// Clock used to stamp quest events.
    pub clock: &'a dyn Clock,
}

/// Runs a dialogue action. Returns `true` if the caller should save the game.
pub fn execute_action(action: &DialogueAction, ctx: &mut DialogueContext<'_>) -> bool {
    match action {
        DialogueAction::StartQuest { quest_id } => {
            start_quest(ctx.quests, ctx.character, quest_id, ctx.clock);
            false
        }
        DialogueAction::CompleteQuest { quest_id } => {
            complete_and_reward(ctx.quests, ctx.character, quest_id, ctx.clock);
            false
        }
        DialogueAction::Heal => {
            let restored = ctx.character.heal(NPC_HEAL_AMOUNT);
            tracing::info!(character = %ctx.character.name(), restored, "healed by NPC");
            false
        }
        DialogueAction::Save => true,
    }
}

impl DialogueSystem {
    /// Picks a numbered option and runs its action.
    ///
    /// The NPC's memory on the character is refreshed with every response
    /// key visited so far. Options in the returned view reflect the state
    /// after the action ran. Returns `None` when the option cannot be chosen.
    pub fn choose_option(
        &mut self,
        number: u32,
        ctx: &mut DialogueContext<'_>,
    ) -> Option<DialogueView> {
        let selection = self.select(number, ctx.quests)?;
        let save_requested = selection
            .action
            .as_ref()
            .is_some_and(|action| execute_action(action, ctx));

        if let Some(visited) = self.visited(&selection.npc_id) {
            ctx.character
                .remember_npc(selection.npc_id.clone(), serde_json::json!(visited));
        }

        let options = if selection.ended {
            Vec::new()
        } else {
            self.options(&selection.npc_id, ctx.quests)
        };
        Some(DialogueView {
            npc: selection.npc,
            text: selection.text,
            options,
            save_requested,
        })
    }
}

#[cfg(test)]
mod tests {
    use journey_character::Character;
    use journey_quests::QuestLedger;
    use journey_test_support::fixed_clock;
    use uuid::Uuid;

    use crate::application::command_handlers::{DialogueContext, execute_action};
    use crate::domain::aggregates::DialogueSystem;
    use crate::domain::npc::DialogueAction;

    #[test]
    fn test_heal_action_restores_health() {
        // Arrange
        let clock = fixed_clock();
        let mut quests = QuestLedger::new(Uuid::new_v4());
        let mut character = Character::new("Ruth", "shepherd").unwrap();
        character.take_damage(40);
        let mut ctx = DialogueContext {
            quests: &mut quests,
            character: &mut character,
            clock: &clock,
        };

        // Act
        let save = execute_action(&DialogueAction::Heal, &mut ctx);

        // Assert
        assert!(!save);
        assert_eq!(character.health(), character.max_health());
    }

    #[test]
    fn test_save_action_requests_save() {
        let clock = fixed_clock();
        let mut quests = QuestLedger::new(Uuid::new_v4());
        let mut character = Character::new("Ruth", "shepherd").unwrap();
        let mut system = DialogueSystem::with_builtin_npcs().unwrap();
        system.start_dialogue("priest_ezra", &quests);
        let mut ctx = DialogueContext {
            quests: &mut quests,
            character: &mut character,
            clock: &clock,
        };

        let view = system.choose_option(2, &mut ctx).unwrap();

        assert!(view.save_requested);
        assert!(view.text.starts_with("Your journey is recorded."));
        assert_eq!(view.options.len(), 4);
    }

    #[test]
    fn test_choose_option_starts_quest_and_remembers_npc() {
        // Arrange
        let clock = fixed_clock();
        let mut quests = QuestLedger::new(Uuid::new_v4());
        let mut character = Character::new("Ruth", "shepherd").unwrap();
        let mut system = DialogueSystem::with_builtin_npcs().unwrap();
        system.start_dialogue("gate_keeper_samuel", &quests);

        // Act
        let view = {
            let mut ctx = DialogueContext {
                quests: &mut quests,
                character: &mut character,
                clock: &clock,
            };
            system.choose_option(3, &mut ctx).unwrap()
        };

        // Assert
        assert_eq!(view.npc, "Gate Keeper Samuel");
        assert!(!view.save_requested);
        assert!(quests.is_active("explore_floor_1"));
        assert!(character.active_quests().contains("explore_floor_1"));
        assert_eq!(
            character.npc_memory()["gate_keeper_samuel"],
            serde_json::json!(["explore_task"])
        );
    }

    #[test]
    fn test_complete_quest_action_rewards_and_unlocks_calling() {
        // Arrange
        let clock = fixed_clock();
        let mut quests = QuestLedger::new(Uuid::new_v4());
        let mut character = Character::new("Ruth", "shepherd").unwrap();
        let mut system = DialogueSystem::with_builtin_npcs().unwrap();
        quests.start_quest("find_truth", &clock);
        system.start_dialogue("gate_keeper_samuel", &quests);

        // Act
        {
            let mut ctx = DialogueContext {
                quests: &mut quests,
                character: &mut character,
                clock: &clock,
            };
            system.choose_option(4, &mut ctx).unwrap();
        }

        // Assert
        assert!(quests.is_completed("find_truth"));
        assert!(character.xp() > 0);
        assert!(character.currency() > 0);
    }

    #[test]
    fn test_farewell_returns_no_options() {
        let clock = fixed_clock();
        let mut quests = QuestLedger::new(Uuid::new_v4());
        let mut character = Character::new("Ruth", "shepherd").unwrap();
        let mut system = DialogueSystem::with_builtin_npcs().unwrap();
        system.start_dialogue("elderly_pilgrim", &quests);
        let mut ctx = DialogueContext {
            quests: &mut quests,
            character: &mut character,
            clock: &clock,
        };

        let view = system.choose_option(4, &mut ctx).unwrap();

        assert!(view.options.is_empty());
        assert!(!system.is_in_dialogue());
        assert!(system.choose_option(1, &mut ctx).is_none());
    }
}
