//! Command handlers for the Quests context.
//!
//! These functions are the only write path from quest logic into a
//! character: the ledger decides, then the character is credited.

use journey_character::Character;
use journey_core::clock::Clock;

use crate::domain::aggregates::QuestLedger;
use crate::domain::catalog::Reward;

/// Starts a quest in the ledger and records it on the character.
///
/// Returns `false` if the ledger refused the quest.
pub fn start_quest(
    ledger: &mut QuestLedger,
    character: &mut Character,
    quest_id: &str,
    clock: &dyn Clock,
) -> bool {
    if !ledger.start_quest(quest_id, clock) {
        return false;
    }
    character.mark_quest_active(quest_id);
    true
}

/// Completes a quest and credits its reward to the character.
///
/// Experience goes through `gain_xp`, so a large reward can level the
/// character up several times. Returns `None` without touching the
/// character if the quest is unknown or already complete.
pub fn complete_and_reward(
    ledger: &mut QuestLedger,
    character: &mut Character,
    quest_id: &str,
    clock: &dyn Clock,
) -> Option<Reward> {
    let reward = ledger.complete_quest(quest_id, clock)?;
    character.gain_xp(reward.xp);
    character.credit_currency(reward.gold);
    character.mark_quest_completed(quest_id);
    tracing::info!(
        character = %character.name(),
        quest_id,
        xp = reward.xp,
        gold = reward.gold,
        "quest reward credited"
    );
    Some(reward)
}

#[cfg(test)]
mod tests {
    use journey_character::Character;
    use journey_test_support::fixed_clock;
    use uuid::Uuid;

    use crate::application::command_handlers::{complete_and_reward, start_quest};
    use crate::domain::aggregates::QuestLedger;
    use crate::domain::catalog::Reward;

    #[test]
    fn test_complete_and_reward_credits_xp_and_currency_once() {
        // Arrange
        let clock = fixed_clock();
        let mut ledger = QuestLedger::new(Uuid::new_v4());
        let mut character = Character::new("Ruth", "shepherd").unwrap();
        start_quest(&mut ledger, &mut character, "defeat_deceiver", &clock);

        // Act
        let first = complete_and_reward(&mut ledger, &mut character, "defeat_deceiver", &clock);
        let second = complete_and_reward(&mut ledger, &mut character, "defeat_deceiver", &clock);

        // Assert
        assert_eq!(first, Some(Reward { xp: 200, gold: 100 }));
        assert_eq!(second, None);
        assert_eq!(character.level(), 2);
        assert_eq!(character.xp(), 100);
        assert_eq!(character.currency(), 100);
        assert!(character.completed_quests().contains("defeat_deceiver"));
        assert!(character.active_quests().is_empty());
    }

    #[test]
    fn test_start_quest_records_on_character_only_when_accepted() {
        let clock = fixed_clock();
        let mut ledger = QuestLedger::new(Uuid::new_v4());
        let mut character = Character::new("Ruth", "shepherd").unwrap();

        assert!(start_quest(&mut ledger, &mut character, "find_truth", &clock));
        assert!(!start_quest(&mut ledger, &mut character, "part_red_sea", &clock));

        assert_eq!(character.active_quests().len(), 1);
        assert!(character.active_quests().contains("find_truth"));
    }

    #[test]
    fn test_unknown_quest_leaves_character_untouched() {
        let clock = fixed_clock();
        let mut ledger = QuestLedger::new(Uuid::new_v4());
        let mut character = Character::new("Ruth", "shepherd").unwrap();

        let reward = complete_and_reward(&mut ledger, &mut character, "part_red_sea", &clock);

        assert_eq!(reward, None);
        assert_eq!(character.xp(), 0);
        assert_eq!(character.currency(), 0);
        assert!(character.completed_quests().is_empty());
    }
}
