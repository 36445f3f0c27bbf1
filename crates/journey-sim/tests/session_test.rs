//! Integration tests for the headless session driver.

use std::time::Duration;

use journey_combat::Side;
use journey_core::rng::SeededRng;
use journey_sim::config::SimConfig;
use journey_sim::error::AppError;
use journey_sim::session::run_session;
use journey_test_support::{MockRng, fixed_clock};

fn config(creature: &str) -> SimConfig {
    SimConfig {
        player_name: "Deborah".to_owned(),
        player_class: "warrior".to_owned(),
        creature: creature.to_owned(),
        enemy_delay: Duration::ZERO,
        ..SimConfig::default()
    }
}

#[tokio::test]
async fn test_warrior_defeats_orc_and_is_rewarded() {
    // Arrange
    let config = config("orc");
    let mut rng = MockRng;

    // Act
    let report = run_session(&config, &fixed_clock(), &mut rng).await.unwrap();

    // Assert
    assert_eq!(report.winner, Some(Side::Player));
    assert!(!report.status.combat_active);
    assert_eq!(report.status.enemy_health, 0);
    assert_eq!(report.sheet.level, 2);
    assert_eq!(report.sheet.currency, 50);
    assert!(
        report
            .status
            .log
            .last()
            .is_some_and(|line| line.starts_with("Victory!"))
    );
    assert!(report.events_published >= 3);
}

#[tokio::test]
async fn test_seeded_sessions_are_repeatable() {
    let config = SimConfig {
        rng_seed: Some(7),
        ..config("demon")
    };

    let first = run_session(&config, &fixed_clock(), &mut SeededRng::from_seed_u64(7))
        .await
        .unwrap();
    let second = run_session(&config, &fixed_clock(), &mut SeededRng::from_seed_u64(7))
        .await
        .unwrap();

    assert_eq!(first.winner, second.winner);
    assert_eq!(first.status.log, second.status.log);
    assert_eq!(first.sheet, second.sheet);
}

#[tokio::test]
async fn test_round_limit_stops_an_unfinished_encounter() {
    let config = SimConfig {
        max_rounds: 1,
        ..config("leviathan")
    };

    let report = run_session(&config, &fixed_clock(), &mut MockRng).await.unwrap();

    assert_eq!(report.winner, None);
    assert!(report.status.combat_active);
    assert_eq!(report.status.round, 1);
}

#[tokio::test]
async fn test_unknown_creature_is_a_domain_error() {
    let result = run_session(&config("pharaoh"), &fixed_clock(), &mut MockRng).await;

    assert!(matches!(result, Err(AppError::Domain(_))));
}

#[tokio::test]
async fn test_unknown_class_is_a_domain_error() {
    let config = SimConfig {
        player_class: "wizard".to_owned(),
        ..config("orc")
    };

    let result = run_session(&config, &fixed_clock(), &mut MockRng).await;

    assert!(matches!(result, Err(AppError::Domain(_))));
}
