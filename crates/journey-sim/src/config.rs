//! Session configuration read from the environment.

use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

/// Settings for one simulated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Character name.
    pub player_name: String,
    /// Class archetype name.
    pub player_class: String,
    /// Bestiary kind of the enemy.
    pub creature: String,
    /// Enemy level, at least 1.
    pub creature_level: u32,
    /// Seed for the session RNG. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
    /// Pause before each enemy counter-move.
    pub enemy_delay: Duration,
    /// Round limit after which the session stops.
    pub max_rounds: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            player_name: "Pilgrim".to_owned(),
            player_class: "prophet".to_owned(),
            creature: "orc".to_owned(),
            creature_level: 1,
            rng_seed: None,
            enemy_delay: Duration::from_millis(1000),
            max_rounds: 100,
        }
    }
}

impl SimConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds a malformed value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from a variable lookup. Unset variables
    /// take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds a malformed value or
    /// the creature level is 0.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let creature_level =
            parsed(&lookup, "JOURNEY_CREATURE_LEVEL")?.unwrap_or(defaults.creature_level);
        if creature_level == 0 {
            return Err(AppError::Config(
                "JOURNEY_CREATURE_LEVEL must be at least 1".to_owned(),
            ));
        }

        Ok(Self {
            player_name: lookup("JOURNEY_PLAYER_NAME").unwrap_or(defaults.player_name),
            player_class: lookup("JOURNEY_PLAYER_CLASS").unwrap_or(defaults.player_class),
            creature: lookup("JOURNEY_CREATURE").unwrap_or(defaults.creature),
            creature_level,
            rng_seed: parsed(&lookup, "JOURNEY_RNG_SEED")?,
            enemy_delay: parsed(&lookup, "JOURNEY_ENEMY_DELAY_MS")?
                .map_or(defaults.enemy_delay, Duration::from_millis),
            max_rounds: parsed(&lookup, "JOURNEY_MAX_ROUNDS")?.unwrap_or(defaults.max_rounds),
        })
    }
}

fn parsed<F, T>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| AppError::Config(format!("{key} must be a valid number: {e}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = SimConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config, SimConfig::default());
        assert_eq!(config.enemy_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_reads_every_variable() {
        // Arrange
        let lookup = lookup_from(&[
            ("JOURNEY_PLAYER_NAME", "Deborah"),
            ("JOURNEY_PLAYER_CLASS", "warrior"),
            ("JOURNEY_CREATURE", "demon"),
            ("JOURNEY_CREATURE_LEVEL", "3"),
            ("JOURNEY_RNG_SEED", "42"),
            ("JOURNEY_ENEMY_DELAY_MS", "0"),
            ("JOURNEY_MAX_ROUNDS", "12"),
        ]);

        // Act
        let config = SimConfig::from_lookup(lookup).unwrap();

        // Assert
        assert_eq!(config.player_name, "Deborah");
        assert_eq!(config.player_class, "warrior");
        assert_eq!(config.creature, "demon");
        assert_eq!(config.creature_level, 3);
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.enemy_delay, Duration::ZERO);
        assert_eq!(config.max_rounds, 12);
    }

    #[test]
    fn test_malformed_number_is_a_config_error() {
        let lookup = lookup_from(&[("JOURNEY_MAX_ROUNDS", "many")]);

        let err = SimConfig::from_lookup(lookup).unwrap_err();

        match err {
            AppError::Config(message) => assert!(message.contains("JOURNEY_MAX_ROUNDS")),
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[test]
    fn test_creature_level_zero_is_rejected() {
        let lookup = lookup_from(&[("JOURNEY_CREATURE_LEVEL", "0")]);

        assert!(matches!(
            SimConfig::from_lookup(lookup),
            Err(AppError::Config(_))
        ));
    }
}
