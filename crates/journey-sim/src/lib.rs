//! Journey Through Scripture — headless session driver.
//!
//! Builds a character and an enemy from configuration and plays one
//! encounter to the end with a simple autopilot, pacing the enemy's
//! counter-moves the way the game's presentation layer does.

pub mod config;
pub mod error;
pub mod session;
