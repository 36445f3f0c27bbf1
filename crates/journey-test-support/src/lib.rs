//! Shared test doubles for the Journey Through Scripture game core.

mod clock;
mod rng;

pub use clock::{FixedClock, fixed_clock};
pub use rng::{MockRng, SequenceRng};
