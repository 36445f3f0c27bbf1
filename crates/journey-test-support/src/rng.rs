//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use journey_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min` for `next_u32_range` and `0.0` for
/// `next_f64`. Suitable for tests that do not depend on specific random values.
///
/// Note that `0.0` makes every probability check succeed (a critical-hit
/// roll of `0.0 < chance` is a hit whenever the chance is positive).
#[derive(Debug, Clone, Copy, Default)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that replays predetermined sequences. Panics if a sequence is
/// exhausted. Used in tests that need specific, repeatable outcomes (turn
/// order tie-breaks, critical-hit rolls).
///
/// Integer and float draws come from independent queues.
#[derive(Debug, Clone, Default)]
pub struct SequenceRng {
    ints: Vec<u32>,
    int_index: usize,
    floats: Vec<f64>,
    float_index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` that replays the given integers.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            ints: values,
            ..Self::default()
        }
    }

    /// Create a new `SequenceRng` that replays the given floats.
    #[must_use]
    pub fn from_floats(values: Vec<f64>) -> Self {
        Self {
            floats: values,
            ..Self::default()
        }
    }

    /// Appends floats to the replay queue.
    #[must_use]
    pub fn with_floats(mut self, values: Vec<f64>) -> Self {
        self.floats.extend(values);
        self
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let val = self.ints[self.int_index];
        self.int_index += 1;
        val
    }

    fn next_f64(&mut self) -> f64 {
        let val = self.floats[self.float_index];
        self.float_index += 1;
        val
    }
}
