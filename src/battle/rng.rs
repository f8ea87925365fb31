use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

/// Every random decision the engine and item resolver make goes through this trait, so a
/// battle can be replayed exactly from a seed or a scripted list of draws.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`. `reason` names the decision for tracing.
    fn next_f64(&mut self, reason: &str) -> f64;

    /// Uniform index in `0..len`. Returns 0 without drawing when `len` is 0.
    fn next_index(&mut self, len: usize, reason: &str) -> usize {
        if len == 0 {
            return 0;
        }
        let scaled = (self.next_f64(reason) * len as f64) as usize;
        scaled.min(len - 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self, reason: &str) -> f64 {
        (**self).next_f64(reason)
    }

    fn next_index(&mut self, len: usize, reason: &str) -> usize {
        (**self).next_index(len, reason)
    }
}

/// Reproducible random source backed by ChaCha8.
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: ChaCha8Rng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl RandomSource for SeededRng {
    fn next_f64(&mut self, reason: &str) -> f64 {
        let value: f64 = self.rng.random();
        trace!(value, reason, "rng draw");
        value
    }
}

/// Replays a fixed list of draws in order. Panics when the list runs out, naming the
/// decision that asked for one more value.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    outcomes: Vec<f64>,
    index: usize,
}

impl ScriptedRng {
    pub fn new(outcomes: Vec<f64>) -> Self {
        Self { outcomes, index: 0 }
    }

    /// How many draws have been consumed so far.
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl RandomSource for ScriptedRng {
    fn next_f64(&mut self, reason: &str) -> f64 {
        let Some(&outcome) = self.outcomes.get(self.index) else {
            panic!(
                "ScriptedRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        };
        trace!(value = outcome, reason, "scripted rng draw");
        self.index += 1;
        outcome
    }
}
