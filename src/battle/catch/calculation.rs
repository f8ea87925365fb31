use crate::battle::rng::RandomSource;
use crate::creature::Creature;

const MIN_CATCH_CHANCE: f64 = 0.05;
const MAX_CATCH_CHANCE: f64 = 0.95;

/// Probability that a ball catches a target at `hp_ratio` of its max HP.
///
/// Formula: `(0.8 * (1 - hp_ratio) + 0.1) * catch_rate`, clamped to `[0.05, 0.95]`.
pub fn catch_chance(hp_ratio: f64, catch_rate: f64) -> f64 {
    let chance = (0.8 * (1.0 - hp_ratio) + 0.1) * catch_rate;
    chance.clamp(MIN_CATCH_CHANCE, MAX_CATCH_CHANCE)
}

pub fn calculate_catch_chance(target: &Creature, catch_rate: f64) -> f64 {
    catch_chance(target.hp_ratio(), catch_rate)
}

/// Roll against the catch chance. Returns true if the catch succeeds.
pub fn roll_catch_success<R: RandomSource + ?Sized>(chance: f64, rng: &mut R) -> bool {
    rng.next_f64("catch roll") < chance
}
