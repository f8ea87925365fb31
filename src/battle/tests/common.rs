use crate::battle::rng::ScriptedRng;
use crate::creature::Creature;
use crate::errors::BattleResult;
use crate::player::{PlayerProfile, Trainer};
use schema::{Item, Move, Species, StatusCondition};

/// A builder for creating test creatures with common defaults.
///
/// # Example
/// ```ignore
/// let creature = TestCreatureBuilder::new(Species::Zappet, 5)
///     .with_moves(vec![Move::Tackle])
///     .with_status(StatusCondition::Paralyzed)
///     .build();
/// ```
pub struct TestCreatureBuilder {
    species: Species,
    level: u8,
    moves: Option<Vec<Move>>,
    status: Option<StatusCondition>,
    current_hp: Option<u16>,
}

impl TestCreatureBuilder {
    pub fn new(species: Species, level: u8) -> Self {
        Self {
            species,
            level,
            moves: None,
            status: None,
            current_hp: None,
        }
    }

    /// Replaces the learnset-derived moves.
    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = Some(moves);
        self
    }

    pub fn with_status(mut self, status: StatusCondition) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn build(self) -> Creature {
        let mut creature = match Creature::new(self.species, self.level) {
            Ok(creature) => creature,
            Err(err) => panic!("Failed to create {:?}: {}", self.species, err),
        };
        if let Some(moves) = self.moves {
            creature.replace_moves(&moves);
        }
        if let Some(hp) = self.current_hp {
            creature.set_hp(hp);
        }
        if let Some(status) = self.status {
            creature.set_status(status);
        }
        creature
    }
}

pub fn creature(species: Species, level: u8) -> Creature {
    TestCreatureBuilder::new(species, level).build()
}

/// A player profile holding `roster` and the given items.
pub fn create_test_profile(roster: Vec<Creature>, items: &[(Item, u32)]) -> PlayerProfile {
    let mut profile = PlayerProfile::new("Red", "Blue");
    for creature in roster {
        profile.add_creature(creature);
    }
    for &(item, count) in items {
        profile.inventory.add(item, count);
    }
    profile
}

pub fn create_test_trainer(name: &str, roster: Vec<Creature>) -> Trainer {
    Trainer::new(name, roster, 100)
}

/// Every draw is 0.5: hits land, variance is mid-range, catches and effects fail.
pub fn predictable_rng() -> ScriptedRng {
    ScriptedRng::new(vec![0.5; 100])
}

pub fn scripted(values: &[f64]) -> ScriptedRng {
    ScriptedRng::new(values.to_vec())
}

/// Helper function to assert that a Result is Ok and return the value.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}

/// Every creature satisfies `hp <= max_hp` and "fainted means no status".
pub fn assert_creature_invariants(creature: &Creature) {
    assert!(
        creature.current_hp() <= creature.max_hp(),
        "{} has {} HP over max {}",
        creature.species(),
        creature.current_hp(),
        creature.max_hp()
    );
    if creature.is_fainted() {
        assert_eq!(creature.status(), None, "fainted {} kept a status", creature.species());
    }
}
