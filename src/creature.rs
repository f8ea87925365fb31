use crate::errors::SpeciesDataResult;
use crate::species::{get_species_data, parse_species};
use schema::{CreatureType, Move, Species, SpeciesData, StatBlock, StatusCondition};

/// Most moves a creature can know at once.
pub const MAX_MOVES: usize = 4;
/// Creatures stop gaining levels here.
pub const MAX_LEVEL: u8 = 100;

/// Experience needed to advance from `level` to the next one.
pub fn experience_threshold(level: u8) -> u32 {
    50 + 10 * u32::from(level)
}

/// A single combat-capable creature.
///
/// Stats are derived from the current species and level and are recomputed whenever
/// either changes. HP and status are private so that `0 <= current_hp <= max_hp` and
/// "fainted implies no status" hold for every value observable from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub(crate) species: Species,
    pub(crate) level: u8,
    pub(crate) creature_type: CreatureType,
    pub(crate) stats: StatBlock,
    pub(crate) current_hp: u16,
    pub(crate) status: Option<StatusCondition>,
    pub(crate) moves: Vec<Move>,
    pub(crate) experience: u32,
    pub(crate) experience_to_next: u32,
}

impl Creature {
    /// Create a creature at `level` with full HP and the moves its species learns by then.
    pub fn new(species: Species, level: u8) -> SpeciesDataResult<Self> {
        let data = get_species_data(species)?;
        let level = level.clamp(1, MAX_LEVEL);
        let stats = data.stats_at(level);

        let mut creature = Creature {
            species,
            level,
            creature_type: data.creature_type,
            stats,
            current_hp: stats.hp,
            status: None,
            moves: Vec::with_capacity(MAX_MOVES),
            experience: 0,
            experience_to_next: experience_threshold(level),
        };

        // BTreeMap iteration is ascending by level.
        for moves_at_level in data.learnset.range(..=level).map(|(_, moves)| moves) {
            for &move_ in moves_at_level {
                creature.learn_move_silently(move_);
            }
        }

        Ok(creature)
    }

    /// Create a creature from a species display name.
    pub fn from_name(species_name: &str, level: u8) -> SpeciesDataResult<Self> {
        Self::new(parse_species(species_name)?, level)
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn creature_type(&self) -> CreatureType {
        self.creature_type
    }

    pub fn stats(&self) -> StatBlock {
        self.stats
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn attack(&self) -> u16 {
        self.stats.attack
    }

    pub fn defense(&self) -> u16 {
        self.stats.defense
    }

    pub fn speed(&self) -> u16 {
        self.stats.speed
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    pub fn status(&self) -> Option<StatusCondition> {
        self.status
    }

    /// Known moves, oldest-learned first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn knows_move(&self, move_: Move) -> bool {
        self.moves.contains(&move_)
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn experience_to_next(&self) -> u32 {
        self.experience_to_next
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    pub fn can_battle(&self) -> bool {
        self.current_hp > 0
    }

    /// Remaining HP as a fraction of max HP.
    pub fn hp_ratio(&self) -> f64 {
        if self.stats.hp == 0 {
            return 0.0;
        }
        f64::from(self.current_hp) / f64::from(self.stats.hp)
    }

    /// Subtract damage, stopping at zero. Returns the HP actually lost.
    ///
    /// Reaching zero does not clear status by itself; the battle's faint handling does that
    /// through [`Creature::faint`].
    pub fn take_damage(&mut self, damage: u16) -> u16 {
        let lost = damage.min(self.current_hp);
        self.current_hp -= lost;
        lost
    }

    /// Restore HP up to max. Returns the HP actually gained.
    pub fn heal(&mut self, amount: u16) -> u16 {
        let before = self.current_hp;
        self.current_hp = self.current_hp.saturating_add(amount).min(self.stats.hp);
        self.current_hp - before
    }

    /// Set HP directly, clamped to `0..=max_hp`. Setting zero also clears status.
    pub fn set_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(self.stats.hp);
        if self.current_hp == 0 {
            self.status = None;
        }
    }

    pub fn set_hp_to_max(&mut self) {
        self.current_hp = self.stats.hp;
    }

    /// Apply a status. Fainted creatures never hold one; returns whether it was applied.
    pub fn set_status(&mut self, status: StatusCondition) -> bool {
        if self.is_fainted() {
            return false;
        }
        self.status = Some(status);
        true
    }

    /// Remove any status, returning what was removed.
    pub fn cure_status(&mut self) -> Option<StatusCondition> {
        self.status.take()
    }

    /// HP to zero and status cleared.
    pub fn faint(&mut self) {
        self.current_hp = 0;
        self.status = None;
    }

    /// Full HP, no status. Used by healing centres and trainer battle setup.
    pub fn restore_fully(&mut self) {
        self.current_hp = self.stats.hp;
        self.status = None;
    }

    /// Recompute type and derived stats for the current species and level.
    pub(crate) fn refresh_stats(&mut self, data: &SpeciesData) {
        self.creature_type = data.creature_type;
        self.stats = data.stats_at(self.level);
    }

    /// Replace the move list wholesale, keeping the most recent `MAX_MOVES` unique entries.
    pub(crate) fn replace_moves(&mut self, moves: &[Move]) {
        self.moves.clear();
        for &move_ in moves {
            self.learn_move_silently(move_);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_construct_derives_stats_from_base_and_growth() {
        let pyron = Creature::new(Species::Pyron, 5).unwrap();
        assert_eq!(pyron.max_hp(), 20 + 4 * 5);
        assert_eq!(pyron.attack(), 12 + 4 * 3);
        assert_eq!(pyron.defense(), 10 + 4 * 2);
        assert_eq!(pyron.speed(), 10 + 4 * 2);
        assert_eq!(pyron.current_hp(), pyron.max_hp());
        assert_eq!(pyron.status(), None);
        assert_eq!(pyron.experience(), 0);
        assert_eq!(pyron.experience_to_next(), 100);
        assert_eq!(pyron.creature_type(), CreatureType::Fire);
    }

    #[test]
    fn test_construct_learns_moves_up_to_level() {
        let florin = Creature::new(Species::Florin, 8).unwrap();
        assert_eq!(florin.moves(), &[Move::Tackle, Move::VineWhip, Move::RazorLeaf]);

        let florin = Creature::new(Species::Florin, 4).unwrap();
        assert_eq!(florin.moves(), &[Move::Tackle]);
    }

    #[test]
    fn test_construct_fills_all_four_slots() {
        let aquade = Creature::new(Species::Aquade, 10).unwrap();
        assert_eq!(
            aquade.moves(),
            &[Move::Tackle, Move::WaterGun, Move::Bubble, Move::HydroPump]
        );
    }

    #[test]
    fn test_unknown_species_name_fails_construction() {
        let err = Creature::from_name("Missingno", 5).unwrap_err();
        assert_eq!(
            err,
            crate::errors::SpeciesDataError::UnknownSpecies("Missingno".to_string())
        );
        assert!(Creature::from_name("Geon", 5).is_ok());
    }

    #[test]
    fn test_heavy_damage_floors_hp_at_zero() {
        let mut pyron = Creature::new(Species::Pyron, 5).unwrap();
        pyron.gain_experience(100 + 110 + 120 + 130).unwrap();
        assert_eq!(pyron.level(), 9);
        assert_eq!(pyron.max_hp(), 60);
        pyron.set_status(StatusCondition::Burned);

        let lost = pyron.take_damage(140);
        assert_eq!(lost, 60);
        assert_eq!(pyron.current_hp(), 0);
        pyron.faint();
        assert!(pyron.is_fainted());
        assert_eq!(pyron.status(), None);
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let mut geon = Creature::new(Species::Geon, 3).unwrap();
        geon.take_damage(10);
        assert_eq!(geon.heal(50), 10);
        assert_eq!(geon.current_hp(), geon.max_hp());
    }

    #[test]
    fn test_fainted_creature_cannot_take_status() {
        let mut slimer = Creature::new(Species::Slimer, 3).unwrap();
        slimer.set_hp(0);
        assert!(!slimer.set_status(StatusCondition::Poisoned));
        assert_eq!(slimer.status(), None);
    }

    #[test]
    fn test_set_hp_clamps_and_clears_status_at_zero() {
        let mut wingon = Creature::new(Species::Wingon, 3).unwrap();
        wingon.set_hp(999);
        assert_eq!(wingon.current_hp(), wingon.max_hp());
        wingon.set_status(StatusCondition::Paralyzed);
        wingon.set_hp(0);
        assert_eq!(wingon.status(), None);
    }
}
