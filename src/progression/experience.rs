use super::ProgressionEvent;
use crate::creature::{experience_threshold, Creature, MAX_LEVEL};
use crate::errors::SpeciesDataResult;
use crate::species::get_species_data;
use tracing::debug;

/// What a call to [`Creature::gain_experience`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceGain {
    pub leveled_up: bool,
    pub events: Vec<ProgressionEvent>,
}

impl ExperienceGain {
    pub fn messages(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

impl Creature {
    /// Add experience and process every level-up it pays for.
    ///
    /// Each level raises current HP by the max-HP gain, learns that level's moves, and
    /// evolves if the species evolves at exactly that level; the evolved species' moves for
    /// the same level are learned afterwards.
    pub fn gain_experience(&mut self, amount: u32) -> SpeciesDataResult<ExperienceGain> {
        let mut gain = ExperienceGain::default();
        self.experience = self.experience.saturating_add(amount);

        while self.level < MAX_LEVEL && self.experience >= self.experience_to_next {
            self.experience -= self.experience_to_next;
            self.level += 1;
            gain.leveled_up = true;

            let data = get_species_data(self.species)?;
            let old_max = self.stats.hp;
            self.refresh_stats(data);
            let delta = self.stats.hp.saturating_sub(old_max);
            self.current_hp = self.current_hp.saturating_add(delta).min(self.stats.hp);
            gain.events.push(ProgressionEvent::LeveledUp {
                species: self.species,
                level: self.level,
            });

            for &move_ in data.learns_at_level(self.level) {
                gain.events.extend(self.learn_move(move_));
            }

            if let Some(into) = data.evolves_at_level(self.level) {
                gain.events.push(self.evolve(into)?);
                let evolved = get_species_data(into)?;
                for &move_ in evolved.learns_at_level(self.level) {
                    gain.events.extend(self.learn_move(move_));
                }
            }

            self.experience_to_next = experience_threshold(self.level);
            debug!(species = %self.species, level = self.level, "level up");
        }

        Ok(gain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::{Move, Species};

    #[test]
    fn test_gain_below_threshold_only_accumulates() {
        let mut wingon = Creature::new(Species::Wingon, 3).unwrap();
        let gain = wingon.gain_experience(79).unwrap();
        assert!(!gain.leveled_up);
        assert!(gain.events.is_empty());
        assert_eq!(wingon.experience(), 79);
        assert_eq!(wingon.level(), 3);
    }

    #[test]
    fn test_level_up_preserves_hp_lost() {
        let mut slimer = Creature::new(Species::Slimer, 6).unwrap();
        slimer.take_damage(10);
        let lost_before = slimer.max_hp() - slimer.current_hp();

        let gain = slimer.gain_experience(experience_threshold(6)).unwrap();
        assert!(gain.leveled_up);
        assert_eq!(slimer.level(), 7);
        assert_eq!(slimer.max_hp() - slimer.current_hp(), lost_before);
        assert_eq!(
            gain.messages(),
            vec!["Slimer leveled up to level 7!", "Slimer learned Sludge!"]
        );
        assert_eq!(slimer.experience(), 0);
        assert_eq!(slimer.experience_to_next(), experience_threshold(7));
    }

    #[test]
    fn test_level_ten_learns_then_evolves() {
        let mut pyron = Creature::new(Species::Pyron, 9).unwrap();
        let gain = pyron.gain_experience(experience_threshold(9)).unwrap();

        assert_eq!(
            gain.events,
            vec![
                ProgressionEvent::LeveledUp {
                    species: Species::Pyron,
                    level: 10
                },
                ProgressionEvent::LearnedMove {
                    species: Species::Pyron,
                    learned: Move::Flamethrower
                },
                ProgressionEvent::Evolved {
                    from: Species::Pyron,
                    into: Species::Pyronite
                },
            ]
        );
        assert_eq!(pyron.species(), Species::Pyronite);
        assert_eq!(pyron.max_hp(), 35 + 9 * 6);
        assert_eq!(pyron.current_hp(), pyron.max_hp());
        assert_eq!(pyron.moves(), &[Move::Tackle, Move::Ember, Move::Flamethrower]);
    }

    #[test]
    fn test_multiple_levels_in_one_call() {
        let mut rattatak = Creature::new(Species::Rattatak, 5).unwrap();
        let total = experience_threshold(5) + experience_threshold(6) + experience_threshold(7) + 5;
        let gain = rattatak.gain_experience(total).unwrap();

        assert_eq!(rattatak.level(), 8);
        assert_eq!(rattatak.species(), Species::Rattitan);
        assert_eq!(rattatak.experience(), 5);
        assert_eq!(
            gain.messages(),
            vec![
                "Rattatak leveled up to level 6!",
                "Rattatak leveled up to level 7!",
                "Rattatak learned Bite!",
                "Rattatak leveled up to level 8!",
                "Rattatak evolved into Rattitan!",
            ]
        );
    }

    #[test]
    fn test_fainted_creature_gains_the_hp_growth() {
        let mut geon = Creature::new(Species::Geon, 4).unwrap();
        let growth = Creature::new(Species::Geon, 5).unwrap().max_hp() - geon.max_hp();
        geon.faint();

        geon.gain_experience(experience_threshold(4)).unwrap();
        assert_eq!(geon.level(), 5);
        assert_eq!(growth, 6);
        assert_eq!(geon.current_hp(), 6);
        assert!(!geon.is_fainted());
    }

    #[test]
    fn test_level_cap_stops_leveling() {
        let mut wingon = Creature::new(Species::Wingon, MAX_LEVEL).unwrap();
        let gain = wingon.gain_experience(10_000).unwrap();
        assert!(!gain.leveled_up);
        assert_eq!(wingon.level(), MAX_LEVEL);
    }
}
