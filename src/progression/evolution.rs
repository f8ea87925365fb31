use super::ProgressionEvent;
use crate::creature::Creature;
use crate::errors::SpeciesDataResult;
use crate::species::get_species_data;
use schema::{Item, Species};
use tracing::debug;

impl Creature {
    /// Become `into` at the same level.
    ///
    /// Current HP keeps its ratio to max HP, rounded down but never below 1, so a fainted
    /// creature comes out of evolution with 1 HP.
    pub fn evolve(&mut self, into: Species) -> SpeciesDataResult<ProgressionEvent> {
        let data = get_species_data(into)?;
        let from = self.species;
        let old_max = u32::from(self.stats.hp);
        let old_current = u32::from(self.current_hp);

        self.species = into;
        self.refresh_stats(data);
        let new_max = u32::from(self.stats.hp);

        self.current_hp = if old_max == 0 {
            self.stats.hp
        } else {
            let scaled = (old_current * new_max / old_max).max(1);
            u16::try_from(scaled.min(new_max)).unwrap_or(self.stats.hp)
        };

        debug!(%from, %into, hp = self.current_hp, max_hp = self.stats.hp, "evolved");
        Ok(ProgressionEvent::Evolved { from, into })
    }

    /// Species this creature becomes when `item` is used on it, if any.
    pub fn evolution_for_item(&self, item: Item) -> SpeciesDataResult<Option<Species>> {
        Ok(get_species_data(self.species)?.evolves_with_item(item))
    }
}
