use crate::creature::Creature;
use schema::{Item, Species};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Index, IndexMut};
use strum::{Display, EnumIter, EnumString};

/// Soft cap on the player's active roster; captures beyond it go to storage.
pub const PARTY_LIMIT: usize = 6;

/// Where [`PlayerProfile::add_creature`] put a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Party,
    Storage,
}

/// Story progress markers set by the caller after key battles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum StoryFlag {
    JoeyDefeated,
    Rival1Done,
    Rival2Done,
    GruntDefeated,
    Gym1Beaten,
    RocketDefeated,
}

/// An ordered list of creatures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    creatures: Vec<Creature>,
}

impl Roster {
    pub fn new(creatures: Vec<Creature>) -> Self {
        Roster { creatures }
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Creature> {
        self.creatures.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Creature> {
        self.creatures.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Creature> {
        self.creatures.iter_mut()
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Index of the first creature, in roster order, that can still fight.
    pub fn first_able(&self) -> Option<usize> {
        self.creatures.iter().position(Creature::can_battle)
    }

    pub fn has_able(&self) -> bool {
        self.first_able().is_some()
    }

    pub fn push(&mut self, creature: Creature) {
        self.creatures.push(creature);
    }

    pub fn remove(&mut self, index: usize) -> Option<Creature> {
        (index < self.creatures.len()).then(|| self.creatures.remove(index))
    }

    pub fn heal_all(&mut self) {
        self.creatures.iter_mut().for_each(Creature::restore_fully);
    }
}

impl Index<usize> for Roster {
    type Output = Creature;

    fn index(&self, index: usize) -> &Creature {
        &self.creatures[index]
    }
}

impl IndexMut<usize> for Roster {
    fn index_mut(&mut self, index: usize) -> &mut Creature {
        &mut self.creatures[index]
    }
}

impl From<Vec<Creature>> for Roster {
    fn from(creatures: Vec<Creature>) -> Self {
        Roster::new(creatures)
    }
}

/// Item counts. Entries are always positive; a count reaching zero removes the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: BTreeMap<Item, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item, count: u32) {
        if count == 0 {
            return;
        }
        *self.items.entry(item).or_insert(0) += count;
    }

    pub fn count(&self, item: Item) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: Item) -> bool {
        self.count(item) > 0
    }

    /// Remove one unit. Returns false if there was none to take.
    pub fn take_one(&mut self, item: Item) -> bool {
        match self.items.get_mut(&item) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.items.remove(&item);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Item, u32)> + '_ {
        self.items.iter().map(|(&item, &count)| (item, count))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<(Item, u32)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (Item, u32)>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        for (item, count) in iter {
            inventory.add(item, count);
        }
        inventory
    }
}

/// A non-player opponent: roster plus what beating it is worth.
#[derive(Debug, Clone, PartialEq)]
pub struct Trainer {
    pub name: String,
    pub roster: Roster,
    pub prize: u32,
    pub badge: Option<String>,
    pub story_flag: Option<StoryFlag>,
}

impl Trainer {
    pub fn new(name: impl Into<String>, creatures: Vec<Creature>, prize: u32) -> Self {
        Trainer {
            name: name.into(),
            roster: Roster::new(creatures),
            prize,
            badge: None,
            story_flag: None,
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn with_story_flag(mut self, flag: StoryFlag) -> Self {
        self.story_flag = Some(flag);
        self
    }
}

/// Everything the player owns beyond a single battle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerProfile {
    pub name: String,
    pub rival_name: String,
    pub roster: Roster,
    pub storage: Vec<Creature>,
    pub money: u32,
    pub badges: BTreeSet<String>,
    pub inventory: Inventory,
    pub seen: BTreeSet<Species>,
    pub caught: BTreeSet<Species>,
    pub story_flags: BTreeSet<StoryFlag>,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, rival_name: impl Into<String>) -> Self {
        PlayerProfile {
            name: name.into(),
            rival_name: rival_name.into(),
            ..Default::default()
        }
    }

    /// Add to the roster, or to storage once the roster holds `PARTY_LIMIT` creatures.
    /// The species is recorded as seen and caught either way.
    pub fn add_creature(&mut self, creature: Creature) -> Placement {
        self.mark_caught(creature.species());
        if self.roster.len() < PARTY_LIMIT {
            self.roster.push(creature);
            Placement::Party
        } else {
            self.storage.push(creature);
            Placement::Storage
        }
    }

    pub fn mark_seen(&mut self, species: Species) {
        self.seen.insert(species);
    }

    pub fn mark_caught(&mut self, species: Species) {
        self.seen.insert(species);
        self.caught.insert(species);
    }

    /// Full HP and no status for every creature on the active roster.
    pub fn heal_all(&mut self) {
        self.roster.heal_all();
    }

    pub fn has_flag(&self, flag: StoryFlag) -> bool {
        self.story_flags.contains(&flag)
    }

    pub fn set_flag(&mut self, flag: StoryFlag) {
        self.story_flags.insert(flag);
    }

    /// First roster slot. Its type decides the rival's team.
    pub fn starter(&self) -> Option<&Creature> {
        self.roster.get(0)
    }
}
