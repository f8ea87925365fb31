use crate::battle::rng::RandomSource;
use crate::creature::Creature;
use crate::errors::{TeamDataError, TeamDataResult};
use crate::player::{PlayerProfile, StoryFlag, Trainer};
use schema::{CreatureType, Species};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, trace};

const TRAINER_CATALOG: &str = include_str!("../data/trainers.ron");

static TRAINER_DATA: LazyLock<Result<HashMap<TrainerId, TrainerTemplate>, TeamDataError>> =
    LazyLock::new(|| {
        ron::from_str(TRAINER_CATALOG).map_err(|e| TeamDataError::MalformedData(e.to_string()))
    });

/// Chance that exploring a route turns up a wild creature.
pub const ENCOUNTER_CHANCE: f64 = 0.7;

/// Every scripted trainer in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display, EnumString, EnumIter)]
pub enum TrainerId {
    YoungsterJoey,
    RocketGrunt,
    GymLeaderRocky,
    RivalFirst,
    RivalSecond,
    RocketBoss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LineStage {
    Base,
    Evolved,
}

/// One team slot: a fixed species, or the line that beats the player's starter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TeamSlot {
    Fixed(Species),
    RivalLine(LineStage),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrainerTemplate {
    /// `None` means the trainer is the player's rival and takes the rival's name.
    #[serde(default)]
    pub name: Option<String>,
    pub team: Vec<(TeamSlot, u8)>,
    pub prize: u32,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub story_flag: Option<StoryFlag>,
}

pub fn get_trainer_template(id: TrainerId) -> TeamDataResult<&'static TrainerTemplate> {
    let table = TRAINER_DATA.as_ref().map_err(Clone::clone)?;
    table
        .get(&id)
        .ok_or_else(|| TeamDataError::TemplateNotFound(id.to_string()))
}

/// The evolution line with a type advantage over `starter`, as (base, evolved).
///
/// Starters that are not Fire, Water or Grass are treated as Fire.
pub fn counter_line(starter: CreatureType) -> (Species, Species) {
    match starter {
        CreatureType::Water => (Species::Florin, Species::Florac),
        CreatureType::Grass => (Species::Pyron, Species::Pyronite),
        _ => (Species::Aquade, Species::Aquaria),
    }
}

impl TrainerTemplate {
    fn resolve(&self, slot: TeamSlot, starter: CreatureType) -> Species {
        match slot {
            TeamSlot::Fixed(species) => species,
            TeamSlot::RivalLine(stage) => {
                let (base, evolved) = counter_line(starter);
                match stage {
                    LineStage::Base => base,
                    LineStage::Evolved => evolved,
                }
            }
        }
    }

    /// Build a fresh trainer for `profile`. Rival lines follow the profile's starter.
    pub fn build(&self, profile: &PlayerProfile) -> TeamDataResult<Trainer> {
        let starter = profile
            .starter()
            .map(Creature::creature_type)
            .unwrap_or(CreatureType::Fire);
        let creatures = self
            .team
            .iter()
            .map(|&(slot, level)| Creature::new(self.resolve(slot, starter), level))
            .collect::<Result<Vec<_>, _>>()?;

        let name = self.name.clone().unwrap_or_else(|| profile.rival_name.clone());
        let mut trainer = Trainer::new(name, creatures, self.prize);
        if let Some(badge) = &self.badge {
            trainer = trainer.with_badge(badge.clone());
        }
        if let Some(flag) = self.story_flag {
            trainer = trainer.with_story_flag(flag);
        }
        debug!(trainer = %trainer.name, creatures = trainer.roster.len(), "trainer built");
        Ok(trainer)
    }
}

/// Look up and build a trainer in one step.
pub fn create_trainer(id: TrainerId, profile: &PlayerProfile) -> TeamDataResult<Trainer> {
    get_trainer_template(id)?.build(profile)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum Route {
    #[strum(to_string = "Route 1")]
    Route1,
    #[strum(to_string = "Route 2")]
    Route2,
}

/// Species and inclusive level range a route can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncounterTable {
    pub species: &'static [Species],
    pub min_level: u8,
    pub max_level: u8,
}

impl Route {
    pub fn encounter_table(self) -> EncounterTable {
        match self {
            Route::Route1 => EncounterTable {
                species: &[Species::Rattatak, Species::Wingon],
                min_level: 2,
                max_level: 3,
            },
            Route::Route2 => EncounterTable {
                species: &[Species::Zappet, Species::Slimer],
                min_level: 5,
                max_level: 6,
            },
        }
    }
}

/// Explore `route` once. Draws the encounter check, then species, then level.
pub fn roll_encounter<R: RandomSource + ?Sized>(route: Route, rng: &mut R) -> TeamDataResult<Option<Creature>> {
    if rng.next_f64("encounter check") >= ENCOUNTER_CHANCE {
        trace!(%route, "no encounter");
        return Ok(None);
    }
    let table = route.encounter_table();
    let species = table.species[rng.next_index(table.species.len(), "encounter species")];
    let span = usize::from(table.max_level - table.min_level) + 1;
    let offset = rng.next_index(span, "encounter level");
    // `offset < span`, and span fits in a u8 by construction.
    let level = table.min_level + offset as u8;
    debug!(%route, %species, level, "wild encounter");
    Ok(Some(Creature::new(species, level)?))
}
