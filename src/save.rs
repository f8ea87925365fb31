//! Save records for creatures and player profiles.
//!
//! Records hold only what cannot be derived: stats are recomputed from species and level on
//! load, and the stored `max_hp` is checked against them rather than trusted.

use crate::creature::{experience_threshold, Creature};
use crate::errors::SpeciesDataError;
use crate::player::{Inventory, PlayerProfile, Roster, StoryFlag};
use schema::{Move, Species, StatusCondition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("JSON save error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Binary save error: {0}")]
    Binary(#[from] postcard::Error),
    #[error(transparent)]
    SpeciesData(#[from] SpeciesDataError),
}

pub type SaveResult<T> = Result<T, SaveError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub species: Species,
    pub level: u8,
    pub current_hp: u16,
    pub max_hp: u16,
    pub status: Option<StatusCondition>,
    pub moves: Vec<Move>,
    pub experience: u32,
}

impl Creature {
    pub fn to_record(&self) -> CreatureRecord {
        CreatureRecord {
            species: self.species,
            level: self.level,
            current_hp: self.current_hp,
            max_hp: self.max_hp(),
            status: self.status,
            moves: self.moves.clone(),
            experience: self.experience,
        }
    }

    /// Rebuild a creature from a record.
    ///
    /// HP is clamped to the recomputed max, a creature at 0 HP loses its status, and the
    /// move list keeps at most `MAX_MOVES` unique entries.
    pub fn from_record(record: &CreatureRecord) -> Result<Creature, SpeciesDataError> {
        let mut creature = Creature::new(record.species, record.level)?;
        if record.max_hp != creature.max_hp() {
            warn!(
                species = %record.species,
                stored = record.max_hp,
                derived = creature.max_hp(),
                "stored max HP disagrees with species data"
            );
        }
        creature.set_hp(record.current_hp);
        if let Some(status) = record.status {
            creature.set_status(status);
        }
        if !record.moves.is_empty() {
            creature.replace_moves(&record.moves);
        }
        creature.experience = record.experience;
        creature.experience_to_next = experience_threshold(creature.level);
        Ok(creature)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub rival_name: String,
    pub money: u32,
    pub badges: BTreeSet<String>,
    pub inventory: Inventory,
    pub story_flags: BTreeSet<StoryFlag>,
    pub seen: BTreeSet<Species>,
    pub caught: BTreeSet<Species>,
    pub party: Vec<CreatureRecord>,
    pub storage: Vec<CreatureRecord>,
}

impl ProfileRecord {
    pub fn from_profile(profile: &PlayerProfile) -> Self {
        ProfileRecord {
            name: profile.name.clone(),
            rival_name: profile.rival_name.clone(),
            money: profile.money,
            badges: profile.badges.clone(),
            inventory: profile.inventory.clone(),
            story_flags: profile.story_flags.clone(),
            seen: profile.seen.clone(),
            caught: profile.caught.clone(),
            party: profile.roster.iter().map(Creature::to_record).collect(),
            storage: profile.storage.iter().map(Creature::to_record).collect(),
        }
    }

    pub fn into_profile(self) -> SaveResult<PlayerProfile> {
        let party = self
            .party
            .iter()
            .map(Creature::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        let storage = self
            .storage
            .iter()
            .map(Creature::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = self.seen;
        seen.extend(self.caught.iter().copied());
        Ok(PlayerProfile {
            name: self.name,
            rival_name: self.rival_name,
            roster: Roster::from(party),
            storage,
            money: self.money,
            badges: self.badges,
            inventory: self.inventory,
            seen,
            caught: self.caught,
            story_flags: self.story_flags,
        })
    }

    pub fn to_json(&self) -> SaveResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> SaveResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact binary form.
    pub fn to_bytes(&self) -> SaveResult<Vec<u8>> {
        let bytes = postcard::to_allocvec(self)?;
        debug!(len = bytes.len(), "profile encoded");
        Ok(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> SaveResult<Self> {
        Ok(postcard::from_bytes(bytes)?)
    }
}
