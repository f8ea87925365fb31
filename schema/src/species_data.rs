use crate::{CreatureType, Item, Move};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Species {
    Pyron,
    Pyronite,
    Aquade,
    Aquaria,
    Florin,
    Florac,
    Zappet,
    Zapton,
    Geon,
    Geodon,
    Wingon,
    Slimer,
    Rattatak,
    Rattitan,
}

/// Four combat stats. Used both for level-1 base values and per-level growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
}

impl StatBlock {
    /// Stats at `level`: `base + (level - 1) * growth`, field by field.
    pub fn at_level(&self, growth: &StatBlock, level: u8) -> StatBlock {
        let steps = u16::from(level.saturating_sub(1));
        StatBlock {
            hp: self.hp.saturating_add(steps.saturating_mul(growth.hp)),
            attack: self.attack.saturating_add(steps.saturating_mul(growth.attack)),
            defense: self.defense.saturating_add(steps.saturating_mul(growth.defense)),
            speed: self.speed.saturating_add(steps.saturating_mul(growth.speed)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvolutionMethod {
    Level(u8),
    Item(Item),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionData {
    pub evolves_into: Species,
    pub method: EvolutionMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub creature_type: CreatureType,
    pub base_stats: StatBlock,
    pub growth: StatBlock,
    /// level -> moves learned on reaching that level, iterated in ascending order
    pub learnset: BTreeMap<u8, Vec<Move>>,
    #[serde(default)]
    pub evolution: Option<EvolutionData>,
}

impl SpeciesData {
    pub fn stats_at(&self, level: u8) -> StatBlock {
        self.base_stats.at_level(&self.growth, level)
    }

    pub fn learns_at_level(&self, level: u8) -> &[Move] {
        self.learnset.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Target species when this species evolves on reaching exactly `level`.
    pub fn evolves_at_level(&self, level: u8) -> Option<Species> {
        match &self.evolution {
            Some(EvolutionData {
                evolves_into,
                method: EvolutionMethod::Level(required),
            }) if *required == level => Some(*evolves_into),
            _ => None,
        }
    }

    /// Target species when `item` is used on this species.
    pub fn evolves_with_item(&self, item: Item) -> Option<Species> {
        match &self.evolution {
            Some(EvolutionData {
                evolves_into,
                method: EvolutionMethod::Item(required),
            }) if *required == item => Some(*evolves_into),
            _ => None,
        }
    }
}
