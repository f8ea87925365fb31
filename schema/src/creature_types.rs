use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Elemental type of a species or a move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum CreatureType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Rock,
    Flying,
    Poison,
    Dark,
}

/// A persistent status ailment. A creature holds at most one at a time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum StatusCondition {
    #[strum(to_string = "poisoned")]
    Poisoned,
    #[strum(to_string = "paralyzed")]
    Paralyzed,
    #[strum(to_string = "burned")]
    Burned,
}

impl StatusCondition {
    /// Whether the ailment deals damage at the end of every turn.
    pub fn deals_residual_damage(&self) -> bool {
        matches!(self, StatusCondition::Poisoned | StatusCondition::Burned)
    }
}

/// The secondary effect a move may inflict on the defender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum StatusEffect {
    #[strum(to_string = "poison")]
    Poison,
    #[strum(to_string = "burn")]
    Burn,
    #[strum(to_string = "paralyze")]
    Paralyze,
}

impl StatusEffect {
    /// The status a creature ends up holding once the effect lands.
    pub fn inflicted_status(&self) -> StatusCondition {
        match self {
            StatusEffect::Poison => StatusCondition::Poisoned,
            StatusEffect::Burn => StatusCondition::Burned,
            StatusEffect::Paralyze => StatusCondition::Paralyzed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_effect_names_map_to_status_names() {
        assert_eq!(StatusEffect::Poison.inflicted_status().to_string(), "poisoned");
        assert_eq!(StatusEffect::Burn.inflicted_status().to_string(), "burned");
        assert_eq!(StatusEffect::Paralyze.inflicted_status().to_string(), "paralyzed");
    }

    #[test]
    fn test_status_parses_from_display_name() {
        assert_eq!(StatusCondition::from_str("paralyzed"), Ok(StatusCondition::Paralyzed));
        assert!(StatusCondition::from_str("asleep").is_err());
    }

    #[test]
    fn test_only_poison_and_burn_tick() {
        assert!(StatusCondition::Poisoned.deals_residual_damage());
        assert!(StatusCondition::Burned.deals_residual_damage());
        assert!(!StatusCondition::Paralyzed.deals_residual_damage());
    }
}
