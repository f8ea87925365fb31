use crate::{CreatureType, StatusEffect};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Move {
    Tackle,
    Ember,
    #[strum(to_string = "Water Gun")]
    WaterGun,
    #[strum(to_string = "Vine Whip")]
    VineWhip,
    Flamethrower,
    Bubble,
    #[strum(to_string = "Razor Leaf")]
    RazorLeaf,
    #[strum(to_string = "Thunder Shock")]
    ThunderShock,
    Thunderbolt,
    #[strum(to_string = "Thunder Wave")]
    ThunderWave,
    #[strum(to_string = "Rock Throw")]
    RockThrow,
    #[strum(to_string = "Poison Sting")]
    PoisonSting,
    Sludge,
    #[strum(to_string = "Quick Attack")]
    QuickAttack,
    Gust,
    Bite,
    #[strum(to_string = "Hydro Pump")]
    HydroPump,
    #[strum(to_string = "Stun Spore")]
    StunSpore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub move_type: CreatureType,
    pub power: u16,
    /// Probability in [0, 1] that the move connects.
    pub accuracy: f64,
    #[serde(default)]
    pub effect: Option<StatusEffect>,
    /// Probability in [0, 1] that `effect` lands on a hit.
    #[serde(default)]
    pub effect_chance: f64,
}
