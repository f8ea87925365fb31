use crate::StatusCondition;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Item {
    Pokeball,
    Potion,
    #[strum(to_string = "Super Potion")]
    SuperPotion,
    Antidote,
    #[strum(to_string = "Paralyze Heal")]
    ParalyzeHeal,
    #[strum(to_string = "Thunder Stone")]
    ThunderStone,
    Nugget,
}

/// What an item does, with the parameters that only make sense for that kind of item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemCategory {
    /// Capture device; `catch_rate` multiplies the base catch chance.
    Ball { catch_rate: f64 },
    Heal { amount: u16 },
    StatusCure { cures: StatusCondition },
    /// Triggers an item evolution on species that declare this item.
    Evolution,
    /// Sell-only; has no use.
    Valuable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    pub price: u32,
    pub category: ItemCategory,
}
