//! Creature growth: move learning, evolution and experience, plus the caller-side
//! reward rules applied once a battle is over.

pub mod evolution;
pub mod experience;
pub mod moves;
pub mod rewards;

use schema::{Move, Species};
use std::fmt;

pub use experience::ExperienceGain;
pub use rewards::{apply_battle_result, OpponentInfo, RewardEvent};

/// Something that happened to a creature while it grew, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressionEvent {
    LeveledUp {
        species: Species,
        level: u8,
    },
    LearnedMove {
        species: Species,
        learned: Move,
    },
    ReplacedMove {
        species: Species,
        forgotten: Move,
        learned: Move,
    },
    Evolved {
        from: Species,
        into: Species,
    },
}

impl fmt::Display for ProgressionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressionEvent::LeveledUp { species, level } => {
                write!(f, "{} leveled up to level {}!", species, level)
            }
            ProgressionEvent::LearnedMove { species, learned } => {
                write!(f, "{} learned {}!", species, learned)
            }
            ProgressionEvent::ReplacedMove { species, forgotten, learned } => {
                write!(f, "{} forgot {} and learned {}!", species, forgotten, learned)
            }
            ProgressionEvent::Evolved { from, into } => write!(f, "{} evolved into {}!", from, into),
        }
    }
}
