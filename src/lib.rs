// In: src/lib.rs

//! Monster Adventure Battle Engine
//!
//! Turn-based battles between collectible creatures: wild encounters, trainer battles
//! and link battles, plus the progression, item and roster rules around them. Catalog
//! data is authored in RON and embedded at compile time.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod creature;
pub mod errors;
pub mod item_data;
pub mod items;
pub mod move_data;
pub mod player;
pub mod progression;
pub mod save;
pub mod species;
pub mod teams;
pub mod type_chart;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    CreatureType, EvolutionData, EvolutionMethod, Item, ItemCategory, ItemData, Move, MoveData, Species,
    SpeciesData, StatBlock, StatusCondition, StatusEffect,
};

// --- From this crate's modules (`src/`) ---

// Battle sessions and their vocabulary.
pub use battle::engine::{BattleSession, Opponent};
pub use battle::link::{play_link_battle, LinkOutcome, LinkSnapshot};
pub use battle::rng::{RandomSource, ScriptedRng, SeededRng};
pub use battle::state::{BattleAction, BattleConfig, BattleEvent, BattleOutcome, BattlePhase, TurnResult};

// Runtime types outside of a battle.
pub use creature::Creature;
pub use items::{use_item, ItemContext, ItemOutcome, ItemTarget};
pub use player::{Inventory, PlayerProfile, Roster, StoryFlag, Trainer};
pub use progression::{apply_battle_result, OpponentInfo, ProgressionEvent};
pub use save::{CreatureRecord, ProfileRecord};
pub use teams::{create_trainer, roll_encounter, Route, TrainerId};

// Primary data access functions.
pub use item_data::get_item_data;
pub use move_data::get_move_data;
pub use species::get_species_data;
pub use type_chart::type_effectiveness;

// Crate-specific error and result types.
pub use errors::{
    ActionError, BattleEngineError, BattleResult, BattleStateError, ItemDataError, ItemDataResult, MoveDataError,
    MoveDataResult, SpeciesDataError, SpeciesDataResult, TeamDataError, TeamDataResult,
};
