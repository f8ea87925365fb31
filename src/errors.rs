use crate::battle::state::BattlePhase;
use schema::{Item, Move, Species};
use thiserror::Error;

/// Main error type for the Monster Adventure battle engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleEngineError {
    /// Error related to move data lookup or processing
    #[error("Move data error: {0}")]
    MoveData(#[from] MoveDataError),
    /// Error related to species data lookup or processing
    #[error("Species data error: {0}")]
    SpeciesData(#[from] SpeciesDataError),
    /// Error related to item data lookup or processing
    #[error("Item data error: {0}")]
    ItemData(#[from] ItemDataError),
    /// Error related to invalid battle state
    #[error("Battle state error: {0}")]
    BattleState(#[from] BattleStateError),
    /// Error related to invalid player actions
    #[error("Action error: {0}")]
    Action(#[from] ActionError),
}

/// Errors related to move data operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveDataError {
    /// The specified move was not found in the catalog
    #[error("Move not found: {0}")]
    MoveNotFound(Move),
    /// A move name that does not resolve to any move
    #[error("Unknown move: {0}")]
    UnknownMove(String),
    /// Move catalog is malformed or incomplete
    #[error("Malformed move data: {0}")]
    MalformedData(String),
}

/// Errors related to species data operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeciesDataError {
    /// The specified species was not found in the catalog
    #[error("Species not found: {0}")]
    SpeciesNotFound(Species),
    /// A species name that does not resolve to any species
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),
    /// Species catalog is malformed or incomplete
    #[error("Malformed species data: {0}")]
    MalformedData(String),
}

/// Errors related to item data operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemDataError {
    #[error("Item not found: {0}")]
    ItemNotFound(Item),
    #[error("Unknown item: {0}")]
    UnknownItem(String),
    #[error("Malformed item data: {0}")]
    MalformedData(String),
}

/// Errors related to trainer template lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamDataError {
    #[error("Malformed trainer data: {0}")]
    MalformedData(String),
    #[error("No trainer template for {0}")]
    TemplateNotFound(String),
    #[error(transparent)]
    SpeciesData(#[from] SpeciesDataError),
}

/// Errors related to battle state validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleStateError {
    /// A side has no creature able to fight when the battle starts
    #[error("No combat-capable creature for {0}")]
    NoCombatCapableCreature(String),
    /// The battle already finished and accepts no further actions
    #[error("The battle has already finished")]
    BattleFinished,
    /// Action submitted while the session is in a phase that cannot take it
    #[error("Action not accepted during {0:?}")]
    UnexpectedPhase(BattlePhase),
}

/// Errors related to player actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The active creature does not know the requested move
    #[error("{species} does not know {move_}")]
    MoveNotKnown { species: Species, move_: Move },
    /// Roster index is out of bounds
    #[error("Invalid roster index: {0}")]
    InvalidRosterIndex(usize),
    /// Switch target cannot battle
    #[error("{0} has fainted and cannot battle")]
    TargetFainted(Species),
    /// Switch target is the creature already in battle
    #[error("{0} is already in battle")]
    AlreadyActive(Species),
    /// A fainted creature must be replaced before anything else happens
    #[error("A replacement must be sent out first")]
    ReplacementRequired,
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using MoveDataError
pub type MoveDataResult<T> = Result<T, MoveDataError>;

/// Type alias for Results using SpeciesDataError
pub type SpeciesDataResult<T> = Result<T, SpeciesDataError>;

/// Type alias for Results using ItemDataError
pub type ItemDataResult<T> = Result<T, ItemDataError>;

pub type TeamDataResult<T> = Result<T, TeamDataError>;
