use crate::errors::{MoveDataError, MoveDataResult};
use schema::{Move, MoveData};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

const MOVE_CATALOG: &str = include_str!("../data/moves.ron");

// Global move data storage - parsed once on first lookup
static MOVE_DATA: LazyLock<Result<HashMap<Move, MoveData>, MoveDataError>> =
    LazyLock::new(|| parse_move_catalog(MOVE_CATALOG));

/// Parse a RON move catalog into a lookup table.
pub fn parse_move_catalog(source: &str) -> MoveDataResult<HashMap<Move, MoveData>> {
    let table: HashMap<Move, MoveData> =
        ron::from_str(source).map_err(|e| MoveDataError::MalformedData(e.to_string()))?;
    for (move_, data) in &table {
        if !(0.0..=1.0).contains(&data.accuracy) || !(0.0..=1.0).contains(&data.effect_chance) {
            return Err(MoveDataError::MalformedData(format!(
                "{} has a probability outside [0, 1]",
                move_
            )));
        }
    }
    tracing::debug!(moves = table.len(), "move catalog loaded");
    Ok(table)
}

/// Get move data for a specific move from the global store
pub fn get_move_data(move_: Move) -> MoveDataResult<&'static MoveData> {
    let table = MOVE_DATA.as_ref().map_err(Clone::clone)?;
    table.get(&move_).ok_or(MoveDataError::MoveNotFound(move_))
}

/// Resolve a display name such as "Water Gun".
pub fn parse_move(name: &str) -> MoveDataResult<Move> {
    Move::from_str(name).map_err(|_| MoveDataError::UnknownMove(name.to_string()))
}
