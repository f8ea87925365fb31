use super::ProgressionEvent;
use crate::creature::{Creature, MAX_MOVES};
use schema::Move;

impl Creature {
    /// Teach a move. Known moves are ignored; with all slots full the oldest-learned move
    /// (index 0) is forgotten and the new one goes to the end.
    pub fn learn_move(&mut self, move_: Move) -> Option<ProgressionEvent> {
        let species = self.species;
        match self.push_move(move_)? {
            Some(forgotten) => Some(ProgressionEvent::ReplacedMove {
                species,
                forgotten,
                learned: move_,
            }),
            None => Some(ProgressionEvent::LearnedMove {
                species,
                learned: move_,
            }),
        }
    }

    /// Same queue rules as [`Creature::learn_move`], without reporting anything.
    pub(crate) fn learn_move_silently(&mut self, move_: Move) {
        self.push_move(move_);
    }

    /// `None` if already known, otherwise `Some(evicted move, if any)`.
    fn push_move(&mut self, move_: Move) -> Option<Option<Move>> {
        if self.moves.contains(&move_) {
            return None;
        }
        let forgotten = if self.moves.len() >= MAX_MOVES {
            Some(self.moves.remove(0))
        } else {
            None
        };
        self.moves.push(move_);
        Some(forgotten)
    }
}
