use crate::creature::Creature;
use crate::items::ItemEvent;
use std::fmt;

/// Why a ball cannot be thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchError {
    /// Balls only work inside a battle.
    NotInBattle,
    /// The opponent belongs to a trainer.
    OwnedByTrainer,
    /// No opponent, or it has already fainted.
    NoValidTarget,
}

impl CatchError {
    pub fn to_item_event(self) -> ItemEvent {
        match self {
            CatchError::NotInBattle => ItemEvent::CannotUseHere,
            CatchError::OwnedByTrainer => ItemEvent::NotYourCreature,
            CatchError::NoValidTarget => ItemEvent::NoBallTarget,
        }
    }
}

impl fmt::Display for CatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_item_event())
    }
}

/// Check a ball throw and return the creature it would be thrown at.
pub fn can_attempt_catch(
    in_battle: bool,
    wild: bool,
    target: Option<&Creature>,
) -> Result<&Creature, CatchError> {
    if !in_battle {
        return Err(CatchError::NotInBattle);
    }
    if !wild {
        return Err(CatchError::OwnedByTrainer);
    }
    match target {
        Some(creature) if creature.can_battle() => Ok(creature),
        _ => Err(CatchError::NoValidTarget),
    }
}
