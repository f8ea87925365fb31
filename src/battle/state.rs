use crate::items::{ItemEvent, ItemTarget};
use crate::progression::ProgressionEvent;
use schema::{Item, Move, Species, StatusCondition};
use std::fmt;

/// Chance that a paralyzed creature loses its action for the turn.
pub const PARALYSIS_SKIP_CHANCE: f64 = 0.25;
/// Experience awarded per level of a fainted opponent.
pub const EXPERIENCE_PER_LEVEL: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleKind {
    Wild,
    Trainer,
}

/// How a session is set up.
///
/// A link battle pits two player profiles against each other: no experience is awarded
/// and the caller rolls both rosters back afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleConfig {
    pub kind: BattleKind,
    pub link: bool,
}

impl BattleConfig {
    pub fn wild() -> Self {
        Self {
            kind: BattleKind::Wild,
            link: false,
        }
    }

    pub fn trainer() -> Self {
        Self {
            kind: BattleKind::Trainer,
            link: false,
        }
    }

    pub fn link() -> Self {
        Self {
            kind: BattleKind::Trainer,
            link: true,
        }
    }

    pub fn is_wild(&self) -> bool {
        self.kind == BattleKind::Wild
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    Intro,
    AwaitingAction,
    ResolvingTurn,
    /// The player's active creature fainted and a `Switch` must come next.
    AwaitingReplacement,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Won,
    Lost,
    Escaped,
    Captured,
}

impl BattleOutcome {
    /// Captures count as wins; escapes do not.
    pub fn is_win(&self) -> bool {
        matches!(self, BattleOutcome::Won | BattleOutcome::Captured)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// One player decision per turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BattleAction {
    Fight(Move),
    /// Balls default to the opponent when no target is given.
    UseItem(Item, Option<ItemTarget>),
    /// Roster index of the creature to send in.
    Switch(usize),
    Run,
}

/// Something that happened during a battle. `Display` gives the log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    // Intro
    WildAppeared(Species),
    TrainerChallenge {
        trainer: String,
    },
    TrainerSentOut {
        trainer: String,
        species: Species,
    },
    PlayerSentOut(Species),

    // Player actions
    Withdrew(Species),
    SwitchedIn(Species),
    GotAway,
    CouldNotEscape,
    CannotRunFromTrainer,

    // Moves
    FullyParalyzed(Species),
    MoveUsed {
        species: Species,
        move_used: Move,
    },
    MoveMissed,
    DamageDealt(u16),
    SuperEffective,
    NotVeryEffective,
    StatusInflicted {
        species: Species,
        status: StatusCondition,
    },
    StatusDamage {
        species: Species,
        status: StatusCondition,
    },

    // Fainting and rewards
    PlayerFainted(Species),
    OutOfCreatures,
    OpponentFainted(Species),
    ExperienceGained(u32),
    Progression(ProgressionEvent),
    TrainerDefeated,

    Item(ItemEvent),
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::WildAppeared(species) => write!(f, "A wild {} appeared!", species),
            BattleEvent::TrainerChallenge { trainer } => write!(f, "{} wants to battle!", trainer),
            BattleEvent::TrainerSentOut { trainer, species } => {
                write!(f, "{} sent out {}!", trainer, species)
            }
            BattleEvent::PlayerSentOut(species) => write!(f, "Go! {}!", species),
            BattleEvent::Withdrew(species) => write!(f, "Come back, {}!", species),
            BattleEvent::SwitchedIn(species) => write!(f, "Go, {}!", species),
            BattleEvent::GotAway => write!(f, "Got away safely!"),
            BattleEvent::CouldNotEscape => write!(f, "Couldn't escape!"),
            BattleEvent::CannotRunFromTrainer => write!(f, "You can't run from a trainer battle!"),
            BattleEvent::FullyParalyzed(species) => {
                write!(f, "{} is paralyzed and can't move!", species)
            }
            BattleEvent::MoveUsed { species, move_used } => write!(f, "{} used {}!", species, move_used),
            BattleEvent::MoveMissed => write!(f, "But it missed!"),
            BattleEvent::DamageDealt(damage) => write!(f, "It did {} damage.", damage),
            BattleEvent::SuperEffective => write!(f, "It's super effective!"),
            BattleEvent::NotVeryEffective => write!(f, "It's not very effective..."),
            BattleEvent::StatusInflicted { species, status } => write!(f, "{} was {}!", species, status),
            BattleEvent::StatusDamage { species, status } => match status {
                StatusCondition::Burned => write!(f, "{} is hurt by its burn!", species),
                _ => write!(f, "{} is hurt by poison!", species),
            },
            BattleEvent::PlayerFainted(species) => write!(f, "Your {} fainted!", species),
            BattleEvent::OutOfCreatures => write!(f, "You have no more Pokemon!"),
            BattleEvent::OpponentFainted(species) => write!(f, "{} fainted!", species),
            BattleEvent::ExperienceGained(amount) => write!(f, "Gained {} XP.", amount),
            BattleEvent::Progression(event) => write!(f, "{}", event),
            BattleEvent::TrainerDefeated => write!(f, "You won the battle!"),
            BattleEvent::Item(event) => write!(f, "{}", event),
        }
    }
}

/// Ordered events produced during one call into the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = BattleEvent>) {
        self.events.extend(events);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn take(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn logs(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "{}", event)?;
        }
        Ok(())
    }
}

/// What one submitted action produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    pub ended: bool,
    pub events: Vec<BattleEvent>,
}

impl TurnResult {
    pub fn logs(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}
