use crate::battle::state::BattleOutcome;
use crate::player::{PlayerProfile, StoryFlag, Trainer};
use std::fmt;
use tracing::info;

/// What the caller needs to know about the other side to settle a finished battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpponentInfo {
    Wild,
    Trainer {
        name: String,
        prize: u32,
        badge: Option<String>,
        story_flag: Option<StoryFlag>,
    },
    /// Another player's roster. Nothing is won or lost.
    Link,
}

impl From<&Trainer> for OpponentInfo {
    fn from(trainer: &Trainer) -> Self {
        OpponentInfo::Trainer {
            name: trainer.name.clone(),
            prize: trainer.prize,
            badge: trainer.badge.clone(),
            story_flag: trainer.story_flag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewardEvent {
    DefeatedWild,
    DefeatedTrainer(String),
    PrizeMoney(u32),
    Badge(String),
    Defeated,
    DroppedMoney(u32),
}

impl fmt::Display for RewardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewardEvent::DefeatedWild => write!(f, "You defeated the wild Pokemon!"),
            RewardEvent::DefeatedTrainer(name) => write!(f, "You defeated {}!", name),
            RewardEvent::PrizeMoney(amount) => write!(f, "You received ${} for winning!", amount),
            RewardEvent::Badge(badge) => write!(f, "You received the {}!", badge),
            RewardEvent::Defeated => write!(f, "You were defeated..."),
            RewardEvent::DroppedMoney(amount) => write!(f, "You dropped ${} in panic!", amount),
        }
    }
}

/// Settle money, badges, story flags and the whiteout heal after a battle.
///
/// Escapes, captures and link battles change nothing here. A loss halves the player's
/// money and heals the whole roster.
pub fn apply_battle_result(
    profile: &mut PlayerProfile,
    opponent: &OpponentInfo,
    outcome: BattleOutcome,
) -> Vec<RewardEvent> {
    let mut events = Vec::new();
    match (outcome, opponent) {
        (_, OpponentInfo::Link) | (BattleOutcome::Escaped | BattleOutcome::Captured, _) => {}

        (BattleOutcome::Lost, _) => {
            events.push(RewardEvent::Defeated);
            let lost = profile.money / 2;
            if lost > 0 {
                profile.money -= lost;
                events.push(RewardEvent::DroppedMoney(lost));
            }
            profile.heal_all();
            info!(lost, money = profile.money, "whiteout");
        }

        (BattleOutcome::Won, OpponentInfo::Wild) => events.push(RewardEvent::DefeatedWild),

        (
            BattleOutcome::Won,
            OpponentInfo::Trainer {
                name,
                prize,
                badge,
                story_flag,
            },
        ) => {
            events.push(RewardEvent::DefeatedTrainer(name.clone()));
            if *prize > 0 {
                profile.money = profile.money.saturating_add(*prize);
                events.push(RewardEvent::PrizeMoney(*prize));
            }
            if let Some(badge) = badge {
                if profile.badges.insert(badge.clone()) {
                    events.push(RewardEvent::Badge(badge.clone()));
                }
            }
            if let Some(flag) = story_flag {
                profile.set_flag(*flag);
            }
            info!(trainer = %name, prize, money = profile.money, "trainer defeated");
        }
    }
    events
}
