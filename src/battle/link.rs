use crate::battle::engine::BattleSession;
use crate::battle::rng::RandomSource;
use crate::battle::state::BattleAction;
use crate::errors::BattleResult;
use crate::player::{PlayerProfile, Roster};
use schema::StatusCondition;
use tracing::{info, warn};

/// A link battle that runs this many turns without a result is called a draw.
pub const MAX_LINK_TURNS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    Won,
    Lost,
    Draw,
}

/// HP and status of every roster creature on both sides, in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSnapshot {
    first: Vec<(u16, Option<StatusCondition>)>,
    second: Vec<(u16, Option<StatusCondition>)>,
}

fn capture_roster(roster: &Roster) -> Vec<(u16, Option<StatusCondition>)> {
    roster.iter().map(|c| (c.current_hp(), c.status())).collect()
}

fn restore_roster(roster: &mut Roster, saved: &[(u16, Option<StatusCondition>)]) {
    for (creature, &(hp, status)) in roster.iter_mut().zip(saved) {
        creature.current_hp = hp.min(creature.max_hp());
        creature.status = if creature.current_hp == 0 { None } else { status };
    }
}

impl LinkSnapshot {
    pub fn capture(first: &PlayerProfile, second: &PlayerProfile) -> Self {
        Self {
            first: capture_roster(&first.roster),
            second: capture_roster(&second.roster),
        }
    }

    pub fn restore(&self, first: &mut PlayerProfile, second: &mut PlayerProfile) {
        restore_roster(&mut first.roster, &self.first);
        restore_roster(&mut second.roster, &self.second);
    }
}

/// Run a link battle between two profiles and roll both rosters back afterwards.
///
/// `driver` picks `first`'s action each turn; `second` plays its moves at random through the
/// engine. The snapshot is restored whether the battle finishes, hits the turn limit, or
/// the driver or engine returns an error.
pub fn play_link_battle<R, F>(
    first: &mut PlayerProfile,
    second: &mut PlayerProfile,
    rng: R,
    mut driver: F,
) -> BattleResult<LinkOutcome>
where
    R: RandomSource,
    F: FnMut(&BattleSession<'_, R>) -> BattleResult<BattleAction>,
{
    let snapshot = LinkSnapshot::capture(first, second);
    let result = run_link_session(first, second, rng, &mut driver).map(|()| {
        match (first.roster.has_able(), second.roster.has_able()) {
            (true, false) => LinkOutcome::Won,
            (false, true) => LinkOutcome::Lost,
            _ => LinkOutcome::Draw,
        }
    });
    snapshot.restore(first, second);

    match &result {
        Ok(outcome) => info!(?outcome, "link battle finished, rosters restored"),
        Err(err) => warn!(%err, "link battle aborted, rosters restored"),
    }
    result
}

fn run_link_session<R, F>(first: &mut PlayerProfile, second: &mut PlayerProfile, rng: R, driver: &mut F) -> BattleResult<()>
where
    R: RandomSource,
    F: FnMut(&BattleSession<'_, R>) -> BattleResult<BattleAction>,
{
    let name = second.name.clone();
    let mut session = BattleSession::start_link(first, name, &mut second.roster, rng)?;
    while !session.finished() && session.turn() < MAX_LINK_TURNS {
        let action = driver(&session)?;
        session.submit_action(action)?;
    }
    Ok(())
}
