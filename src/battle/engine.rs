use crate::battle::calculators::{calculate_damage, effectiveness_event};
use crate::battle::rng::RandomSource;
use crate::battle::state::{
    BattleAction, BattleConfig, BattleEvent, BattleKind, BattleOutcome, BattlePhase, EventBus, Side, TurnResult,
    EXPERIENCE_PER_LEVEL, PARALYSIS_SKIP_CHANCE,
};
use crate::battle::stats::{escape_chance, move_hits, player_moves_first, residual_damage};
use crate::creature::Creature;
use crate::errors::{ActionError, BattleResult, BattleStateError};
use crate::items::{use_item, ItemContext};
use crate::move_data::get_move_data;
use crate::player::{PlayerProfile, Roster, Trainer};
use crate::type_chart::type_effectiveness;
use schema::{Move, StatusCondition};
use tracing::{debug, info};

/// The other side of a battle.
#[derive(Debug)]
pub enum Opponent<'a> {
    /// A lone wild creature, owned by the session until it is caught or the battle ends.
    Wild(Creature),
    /// A trainer's roster, borrowed so damage persists on the trainer afterwards.
    Trainer { name: String, roster: &'a mut Roster },
}

impl Opponent<'_> {
    fn creature(&self, index: usize) -> &Creature {
        match self {
            Opponent::Wild(creature) => creature,
            Opponent::Trainer { roster, .. } => &roster[index],
        }
    }

    fn creature_mut(&mut self, index: usize) -> &mut Creature {
        match self {
            Opponent::Wild(creature) => creature,
            Opponent::Trainer { roster, .. } => &mut roster[index],
        }
    }

    fn kind(&self) -> BattleKind {
        match self {
            Opponent::Wild(_) => BattleKind::Wild,
            Opponent::Trainer { .. } => BattleKind::Trainer,
        }
    }
}

/// One encounter, from the intro lines to a finished outcome.
///
/// The session borrows the player's profile for its lifetime and owns the random source.
/// [`BattleSession::submit_action`] is the only way to advance it.
pub struct BattleSession<'a, R: RandomSource> {
    player: &'a mut PlayerProfile,
    opponent: Opponent<'a>,
    config: BattleConfig,
    rng: R,
    player_active: usize,
    opponent_active: usize,
    phase: BattlePhase,
    outcome: Option<BattleOutcome>,
    turn: u32,
    log: EventBus,
}

impl<'a, R: RandomSource> BattleSession<'a, R> {
    pub fn start_wild(player: &'a mut PlayerProfile, wild: Creature, rng: R) -> BattleResult<Self> {
        Self::start(player, Opponent::Wild(wild), false, rng)
    }

    pub fn start_trainer(player: &'a mut PlayerProfile, trainer: &'a mut Trainer, rng: R) -> BattleResult<Self> {
        let opponent = Opponent::Trainer {
            name: trainer.name.clone(),
            roster: &mut trainer.roster,
        };
        Self::start(player, opponent, false, rng)
    }

    /// Battle against another player's roster. No experience is awarded.
    pub fn start_link(
        player: &'a mut PlayerProfile,
        opponent_name: impl Into<String>,
        opponent_roster: &'a mut Roster,
        rng: R,
    ) -> BattleResult<Self> {
        let opponent = Opponent::Trainer {
            name: opponent_name.into(),
            roster: opponent_roster,
        };
        Self::start(player, opponent, true, rng)
    }

    /// Pick both active creatures, heal a trainer's fainted creatures, and write the intro.
    pub fn start(player: &'a mut PlayerProfile, mut opponent: Opponent<'a>, link: bool, rng: R) -> BattleResult<Self> {
        let config = BattleConfig {
            kind: opponent.kind(),
            link,
        };

        if let Opponent::Trainer { roster, .. } = &mut opponent {
            for creature in roster.iter_mut().filter(|c| c.is_fainted()) {
                creature.restore_fully();
            }
        }

        let player_active = player
            .roster
            .first_able()
            .ok_or_else(|| BattleStateError::NoCombatCapableCreature(player.name.clone()))?;
        let opponent_active = match &opponent {
            Opponent::Wild(creature) if creature.can_battle() => 0,
            Opponent::Wild(creature) => {
                return Err(BattleStateError::NoCombatCapableCreature(creature.species().to_string()).into())
            }
            Opponent::Trainer { name, roster } => roster
                .first_able()
                .ok_or_else(|| BattleStateError::NoCombatCapableCreature(name.clone()))?,
        };

        let mut log = EventBus::new();
        let opponent_species = opponent.creature(opponent_active).species();
        match &opponent {
            Opponent::Wild(_) => log.push(BattleEvent::WildAppeared(opponent_species)),
            Opponent::Trainer { name, .. } => {
                log.push(BattleEvent::TrainerChallenge { trainer: name.clone() });
                log.push(BattleEvent::TrainerSentOut {
                    trainer: name.clone(),
                    species: opponent_species,
                });
            }
        }
        log.push(BattleEvent::PlayerSentOut(player.roster[player_active].species()));
        player.mark_seen(opponent_species);

        info!(kind = ?config.kind, link, opponent = %opponent_species, "battle started");

        Ok(Self {
            player,
            opponent,
            config,
            rng,
            player_active,
            opponent_active,
            phase: BattlePhase::Intro,
            outcome: None,
            turn: 0,
            log,
        })
    }

    pub fn config(&self) -> BattleConfig {
        self.config
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    pub fn finished(&self) -> bool {
        self.phase == BattlePhase::Finished
    }

    /// True once the battle finished as a win or a capture.
    pub fn won(&self) -> bool {
        self.outcome.is_some_and(|outcome| outcome.is_win())
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Events from the intro, or from the most recent action.
    pub fn log(&self) -> &[BattleEvent] {
        self.log.events()
    }

    pub fn logs(&self) -> Vec<String> {
        self.log.logs()
    }

    pub fn player(&self) -> &PlayerProfile {
        self.player
    }

    pub fn player_active_index(&self) -> usize {
        self.player_active
    }

    pub fn player_active(&self) -> &Creature {
        &self.player.roster[self.player_active]
    }

    pub fn opponent_active(&self) -> &Creature {
        self.opponent.creature(self.opponent_active)
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn into_rng(self) -> R {
        self.rng
    }

    fn creature(&self, side: Side) -> &Creature {
        match side {
            Side::Player => &self.player.roster[self.player_active],
            Side::Opponent => self.opponent.creature(self.opponent_active),
        }
    }

    fn creature_mut(&mut self, side: Side) -> &mut Creature {
        match side {
            Side::Player => &mut self.player.roster[self.player_active],
            Side::Opponent => self.opponent.creature_mut(self.opponent_active),
        }
    }

    /// Advance the battle by one player decision.
    ///
    /// Contract violations (unknown move, bad switch target, acting after the end, anything
    /// but a switch while a replacement is pending) are rejected before any state changes.
    pub fn submit_action(&mut self, action: BattleAction) -> BattleResult<TurnResult> {
        match self.phase {
            BattlePhase::Finished => return Err(BattleStateError::BattleFinished.into()),
            BattlePhase::ResolvingTurn => return Err(BattleStateError::UnexpectedPhase(self.phase).into()),
            BattlePhase::AwaitingReplacement if !matches!(action, BattleAction::Switch(_)) => {
                return Err(ActionError::ReplacementRequired.into())
            }
            _ => {}
        }
        self.validate_action(action)?;

        self.log.clear();
        if self.phase == BattlePhase::AwaitingReplacement {
            if let BattleAction::Switch(index) = action {
                self.send_in_replacement(index);
            }
        } else {
            self.turn += 1;
            self.phase = BattlePhase::ResolvingTurn;
            debug!(turn = self.turn, ?action, "resolving turn");
            self.resolve_turn(action)?;
            if self.phase == BattlePhase::ResolvingTurn {
                self.phase = BattlePhase::AwaitingAction;
            }
        }

        Ok(TurnResult {
            ended: self.finished(),
            events: self.log.events().to_vec(),
        })
    }

    fn validate_action(&self, action: BattleAction) -> BattleResult<()> {
        match action {
            BattleAction::Fight(move_) => {
                let active = self.player_active();
                if !active.knows_move(move_) {
                    return Err(ActionError::MoveNotKnown {
                        species: active.species(),
                        move_,
                    }
                    .into());
                }
            }
            BattleAction::Switch(index) => {
                let target = self
                    .player
                    .roster
                    .get(index)
                    .ok_or(ActionError::InvalidRosterIndex(index))?;
                if target.is_fainted() {
                    return Err(ActionError::TargetFainted(target.species()).into());
                }
                if index == self.player_active {
                    return Err(ActionError::AlreadyActive(target.species()).into());
                }
            }
            BattleAction::UseItem(..) | BattleAction::Run => {}
        }
        Ok(())
    }

    fn send_in_replacement(&mut self, index: usize) {
        self.player_active = index;
        let species = self.player_active().species();
        self.log.push(BattleEvent::SwitchedIn(species));
        self.phase = BattlePhase::AwaitingAction;
        debug!(%species, "replacement sent in");
    }

    fn resolve_turn(&mut self, action: BattleAction) -> BattleResult<()> {
        match action {
            BattleAction::Run => {
                if self.config.is_wild() {
                    let chance = escape_chance(self.player_active().speed(), self.opponent_active().speed());
                    if self.rng.next_f64("escape roll") < chance {
                        self.log.push(BattleEvent::GotAway);
                        self.finish(BattleOutcome::Escaped);
                        return Ok(());
                    }
                    self.log.push(BattleEvent::CouldNotEscape);
                } else {
                    self.log.push(BattleEvent::CannotRunFromTrainer);
                }
            }
            BattleAction::Switch(index) => {
                let outgoing = self.player_active().species();
                self.player_active = index;
                self.log.push(BattleEvent::Withdrew(outgoing));
                self.log.push(BattleEvent::SwitchedIn(self.player_active().species()));
            }
            BattleAction::UseItem(item, target) => {
                let context = ItemContext::battle(self.config.is_wild());
                let opponent = self.opponent.creature(self.opponent_active);
                let outcome = use_item(self.player, item, target, context, Some(opponent), &mut self.rng)?;
                self.log.extend(outcome.events.into_iter().map(BattleEvent::Item));
                if outcome.captured {
                    self.finish(BattleOutcome::Captured);
                    return Ok(());
                }
            }
            BattleAction::Fight(_) => {}
        }

        let opponent_move = self.choose_opponent_move();
        let player_index = self.player_active;
        let opponent_index = self.opponent_active;

        if let BattleAction::Fight(player_move) = action {
            let (first, second) = if player_moves_first(self.player_active().speed(), self.opponent_active().speed()) {
                (Side::Player, Side::Opponent)
            } else {
                (Side::Opponent, Side::Player)
            };
            let move_for = |side: Side| match side {
                Side::Player => Some(player_move),
                Side::Opponent => opponent_move,
            };
            debug!(?first, "turn order");

            self.execute_move(first, move_for(first))?;
            if self.creature(second).is_fainted() {
                self.handle_faint(second)?;
                if self.finished() {
                    return Ok(());
                }
            } else {
                self.execute_move(second, move_for(second))?;
                if self.creature(first).is_fainted() {
                    self.handle_faint(first)?;
                    if self.finished() {
                        return Ok(());
                    }
                }
            }
        } else if self.opponent_active().can_battle() {
            self.execute_move(Side::Opponent, opponent_move)?;
            if self.player_active().is_fainted() {
                self.handle_faint(Side::Player)?;
                if self.finished() {
                    return Ok(());
                }
            }
        }

        // Residual damage only hits the creatures that fought this turn; one that was
        // replaced after fainting has no status left to tick.
        if self.player_active == player_index {
            self.apply_residual_damage(Side::Player)?;
            if self.finished() {
                return Ok(());
            }
        }
        if self.opponent_active == opponent_index {
            self.apply_residual_damage(Side::Opponent)?;
        }
        Ok(())
    }

    /// Uniformly random among the opponent's known moves.
    fn choose_opponent_move(&mut self) -> Option<Move> {
        let moves = self.opponent.creature(self.opponent_active).moves();
        if moves.is_empty() {
            return None;
        }
        let index = self.rng.next_index(moves.len(), "opponent move choice");
        moves.get(index).copied()
    }

    fn execute_move(&mut self, side: Side, move_: Option<Move>) -> BattleResult<()> {
        let Some(move_) = move_ else {
            return Ok(());
        };
        let attacker = self.creature(side);
        let (species, attack, status) = (attacker.species(), attacker.attack(), attacker.status());

        if status == Some(StatusCondition::Paralyzed)
            && self.rng.next_f64("paralysis check") < PARALYSIS_SKIP_CHANCE
        {
            self.log.push(BattleEvent::FullyParalyzed(species));
            return Ok(());
        }

        let data = get_move_data(move_)?;
        self.log.push(BattleEvent::MoveUsed {
            species,
            move_used: move_,
        });

        if !move_hits(data.accuracy, self.rng.next_f64("accuracy roll")) {
            self.log.push(BattleEvent::MoveMissed);
            return Ok(());
        }

        let defender = self.creature(side.other());
        let multiplier = type_effectiveness(data.move_type, defender.creature_type());
        let defense = defender.defense();
        let roll = self.rng.next_f64("damage variance");
        let damage = calculate_damage(data.power, attack, defense, multiplier, roll);

        let defender = self.creature_mut(side.other());
        defender.take_damage(damage);
        let (defender_species, standing, unafflicted) =
            (defender.species(), defender.can_battle(), defender.status().is_none());
        debug!(attacker = %species, %move_, damage, multiplier, "move hit");

        self.log.push(BattleEvent::DamageDealt(damage));
        self.log.extend(effectiveness_event(multiplier));

        if let Some(effect) = data.effect {
            if standing && unafflicted && self.rng.next_f64("effect chance") < data.effect_chance {
                let inflicted = effect.inflicted_status();
                if self.creature_mut(side.other()).set_status(inflicted) {
                    self.log.push(BattleEvent::StatusInflicted {
                        species: defender_species,
                        status: inflicted,
                    });
                }
            }
        }
        Ok(())
    }

    fn apply_residual_damage(&mut self, side: Side) -> BattleResult<()> {
        let creature = self.creature_mut(side);
        let Some(status) = creature.status().filter(StatusCondition::deals_residual_damage) else {
            return Ok(());
        };
        let damage = residual_damage(creature.max_hp());
        creature.take_damage(damage);
        let (species, fainted) = (creature.species(), creature.is_fainted());
        self.log.push(BattleEvent::StatusDamage { species, status });
        if fainted {
            self.handle_faint(side)?;
        }
        Ok(())
    }

    fn handle_faint(&mut self, side: Side) -> BattleResult<()> {
        let creature = self.creature_mut(side);
        creature.faint();
        let (species, level) = (creature.species(), creature.level());

        match side {
            Side::Player => {
                self.log.push(BattleEvent::PlayerFainted(species));
                if self.player.roster.has_able() {
                    self.phase = BattlePhase::AwaitingReplacement;
                } else {
                    self.log.push(BattleEvent::OutOfCreatures);
                    self.finish(BattleOutcome::Lost);
                }
            }
            Side::Opponent => {
                self.log.push(BattleEvent::OpponentFainted(species));
                if !self.config.link {
                    let amount = u32::from(level) * EXPERIENCE_PER_LEVEL;
                    let gain = self.player.roster[self.player_active].gain_experience(amount)?;
                    self.log.push(BattleEvent::ExperienceGained(amount));
                    self.log.extend(gain.events.into_iter().map(BattleEvent::Progression));
                }

                let next = match &self.opponent {
                    Opponent::Wild(_) => None,
                    Opponent::Trainer { name, roster } => Some((
                        name.clone(),
                        roster.first_able().map(|index| (index, roster[index].species())),
                    )),
                };
                match next {
                    None => self.finish(BattleOutcome::Won),
                    Some((trainer, Some((index, next_species)))) => {
                        self.opponent_active = index;
                        self.log.push(BattleEvent::TrainerSentOut {
                            trainer,
                            species: next_species,
                        });
                        self.player.mark_seen(next_species);
                    }
                    Some((_, None)) => {
                        self.log.push(BattleEvent::TrainerDefeated);
                        self.finish(BattleOutcome::Won);
                    }
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self, outcome: BattleOutcome) {
        self.phase = BattlePhase::Finished;
        self.outcome = Some(outcome);
        info!(?outcome, turn = self.turn, "battle finished");
    }
}
