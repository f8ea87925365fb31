use crate::battle::catch::{calculate_catch_chance, can_attempt_catch, roll_catch_success};
use crate::battle::rng::RandomSource;
use crate::creature::Creature;
use crate::errors::BattleResult;
use crate::item_data::get_item_data;
use crate::player::{Placement, PlayerProfile};
use crate::progression::ProgressionEvent;
use schema::{Item, ItemCategory, Species, StatusCondition};
use std::fmt;
use tracing::{debug, info};

/// Who an item is used on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTarget {
    /// Index into the player's roster.
    Party(usize),
    /// The opposing active creature.
    Opponent,
}

/// Where an item is being used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemContext {
    pub in_battle: bool,
    pub wild: bool,
}

impl ItemContext {
    /// Outside of any battle (bag menu on the map).
    pub fn field() -> Self {
        Self::default()
    }

    pub fn battle(wild: bool) -> Self {
        Self {
            in_battle: true,
            wild,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemEvent {
    NotInInventory,
    CannotUseHere,
    NotYourCreature,
    NoBallTarget,
    Caught(Species),
    SentToStorage(Species),
    BrokeFree(Species),
    NoTarget,
    NoEvolutionTarget,
    FaintedCannotHeal(Species),
    Healed { species: Species, amount: u16 },
    NoStatus(Species),
    Cured { species: Species, status: StatusCondition },
    NoEffect,
    NotDuringBattle,
    Unusable,
    Progression(ProgressionEvent),
}

impl fmt::Display for ItemEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemEvent::NotInInventory => write!(f, "You don't have that item."),
            ItemEvent::CannotUseHere => write!(f, "You can't use that here."),
            ItemEvent::NotYourCreature => write!(f, "You can't use that on someone else's Pokemon!"),
            ItemEvent::NoBallTarget => write!(f, "There's no valid target for the ball."),
            ItemEvent::Caught(species) => write!(f, "Gotcha! {} was caught!", species),
            ItemEvent::SentToStorage(species) => write!(f, "{} was sent to storage.", species),
            ItemEvent::BrokeFree(species) => write!(f, "The wild {} broke free!", species),
            ItemEvent::NoTarget => write!(f, "No target specified."),
            ItemEvent::NoEvolutionTarget => write!(f, "No target specified for evolution."),
            ItemEvent::FaintedCannotHeal(species) => {
                write!(f, "{} is fainted and can't be healed!", species)
            }
            ItemEvent::Healed { species, amount } => write!(f, "{} regained {} HP.", species, amount),
            ItemEvent::NoStatus(species) => write!(f, "{} has no status condition.", species),
            ItemEvent::Cured { species, status } => {
                write!(f, "{} was cured of its {} condition!", species, status)
            }
            ItemEvent::NoEffect => write!(f, "It had no effect."),
            ItemEvent::NotDuringBattle => write!(f, "You can't use that in the middle of a battle!"),
            ItemEvent::Unusable => write!(f, "This item cannot be used now."),
            ItemEvent::Progression(event) => write!(f, "{}", event),
        }
    }
}

/// Result of one item use. `success == false` means the use was rejected or wasted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemOutcome {
    pub success: bool,
    pub captured: bool,
    pub events: Vec<ItemEvent>,
}

impl ItemOutcome {
    fn rejected(event: ItemEvent) -> Self {
        Self {
            success: false,
            captured: false,
            events: vec![event],
        }
    }

    fn succeeded(events: Vec<ItemEvent>) -> Self {
        Self {
            success: true,
            captured: false,
            events,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

/// Resolve a roster index for items that only work on the player's own creatures.
fn party_target(target: Option<ItemTarget>, missing: ItemEvent) -> Result<usize, ItemEvent> {
    match target {
        Some(ItemTarget::Party(index)) => Ok(index),
        Some(ItemTarget::Opponent) => Err(ItemEvent::NotYourCreature),
        None => Err(missing),
    }
}

/// Use one `item` from the profile's inventory.
///
/// Every rejection (missing item, wrong context, bad target) comes back as an unsuccessful
/// outcome with an explanatory event and no state change. `Err` is reserved for catalog
/// problems. Consumption follows the item's category: balls are spent before the catch
/// roll, and cures or evolution stones that have no effect are still spent.
pub fn use_item<R: RandomSource + ?Sized>(
    profile: &mut PlayerProfile,
    item: Item,
    target: Option<ItemTarget>,
    context: ItemContext,
    opponent: Option<&Creature>,
    rng: &mut R,
) -> BattleResult<ItemOutcome> {
    if !profile.inventory.contains(item) {
        return Ok(ItemOutcome::rejected(ItemEvent::NotInInventory));
    }
    let data = get_item_data(item)?;
    debug!(%item, ?target, ?context, "using item");

    let outcome = match data.category {
        ItemCategory::Ball { catch_rate } => {
            let aimed_at = match target {
                None | Some(ItemTarget::Opponent) => opponent,
                Some(ItemTarget::Party(_)) => None,
            };
            let wild = match can_attempt_catch(context.in_battle, context.wild, aimed_at) {
                Ok(creature) => creature,
                Err(err) => return Ok(ItemOutcome::rejected(err.to_item_event())),
            };

            profile.inventory.take_one(item);
            let chance = calculate_catch_chance(wild, catch_rate);
            debug!(species = %wild.species(), chance, "throwing ball");

            if roll_catch_success(chance, rng) {
                let species = wild.species();
                info!(%species, "creature caught");
                let mut events = vec![ItemEvent::Caught(species)];
                if profile.add_creature(wild.clone()) == Placement::Storage {
                    events.push(ItemEvent::SentToStorage(species));
                }
                ItemOutcome {
                    success: true,
                    captured: true,
                    events,
                }
            } else {
                ItemOutcome::succeeded(vec![ItemEvent::BrokeFree(wild.species())])
            }
        }

        ItemCategory::Heal { amount } => {
            let index = match party_target(target, ItemEvent::NoTarget) {
                Ok(index) => index,
                Err(event) => return Ok(ItemOutcome::rejected(event)),
            };
            let Some(creature) = profile.roster.get_mut(index) else {
                return Ok(ItemOutcome::rejected(ItemEvent::NoTarget));
            };
            if creature.is_fainted() {
                return Ok(ItemOutcome::rejected(ItemEvent::FaintedCannotHeal(
                    creature.species(),
                )));
            }
            let healed = creature.heal(amount);
            let species = creature.species();
            profile.inventory.take_one(item);
            ItemOutcome::succeeded(vec![ItemEvent::Healed {
                species,
                amount: healed,
            }])
        }

        ItemCategory::StatusCure { cures } => {
            let index = match party_target(target, ItemEvent::NoTarget) {
                Ok(index) => index,
                Err(event) => return Ok(ItemOutcome::rejected(event)),
            };
            let Some(creature) = profile.roster.get_mut(index) else {
                return Ok(ItemOutcome::rejected(ItemEvent::NoTarget));
            };
            let species = creature.species();
            match creature.status() {
                None => return Ok(ItemOutcome::rejected(ItemEvent::NoStatus(species))),
                Some(status) if status == cures => {
                    creature.cure_status();
                    profile.inventory.take_one(item);
                    ItemOutcome::succeeded(vec![ItemEvent::Cured {
                        species,
                        status: cures,
                    }])
                }
                Some(_) => {
                    profile.inventory.take_one(item);
                    ItemOutcome::rejected(ItemEvent::NoEffect)
                }
            }
        }

        ItemCategory::Evolution => {
            if context.in_battle {
                return Ok(ItemOutcome::rejected(ItemEvent::NotDuringBattle));
            }
            let index = match party_target(target, ItemEvent::NoEvolutionTarget) {
                Ok(index) => index,
                Err(event) => return Ok(ItemOutcome::rejected(event)),
            };
            let Some(creature) = profile.roster.get_mut(index) else {
                return Ok(ItemOutcome::rejected(ItemEvent::NoEvolutionTarget));
            };
            match creature.evolution_for_item(item)? {
                Some(into) => {
                    let event = creature.evolve(into)?;
                    profile.mark_caught(into);
                    profile.inventory.take_one(item);
                    ItemOutcome::succeeded(vec![ItemEvent::Progression(event)])
                }
                None => {
                    profile.inventory.take_one(item);
                    ItemOutcome::rejected(ItemEvent::NoEffect)
                }
            }
        }

        ItemCategory::Valuable => ItemOutcome::rejected(ItemEvent::Unusable),
    };

    Ok(outcome)
}
