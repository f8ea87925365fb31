//! Demo: one wild battle played out by a simple strongest-move strategy.

use clap::Parser;
use monster_adventure::battle::rng::SeededRng;
use monster_adventure::{
    apply_battle_result, get_move_data, BattleAction, BattleEngineError, BattlePhase, BattleResult, BattleSession,
    Creature, Item, OpponentInfo, PlayerProfile, RandomSource,
};
use monster_adventure::species::parse_species;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Monster Adventure battle demo
#[derive(Parser, Debug)]
#[command(name = "monster-adventure")]
#[command(author, version, about = "Run a single wild battle", long_about = None)]
struct Args {
    /// Seed for the battle's random source (entropy when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Starter species
    #[arg(long = "starter", default_value = "Pyron")]
    starter: String,

    /// Wild species to fight
    #[arg(short = 'w', long = "wild", default_value = "Rattatak")]
    wild: String,

    /// Level of the wild creature
    #[arg(short = 'l', long = "level", default_value_t = 3)]
    level: u8,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), BattleEngineError> {
    let starter = Creature::new(parse_species(&args.starter)?, 5)?;
    let wild = Creature::new(parse_species(&args.wild)?, args.level)?;

    let mut profile = PlayerProfile::new("Red", "Blue");
    profile.money = 500;
    profile.add_creature(starter);
    profile.inventory.add(Item::Pokeball, 5);
    profile.inventory.add(Item::Potion, 2);

    let rng = match args.seed {
        Some(seed) => SeededRng::new(seed),
        None => SeededRng::from_entropy(),
    };
    info!(seed = ?args.seed, "starting demo battle");

    let mut session = BattleSession::start_wild(&mut profile, wild, rng)?;
    for line in session.logs() {
        println!("{}", line);
    }

    while !session.finished() {
        let action = choose_action(&session)?;
        let result = session.submit_action(action)?;
        for line in result.logs() {
            println!("{}", line);
        }
    }

    let outcome = session.outcome();
    drop(session);
    if let Some(outcome) = outcome {
        println!("Battle over: {:?}", outcome);
        for event in apply_battle_result(&mut profile, &OpponentInfo::Wild, outcome) {
            println!("{}", event);
        }
    }
    for creature in profile.roster.iter() {
        println!(
            "{} Lv.{} HP {}/{} XP {}/{}",
            creature.species(),
            creature.level(),
            creature.current_hp(),
            creature.max_hp(),
            creature.experience(),
            creature.experience_to_next()
        );
    }
    Ok(())
}

/// Strongest known move, or the first able replacement when one is needed.
fn choose_action<R: RandomSource>(session: &BattleSession<'_, R>) -> BattleResult<BattleAction> {
    if session.phase() == BattlePhase::AwaitingReplacement {
        let index = session.player().roster.first_able().unwrap_or_default();
        return Ok(BattleAction::Switch(index));
    }

    let mut best = None;
    for &move_ in session.player_active().moves() {
        let power = get_move_data(move_)?.power;
        if best.is_none_or(|(_, best_power)| power > best_power) {
            best = Some((move_, power));
        }
    }
    Ok(match best {
        Some((move_, _)) => BattleAction::Fight(move_),
        None => BattleAction::Run,
    })
}
