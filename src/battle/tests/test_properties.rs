#[cfg(test)]
mod tests {
    use crate::battle::engine::BattleSession;
    use crate::battle::rng::SeededRng;
    use crate::battle::state::{BattleAction, BattlePhase};
    use crate::battle::tests::common::{assert_creature_invariants, create_test_profile, creature};
    use proptest::prelude::*;
    use schema::Species;

    const SPECIES: [Species; 8] = [
        Species::Pyron,
        Species::Aquade,
        Species::Florin,
        Species::Zappet,
        Species::Geon,
        Species::Wingon,
        Species::Slimer,
        Species::Rattatak,
    ];

    fn species() -> impl Strategy<Value = Species> {
        prop::sample::select(SPECIES.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn random_battles_keep_creatures_consistent(
            seed in any::<u64>(),
            party in prop::collection::vec((species(), 2u8..15), 1..4),
            wild in (species(), 2u8..15),
            move_pick in any::<usize>(),
        ) {
            let roster = party.iter().map(|&(s, level)| creature(s, level)).collect();
            let mut profile = create_test_profile(roster, &[]);
            let mut session =
                BattleSession::start_wild(&mut profile, creature(wild.0, wild.1), SeededRng::new(seed)).unwrap();

            while !session.finished() {
                prop_assert!(session.turn() < 1000, "battle did not finish");
                let action = if session.phase() == BattlePhase::AwaitingReplacement {
                    let next = session.player().roster.first_able().unwrap();
                    BattleAction::Switch(next)
                } else {
                    let moves = session.player_active().moves();
                    BattleAction::Fight(moves[move_pick % moves.len()])
                };
                let result = session.submit_action(action).unwrap();
                prop_assert_eq!(result.ended, session.finished());

                for member in session.player().roster.iter() {
                    assert_creature_invariants(member);
                }
                assert_creature_invariants(session.opponent_active());
                if session.phase() == BattlePhase::AwaitingAction {
                    prop_assert!(session.player_active().can_battle());
                }
            }

            prop_assert!(session.outcome().is_some());
            prop_assert_eq!(session.won(), !session.opponent_active().can_battle());
            prop_assert_eq!(session.player().roster.has_able(), session.won());
        }
    }
}
