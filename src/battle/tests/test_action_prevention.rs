#[cfg(test)]
mod tests {
    use crate::battle::engine::BattleSession;
    use crate::battle::state::{BattleAction, BattlePhase};
    use crate::battle::tests::common::{assert_ok, create_test_profile, creature, predictable_rng, TestCreatureBuilder};
    use crate::errors::{ActionError, BattleEngineError, BattleStateError};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{Move, Species};

    fn two_creature_profile() -> crate::player::PlayerProfile {
        create_test_profile(
            vec![
                creature(Species::Pyron, 5),
                creature(Species::Geon, 5),
                TestCreatureBuilder::new(Species::Wingon, 5).with_hp(0).build(),
            ],
            &[],
        )
    }

    #[rstest]
    #[case(
        BattleAction::Fight(Move::HydroPump),
        BattleEngineError::Action(ActionError::MoveNotKnown { species: Species::Pyron, move_: Move::HydroPump })
    )]
    #[case(BattleAction::Switch(7), BattleEngineError::Action(ActionError::InvalidRosterIndex(7)))]
    #[case(BattleAction::Switch(0), BattleEngineError::Action(ActionError::AlreadyActive(Species::Pyron)))]
    #[case(BattleAction::Switch(2), BattleEngineError::Action(ActionError::TargetFainted(Species::Wingon)))]
    fn test_invalid_actions_change_nothing(#[case] action: BattleAction, #[case] expected: BattleEngineError) {
        let mut profile = two_creature_profile();
        let mut session = assert_ok(BattleSession::start_wild(
            &mut profile,
            creature(Species::Rattatak, 3),
            predictable_rng(),
        ));
        let intro = session.logs();

        let err = session.submit_action(action).unwrap_err();

        assert_eq!(err, expected);
        assert_eq!(session.logs(), intro);
        assert_eq!(session.turn(), 0);
        assert_eq!(session.phase(), BattlePhase::Intro);
        assert_eq!(session.rng().consumed(), 0);
    }

    #[test]
    fn test_no_actions_after_finish() {
        let mut profile = two_creature_profile();
        let mut session = assert_ok(BattleSession::start_wild(
            &mut profile,
            creature(Species::Rattatak, 3),
            predictable_rng(),
        ));
        assert_ok(session.submit_action(BattleAction::Run));
        assert!(session.finished());

        let err = session.submit_action(BattleAction::Fight(Move::Tackle)).unwrap_err();
        assert_eq!(err, BattleEngineError::BattleState(BattleStateError::BattleFinished));
    }

    #[test]
    fn test_cannot_start_without_able_creature() {
        let mut profile = create_test_profile(
            vec![TestCreatureBuilder::new(Species::Pyron, 5).with_hp(0).build()],
            &[],
        );
        let result = BattleSession::start_wild(&mut profile, creature(Species::Rattatak, 3), predictable_rng());
        assert!(matches!(
            result,
            Err(BattleEngineError::BattleState(BattleStateError::NoCombatCapableCreature(_)))
        ));
    }
}
