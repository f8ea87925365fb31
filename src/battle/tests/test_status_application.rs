#[cfg(test)]
mod tests {
    use crate::battle::engine::BattleSession;
    use crate::battle::state::BattleAction;
    use crate::battle::tests::common::{assert_ok, create_test_profile, creature, scripted, TestCreatureBuilder};
    use pretty_assertions::assert_eq;
    use schema::{Move, Species, StatusCondition};

    #[test]
    fn test_paralysis_can_skip_the_move() {
        let mut profile = create_test_profile(
            vec![TestCreatureBuilder::new(Species::Pyron, 5)
                .with_status(StatusCondition::Paralyzed)
                .build()],
            &[],
        );
        let wild = TestCreatureBuilder::new(Species::Florin, 5)
            .with_moves(vec![Move::Tackle])
            .build();
        let rng = scripted(&[0.5, 0.1, 0.5, 0.5]);
        let mut session = assert_ok(BattleSession::start_wild(&mut profile, wild, rng));

        let result = assert_ok(session.submit_action(BattleAction::Fight(Move::Tackle)));

        assert_eq!(
            result.logs(),
            vec![
                "Pyron is paralyzed and can't move!",
                "Florin used Tackle!",
                "It did 23 damage.",
            ]
        );
        assert_eq!(session.opponent_active().current_hp(), session.opponent_active().max_hp());
        assert_eq!(session.player_active().current_hp(), 40 - 23);
    }

    #[test]
    fn test_paralysis_roll_above_threshold_acts_normally() {
        let mut profile = create_test_profile(
            vec![TestCreatureBuilder::new(Species::Pyron, 5)
                .with_status(StatusCondition::Paralyzed)
                .build()],
            &[],
        );
        let wild = TestCreatureBuilder::new(Species::Florin, 5)
            .with_moves(vec![Move::Tackle])
            .build();
        let rng = scripted(&[0.5, 0.25, 0.5, 0.5, 0.5, 0.5]);
        let mut session = assert_ok(BattleSession::start_wild(&mut profile, wild, rng));

        let result = assert_ok(session.submit_action(BattleAction::Fight(Move::Tackle)));
        assert_eq!(result.logs()[0], "Pyron used Tackle!");
        assert_eq!(session.rng().consumed(), 6);
    }

    #[test]
    fn test_effect_roll_inflicts_status() {
        let mut profile = create_test_profile(vec![creature(Species::Zappet, 5)], &[]);
        let wild = creature(Species::Aquade, 5);
        let rng = scripted(&[0.0, 0.5, 0.0, 0.05, 0.9, 0.5, 0.5]);
        let mut session = assert_ok(BattleSession::start_wild(&mut profile, wild, rng));

        let result = assert_ok(session.submit_action(BattleAction::Fight(Move::ThunderShock)));

        assert_eq!(
            result.logs(),
            vec![
                "Zappet used Thunder Shock!",
                "It did 34 damage.",
                "It's super effective!",
                "Aquade was paralyzed!",
                "Aquade used Tackle!",
                "It did 24 damage.",
            ]
        );
        assert_eq!(session.opponent_active().status(), Some(StatusCondition::Paralyzed));
        assert_eq!(session.opponent_active().current_hp(), 42 - 34);
        assert_eq!(session.player_active().current_hp(), 34 - 24);
    }

    #[test]
    fn test_effect_skipped_when_target_already_has_status() {
        let mut profile = create_test_profile(vec![creature(Species::Zappet, 5)], &[]);
        let wild = TestCreatureBuilder::new(Species::Aquade, 5)
            .with_moves(vec![Move::Tackle])
            .with_status(StatusCondition::Burned)
            .build();
        // No effect roll: choice, accuracy, variance, then Aquade's accuracy and variance.
        let rng = scripted(&[0.0, 0.5, 0.0, 0.5, 0.5]);
        let mut session = assert_ok(BattleSession::start_wild(&mut profile, wild, rng));

        let result = assert_ok(session.submit_action(BattleAction::Fight(Move::ThunderShock)));

        assert!(!result.logs().iter().any(|line| line.contains("was paralyzed")));
        // Burn ticks at end of turn instead.
        assert_eq!(result.logs().last().map(String::as_str), Some("Aquade is hurt by its burn!"));
        assert_eq!(session.opponent_active().status(), Some(StatusCondition::Burned));
        assert_eq!(session.rng().consumed(), 5);
    }

    #[test]
    fn test_failed_effect_roll_leaves_no_status() {
        let mut profile = create_test_profile(vec![creature(Species::Zappet, 5)], &[]);
        let wild = TestCreatureBuilder::new(Species::Aquade, 5)
            .with_moves(vec![Move::Tackle])
            .build();
        let rng = scripted(&[0.0, 0.5, 0.0, 0.1, 0.5, 0.5]);
        let mut session = assert_ok(BattleSession::start_wild(&mut profile, wild, rng));

        assert_ok(session.submit_action(BattleAction::Fight(Move::ThunderShock)));
        assert_eq!(session.opponent_active().status(), None);
    }
}
