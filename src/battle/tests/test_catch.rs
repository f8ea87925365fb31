#[cfg(test)]
mod tests {
    use crate::battle::engine::BattleSession;
    use crate::battle::state::{BattleAction, BattleOutcome, BattlePhase};
    use crate::battle::tests::common::{
        assert_ok, create_test_profile, create_test_trainer, creature, predictable_rng, scripted, TestCreatureBuilder,
    };
    use crate::items::ItemTarget;
    use pretty_assertions::assert_eq;
    use schema::{Item, Species};

    #[test]
    fn test_successful_catch_ends_battle() {
        let mut profile = create_test_profile(vec![creature(Species::Pyron, 5)], &[(Item::Pokeball, 2)]);
        // A full-HP wild creature is caught 10% of the time with a plain ball.
        let rng = scripted(&[0.05]);
        let mut session = assert_ok(BattleSession::start_wild(&mut profile, creature(Species::Rattatak, 3), rng));

        let result = assert_ok(session.submit_action(BattleAction::UseItem(Item::Pokeball, None)));

        assert!(result.ended);
        assert_eq!(result.logs(), vec!["Gotcha! Rattatak was caught!"]);
        assert_eq!(session.outcome(), Some(BattleOutcome::Captured));
        assert!(session.won());
        assert_eq!(session.rng().consumed(), 1);
        drop(session);

        assert_eq!(profile.roster.len(), 2);
        assert_eq!(profile.roster[1].species(), Species::Rattatak);
        assert_eq!(profile.roster[1].level(), 3);
        assert!(profile.caught.contains(&Species::Rattatak));
        assert_eq!(profile.inventory.count(Item::Pokeball), 1);
    }

    #[test]
    fn test_failed_catch_lets_opponent_attack() {
        let mut profile = create_test_profile(vec![creature(Species::Pyron, 5)], &[(Item::Pokeball, 1)]);
        let mut session = assert_ok(BattleSession::start_wild(
            &mut profile,
            creature(Species::Rattatak, 3),
            predictable_rng(),
        ));

        let result = assert_ok(session.submit_action(BattleAction::UseItem(Item::Pokeball, Some(ItemTarget::Opponent))));

        assert!(!result.ended);
        assert_eq!(
            result.logs(),
            vec!["The wild Rattatak broke free!", "Rattatak used Tackle!", "It did 16 damage."]
        );
        assert_eq!(session.player_active().current_hp(), 40 - 16);
        assert_eq!(session.phase(), BattlePhase::AwaitingAction);
        assert!(!session.player().inventory.contains(Item::Pokeball));
    }

    #[test]
    fn test_catch_into_full_party_goes_to_storage() {
        let roster = (0..6).map(|_| creature(Species::Geon, 5)).collect();
        let mut profile = create_test_profile(roster, &[(Item::Pokeball, 1)]);
        let rng = scripted(&[0.0]);
        let mut session = assert_ok(BattleSession::start_wild(&mut profile, creature(Species::Slimer, 5), rng));

        let result = assert_ok(session.submit_action(BattleAction::UseItem(Item::Pokeball, None)));

        assert_eq!(
            result.logs(),
            vec!["Gotcha! Slimer was caught!", "Slimer was sent to storage."]
        );
        drop(session);
        assert_eq!(profile.roster.len(), 6);
        assert_eq!(profile.storage.len(), 1);
    }

    #[test]
    fn test_ball_against_trainer_is_refused_and_kept() {
        let mut profile = create_test_profile(vec![creature(Species::Pyron, 5)], &[(Item::Pokeball, 1)]);
        let mut joey = create_test_trainer("Joey", vec![creature(Species::Rattatak, 3)]);
        let mut session = assert_ok(BattleSession::start_trainer(&mut profile, &mut joey, predictable_rng()));

        let result = assert_ok(session.submit_action(BattleAction::UseItem(Item::Pokeball, None)));

        assert_eq!(
            result.logs(),
            vec![
                "You can't use that on someone else's Pokemon!",
                "Rattatak used Tackle!",
                "It did 16 damage.",
            ]
        );
        assert_eq!(session.player().inventory.count(Item::Pokeball), 1);
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn test_potion_in_battle_costs_the_turn() {
        let mut profile = create_test_profile(
            vec![TestCreatureBuilder::new(Species::Pyron, 5).with_hp(15).build()],
            &[(Item::Potion, 1)],
        );
        let mut session = assert_ok(BattleSession::start_wild(
            &mut profile,
            creature(Species::Rattatak, 3),
            predictable_rng(),
        ));

        let result = assert_ok(session.submit_action(BattleAction::UseItem(Item::Potion, Some(ItemTarget::Party(0)))));

        assert_eq!(
            result.logs(),
            vec!["Pyron regained 20 HP.", "Rattatak used Tackle!", "It did 16 damage."]
        );
        assert_eq!(session.player_active().current_hp(), 15 + 20 - 16);
        assert!(!session.player().inventory.contains(Item::Potion));
    }

    #[test]
    fn test_evolution_stone_refused_in_battle() {
        let mut profile = create_test_profile(vec![creature(Species::Zappet, 5)], &[(Item::ThunderStone, 1)]);
        let mut session = assert_ok(BattleSession::start_wild(
            &mut profile,
            creature(Species::Rattatak, 3),
            predictable_rng(),
        ));

        let result = assert_ok(session.submit_action(BattleAction::UseItem(
            Item::ThunderStone,
            Some(ItemTarget::Party(0)),
        )));

        assert_eq!(result.logs()[0], "You can't use that in the middle of a battle!");
        assert_eq!(session.player_active().species(), Species::Zappet);
        assert_eq!(session.player().inventory.count(Item::ThunderStone), 1);
    }
}
