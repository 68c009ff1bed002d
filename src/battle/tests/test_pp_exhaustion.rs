#[cfg(test)]
mod tests {
    use crate::battle::engine::resolve_turn;
    use crate::battle::state::{ActionFailureReason, BattleEvent, Side, TakenAction};
    use crate::battle::tests::common::{
        create_test_battle, drain_move_pp, predictable_rng, TestMonsterBuilder,
    };
    use crate::moves::Move;
    use crate::trainer::TrainerAction;
    use pretty_assertions::assert_eq;
    use schema::ElementType;

    #[test]
    fn pp_decrements_on_use() {
        // Arrange
        let attacker = TestMonsterBuilder::new("Flareon", ElementType::Fire)
            .with_moves(vec![Move::new("Flame Burst", ElementType::Fire, 10, 10)])
            .build();
        let defender = TestMonsterBuilder::new("Terrax", ElementType::Rock).build();
        let mut battle_state = create_test_battle(attacker, defender);

        battle_state.action_queue[0] = Some(TrainerAction::UseMove { move_index: 0 });
        battle_state.action_queue[1] = Some(TrainerAction::UseMove { move_index: 0 });

        // Act
        let _ = resolve_turn(&mut battle_state, predictable_rng());

        // Assert
        let final_pp = battle_state
            .active_monster(Side::Player)
            .move_at(0)
            .expect("move slot 0 should exist")
            .pp();
        assert_eq!(final_pp, 9, "PP should decrement by 1 after a move is used.");
    }

    #[test]
    fn drained_move_wastes_the_turn_when_another_is_usable() {
        // Arrange: slot 0 is empty but slot 1 still has PP, so no Struggle
        // substitution happens. Insisting on slot 0 just wastes the turn.
        let mut attacker = TestMonsterBuilder::new("Flareon", ElementType::Fire)
            .with_moves(vec![
                Move::new("Flame Burst", ElementType::Fire, 10, 10),
                Move::new("Tackle", ElementType::Normal, 5, 25),
            ])
            .build();
        drain_move_pp(&mut attacker, 0);

        let defender = TestMonsterBuilder::new("Aquarion", ElementType::Water).build();
        let mut battle_state = create_test_battle(attacker, defender);

        battle_state.action_queue[0] = Some(TrainerAction::UseMove { move_index: 0 });
        battle_state.action_queue[1] = Some(TrainerAction::UseMove { move_index: 0 });

        // Act
        let event_bus = resolve_turn(&mut battle_state, predictable_rng());

        // Assert
        event_bus.print_debug_with_message("Events for drained_move_wastes_the_turn:");
        let failed = event_bus.events().iter().any(|e| {
            matches!(
                e,
                BattleEvent::ActionFailed {
                    side: Side::Player,
                    reason: ActionFailureReason::NoPPRemaining { move_name },
                } if move_name == "Flame Burst"
            )
        });
        assert!(failed, "The empty move should fail with NoPPRemaining.");

        let player_attacked = event_bus.events().iter().any(|e| {
            matches!(
                e,
                BattleEvent::MoveUsed {
                    side: Side::Player,
                    ..
                }
            )
        });
        assert!(!player_attacked, "The player's attack should not happen.");

        let opponent_hp = battle_state.active_monster(Side::Opponent).current_hp();
        assert_eq!(opponent_hp, 60, "No damage should reach the opponent.");

        let outcomes = event_bus.outcomes();
        let player_outcome = outcomes
            .iter()
            .find(|outcome| outcome.side == Side::Player)
            .expect("The wasted turn should still produce an outcome record");
        assert!(player_outcome.no_pp);
        assert_eq!(player_outcome.damage, 0);
        assert_eq!(
            player_outcome.action,
            TakenAction::Move {
                name: "Flame Burst".to_string()
            }
        );
    }

    #[test]
    fn pp_is_not_deducted_for_the_wasted_attempt() {
        // Arrange
        let mut attacker = TestMonsterBuilder::new("Flareon", ElementType::Fire)
            .with_moves(vec![
                Move::new("Flame Burst", ElementType::Fire, 10, 10),
                Move::new("Tackle", ElementType::Normal, 5, 25),
            ])
            .build();
        drain_move_pp(&mut attacker, 0);

        let defender = TestMonsterBuilder::new("Aquarion", ElementType::Water).build();
        let mut battle_state = create_test_battle(attacker, defender);

        battle_state.action_queue[0] = Some(TrainerAction::UseMove { move_index: 0 });
        battle_state.action_queue[1] = Some(TrainerAction::UseMove { move_index: 0 });

        // Act
        let _ = resolve_turn(&mut battle_state, predictable_rng());

        // Assert: the drained slot stays at zero and the untouched slot keeps
        // its full PP.
        let player_monster = battle_state.active_monster(Side::Player);
        assert_eq!(player_monster.move_at(0).map(Move::pp), Some(0));
        assert_eq!(player_monster.move_at(1).map(Move::pp), Some(25));
    }

    #[test]
    fn last_pp_spent_then_struggle_takes_over() {
        // Arrange: one move with a single point of PP.
        let attacker = TestMonsterBuilder::new("Flareon", ElementType::Fire)
            .with_moves(vec![Move::new("Flame Burst", ElementType::Fire, 10, 1)])
            .build();
        let defender = TestMonsterBuilder::new("Terrax", ElementType::Rock)
            .with_max_hp(80)
            .build();
        let mut battle_state = create_test_battle(attacker, defender);

        // --- Turn 1: spend the last PP ---
        battle_state.action_queue[0] = Some(TrainerAction::UseMove { move_index: 0 });
        battle_state.action_queue[1] = Some(TrainerAction::UseMove { move_index: 0 });
        let _ = resolve_turn(&mut battle_state, predictable_rng());
        assert_eq!(
            battle_state
                .active_monster(Side::Player)
                .move_at(0)
                .map(Move::pp),
            Some(0),
            "Flame Burst should be empty after the first turn."
        );

        // --- Turn 2: the same selection now falls back to Struggle ---
        battle_state.action_queue[0] = Some(TrainerAction::UseMove { move_index: 0 });
        battle_state.action_queue[1] = Some(TrainerAction::UseMove { move_index: 0 });
        let bus2 = resolve_turn(&mut battle_state, predictable_rng());

        bus2.print_debug_with_message("Events for last_pp_spent_then_struggle_takes_over:");
        let used_struggle = bus2.events().iter().any(|e| {
            matches!(
                e,
                BattleEvent::MoveUsed {
                    side: Side::Player,
                    move_used,
                    ..
                } if move_used == "Struggle"
            )
        });
        let used_flame_burst = bus2.events().iter().any(|e| {
            matches!(
                e,
                BattleEvent::MoveUsed {
                    side: Side::Player,
                    move_used,
                    ..
                } if move_used == "Flame Burst"
            )
        });
        assert!(used_struggle, "Struggle should replace the drained moveset.");
        assert!(!used_flame_burst, "Flame Burst has no PP and cannot be used.");
    }
}
