#[cfg(test)]
mod tests {
    use crate::battle::engine::resolve_turn;
    use crate::battle::state::{BattleEvent, BattleOutcome, BattlePhase, Side};
    use crate::battle::tests::common::{create_test_battle, predictable_rng, TestMonsterBuilder};
    use crate::moves::Move;
    use crate::trainer::TrainerAction;
    use pretty_assertions::assert_eq;
    use schema::ElementType;

    #[test]
    fn exact_lethal_damage_faints_the_defender() {
        // Arrange: Bubble Beam deals 7 * 2.0 = 14 against a Fire type, which
        // is exactly the defender's remaining HP.
        let attacker = TestMonsterBuilder::new("Aquarion", ElementType::Water)
            .with_speed(20)
            .with_moves(vec![Move::new("Bubble Beam", ElementType::Water, 7, 10)])
            .build();
        let defender = TestMonsterBuilder::new("Flareon", ElementType::Fire)
            .with_speed(1)
            .with_hp(14)
            .build();
        let mut battle_state = create_test_battle(attacker, defender);

        battle_state.action_queue[0] = Some(TrainerAction::UseMove { move_index: 0 });
        battle_state.action_queue[1] = Some(TrainerAction::UseMove { move_index: 0 });

        // Act
        let event_bus = resolve_turn(&mut battle_state, predictable_rng());

        // Assert
        event_bus.print_debug_with_message("Events for exact_lethal_damage_faints_the_defender:");
        assert!(battle_state.active_monster(Side::Opponent).is_fainted());
        assert_eq!(battle_state.active_monster(Side::Opponent).current_hp(), 0);

        let faint_reported = event_bus.events().iter().any(|e| {
            matches!(
                e,
                BattleEvent::MonsterFainted {
                    side: Side::Opponent,
                    monster,
                } if monster == "Flareon"
            )
        });
        assert!(faint_reported, "A MonsterFainted event should be emitted.");

        let zero_hp_reported = event_bus.events().iter().any(|e| {
            matches!(
                e,
                BattleEvent::DamageDealt {
                    side: Side::Opponent,
                    damage: 14,
                    remaining_hp: 0,
                    ..
                }
            )
        });
        assert!(zero_hp_reported, "The lethal hit should report 0 HP left.");
    }

    #[test]
    fn fainted_monster_loses_its_queued_action() {
        // Arrange: the slower defender faints before it can act.
        let attacker = TestMonsterBuilder::new("Aquarion", ElementType::Water)
            .with_speed(20)
            .with_moves(vec![Move::new("Bubble Beam", ElementType::Water, 7, 10)])
            .build();
        let defender = TestMonsterBuilder::new("Flareon", ElementType::Fire)
            .with_speed(1)
            .with_hp(10)
            .build();
        let mut battle_state = create_test_battle(attacker, defender);

        battle_state.action_queue[0] = Some(TrainerAction::UseMove { move_index: 0 });
        battle_state.action_queue[1] = Some(TrainerAction::UseMove { move_index: 0 });

        // Act
        let event_bus = resolve_turn(&mut battle_state, predictable_rng());

        // Assert: exactly one attack happened, and it was the player's.
        event_bus.print_debug_with_message("Events for fainted_monster_loses_its_queued_action:");
        let attacks: Vec<Side> = event_bus
            .events()
            .iter()
            .filter_map(|e| match e {
                BattleEvent::MoveUsed { side, .. } => Some(*side),
                _ => None,
            })
            .collect();
        assert_eq!(attacks, vec![Side::Player]);
        assert_eq!(
            battle_state.active_monster(Side::Player).current_hp(),
            60,
            "The fainted side must not deal damage."
        );
    }

    #[test]
    fn wiping_the_opponent_wins_the_battle() {
        // Arrange
        let attacker = TestMonsterBuilder::new("Aquarion", ElementType::Water)
            .with_speed(20)
            .with_moves(vec![Move::new("Bubble Beam", ElementType::Water, 7, 10)])
            .build();
        let defender = TestMonsterBuilder::new("Flareon", ElementType::Fire)
            .with_speed(1)
            .with_hp(5)
            .build();
        let mut battle_state = create_test_battle(attacker, defender);

        battle_state.action_queue[0] = Some(TrainerAction::UseMove { move_index: 0 });
        battle_state.action_queue[1] = Some(TrainerAction::UseMove { move_index: 0 });

        // Act
        let event_bus = resolve_turn(&mut battle_state, predictable_rng());

        // Assert
        assert_eq!(
            battle_state.phase,
            BattlePhase::Finished(BattleOutcome::Win)
        );
        let ended = event_bus.events().iter().any(|e| {
            matches!(
                e,
                BattleEvent::BattleEnded {
                    outcome: BattleOutcome::Win
                }
            )
        });
        assert!(ended, "A BattleEnded event should close out the battle.");
    }

    #[test]
    fn losing_your_own_monster_loses_the_battle() {
        // Arrange: the player's side is the one that gets wiped.
        let weak = TestMonsterBuilder::new("Flareon", ElementType::Fire)
            .with_speed(1)
            .with_hp(5)
            .build();
        let strong = TestMonsterBuilder::new("Aquarion", ElementType::Water)
            .with_speed(20)
            .with_moves(vec![Move::new("Bubble Beam", ElementType::Water, 7, 10)])
            .build();
        let mut battle_state = create_test_battle(weak, strong);

        battle_state.action_queue[0] = Some(TrainerAction::UseMove { move_index: 0 });
        battle_state.action_queue[1] = Some(TrainerAction::UseMove { move_index: 0 });

        // Act
        let _ = resolve_turn(&mut battle_state, predictable_rng());

        // Assert
        assert_eq!(
            battle_state.phase,
            BattlePhase::Finished(BattleOutcome::Loss)
        );
    }

    #[test]
    fn double_faint_counts_as_a_loss() {
        // Arrange: both sides are already at zero HP when the turn resolves.
        let player_monster = TestMonsterBuilder::new("Flareon", ElementType::Fire)
            .with_hp(0)
            .build();
        let opponent_monster = TestMonsterBuilder::new("Aquarion", ElementType::Water)
            .with_hp(0)
            .build();
        let mut battle_state = create_test_battle(player_monster, opponent_monster);

        battle_state.action_queue[0] = Some(TrainerAction::UseMove { move_index: 0 });
        battle_state.action_queue[1] = Some(TrainerAction::UseMove { move_index: 0 });

        // Act
        let event_bus = resolve_turn(&mut battle_state, predictable_rng());

        // Assert: neither side acts, and the simultaneous wipe goes down as
        // a loss for the player.
        let any_attack = event_bus
            .events()
            .iter()
            .any(|e| matches!(e, BattleEvent::MoveUsed { .. }));
        assert!(!any_attack, "Fainted monsters must not act.");
        assert_eq!(
            battle_state.phase,
            BattlePhase::Finished(BattleOutcome::Loss)
        );
    }
}
