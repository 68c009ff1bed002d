use crate::battle::capture::{capture_chance, roll_capture_success, roll_escape_success};
use crate::battle::commands::BattleCommand;
use crate::battle::state::{
    ActionFailureReason, ActionOutcome, BattleEvent, BattleKind, BattleOutcome, BattleState, Side,
    TakenAction, TurnRng,
};
use crate::items::item_data;
use crate::moves::Move;
use schema::ItemKind;
use std::cmp::Reverse;

/// Calculate the outcome of one attack action as a command list.
///
/// Soft failures are part of the result, not errors: an out-of-range move
/// index or a drained chosen move wastes the turn and is recorded in the
/// action's outcome record. A monster with no usable move at all fights
/// with Struggle no matter which index was submitted.
pub fn calculate_attack_outcome(
    state: &BattleState,
    attacker: Side,
    move_index: usize,
    rng: &mut TurnRng,
) -> Vec<BattleCommand> {
    let attacker_monster = state.active_monster(attacker);
    let attacker_name = attacker_monster.name().to_string();

    if !attacker_monster.has_usable_move() {
        let struggle = Move::struggle(state.config.struggle_power);
        return attack_commands(state, attacker, &attacker_name, &struggle, None, rng);
    }

    let Some(chosen) = attacker_monster.move_at(move_index) else {
        let mut outcome = ActionOutcome::taking(attacker, &attacker_name, TakenAction::Pass);
        outcome.invalid_selection = true;
        return vec![
            BattleCommand::EmitEvent(BattleEvent::ActionFailed {
                side: attacker,
                reason: ActionFailureReason::InvalidMoveSelection { index: move_index },
            }),
            BattleCommand::EmitEvent(BattleEvent::ActionResolved { outcome }),
        ];
    };

    if !chosen.is_usable() {
        let mut outcome = ActionOutcome::taking(
            attacker,
            &attacker_name,
            TakenAction::Move {
                name: chosen.name().to_string(),
            },
        );
        outcome.no_pp = true;
        return vec![
            BattleCommand::EmitEvent(BattleEvent::ActionFailed {
                side: attacker,
                reason: ActionFailureReason::NoPPRemaining {
                    move_name: chosen.name().to_string(),
                },
            }),
            BattleCommand::EmitEvent(BattleEvent::ActionResolved { outcome }),
        ];
    }

    attack_commands(state, attacker, &attacker_name, chosen, Some(move_index), rng)
}

/// Commands for a landed attack. `deduct_index` is None for Struggle, which
/// spends no PP.
fn attack_commands(
    state: &BattleState,
    attacker: Side,
    attacker_name: &str,
    move_: &Move,
    deduct_index: Option<usize>,
    rng: &mut TurnRng,
) -> Vec<BattleCommand> {
    let defender = attacker.opponent();
    let defender_monster = state.active_monster(defender);

    let mut commands = vec![BattleCommand::EmitEvent(BattleEvent::MoveUsed {
        side: attacker,
        monster: attacker_name.to_string(),
        move_used: move_.name().to_string(),
    })];

    if let Some(index) = deduct_index {
        commands.push(BattleCommand::DeductMovePP {
            target: attacker,
            move_index: index,
        });
    }

    let crit_roll = rng.next_outcome("Critical Hit Check");
    let critical = crit_roll <= state.config.critical_hit_percent;
    let crit_multiplier = if critical {
        state.config.critical_multiplier
    } else {
        1.0
    };

    let type_multiplier = move_.effectiveness_against(defender_monster.element());
    let damage = (move_.power() as f32 * type_multiplier * crit_multiplier).floor() as u16;

    if critical {
        commands.push(BattleCommand::EmitEvent(BattleEvent::CriticalHit {
            side: attacker,
            monster: attacker_name.to_string(),
        }));
    }
    commands.push(BattleCommand::EmitEvent(BattleEvent::AttackEffectiveness {
        multiplier: type_multiplier,
    }));
    commands.push(BattleCommand::DealDamage {
        target: defender,
        amount: damage,
    });

    let mut outcome = ActionOutcome::taking(
        attacker,
        attacker_name,
        TakenAction::Move {
            name: move_.name().to_string(),
        },
    );
    outcome.damage = damage;
    outcome.critical = critical;
    outcome.multiplier = type_multiplier * crit_multiplier;
    commands.push(BattleCommand::EmitEvent(BattleEvent::ActionResolved {
        outcome,
    }));

    commands
}

/// Calculate the outcome of using an item. The empty-slot check happens
/// here, so command execution never fails on a missing item.
pub fn calculate_item_outcome(
    state: &BattleState,
    user: Side,
    item: ItemKind,
    rng: &mut TurnRng,
) -> Vec<BattleCommand> {
    let user_name = state.active_monster(user).name().to_string();

    if state.trainer(user).bag().count(item) == 0 {
        let mut outcome =
            ActionOutcome::taking(user, &user_name, TakenAction::Item { kind: item });
        outcome.invalid_selection = true;
        return vec![
            BattleCommand::EmitEvent(BattleEvent::ActionFailed {
                side: user,
                reason: ActionFailureReason::NoItemRemaining { item },
            }),
            BattleCommand::EmitEvent(BattleEvent::ActionResolved { outcome }),
        ];
    }

    match item {
        ItemKind::Capture => calculate_capture_attempt(state, user, rng),
        ItemKind::Heal => calculate_heal_item(state, user),
        ItemKind::RestorePP => calculate_pp_item(state, user),
    }
}

fn calculate_capture_attempt(
    state: &BattleState,
    user: Side,
    rng: &mut TurnRng,
) -> Vec<BattleCommand> {
    let user_name = state.active_monster(user).name().to_string();

    // Capturing is only legal against wild monsters. The ball stays in the
    // bag but the turn is spent.
    if state.kind != BattleKind::Wild {
        let mut outcome = ActionOutcome::taking(
            user,
            &user_name,
            TakenAction::Item {
                kind: ItemKind::Capture,
            },
        );
        outcome.invalid_selection = true;
        return vec![
            BattleCommand::EmitEvent(BattleEvent::ActionFailed {
                side: user,
                reason: ActionFailureReason::CaptureNotAllowed,
            }),
            BattleCommand::EmitEvent(BattleEvent::ActionResolved { outcome }),
        ];
    }

    let target_monster = state.active_monster(user.opponent());
    let remaining = state.trainer(user).bag().count(ItemKind::Capture) - 1;

    let mut commands = vec![
        BattleCommand::SpendItem {
            target: user,
            item: ItemKind::Capture,
        },
        BattleCommand::EmitEvent(BattleEvent::ItemUsed {
            side: user,
            item: ItemKind::Capture,
            remaining,
        }),
    ];

    let chance = capture_chance(state.config.capture_base_rate, target_monster, 1.0);
    let success = roll_capture_success(chance, rng);

    commands.push(BattleCommand::EmitEvent(BattleEvent::CaptureAttempted {
        target: target_monster.name().to_string(),
        success,
    }));
    commands.push(BattleCommand::EmitEvent(BattleEvent::ActionResolved {
        outcome: ActionOutcome::taking(
            user,
            &user_name,
            TakenAction::Item {
                kind: ItemKind::Capture,
            },
        ),
    }));

    if success {
        commands.push(BattleCommand::EndBattle(BattleOutcome::Capture));
    }

    commands
}

fn calculate_heal_item(state: &BattleState, user: Side) -> Vec<BattleCommand> {
    let monster = state.active_monster(user);
    let user_name = monster.name().to_string();
    let remaining = state.trainer(user).bag().count(ItemKind::Heal) - 1;
    let magnitude = item_data(ItemKind::Heal).magnitude as u16;

    let mut commands = vec![
        BattleCommand::SpendItem {
            target: user,
            item: ItemKind::Heal,
        },
        BattleCommand::EmitEvent(BattleEvent::ItemUsed {
            side: user,
            item: ItemKind::Heal,
            remaining,
        }),
    ];

    // Fainted monsters cannot be healed and a full monster gains nothing;
    // the potion is spent either way.
    let healed = if monster.is_fainted() {
        0
    } else {
        magnitude.min(monster.max_hp() - monster.current_hp())
    };

    if healed > 0 {
        commands.push(BattleCommand::HealMonster {
            target: user,
            amount: healed,
        });
        commands.push(BattleCommand::EmitEvent(BattleEvent::MonsterHealed {
            side: user,
            monster: user_name.clone(),
            amount: healed,
            new_hp: monster.current_hp() + healed,
        }));
    }

    commands.push(BattleCommand::EmitEvent(BattleEvent::ActionResolved {
        outcome: ActionOutcome::taking(
            user,
            &user_name,
            TakenAction::Item {
                kind: ItemKind::Heal,
            },
        ),
    }));

    commands
}

fn calculate_pp_item(state: &BattleState, user: Side) -> Vec<BattleCommand> {
    let monster = state.active_monster(user);
    let user_name = monster.name().to_string();
    let remaining = state.trainer(user).bag().count(ItemKind::RestorePP) - 1;
    let magnitude = item_data(ItemKind::RestorePP).magnitude;

    let mut commands = vec![
        BattleCommand::SpendItem {
            target: user,
            item: ItemKind::RestorePP,
        },
        BattleCommand::EmitEvent(BattleEvent::ItemUsed {
            side: user,
            item: ItemKind::RestorePP,
            remaining,
        }),
    ];

    // Target the move missing the most PP, lowest index on ties. With every
    // pool full the potion fizzles but is still spent.
    let target_move = monster
        .moves()
        .iter()
        .enumerate()
        .filter(|(_, m)| m.pp() < m.max_pp())
        .max_by_key(|(index, m)| (m.max_pp() - m.pp(), Reverse(*index)));

    if let Some((move_index, move_)) = target_move {
        let restored = magnitude.min(move_.max_pp() - move_.pp());
        commands.push(BattleCommand::RestoreMovePP {
            target: user,
            move_index,
            amount: restored,
        });
        commands.push(BattleCommand::EmitEvent(BattleEvent::MovePPRestored {
            side: user,
            monster: user_name.clone(),
            move_name: move_.name().to_string(),
            amount: restored,
        }));
    }

    commands.push(BattleCommand::EmitEvent(BattleEvent::ActionResolved {
        outcome: ActionOutcome::taking(
            user,
            &user_name,
            TakenAction::Item {
                kind: ItemKind::RestorePP,
            },
        ),
    }));

    commands
}

/// Calculate the outcome of a retreat attempt.
pub fn calculate_retreat_outcome(
    state: &BattleState,
    side: Side,
    rng: &mut TurnRng,
) -> Vec<BattleCommand> {
    let monster_name = state.active_monster(side).name().to_string();
    let success = roll_escape_success(state.config.escape_chance, rng);

    let mut commands = vec![BattleCommand::EmitEvent(BattleEvent::RetreatAttempted {
        side,
        success,
    })];

    commands.push(BattleCommand::EmitEvent(BattleEvent::ActionResolved {
        outcome: ActionOutcome::taking(side, monster_name, TakenAction::Retreat),
    }));

    if success {
        commands.push(BattleCommand::EndBattle(BattleOutcome::Retreat));
    }

    commands
}
