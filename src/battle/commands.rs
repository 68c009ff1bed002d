use crate::battle::state::{
    BattleEvent, BattleOutcome, BattlePhase, BattleState, EventBus, Side,
};
use schema::ItemKind;

/// Atomic commands representing final state changes. Calculators produce
/// these without touching the state; execution below is the only place
/// battle state mutates during turn resolution.
#[derive(Debug, Clone)]
pub enum BattleCommand {
    // Direct state changes
    SetPhase(BattlePhase),
    IncrementTurnNumber,
    ClearActionQueue,

    // Monster modifications
    DealDamage {
        target: Side,
        amount: u16,
    },
    HealMonster {
        target: Side,
        amount: u16,
    },
    DeductMovePP {
        target: Side,
        move_index: usize,
    },
    RestoreMovePP {
        target: Side,
        move_index: usize,
        amount: u8,
    },

    // Bag changes
    SpendItem {
        target: Side,
        item: ItemKind,
    },

    // Battle flow
    EmitEvent(BattleEvent),
    EndBattle(BattleOutcome),
}

/// Error types for command execution
#[derive(Debug, PartialEq)]
pub enum ExecutionError {
    InvalidMoveIndex(usize),
    NoItemRemaining(ItemKind),
}

/// Execute a batch of commands in order, stopping at the first failure.
pub fn execute_command_batch(
    commands: Vec<BattleCommand>,
    state: &mut BattleState,
    bus: &mut EventBus,
) -> Result<(), ExecutionError> {
    for command in commands {
        execute_command(command, state, bus)?;
    }
    Ok(())
}

/// Damage application emits its own events so faints are detected at the
/// single point where HP actually changes.
fn execute_deal_damage_command(
    target: Side,
    amount: u16,
    state: &mut BattleState,
    bus: &mut EventBus,
) {
    let monster = state.active_monster_mut(target);
    let monster_name = monster.name().to_string();
    let did_faint = monster.take_damage(amount);
    let remaining_hp = monster.current_hp();

    bus.push(BattleEvent::DamageDealt {
        side: target,
        monster: monster_name.clone(),
        damage: amount,
        remaining_hp,
    });

    if did_faint {
        bus.push(BattleEvent::MonsterFainted {
            side: target,
            monster: monster_name,
        });
    }
}

pub fn execute_command(
    command: BattleCommand,
    state: &mut BattleState,
    bus: &mut EventBus,
) -> Result<(), ExecutionError> {
    match command {
        BattleCommand::EmitEvent(event) => {
            bus.push(event);
            Ok(())
        }
        BattleCommand::DealDamage { target, amount } => {
            execute_deal_damage_command(target, amount, state, bus);
            Ok(())
        }
        BattleCommand::HealMonster { target, amount } => {
            state.active_monster_mut(target).heal(amount);
            Ok(())
        }
        BattleCommand::DeductMovePP { target, move_index } => {
            let monster = state.active_monster_mut(target);
            match monster.move_at_mut(move_index) {
                Some(move_) => {
                    move_.use_move();
                    Ok(())
                }
                None => Err(ExecutionError::InvalidMoveIndex(move_index)),
            }
        }
        BattleCommand::RestoreMovePP {
            target,
            move_index,
            amount,
        } => {
            let monster = state.active_monster_mut(target);
            match monster.move_at_mut(move_index) {
                Some(move_) => {
                    move_.restore_pp(amount);
                    Ok(())
                }
                None => Err(ExecutionError::InvalidMoveIndex(move_index)),
            }
        }
        BattleCommand::SpendItem { target, item } => {
            if state.trainer_mut(target).bag_mut().try_consume(item) {
                Ok(())
            } else {
                Err(ExecutionError::NoItemRemaining(item))
            }
        }
        BattleCommand::SetPhase(phase) => {
            state.phase = phase;
            Ok(())
        }
        BattleCommand::EndBattle(outcome) => {
            state.phase = BattlePhase::Finished(outcome);
            bus.push(BattleEvent::BattleEnded { outcome });
            Ok(())
        }
        BattleCommand::IncrementTurnNumber => {
            state.turn_number += 1;
            Ok(())
        }
        BattleCommand::ClearActionQueue => {
            state.action_queue = [None, None];
            Ok(())
        }
    }
}
