use crate::battle::ai::{Behavior, ScoringBehavior};
use crate::battle::calculators::{
    calculate_attack_outcome, calculate_item_outcome, calculate_retreat_outcome,
};
use crate::battle::commands::{execute_command_batch, BattleCommand};
use crate::battle::state::{
    BattleEvent, BattleOutcome, BattlePhase, BattleState, EventBus, Side, TurnRng,
};
use crate::battle::stats::compare_attack_order;
use crate::trainer::{TrainerAction, TrainerKind};

/// Fill the action queue for NPC-controlled sides that have not chosen yet.
/// Human sides are left alone; their actions arrive through the runner.
pub fn collect_npc_actions(state: &mut BattleState) {
    let brain = ScoringBehavior::new();
    for index in 0..2 {
        let side = Side::from_index(index);
        if state.action_queue[index].is_none() && state.trainer(side).kind == TrainerKind::Npc {
            state.action_queue[index] = Some(brain.decide_action(side, state));
        }
    }
}

/// Check if the battle is ready for turn resolution (both sides have queued
/// an action and the battle is not over).
pub fn ready_for_turn_resolution(state: &BattleState) -> bool {
    !state.is_finished() && state.action_queue[0].is_some() && state.action_queue[1].is_some()
}

/// Main entry point for turn resolution.
/// Takes a battle state and RNG oracle, executes one complete turn, and
/// returns the EventBus containing all events that occurred.
pub fn resolve_turn(state: &mut BattleState, mut rng: TurnRng) -> EventBus {
    let mut bus = EventBus::new();

    if state.is_finished() {
        return bus;
    }

    initialize_turn(state, &mut bus);

    for (side, action) in determine_action_order(state) {
        // A successful capture or retreat ends the turn on the spot.
        if state.is_finished() {
            break;
        }
        // A monster that fainted earlier in the turn loses its action.
        if state.active_monster(side).is_fainted() {
            continue;
        }

        let commands = action_commands(state, side, &action, &mut rng);
        let _ = execute_command_batch(commands, state, &mut bus);
    }

    check_end_conditions(state, &mut bus);
    finalize_turn(state, &mut bus);

    bus
}

/// Queued actions in resolution order. Items and retreats resolve before
/// attacks; within a tier the ordering stat decides, with the lexical-name
/// and player-side tiebreaks behind it.
pub fn determine_action_order(state: &BattleState) -> Vec<(Side, TrainerAction)> {
    let mut actions: Vec<(Side, TrainerAction)> = Vec::new();
    for index in 0..2 {
        if let Some(action) = state.action_queue[index] {
            actions.push((Side::from_index(index), action));
        }
    }

    actions.sort_by(|(side_a, action_a), (side_b, action_b)| {
        action_priority(action_b)
            .cmp(&action_priority(action_a))
            .then_with(|| compare_attack_order(state, *side_a, *side_b))
    });

    actions
}

/// Items and retreats outrank attacks.
fn action_priority(action: &TrainerAction) -> u8 {
    match action {
        TrainerAction::UseMove { .. } => 0,
        TrainerAction::UseItem { .. } | TrainerAction::Retreat => 1,
    }
}

fn action_commands(
    state: &BattleState,
    side: Side,
    action: &TrainerAction,
    rng: &mut TurnRng,
) -> Vec<BattleCommand> {
    match action {
        TrainerAction::UseMove { move_index } => {
            calculate_attack_outcome(state, side, *move_index, rng)
        }
        TrainerAction::UseItem { item } => calculate_item_outcome(state, side, *item, rng),
        TrainerAction::Retreat => calculate_retreat_outcome(state, side, rng),
    }
}

fn initialize_turn(state: &mut BattleState, bus: &mut EventBus) {
    if state.phase == BattlePhase::NotStarted {
        let commands = vec![
            BattleCommand::SetPhase(BattlePhase::InProgress),
            BattleCommand::EmitEvent(BattleEvent::BattleStarted),
        ];
        let _ = execute_command_batch(commands, state, bus);
    }
    bus.push(BattleEvent::TurnStarted {
        turn_number: state.turn_number,
    });
}

/// Faint-based end check. A double faint counts against the player.
fn check_end_conditions(state: &mut BattleState, bus: &mut EventBus) {
    if state.is_finished() {
        return;
    }

    let player_fainted = state.active_monster(Side::Player).is_fainted();
    let opponent_fainted = state.active_monster(Side::Opponent).is_fainted();

    let outcome = match (player_fainted, opponent_fainted) {
        (true, _) => Some(BattleOutcome::Loss),
        (false, true) => Some(BattleOutcome::Win),
        (false, false) => None,
    };

    if let Some(outcome) = outcome {
        let _ = execute_command_batch(vec![BattleCommand::EndBattle(outcome)], state, bus);
    }
}

fn finalize_turn(state: &mut BattleState, bus: &mut EventBus) {
    let mut commands = Vec::new();
    if !state.is_finished() {
        commands.push(BattleCommand::IncrementTurnNumber);
    }
    commands.push(BattleCommand::ClearActionQueue);
    let _ = execute_command_batch(commands, state, bus);
    bus.push(BattleEvent::TurnEnded);
}
