//! A module for defining AI behaviors for battle opponents.

use crate::battle::state::{BattleState, Side};
use crate::trainer::TrainerAction;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// A trait for any system that can decide on a battle action.
/// This provides a common interface for different strategies.
pub trait Behavior {
    /// Inspects the battle state and decides on the next action for the given side.
    fn decide_action(&self, side: Side, state: &BattleState) -> TrainerAction;
}

/// Scores every usable move by expected damage against the current opponent
/// and picks the best one. Deterministic: ties go to the earlier move slot.
pub struct ScoringBehavior;

impl ScoringBehavior {
    pub fn new() -> Self {
        Self
    }

    /// The core scoring logic: raw power weighted by type effectiveness.
    fn score_move(&self, side: Side, move_index: usize, state: &BattleState) -> f32 {
        let attacker = state.active_monster(side);
        let defender = state.active_monster(side.opponent());

        match attacker.move_at(move_index) {
            Some(move_) => move_.power() as f32 * move_.effectiveness_against(defender.element()),
            None => -1.0,
        }
    }
}

impl Behavior for ScoringBehavior {
    fn decide_action(&self, side: Side, state: &BattleState) -> TrainerAction {
        let monster = state.active_monster(side);
        let usable = monster.usable_moves();

        // With nothing usable the engine substitutes Struggle; any index works.
        if usable.is_empty() {
            return TrainerAction::UseMove { move_index: 0 };
        }

        let best = usable
            .into_iter()
            .max_by_key(|(index, _)| {
                (
                    OrderedFloat(self.score_move(side, *index, state)),
                    Reverse(*index),
                )
            })
            .map(|(index, _)| index)
            .unwrap_or(0);

        TrainerAction::UseMove { move_index: best }
    }
}
