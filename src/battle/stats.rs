use crate::battle::config::TurnOrderStat;
use crate::battle::state::{BattleState, Side};
use std::cmp::Ordering;

/// The active monster's value for the configured ordering stat.
pub fn ordering_stat(state: &BattleState, side: Side) -> u16 {
    let monster = state.active_monster(side);
    match state.config.turn_order {
        TurnOrderStat::Speed => monster.speed(),
        TurnOrderStat::Level => monster.level() as u16,
    }
}

/// Compare two sides for attack resolution order. The side with the higher
/// ordering stat acts first. Ties fall to the lexically smaller monster name,
/// then to the player side, so the order is a pure function of battle state
/// and identical states always resolve identically.
pub fn compare_attack_order(state: &BattleState, a: Side, b: Side) -> Ordering {
    ordering_stat(state, b)
        .cmp(&ordering_stat(state, a))
        .then_with(|| {
            state
                .active_monster(a)
                .name()
                .cmp(state.active_monster(b).name())
        })
        .then_with(|| a.to_index().cmp(&b.to_index()))
}
