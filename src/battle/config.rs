use crate::moves::STRUGGLE_POWER;
use serde::{Deserialize, Serialize};

/// Which stat decides attack order. The game drafts never agreed on this, so
/// it is configuration rather than a rule.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOrderStat {
    Speed,
    Level,
}

/// Balance constants for one battle. Engine code always reads these instead
/// of hard-coding numbers, so encounters can be tuned per call site.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct BattleConfig {
    pub turn_order: TurnOrderStat,
    /// Chance of a critical hit, as a percentage rolled per attack.
    pub critical_hit_percent: u8,
    /// Damage multiplier applied on a critical hit.
    pub critical_multiplier: f32,
    /// Capture chance against a full-HP wild monster with a plain ball.
    pub capture_base_rate: f32,
    /// Chance that a retreat attempt succeeds.
    pub escape_chance: f32,
    /// Base power of the Struggle fallback.
    pub struggle_power: u16,
}

impl Default for BattleConfig {
    fn default() -> Self {
        BattleConfig {
            turn_order: TurnOrderStat::Speed,
            critical_hit_percent: 10,
            critical_multiplier: 1.5,
            capture_base_rate: 0.35,
            escape_chance: 0.6,
            struggle_power: STRUGGLE_POWER,
        }
    }
}
