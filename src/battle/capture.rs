use crate::battle::state::TurnRng;
use crate::monster::Monster;

/// Calculate the capture chance for a wild monster.
/// Formula: chance = base_rate * ((max_hp * 3 - current_hp * 2) / (max_hp * 3)) * ball_bonus
///
/// A full-HP target keeps a third of the base rate; the chance rises toward
/// the full base rate as the target's HP drops. The result is clamped to
/// [0.0, 1.0].
pub fn capture_chance(base_rate: f32, target: &Monster, ball_bonus: f32) -> f32 {
    let max_hp = target.max_hp() as f32;
    let current_hp = target.current_hp() as f32;
    let hp_multiplier = (max_hp * 3.0 - current_hp * 2.0) / (max_hp * 3.0);

    (base_rate * hp_multiplier * ball_bonus).clamp(0.0, 1.0)
}

/// Roll for capture success. Returns true if the capture succeeds.
pub fn roll_capture_success(chance: f32, rng: &mut TurnRng) -> bool {
    let threshold = (chance * 100.0).round() as u8;
    rng.next_outcome("Capture Check") <= threshold
}

/// Roll for escape success against a flat configured chance.
pub fn roll_escape_success(chance: f32, rng: &mut TurnRng) -> bool {
    let threshold = (chance * 100.0).round() as u8;
    rng.next_outcome("Escape Check") <= threshold
}
