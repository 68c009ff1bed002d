use crate::errors::MonsterError;
use crate::moves::Move;
use schema::{ElementType, MonsterSpec};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of asking a monster for its next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveChoice {
    /// Index into the monster's move list.
    Move(usize),
    /// No usable move exists; the battle falls back to Struggle.
    Struggle,
}

/// Strategy for picking one of a monster's usable moves. The slice passed to
/// `select` holds `(move list index, move)` pairs that all have PP remaining
/// and is never empty. The return value is a position within that slice;
/// out-of-range picks are clamped to the last entry so a bad selector can
/// never stall a battle.
pub trait MoveSelector {
    fn select(&mut self, usable: &[(usize, &Move)]) -> usize;
}

/// Picks the first usable move every time.
pub struct FirstUsable;

impl MoveSelector for FirstUsable {
    fn select(&mut self, _usable: &[(usize, &Move)]) -> usize {
        0
    }
}

/// A battle-ready monster. HP and PP can only change through the mutation
/// API, which keeps `0 <= current_hp <= max_hp` and clamps every move's PP
/// pool; structurally invalid monsters are rejected at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    name: String,
    element: ElementType,
    level: u8,
    max_hp: u16,
    current_hp: u16,
    speed: u16,
    moves: Vec<Move>,
}

impl Monster {
    /// Create a monster with full HP. An empty move list is allowed; such a
    /// monster fights with Struggle.
    pub fn new(
        name: impl Into<String>,
        element: ElementType,
        level: u8,
        max_hp: u16,
        speed: u16,
        moves: Vec<Move>,
    ) -> Result<Self, MonsterError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MonsterError::EmptyName);
        }
        if max_hp == 0 {
            return Err(MonsterError::ZeroMaxHp { name });
        }
        if level == 0 {
            return Err(MonsterError::ZeroLevel { name });
        }

        Ok(Monster {
            name,
            element,
            level,
            max_hp,
            current_hp: max_hp,
            speed,
            moves,
        })
    }

    /// Create a monster from its catalog spec and already-resolved moves
    pub fn from_spec(spec: &MonsterSpec, moves: Vec<Move>) -> Result<Self, MonsterError> {
        Monster::new(
            spec.name.clone(),
            spec.element,
            spec.level,
            spec.max_hp,
            spec.speed,
            moves,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> ElementType {
        self.element
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn max_hp(&self) -> u16 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    pub fn speed(&self) -> u16 {
        self.speed
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn move_at(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    pub fn move_at_mut(&mut self, index: usize) -> Option<&mut Move> {
        self.moves.get_mut(index)
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Fraction of HP remaining, in [0, 1]
    pub fn hp_ratio(&self) -> f32 {
        self.current_hp as f32 / self.max_hp as f32
    }

    /// Apply damage, flooring at 0 HP. Returns whether the monster is
    /// fainted afterwards.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        self.current_hp = self.current_hp.saturating_sub(amount);
        self.is_fainted()
    }

    /// Heal up to max HP. Fainted monsters cannot be healed; returns the
    /// amount actually restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        if self.is_fainted() || amount == 0 {
            return 0;
        }
        let healed = amount.min(self.max_hp - self.current_hp);
        self.current_hp += healed;
        healed
    }

    /// Gain levels. Each level grows max HP by a tenth (truncated) and at
    /// least 1, so the pool strictly increases; current HP keeps its value.
    pub fn level_up(&mut self, levels: u8) {
        for _ in 0..levels {
            self.level = self.level.saturating_add(1);
            let growth = (self.max_hp / 10).max(1);
            self.max_hp = self.max_hp.saturating_add(growth);
        }
        self.current_hp = self.current_hp.min(self.max_hp);
    }

    /// Restore full HP and refill PP on every move, ready for a fresh
    /// encounter.
    pub fn reset_for_encounter(&mut self) {
        self.current_hp = self.max_hp;
        for move_ in &mut self.moves {
            move_.reset_pp();
        }
    }

    pub fn has_usable_move(&self) -> bool {
        self.moves.iter().any(|m| m.is_usable())
    }

    /// `(index, move)` pairs for every move with PP remaining
    pub fn usable_moves(&self) -> Vec<(usize, &Move)> {
        self.moves
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_usable())
            .collect()
    }

    /// Ask a selector to pick among the usable moves. With nothing usable
    /// (including an empty move list) the choice is Struggle.
    pub fn choose_move<S: MoveSelector>(&self, selector: &mut S) -> MoveChoice {
        let usable = self.usable_moves();
        if usable.is_empty() {
            return MoveChoice::Struggle;
        }
        let pick = selector.select(&usable).min(usable.len() - 1);
        MoveChoice::Move(usable[pick].0)
    }
}

impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] Lv.{} HP {}/{}",
            self.name, self.element, self.level, self.current_hp, self.max_hp
        )
    }
}
