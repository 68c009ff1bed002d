use schema::{ElementType, MoveSpec};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base power of the Struggle fallback used when a monster has no usable move.
pub const STRUGGLE_POWER: u16 = 4;

/// A battle move owned by a single monster: content data plus its PP pool.
/// Created with full PP; PP only changes through `use_move`, `restore_pp`,
/// and `reset_pp`, which keep it within `0..=max_pp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    name: String,
    element: ElementType,
    power: u16,
    max_pp: u8,
    pp: u8,
}

impl Move {
    /// Create a new move with a full PP pool
    pub fn new(name: impl Into<String>, element: ElementType, power: u16, max_pp: u8) -> Self {
        Move {
            name: name.into(),
            element,
            power,
            max_pp,
            pp: max_pp,
        }
    }

    /// Create a move from its catalog spec
    pub fn from_spec(spec: &MoveSpec) -> Self {
        Move::new(spec.name.clone(), spec.element, spec.power, spec.max_pp)
    }

    /// The fallback move used when nothing else is usable. It is built on
    /// demand and never stored in a move list, so its PP pool is never
    /// consumed.
    pub fn struggle(power: u16) -> Self {
        Move::new("Struggle", ElementType::Normal, power, u8::MAX)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> ElementType {
        self.element
    }

    pub fn power(&self) -> u16 {
        self.power
    }

    pub fn pp(&self) -> u8 {
        self.pp
    }

    pub fn max_pp(&self) -> u8 {
        self.max_pp
    }

    pub fn is_usable(&self) -> bool {
        self.pp > 0
    }

    /// Use the move: decrement PP and return the base power, or return 0
    /// without touching state when the pool is empty.
    pub fn use_move(&mut self) -> u16 {
        if self.pp > 0 {
            self.pp -= 1;
            self.power
        } else {
            0
        }
    }

    /// Restore PP up to the pool's capacity. Returns the amount actually
    /// restored, which is smaller than `amount` near the cap.
    pub fn restore_pp(&mut self, amount: u8) -> u8 {
        let restored = amount.min(self.max_pp - self.pp);
        self.pp += restored;
        restored
    }

    /// Refill the pool to capacity
    pub fn reset_pp(&mut self) {
        self.pp = self.max_pp;
    }

    /// Effectiveness multiplier of this move against a defender's element
    pub fn effectiveness_against(&self, defender: ElementType) -> f32 {
        ElementType::type_effectiveness(self.element, defender)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] power {} ({}/{} PP)",
            self.name, self.element, self.power, self.pp, self.max_pp
        )
    }
}
