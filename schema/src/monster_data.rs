use crate::ElementType;
use serde::{Deserialize, Serialize};

/// Content definition of a move, as written in roster data files. The engine
/// crate turns a `MoveSpec` into a live move with a full PP pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveSpec {
    pub name: String,
    pub element: ElementType,
    pub power: u16,
    pub max_pp: u8,
}

/// Content definition of a monster. Moves are referenced by name and resolved
/// against the move table when the monster is spawned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterSpec {
    pub name: String,
    pub element: ElementType,
    pub max_hp: u16,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default = "default_speed")]
    pub speed: u16,
    pub moves: Vec<String>,
}

/// Top-level shape of a roster data file: the move table followed by the
/// monsters built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterData {
    pub moves: Vec<MoveSpec>,
    pub monsters: Vec<MonsterSpec>,
}

fn default_level() -> u8 {
    1
}

fn default_speed() -> u16 {
    1
}
