// In: src/lib.rs

//! Monster Trainer Battle Engine
//!
//! A turn-based monster battle system with elemental type matchups, item use,
//! captures, and deterministic turn resolution. Battles emit event streams
//! rather than printing, so the engine can sit behind any front end.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod catalog;
pub mod errors;
pub mod items;
pub mod monster;
pub mod moves;
pub mod trainer;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `monster-trainer` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export all core data definitions and static enums.
pub use schema::{
    // Core Enums
    ElementType,
    ItemKind,
    // Content Data Structs
    MonsterSpec,
    MoveSpec,
    RosterData,
};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::engine::{collect_npc_actions, ready_for_turn_resolution, resolve_turn};
pub use battle::state::{
    BattleEvent, BattleKind, BattleOutcome, BattlePhase, BattleState, Side, TurnRng,
};

// High-level battle driving and tuning.
pub use battle::config::{BattleConfig, TurnOrderStat};
pub use battle::runner::{BattleRunner, ExecutionResult};

// Core runtime types for a battle.
pub use items::Bag;
pub use monster::Monster;
pub use moves::Move;
pub use trainer::{Trainer, TrainerAction, TrainerKind};

// Primary data access.
pub use catalog::Catalog;

// Crate-specific error and result types.
pub use errors::{
    ActionError, CatalogError, CatalogResult, GameError, GameResult, MonsterError, TeamError,
};
