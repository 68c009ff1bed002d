// Monster Trainer Schema - Shared type definitions
// This crate contains the core enums and data structs that are shared between
// the main monster-trainer crate and external content tooling, keeping the
// battle engine free of content-format concerns.

// Re-export the main types
pub use element_types::*;
pub use item_data::*;
pub use monster_data::*;

// Re-export the iterator trait behind the EnumIter derives so downstream
// crates can walk the enums without a direct strum dependency.
pub use strum::IntoEnumIterator;

pub mod element_types;
pub mod item_data;
pub mod monster_data;
