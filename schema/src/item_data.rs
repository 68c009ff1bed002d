use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The kinds of items a trainer can use during a battle. Effects and display
/// names live with the item definitions in the engine crate; this enum is the
/// shared key type for bags and actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, Display, EnumIter)]
pub enum ItemKind {
    /// Attempt to capture the opposing wild monster.
    Capture,
    /// Restore HP on the user's active monster.
    Heal,
    /// Restore PP on one of the active monster's moves.
    RestorePP,
}
