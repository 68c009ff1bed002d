use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, Display, EnumIter)]
pub enum ElementType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Rock,
}

impl ElementType {
    /// Calculate the effectiveness multiplier for an attacking element vs a defending element.
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective.
    /// Pairs without a tabulated entry are neutral.
    pub fn type_effectiveness(attacking: ElementType, defending: ElementType) -> f32 {
        use ElementType::*;

        match (attacking, defending) {
            // Normal
            (Normal, Rock) => 0.5,
            (Normal, _) => 1.0,

            // Fire
            (Fire, Fire) | (Fire, Water) | (Fire, Rock) => 0.5,
            (Fire, Grass) => 2.0,
            (Fire, _) => 1.0,

            // Water
            (Water, Water) | (Water, Grass) => 0.5,
            (Water, Fire) | (Water, Rock) => 2.0,
            (Water, _) => 1.0,

            // Grass
            (Grass, Fire) => 0.5,
            (Grass, Water) | (Grass, Rock) => 2.0,
            (Grass, _) => 1.0,

            // Electric
            (Electric, Electric) | (Electric, Grass) | (Electric, Rock) => 0.5,
            (Electric, Water) => 2.0,
            (Electric, _) => 1.0,

            // Rock
            (Rock, Fire) => 2.0,
            (Rock, _) => 1.0,
        }
    }

    pub fn is_super_effective(attacking: ElementType, defending: ElementType) -> bool {
        Self::type_effectiveness(attacking, defending) > 1.0
    }
}
