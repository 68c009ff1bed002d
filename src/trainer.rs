use crate::errors::TeamError;
use crate::items::Bag;
use crate::monster::Monster;
use schema::ItemKind;
use serde::{Deserialize, Serialize};

/// One decision submitted by a side for the coming turn.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerAction {
    // The index refers to the move's position in the active monster's move
    // list. Out-of-range indices waste the turn; with no usable move left the
    // engine substitutes Struggle whatever the index says.
    UseMove { move_index: usize },

    // Spend one item of the given kind from the trainer's bag.
    UseItem { item: ItemKind },

    // Try to flee the battle.
    Retreat,
}

/// Who drives a trainer's decisions during a battle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerKind {
    Human,
    Npc,
}

/// One side of a battle: a named trainer with a non-empty monster team, the
/// index of the monster currently fighting, and an item bag. Wild encounters
/// use a single-monster NPC trainer with an empty bag.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Trainer {
    // A unique identifier. For a human this could be their user id, for an
    // NPC something like "wild_terrax".
    pub trainer_id: String,
    pub name: String,
    pub kind: TrainerKind,

    team: Vec<Monster>,
    active_index: usize,
    bag: Bag,
}

impl Trainer {
    /// Create a trainer. The team must hold at least one monster; the first
    /// team member starts active.
    pub fn new(
        trainer_id: impl Into<String>,
        name: impl Into<String>,
        kind: TrainerKind,
        team: Vec<Monster>,
        bag: Bag,
    ) -> Result<Self, TeamError> {
        if team.is_empty() {
            return Err(TeamError::EmptyTeam);
        }

        Ok(Trainer {
            trainer_id: trainer_id.into(),
            name: name.into(),
            kind,
            team,
            active_index: 0,
            bag,
        })
    }

    /// Wrap a wild monster as the opposing side of an encounter
    pub fn wild(monster: Monster) -> Self {
        let trainer_id = format!("wild_{}", monster.name().to_lowercase());
        let name = format!("Wild {}", monster.name());
        Trainer {
            trainer_id,
            name,
            kind: TrainerKind::Npc,
            team: vec![monster],
            active_index: 0,
            bag: Bag::new(),
        }
    }

    pub fn team(&self) -> &[Monster] {
        &self.team
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Pick which team member fights. Only meaningful before a battle; the
    /// engine never switches mid-battle.
    pub fn set_active(&mut self, index: usize) -> Result<(), TeamError> {
        if index >= self.team.len() {
            return Err(TeamError::InvalidActiveIndex(index));
        }
        self.active_index = index;
        Ok(())
    }

    pub fn active_monster(&self) -> &Monster {
        &self.team[self.active_index]
    }

    pub fn active_monster_mut(&mut self) -> &mut Monster {
        &mut self.team[self.active_index]
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    pub fn bag_mut(&mut self) -> &mut Bag {
        &mut self.bag
    }

    /// Restore the whole team to full HP and PP between encounters
    pub fn reset_team_for_encounter(&mut self) {
        for monster in &mut self.team {
            monster.reset_for_encounter();
        }
    }
}
