use crate::errors::{CatalogError, CatalogResult, GameResult};
use crate::monster::Monster;
use crate::moves::Move;
use schema::{ElementType, MonsterSpec, MoveSpec, RosterData};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Name of the roster file inside a data directory.
const ROSTER_FILE: &str = "roster.ron";

/// The content catalog: every move and monster definition known to the game,
/// indexed by name. Catalogs are built once before a battle and only read
/// afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    moves: HashMap<String, MoveSpec>,
    monsters: HashMap<String, MonsterSpec>,
}

impl Catalog {
    /// Build a catalog from roster data. Later entries win on duplicate
    /// names; unresolved move references surface when spawning.
    pub fn from_roster(roster: RosterData) -> Self {
        let moves = roster
            .moves
            .into_iter()
            .map(|spec| (spec.name.clone(), spec))
            .collect();
        let monsters = roster
            .monsters
            .into_iter()
            .map(|spec| (spec.name.clone(), spec))
            .collect();

        Catalog { moves, monsters }
    }

    /// Parse a catalog from RON text
    pub fn from_ron_str(content: &str) -> CatalogResult<Self> {
        let roster: RosterData = ron::from_str(content)?;
        Ok(Catalog::from_roster(roster))
    }

    /// Load the roster file from a data directory
    pub fn load(data_path: &Path) -> CatalogResult<Self> {
        let roster_path = data_path.join(ROSTER_FILE);
        if !roster_path.exists() {
            return Err(CatalogError::Io(format!(
                "Roster file not found: {}",
                roster_path.display()
            )));
        }

        let content = fs::read_to_string(&roster_path)?;
        Catalog::from_ron_str(&content)
    }

    /// The default content carried in code, used when no data directory is
    /// available.
    pub fn builtin() -> Self {
        Catalog::from_roster(builtin_roster())
    }

    pub fn move_spec(&self, name: &str) -> Option<&MoveSpec> {
        self.moves.get(name)
    }

    pub fn monster_spec(&self, name: &str) -> Option<&MonsterSpec> {
        self.monsters.get(name)
    }

    /// All monster names, sorted for stable display
    pub fn monster_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.monsters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build a battle-ready monster from its catalog entry, resolving every
    /// referenced move with a full PP pool.
    pub fn spawn(&self, name: &str) -> GameResult<Monster> {
        let spec = self
            .monsters
            .get(name)
            .ok_or_else(|| CatalogError::MonsterNotFound(name.to_string()))?;

        let mut moves = Vec::with_capacity(spec.moves.len());
        for move_name in &spec.moves {
            let move_spec = self
                .moves
                .get(move_name)
                .ok_or_else(|| CatalogError::MoveNotFound(move_name.clone()))?;
            moves.push(Move::from_spec(move_spec));
        }

        let monster = Monster::from_spec(spec, moves)?;
        Ok(monster)
    }
}

/// The roster the game drafts shipped with.
fn builtin_roster() -> RosterData {
    let move_table = [
        ("Flame Burst", ElementType::Fire, 10, 10),
        ("Blaze Kick", ElementType::Fire, 8, 15),
        ("Bubble Beam", ElementType::Water, 7, 10),
        ("Aqua Jet", ElementType::Water, 9, 10),
        ("Rock Smash", ElementType::Rock, 12, 8),
        ("Thunder Shock", ElementType::Electric, 10, 10),
        ("Tackle", ElementType::Normal, 5, 25),
    ];
    let monster_table = [
        ("Flareon", ElementType::Fire, 60, 12, vec!["Flame Burst", "Blaze Kick", "Tackle"]),
        ("Aquarion", ElementType::Water, 55, 11, vec!["Bubble Beam", "Aqua Jet", "Tackle"]),
        ("Terrax", ElementType::Rock, 80, 7, vec!["Rock Smash", "Tackle"]),
        ("Voltaris", ElementType::Electric, 50, 14, vec!["Thunder Shock", "Tackle"]),
    ];

    RosterData {
        moves: move_table
            .into_iter()
            .map(|(name, element, power, max_pp)| MoveSpec {
                name: name.to_string(),
                element,
                power,
                max_pp,
            })
            .collect(),
        monsters: monster_table
            .into_iter()
            .map(|(name, element, max_hp, speed, moves)| MonsterSpec {
                name: name.to_string(),
                element,
                max_hp,
                level: 5,
                speed,
                moves: moves.into_iter().map(str::to_string).collect(),
            })
            .collect(),
    }
}
