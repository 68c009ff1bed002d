use std::fmt;

/// Main error type for the Monster Trainer battle engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Error related to roster content loading or lookup
    Catalog(CatalogError),
    /// Error related to constructing a monster from invalid data
    Monster(MonsterError),
    /// Error related to assembling a trainer's team
    Team(TeamError),
    /// Error related to submitting battle actions
    Action(ActionError),
}

/// Errors related to roster catalog operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The named monster was not found in the catalog
    MonsterNotFound(String),
    /// A monster spec referenced a move name missing from the move table
    MoveNotFound(String),
    /// A roster file could not be read
    Io(String),
    /// A roster file could not be parsed
    Parse(String),
}

/// Errors rejected at monster construction time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonsterError {
    /// Monster name is empty
    EmptyName,
    /// Maximum HP must be at least 1
    ZeroMaxHp { name: String },
    /// Level must be at least 1
    ZeroLevel { name: String },
}

/// Errors rejected at trainer construction time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    /// A trainer must bring at least one monster
    EmptyTeam,
    /// Active index is out of bounds for the team
    InvalidActiveIndex(usize),
}

/// Errors related to submitting actions to a battle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The battle has already finished
    BattleAlreadyOver,
    /// The side already has an action queued for this turn
    ActionAlreadyQueued(usize),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Catalog(err) => write!(f, "Catalog error: {}", err),
            GameError::Monster(err) => write!(f, "Monster error: {}", err),
            GameError::Team(err) => write!(f, "Team error: {}", err),
            GameError::Action(err) => write!(f, "Action error: {}", err),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::MonsterNotFound(name) => write!(f, "Monster not found: {}", name),
            CatalogError::MoveNotFound(name) => write!(f, "Move not found: {}", name),
            CatalogError::Io(details) => write!(f, "Roster file error: {}", details),
            CatalogError::Parse(details) => write!(f, "Malformed roster data: {}", details),
        }
    }
}

impl fmt::Display for MonsterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonsterError::EmptyName => write!(f, "Monster name must not be empty"),
            MonsterError::ZeroMaxHp { name } => write!(f, "Monster {} has zero max HP", name),
            MonsterError::ZeroLevel { name } => write!(f, "Monster {} has zero level", name),
        }
    }
}

impl fmt::Display for TeamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamError::EmptyTeam => write!(f, "Team must contain at least one monster"),
            TeamError::InvalidActiveIndex(index) => write!(f, "Invalid active index: {}", index),
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::BattleAlreadyOver => write!(f, "Battle has already finished"),
            ActionError::ActionAlreadyQueued(index) => {
                write!(f, "Side {} already has an action queued", index)
            }
        }
    }
}

impl std::error::Error for GameError {}
impl std::error::Error for CatalogError {}
impl std::error::Error for MonsterError {}
impl std::error::Error for TeamError {}
impl std::error::Error for ActionError {}

impl From<CatalogError> for GameError {
    fn from(err: CatalogError) -> Self {
        GameError::Catalog(err)
    }
}

impl From<MonsterError> for GameError {
    fn from(err: MonsterError) -> Self {
        GameError::Monster(err)
    }
}

impl From<TeamError> for GameError {
    fn from(err: TeamError) -> Self {
        GameError::Team(err)
    }
}

impl From<ActionError> for GameError {
    fn from(err: ActionError) -> Self {
        GameError::Action(err)
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err.to_string())
    }
}

impl From<ron::error::SpannedError> for CatalogError {
    fn from(err: ron::error::SpannedError) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;
