use crate::battle::config::BattleConfig;
use crate::battle::state::{BattleKind, BattleState, TurnRng};
use crate::items::Bag;
use crate::monster::Monster;
use crate::moves::Move;
use crate::trainer::{Trainer, TrainerKind};
use schema::ElementType;

/// A builder for creating test monsters with common defaults.
///
/// # Example
/// ```
/// let monster = TestMonsterBuilder::new("Flareon", ElementType::Fire)
///     .with_moves(vec![Move::new("Flame Burst", ElementType::Fire, 10, 10)])
///     .with_hp(20)
///     .build();
/// ```
pub struct TestMonsterBuilder {
    name: String,
    element: ElementType,
    level: u8,
    max_hp: u16,
    speed: u16,
    moves: Vec<Move>,
    current_hp: Option<u16>,
}

impl TestMonsterBuilder {
    /// Creates a new builder for a given name and element.
    pub fn new(name: &str, element: ElementType) -> Self {
        Self {
            name: name.to_string(),
            element,
            level: 5,
            max_hp: 60,
            speed: 10,
            moves: vec![Move::new("Tackle", ElementType::Normal, 5, 25)],
            current_hp: None,
        }
    }

    /// Sets the monster's level.
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// Sets the monster's maximum HP.
    pub fn with_max_hp(mut self, max_hp: u16) -> Self {
        self.max_hp = max_hp;
        self
    }

    /// Sets the monster's speed stat.
    pub fn with_speed(mut self, speed: u16) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the moves for the test monster.
    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = moves;
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    /// Builds the `Monster`.
    pub fn build(self) -> Monster {
        let mut monster = match Monster::new(
            self.name,
            self.element,
            self.level,
            self.max_hp,
            self.speed,
            self.moves,
        ) {
            Ok(monster) => monster,
            Err(err) => panic!("Failed to build test monster: {}", err),
        };

        if let Some(hp) = self.current_hp {
            monster.take_damage(monster.max_hp().saturating_sub(hp));
        }

        monster
    }
}

/// Creates a human-controlled test trainer with an empty bag.
pub fn create_test_trainer(id: &str, name: &str, team: Vec<Monster>) -> Trainer {
    create_test_trainer_with_bag(id, name, team, Bag::new())
}

/// Creates a human-controlled test trainer carrying the given bag.
pub fn create_test_trainer_with_bag(id: &str, name: &str, team: Vec<Monster>, bag: Bag) -> Trainer {
    match Trainer::new(id, name, TrainerKind::Human, team, bag) {
        Ok(trainer) => trainer,
        Err(err) => panic!("Failed to build test trainer: {}", err),
    }
}

/// Creates a standard 1v1 trainer battle state for testing.
pub fn create_test_battle(player_monster: Monster, opponent_monster: Monster) -> BattleState {
    create_test_battle_with_bag(player_monster, opponent_monster, Bag::new())
}

/// Creates a 1v1 trainer battle where the player carries the given bag.
pub fn create_test_battle_with_bag(
    player_monster: Monster,
    opponent_monster: Monster,
    bag: Bag,
) -> BattleState {
    let player = create_test_trainer_with_bag("p1", "Player 1", vec![player_monster], bag);
    let opponent = create_test_trainer("p2", "Player 2", vec![opponent_monster]);

    BattleState::new(
        "test_battle",
        BattleKind::Trainer,
        player,
        opponent,
        BattleConfig::default(),
    )
}

/// Creates a wild encounter for testing captures and escapes. The player
/// carries the given bag.
pub fn create_wild_battle(player_monster: Monster, wild_monster: Monster, bag: Bag) -> BattleState {
    let player = create_test_trainer_with_bag("p1", "Player 1", vec![player_monster], bag);
    BattleState::wild("wild_test", player, wild_monster, BattleConfig::default())
}

/// Empties the PP of one move slot.
pub fn drain_move_pp(monster: &mut Monster, index: usize) {
    if let Some(mv) = monster.move_at_mut(index) {
        while mv.pp() > 0 {
            mv.use_move();
        }
    }
}

/// Empties every move's PP so the monster can only Struggle.
pub fn drain_all_pp(monster: &mut Monster) {
    for index in 0..monster.moves().len() {
        drain_move_pp(monster, index);
    }
}

/// Creates a `TurnRng` with a long list of mid-range values (50).
/// Useful for tests where the specific rolls are not important, preventing
/// panics from exhaustion.
pub fn predictable_rng() -> TurnRng {
    TurnRng::new_for_test(vec![50; 100])
}
