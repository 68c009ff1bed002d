use crate::battle::config::BattleConfig;
use crate::monster::Monster;
use crate::trainer::{Trainer, TrainerAction};
use schema::ItemKind;
use serde::{Deserialize, Serialize};

/// How the battle ended, from the player side's point of view.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// The opposing monster fainted.
    Win,
    /// The player's monster fainted.
    Loss,
    /// The opposing wild monster was captured.
    Capture,
    /// A side fled the battle.
    Retreat,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum BattlePhase {
    NotStarted,
    InProgress,
    Finished(BattleOutcome),
}

/// What kind of encounter this is. Capture attempts are only legal against
/// wild monsters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleKind {
    Wild,
    Trainer,
}

/// One of the two sides of a battle. The player side is index 0.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn to_index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Side::Player,
            _ => Side::Opponent,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// The action a combatant ended up taking, as recorded in its outcome.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum TakenAction {
    Move { name: String },
    Item { kind: ItemKind },
    Retreat,
    /// The turn was spent on nothing, e.g. an out-of-range move selection.
    Pass,
}

/// Structured record of one resolved action within a turn. This is the
/// engine's contract with frontends: damage numbers, the critical flag, the
/// applied multiplier, and the soft-failure flags all live here, so nothing
/// needs to be scraped out of narration text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub side: Side,
    pub monster: String,
    pub action: TakenAction,
    /// Damage applied to the defender, after all multipliers and flooring.
    pub damage: u16,
    pub critical: bool,
    /// Combined type and critical multiplier that produced `damage`.
    pub multiplier: f32,
    /// The chosen move had no PP; the turn was spent without effect.
    pub no_pp: bool,
    /// The submitted move or item reference was out of bounds or empty; the
    /// turn was spent without effect.
    pub invalid_selection: bool,
}

impl ActionOutcome {
    /// A neutral outcome for a side's action before any resolution detail is
    /// known. Calculators fill in the rest.
    pub fn taking(side: Side, monster: impl Into<String>, action: TakenAction) -> Self {
        ActionOutcome {
            side,
            monster: monster.into(),
            action,
            damage: 0,
            critical: false,
            multiplier: 1.0,
            no_pp: false,
            invalid_selection: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ActionFailureReason {
    NoPPRemaining { move_name: String },
    InvalidMoveSelection { index: usize },
    NoItemRemaining { item: ItemKind },
    CaptureNotAllowed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Battle and turn management
    BattleStarted,
    TurnStarted {
        turn_number: u32,
    },
    TurnEnded,

    // Monster actions
    MoveUsed {
        side: Side,
        monster: String,
        move_used: String,
    },
    CriticalHit {
        side: Side,
        monster: String,
    },
    AttackEffectiveness {
        multiplier: f32,
    },
    DamageDealt {
        side: Side,
        monster: String,
        damage: u16,
        remaining_hp: u16,
    },
    MonsterHealed {
        side: Side,
        monster: String,
        amount: u16,
        new_hp: u16,
    },
    MovePPRestored {
        side: Side,
        monster: String,
        move_name: String,
        amount: u8,
    },
    MonsterFainted {
        side: Side,
        monster: String,
    },

    // Items and battle-ending attempts
    ItemUsed {
        side: Side,
        item: ItemKind,
        remaining: u8,
    },
    CaptureAttempted {
        target: String,
        success: bool,
    },
    RetreatAttempted {
        side: Side,
        success: bool,
    },

    // Soft failures
    ActionFailed {
        side: Side,
        reason: ActionFailureReason,
    },

    // Structured per-action record, silent in narration
    ActionResolved {
        outcome: ActionOutcome,
    },

    // Battle end
    BattleEnded {
        outcome: BattleOutcome,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string using battle context.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self, battle_state: &BattleState) -> Option<String> {
        match self {
            // === Battle and Turn Management Events ===
            BattleEvent::BattleStarted => Some(format!(
                "{} challenges {}!",
                battle_state.trainers[0].name, battle_state.trainers[1].name
            )),
            BattleEvent::TurnStarted { turn_number } => {
                Some(format!("=== Turn {} ===", turn_number))
            }
            BattleEvent::TurnEnded => {
                None // Silent - turn ending is obvious from context
            }

            // === Move Events ===
            BattleEvent::MoveUsed {
                side,
                monster,
                move_used,
            } => {
                let trainer_name = &battle_state.trainer(*side).name;
                Some(format!("{}'s {} used {}!", trainer_name, monster, move_used))
            }
            BattleEvent::CriticalHit { .. } => Some("A critical hit!".to_string()),
            BattleEvent::AttackEffectiveness { multiplier } => match *multiplier {
                m if m > 1.0 => Some("It's super effective!".to_string()),
                m if m < 1.0 => Some("It's not very effective...".to_string()),
                _ => None, // Normal effectiveness, no message
            },

            // === Damage and Healing Events ===
            BattleEvent::DamageDealt {
                monster, damage, ..
            } => Some(format!("{} took {} damage!", monster, damage)),
            BattleEvent::MonsterHealed {
                monster, amount, ..
            } => Some(format!("{} recovered {} HP!", monster, amount)),
            BattleEvent::MovePPRestored {
                monster,
                move_name,
                amount,
                ..
            } => Some(format!(
                "{}'s {} regained {} PP!",
                monster, move_name, amount
            )),
            BattleEvent::MonsterFainted { monster, .. } => {
                Some(format!("{} fainted!", monster))
            }

            // === Item and Flight Events ===
            BattleEvent::ItemUsed { side, item, .. } => {
                let trainer_name = &battle_state.trainer(*side).name;
                let item_name = crate::items::item_data(*item).name;
                Some(format!("{} used a {}!", trainer_name, item_name))
            }
            BattleEvent::CaptureAttempted { target, success } => {
                if *success {
                    Some(format!("Gotcha! {} was caught!", target))
                } else {
                    Some(format!("Oh no! {} broke free!", target))
                }
            }
            BattleEvent::RetreatAttempted { side, success } => {
                let trainer_name = &battle_state.trainer(*side).name;
                if *success {
                    Some(format!("{} got away safely!", trainer_name))
                } else {
                    Some(format!("{} couldn't escape!", trainer_name))
                }
            }

            // === Soft Failure Events ===
            BattleEvent::ActionFailed { reason, .. } => {
                Some(Self::format_action_failure_reason(reason))
            }

            // === Structured Records ===
            BattleEvent::ActionResolved { .. } => {
                None // Silent - carried for frontends, not narration
            }

            // === Battle End Events ===
            BattleEvent::BattleEnded { outcome } => {
                let player_name = &battle_state.trainers[0].name;
                let opponent_name = &battle_state.trainers[1].name;
                match outcome {
                    BattleOutcome::Win => Some(format!("{} won the battle!", player_name)),
                    BattleOutcome::Loss => Some(format!("{} won the battle!", opponent_name)),
                    BattleOutcome::Capture => Some("The battle ended with a capture!".to_string()),
                    BattleOutcome::Retreat => Some("The battle is over.".to_string()),
                }
            }
        }
    }

    // --- Private Helper Functions ---

    fn format_action_failure_reason(reason: &ActionFailureReason) -> String {
        match reason {
            ActionFailureReason::NoPPRemaining { move_name } => {
                format!("There's no PP left for {}!", move_name)
            }
            ActionFailureReason::InvalidMoveSelection { .. } => {
                "But it failed!".to_string()
            }
            ActionFailureReason::NoItemRemaining { item } => {
                format!("No {} left!", crate::items::item_data(*item).name)
            }
            ActionFailureReason::CaptureNotAllowed => {
                "You can't capture another trainer's monster!".to_string()
            }
        }
    }
}

/// Event bus for collecting and managing battle events.
///
/// ## Usage Examples
///
/// ```rust,ignore
/// event_bus.print_debug();                                    // Just print events
/// event_bus.print_debug_with_message("Turn 1 events:");       // With header message
/// event_bus.print_formatted(&battle_state);                   // Human-readable format
/// println!("{}", event_bus);                                  // Display trait
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// The structured action records collected during resolution, in order.
    pub fn outcomes(&self) -> Vec<ActionOutcome> {
        self.events
            .iter()
            .filter_map(|event| match event {
                BattleEvent::ActionResolved { outcome } => Some(outcome.clone()),
                _ => None,
            })
            .collect()
    }

    /// Print all events in debug format with indentation.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Print all events in debug format with a custom prefix message.
    pub fn print_debug_with_message(&self, message: &str) {
        println!("{}", message);
        self.print_debug();
    }

    /// Print all events using their formatted text (when available) along
    /// with battle context. Silent events are skipped.
    pub fn print_formatted(&self, battle_state: &BattleState) {
        for event in &self.events {
            if let Some(formatted) = event.format(battle_state) {
                println!("  {}", formatted);
            }
        }
    }

    /// Print all events using their formatted text with a custom prefix message.
    pub fn print_formatted_with_message(&self, message: &str, battle_state: &BattleState) {
        println!("{}", message);
        self.print_formatted(battle_state);
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    /// Format the EventBus for printing. Shows debug format of all events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// Injected randomness for one turn resolution. Production code draws fresh
/// values; tests replay a script so every probabilistic branch is forced.
#[derive(Debug, Clone)]
pub struct TurnRng {
    outcomes: Vec<u8>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self { outcomes, index: 0 }
    }

    pub fn new_random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        // Pre-generate a reasonable number of random values for a turn
        let outcomes: Vec<u8> = (0..100).map(|_| rng.random_range(1..=100)).collect();
        Self { outcomes, index: 0 }
    }

    pub fn next_outcome(&mut self, reason: &str) -> u8 {
        if self.index >= self.outcomes.len() {
            // Add the reason to the panic message for better debugging!
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];

        // Print the consumption event to the console during tests.
        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", outcome, reason);

        self.index += 1;
        outcome
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BattleState {
    pub battle_id: String,
    pub kind: BattleKind,
    pub trainers: [Trainer; 2],
    pub turn_number: u32,
    pub phase: BattlePhase,
    pub action_queue: [Option<TrainerAction>; 2],
    pub config: BattleConfig,
}

impl BattleState {
    pub fn new(
        id: impl Into<String>,
        kind: BattleKind,
        player: Trainer,
        opponent: Trainer,
        config: BattleConfig,
    ) -> Self {
        Self {
            battle_id: id.into(),
            kind,
            trainers: [player, opponent],
            turn_number: 1,
            phase: BattlePhase::NotStarted,
            action_queue: [None, None],
            config,
        }
    }

    /// Start a wild encounter: the opposing side is the wild monster itself.
    pub fn wild(
        id: impl Into<String>,
        player: Trainer,
        wild_monster: Monster,
        config: BattleConfig,
    ) -> Self {
        let opponent = Trainer::wild(wild_monster);
        BattleState::new(id, BattleKind::Wild, player, opponent, config)
    }

    pub fn trainer(&self, side: Side) -> &Trainer {
        &self.trainers[side.to_index()]
    }

    pub fn trainer_mut(&mut self, side: Side) -> &mut Trainer {
        &mut self.trainers[side.to_index()]
    }

    pub fn active_monster(&self, side: Side) -> &Monster {
        self.trainer(side).active_monster()
    }

    pub fn active_monster_mut(&mut self, side: Side) -> &mut Monster {
        self.trainer_mut(side).active_monster_mut()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, BattlePhase::Finished(_))
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.phase {
            BattlePhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }
}
