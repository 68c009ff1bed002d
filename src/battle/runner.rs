use crate::battle::engine::{collect_npc_actions, ready_for_turn_resolution, resolve_turn};
use crate::battle::state::{
    ActionOutcome, BattleEvent, BattleOutcome, BattlePhase, BattleState, Side, TurnRng,
};
use crate::errors::ActionError;
use crate::trainer::TrainerAction;
use schema::{ElementType, ItemKind};
use serde::Serialize;

/// High-level battle management interface that hides the turn plumbing.
/// Collects one action per side, fills NPC decisions automatically, and
/// resolves the turn as soon as both queue slots are occupied.
#[derive(Debug)]
pub struct BattleRunner {
    state: BattleState,
    accumulated_events: Vec<BattleEvent>,
}

/// Snapshot of the battle for API queries and UI rendering
#[derive(Debug, Clone, Serialize)]
pub struct BattleInfo {
    pub battle_id: String,
    pub turn_number: u32,
    pub phase: BattlePhase,
    pub trainers: Vec<TrainerInfo>,
}

/// Snapshot of one side of the battle
#[derive(Debug, Clone, Serialize)]
pub struct TrainerInfo {
    pub trainer_id: String,
    pub name: String,
    pub active_monster: MonsterInfo,
    pub bag: Vec<(ItemKind, u8)>,
}

/// Snapshot of a monster for API queries
#[derive(Debug, Clone, Serialize)]
pub struct MonsterInfo {
    pub name: String,
    pub element: ElementType,
    pub level: u8,
    pub current_hp: u16,
    pub max_hp: u16,
    pub is_fainted: bool,
    pub moves: Vec<MoveInfo>,
}

/// Snapshot of a single move slot
#[derive(Debug, Clone, Serialize)]
pub struct MoveInfo {
    pub name: String,
    pub element: ElementType,
    pub power: u16,
    pub pp: u8,
    pub max_pp: u8,
}

/// Result of resolving one full turn
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    pub events: Vec<BattleEvent>,
    pub outcomes: Vec<ActionOutcome>,
    pub phase: BattlePhase,
    pub battle_ended: bool,
    pub outcome: Option<BattleOutcome>,
}

impl BattleRunner {
    /// Wrap a prepared battle state
    pub fn new(state: BattleState) -> Self {
        Self {
            state,
            accumulated_events: Vec::new(),
        }
    }

    /// Submit an action for a side.
    /// Resolves the turn automatically once every side has an action queued,
    /// generating decisions for NPC sides along the way.
    pub fn submit_action(
        &mut self,
        side: Side,
        action: TrainerAction,
    ) -> Result<Option<ExecutionResult>, ActionError> {
        if self.state.is_finished() {
            return Err(ActionError::BattleAlreadyOver);
        }

        let slot = side.to_index();
        if self.state.action_queue[slot].is_some() {
            return Err(ActionError::ActionAlreadyQueued(slot));
        }
        self.state.action_queue[slot] = Some(action);

        collect_npc_actions(&mut self.state);

        if ready_for_turn_resolution(&self.state) {
            Ok(Some(self.execute_with(TurnRng::new_random())))
        } else {
            Ok(None)
        }
    }

    /// Resolve the queued turn with the given RNG. Split out from
    /// [`BattleRunner::submit_action`] so tests and replays can feed
    /// scripted rolls.
    pub fn execute_with(&mut self, rng: TurnRng) -> ExecutionResult {
        let event_bus = resolve_turn(&mut self.state, rng);
        let outcomes = event_bus.outcomes();
        let events = event_bus.events().to_vec();
        self.accumulated_events.extend(events.clone());

        ExecutionResult {
            events,
            outcomes,
            phase: self.state.phase,
            battle_ended: self.state.is_finished(),
            outcome: self.state.outcome(),
        }
    }

    /// Which sides still need to submit an action this turn
    pub fn sides_awaiting_action(&self) -> Vec<Side> {
        if self.state.is_finished() {
            return Vec::new();
        }
        self.state
            .action_queue
            .iter()
            .enumerate()
            .filter(|(_, queued)| queued.is_none())
            .map(|(index, _)| Side::from_index(index))
            .collect()
    }

    /// Current battle snapshot for API queries
    pub fn battle_info(&self) -> BattleInfo {
        let trainers = self
            .state
            .trainers
            .iter()
            .map(|trainer| {
                let monster = trainer.active_monster();
                let moves = monster
                    .moves()
                    .iter()
                    .map(|mv| MoveInfo {
                        name: mv.name().to_string(),
                        element: mv.element(),
                        power: mv.power(),
                        pp: mv.pp(),
                        max_pp: mv.max_pp(),
                    })
                    .collect();

                TrainerInfo {
                    trainer_id: trainer.trainer_id.clone(),
                    name: trainer.name.clone(),
                    active_monster: MonsterInfo {
                        name: monster.name().to_string(),
                        element: monster.element(),
                        level: monster.level(),
                        current_hp: monster.current_hp(),
                        max_hp: monster.max_hp(),
                        is_fainted: monster.is_fainted(),
                        moves,
                    },
                    bag: trainer.bag().contents(),
                }
            })
            .collect();

        BattleInfo {
            battle_id: self.state.battle_id.clone(),
            turn_number: self.state.turn_number,
            phase: self.state.phase,
            trainers,
        }
    }

    /// Check if the battle has ended
    pub fn is_battle_ended(&self) -> bool {
        self.state.is_finished()
    }

    /// The final outcome once the battle has ended
    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.state.outcome()
    }

    /// All events that have occurred in the battle so far
    pub fn all_events(&self) -> &[BattleEvent] {
        &self.accumulated_events
    }

    /// Events since a certain index, for incremental consumers
    pub fn events_since(&self, index: usize) -> &[BattleEvent] {
        if index < self.accumulated_events.len() {
            &self.accumulated_events[index..]
        } else {
            &[]
        }
    }

    /// Drop the stored event history
    pub fn clear_event_history(&mut self) {
        self.accumulated_events.clear();
    }

    /// Read access to the underlying battle state
    pub fn state(&self) -> &BattleState {
        &self.state
    }
}
