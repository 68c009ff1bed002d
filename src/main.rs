use std::path::Path;

use monster_trainer::battle::ai::{Behavior, ScoringBehavior};
use monster_trainer::{
    Bag, BattleConfig, BattleKind, BattleRunner, BattleState, Catalog, ItemKind, Monster, Side,
    Trainer, TrainerAction, TrainerKind,
};

fn main() {
    let json_mode = std::env::args().any(|arg| arg == "--json");
    let data_path = Path::new("data");

    // Load the roster, falling back to the built-in set if the data
    // directory is missing or malformed.
    let catalog = match Catalog::load(data_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            println!("Could not load roster data: {}. Using built-in roster.", e);
            Catalog::builtin()
        }
    };

    let names = catalog.monster_names();
    println!("Loaded {} monsters: {}", names.len(), names.join(", "));
    println!();

    println!("=== Wild Encounter Demo ===");
    run_wild_encounter_demo(&catalog, json_mode);
}

fn run_wild_encounter_demo(catalog: &Catalog, json_mode: bool) {
    let voltaris = spawn_demo_monster(catalog, "Voltaris");
    let flareon = spawn_demo_monster(catalog, "Flareon");
    let aquarion = spawn_demo_monster(catalog, "Aquarion");

    let player = match Trainer::new(
        "player_1",
        "Avery",
        TrainerKind::Human,
        vec![voltaris, flareon],
        Bag::starter(),
    ) {
        Ok(trainer) => trainer,
        Err(e) => {
            println!("Error building the player's team: {}", e);
            return;
        }
    };

    let state = BattleState::wild("wild_encounter_1", player, aquarion, BattleConfig::default());
    let mut runner = BattleRunner::new(state);

    let info = runner.battle_info();
    println!(
        "{} sends out {}!",
        info.trainers[0].name, info.trainers[0].active_monster.name
    );
    println!("A wild {} appeared!", info.trainers[1].active_monster.name);
    println!();

    let mut turn_count = 0;

    // Battle loop: the demo picks Avery's action each turn, the runner fills
    // in the wild side and resolves as soon as both actions are queued.
    while !runner.is_battle_ended() {
        turn_count += 1;
        if turn_count > 50 {
            println!("Battle reached turn limit - ending demo");
            break;
        }

        let action = choose_player_action(&runner);
        match runner.submit_action(Side::Player, action) {
            Ok(Some(result)) => {
                if json_mode {
                    for event in &result.events {
                        if let Ok(line) = serde_json::to_string(event) {
                            println!("{}", line);
                        }
                    }
                } else {
                    for event in &result.events {
                        if let Some(text) = event.format(runner.state()) {
                            println!("{}", text);
                        }
                    }
                    print_status(&runner);
                }
            }
            Ok(None) => {
                println!("Waiting for the other side to act...");
                break;
            }
            Err(e) => {
                println!("Error running battle: {}", e);
                break;
            }
        }
    }

    println!();
    match runner.outcome() {
        Some(outcome) => println!(
            "Battle finished with outcome {:?} after {} turn(s).",
            outcome,
            runner.state().turn_number
        ),
        None => println!("Battle ended without an outcome."),
    }

    if json_mode {
        if let Ok(snapshot) = serde_json::to_string_pretty(&runner.battle_info()) {
            println!("{}", snapshot);
        }
    }
}

/// Simple demo policy for the player's side: heal when low, throw a ball at
/// a softened wild monster, otherwise attack with the scoring AI's pick.
fn choose_player_action(runner: &BattleRunner) -> TrainerAction {
    let state = runner.state();
    let me = state.active_monster(Side::Player);
    let foe = state.active_monster(Side::Opponent);
    let bag = state.trainer(Side::Player).bag();

    if me.hp_ratio() < 0.35 && bag.count(ItemKind::Heal) > 0 {
        return TrainerAction::UseItem {
            item: ItemKind::Heal,
        };
    }

    if state.kind == BattleKind::Wild && foe.hp_ratio() < 0.5 && bag.count(ItemKind::Capture) > 0 {
        return TrainerAction::UseItem {
            item: ItemKind::Capture,
        };
    }

    ScoringBehavior::new().decide_action(Side::Player, state)
}

fn print_status(runner: &BattleRunner) {
    let info = runner.battle_info();
    for trainer in &info.trainers {
        let monster = &trainer.active_monster;
        println!(
            "  {}: {} (HP: {}/{})",
            trainer.name, monster.name, monster.current_hp, monster.max_hp
        );
    }
    println!();
}

fn spawn_demo_monster(catalog: &Catalog, name: &str) -> Monster {
    catalog
        .spawn(name)
        .expect("demo monster should exist in the roster")
}
