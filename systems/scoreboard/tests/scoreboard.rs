use std::time::Duration;

use reef_runner_core::{Command, Event};
use reef_runner_system_scoreboard::{HighscoreStore, Ledger, MemoryStore, Scoreboard};
use reef_runner_world::{self as world, World};

#[test]
fn finished_runs_land_in_the_ledger() {
    let mut world = World::new();
    let mut scoreboard = Scoreboard::default();
    let mut store = MemoryStore::default();

    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::Tick {
            dt: Duration::from_secs(4),
            viewpoint_x: 0.0,
        },
        &mut events,
    );
    assert!(!scoreboard.handle(&events), "no death, nothing recorded");

    events.clear();
    world::apply(
        &mut world,
        Command::DamagePlayer {
            amount: 3,
            hit_from_right: false,
        },
        &mut events,
    );
    let final_score = events
        .iter()
        .find_map(|event| match event {
            Event::PlayerDied { final_score } => Some(*final_score),
            _ => None,
        })
        .expect("lethal damage reports a death");

    assert!(scoreboard.handle(&events));
    assert_eq!(scoreboard.ledger().top(), &[final_score]);

    store.save(scoreboard.ledger()).expect("save");
    let restored = store.load().expect("load");
    assert_eq!(&restored, scoreboard.ledger());

    // A fresh scoreboard resumes from the persisted ledger.
    let resumed = Scoreboard::with_ledger(restored);
    assert_eq!(resumed.ledger(), scoreboard.ledger());
}

#[test]
fn ledger_matches_the_documented_insertion_example() {
    let mut ledger = Ledger::from_scores(vec![10, 30, 50, 20, 40]);
    assert_eq!(ledger.top(), &[50, 40, 30, 20, 10]);
    assert!(ledger.record(35));
    assert_eq!(ledger.top(), &[50, 40, 35, 30, 20]);
}
