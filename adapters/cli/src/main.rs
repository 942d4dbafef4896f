#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives the Reef Runner simulation headless.
//!
//! This is the externally owned game loop: it advances the camera, lets the
//! patrol system steer enemies, applies the resulting commands, and ticks the
//! world, in that order. Physics and input are out of scope, so the driver
//! stands in for them by riding the player on the viewpoint.

mod store;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use reef_runner_core::{Cell, Command, Event, Layer, TileKind, WorldPos, WELCOME_BANNER};
use reef_runner_system_camera::Camera;
use reef_runner_system_patrol::Patrol;
use reef_runner_system_scoreboard::{HighscoreStore, Ledger, Scoreboard};
use reef_runner_world::{self as world, query, Config, World};

use crate::store::FileStore;

/// Headless driver for the Reef Runner gameplay core.
#[derive(Debug, Parser)]
#[command(name = "reef-runner")]
struct Args {
    /// Number of simulation ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Simulated milliseconds per tick.
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Seed driving template selection, spacing, and decoration.
    #[arg(long, default_value_t = 0x7c3a_9d14_52b8_e6f0)]
    seed: u64,

    /// Path used to persist the highscore ledger between runs.
    #[arg(long)]
    highscores: Option<PathBuf>,

    /// Prints an ASCII snapshot of the terrain around the final viewpoint.
    #[arg(long)]
    dump_terrain: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    println!("{WELCOME_BANNER}");

    let mut file_store = args.highscores.clone().map(FileStore::new);
    let ledger = match file_store.as_mut() {
        Some(store) => store.load().context("loading highscore ledger")?,
        None => Ledger::new(),
    };
    let mut scoreboard = Scoreboard::with_ledger(ledger);

    let mut world = World::with_config(Config {
        rng_seed: args.seed,
        ..Config::default()
    });
    let mut camera = Camera::default();
    let patrol = Patrol::default();

    let dt = Duration::from_millis(args.tick_ms);
    let mut events: Vec<Event> = Vec::new();
    let mut platforms = 0u32;
    let mut enemies = 0u32;
    let mut runs_ended = 0u32;

    for _ in 0..args.ticks {
        let mut commands = Vec::new();

        let player_x = query::player(&world).position.x();
        camera.handle(&events, player_x, &mut commands);

        let enemy_view = query::enemy_view(&world);
        patrol.handle(
            &events,
            &enemy_view,
            |cell| query::tile(&world, Layer::Ground, cell).is_some(),
            &mut commands,
        );

        commands.push(Command::SetPlayerPosition {
            position: WorldPos::new(camera.viewpoint_x(), 1.5),
        });
        commands.push(Command::Tick {
            dt,
            viewpoint_x: camera.viewpoint_x(),
        });

        events.clear();
        for command in commands {
            world::apply(&mut world, command, &mut events);
        }

        for event in &events {
            match event {
                Event::PlatformPlaced { .. } => platforms += 1,
                Event::EnemySpawned { .. } => enemies += 1,
                Event::PlayerDied { .. } => runs_ended += 1,
                _ => {}
            }
        }

        if scoreboard.handle(&events) {
            if let Some(store) = file_store.as_mut() {
                store
                    .save(scoreboard.ledger())
                    .context("saving highscore ledger")?;
            }
        }
    }

    let final_score = query::player(&world).score;
    if scoreboard.record(final_score) {
        if let Some(store) = file_store.as_mut() {
            store
                .save(scoreboard.ledger())
                .context("saving highscore ledger")?;
        }
    }

    println!(
        "simulated {} ticks, viewpoint reached x = {:.1}",
        args.ticks,
        camera.viewpoint_x()
    );
    println!(
        "platforms placed: {platforms}, enemies spawned: {enemies}, runs ended: {runs_ended}"
    );
    println!(
        "final score: {final_score}, ground cells tracked: {}",
        query::ground_cell_count(&world)
    );
    print!("highscores:");
    for score in scoreboard.ledger().top() {
        print!(" {score}");
    }
    println!();

    if args.dump_terrain {
        dump_terrain(&world, camera.viewpoint_x());
    }

    Ok(())
}

/// Renders the terrain window around the viewpoint, one row per line.
fn dump_terrain(world: &World, viewpoint_x: f32) {
    let center = viewpoint_x.floor() as i32;
    for y in (-6..=8).rev() {
        let mut row = String::new();
        for x in (center - 30)..=(center + 30) {
            let cell = Cell::new(x, y);
            row.push(glyph_for(world, cell));
        }
        println!("{row}");
    }
}

fn glyph_for(world: &World, cell: Cell) -> char {
    if let Some(kind) = query::tile(world, Layer::Ground, cell) {
        return match kind {
            TileKind::Dirt => '=',
            TileKind::Brick => '#',
            TileKind::Water => '~',
            TileKind::Decor(_) => '"',
        };
    }
    if query::tile(world, Layer::Foreground, cell).is_some() {
        return '"';
    }
    if query::tile(world, Layer::Background, cell).is_some() {
        return '\'';
    }
    if query::tile(world, Layer::Ocean, cell).is_some() {
        return '~';
    }
    ' '
}
