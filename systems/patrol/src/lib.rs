#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic patrol system that steers enemies along their platforms.

use reef_runner_core::{Cell, Command, Event, WorldPos};
use reef_runner_world::query::EnemyView;

/// Probe distances used when scanning the terrain ahead of an enemy.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Horizontal reach of both probes ahead of the enemy.
    pub probe_reach: f32,
    /// Distance below the forward probe checked for walkable ground.
    pub ground_drop: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            probe_reach: 0.4,
            ground_drop: 1.0,
        }
    }
}

/// Pure system that reacts to world events and emits steering commands.
#[derive(Debug, Default)]
pub struct Patrol {
    config: Config,
}

impl Patrol {
    /// Creates a new patrol system using the supplied probe configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Consumes events and immutable views to emit steering commands.
    ///
    /// An enemy reverses when the forward-and-down probe finds no ground to
    /// stand on, or when the forward probe finds a tile blocking the path.
    pub fn handle<F>(&self, events: &[Event], enemies: &EnemyView, is_ground: F, out: &mut Vec<Command>)
    where
        F: Fn(Cell) -> bool,
    {
        if !events
            .iter()
            .any(|event| matches!(event, Event::TimeAdvanced { .. }))
        {
            return;
        }

        for enemy in enemies.iter() {
            let probe = WorldPos::new(
                enemy.position.x() + enemy.facing.sign() * self.config.probe_reach,
                enemy.position.y(),
            );
            let footing = WorldPos::new(probe.x(), probe.y() - self.config.ground_drop)
                .containing_cell();
            let obstacle = probe.containing_cell();

            if !is_ground(footing) || is_ground(obstacle) {
                out.push(Command::SteerEnemy {
                    enemy: enemy.id,
                    facing: enemy.facing.flipped(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn quiet_event_stream_emits_nothing() {
        let patrol = Patrol::default();
        let mut out = Vec::new();
        patrol.handle(&[], &EnemyView::default(), |_| true, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn empty_view_survives_a_time_step() {
        let patrol = Patrol::default();
        let mut out = Vec::new();
        patrol.handle(
            &[Event::TimeAdvanced {
                dt: Duration::from_millis(16),
            }],
            &EnemyView::default(),
            |_| false,
            &mut out,
        );
        assert!(out.is_empty());
    }
}
