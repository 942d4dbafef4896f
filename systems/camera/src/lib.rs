#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Auto-scrolling camera system that drives the streaming viewpoint.
//!
//! The camera owns the viewpoint x-coordinate the level streamer generates
//! around. It scrolls right at a speed that ramps with the player's score,
//! issues a lethal damage command when the player falls too far behind, and
//! recenters itself when the player respawns.

use reef_runner_core::{Command, Event};

/// Configuration parameters required to construct the camera system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Base scroll speed in world units per second.
    pub scroll_speed: f32,
    /// Distance behind the viewpoint at which the player is killed.
    pub kill_threshold: f32,
    /// Speed added each time the player's score crosses a checkpoint.
    pub speed_step: f32,
    /// Score interval between speed checkpoints.
    pub score_checkpoint: u32,
    /// Damage dealt when the player falls behind the kill threshold.
    pub lethal_damage: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scroll_speed: 2.0,
            kill_threshold: 20.0,
            speed_step: 0.35,
            score_checkpoint: 10,
            lethal_damage: 3,
        }
    }
}

/// Pure system that advances the viewpoint and polices the player's position.
#[derive(Debug)]
pub struct Camera {
    config: Config,
    viewpoint_x: f32,
    scroll_speed: f32,
    next_checkpoint: u32,
}

impl Camera {
    /// Creates a new camera using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            viewpoint_x: 0.0,
            scroll_speed: config.scroll_speed,
            next_checkpoint: config.score_checkpoint,
            config,
        }
    }

    /// Viewpoint x-coordinate the level streamer should generate around.
    #[must_use]
    pub fn viewpoint_x(&self) -> f32 {
        self.viewpoint_x
    }

    /// Current scroll speed after any checkpoint ramps.
    #[must_use]
    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    /// Consumes world events and the player's position, emitting commands.
    pub fn handle(&mut self, events: &[Event], player_x: f32, out: &mut Vec<Command>) {
        for event in events {
            match event {
                Event::TimeAdvanced { dt } => {
                    self.viewpoint_x += self.scroll_speed * dt.as_secs_f32();
                }
                Event::ScoreChanged { score } => {
                    while *score >= self.next_checkpoint {
                        self.scroll_speed += self.config.speed_step;
                        self.next_checkpoint += self.config.score_checkpoint;
                    }
                }
                Event::PlayerRespawned { position } => {
                    self.viewpoint_x = position.x();
                    self.scroll_speed = self.config.scroll_speed;
                    self.next_checkpoint = self.config.score_checkpoint;
                }
                _ => {}
            }
        }

        if player_x < self.viewpoint_x - self.config.kill_threshold {
            out.push(Command::DamagePlayer {
                amount: self.config.lethal_damage,
                hit_from_right: false,
            });
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn time_advances_the_viewpoint() {
        let mut camera = Camera::default();
        let mut out = Vec::new();
        camera.handle(
            &[Event::TimeAdvanced {
                dt: Duration::from_secs(2),
            }],
            0.0,
            &mut out,
        );
        assert!((camera.viewpoint_x() - 4.0).abs() < f32::EPSILON);
        assert!(out.is_empty());
    }

    #[test]
    fn checkpoint_ramp_handles_multi_step_jumps() {
        let mut camera = Camera::default();
        let mut out = Vec::new();
        camera.handle(&[Event::ScoreChanged { score: 25 }], 0.0, &mut out);
        assert!((camera.scroll_speed() - 2.7).abs() < 1e-5);
    }
}
