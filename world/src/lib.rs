#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Reef Runner.
//!
//! The world is the sole owner and mutator of the four tile layers, the
//! tracked cell sets, the entity pools, and the player. Adapters mutate it
//! exclusively through [`apply`]; systems read it through [`query`].
//!
//! Level streaming runs inside the tick: terrain is generated ahead of the
//! viewpoint first, then content sufficiently far behind the same viewpoint
//! is evicted and its pooled entities reclaimed, then enemies integrate and
//! the player's timed states advance. Content generated by a tick is
//! therefore never evicted by that tick.

mod pool;
mod templates;
mod terrain;

use std::collections::BTreeMap;
use std::time::Duration;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use reef_runner_core::{
    Cell, Command, CrateId, DecorId, EnemyId, Event, Facing, PotionId, PotionKind, TileKind,
    WorldPos,
};

use crate::pool::Pool;
use crate::templates::{DecorMask, PlatformTemplate};
use crate::terrain::{Terrain, TileLayer};

const SCORE_TICK: Duration = Duration::from_secs(1);

/// Tuning knobs for generation, pooling, and the player state machine.
#[derive(Clone, Debug)]
pub struct Config {
    /// Distance ahead of the viewpoint that terrain is generated toward.
    pub tracking_range: i32,
    /// Row platform footprints are anchored on.
    pub platform_level_y: i32,
    /// Row filled by the ocean layer.
    pub water_level_y: i32,
    /// Trailing distance behind the viewpoint beyond which ground content is
    /// evicted. The ocean horizon is twice this value.
    pub cleanup_threshold: i32,
    /// Seed for template selection, spacing, decoration, and crate drops.
    pub rng_seed: u64,
    /// Number of decorative tile varieties available to the masks.
    pub decor_tile_count: u8,
    /// Instances pre-built by the enemy pool. Zero disables enemy spawns.
    pub enemy_pool_size: usize,
    /// Instances pre-built by the crate pool. Zero disables crate spawns.
    pub crate_pool_size: usize,
    /// Instances pre-built by the potion pool. Zero disables potion drops.
    pub potion_pool_size: usize,
    /// Horizontal walking speed of patrolling enemies in world units per second.
    pub enemy_speed: f32,
    /// Score awarded for stomping an enemy.
    pub enemy_score: u32,
    /// Health the player starts and respawns with.
    pub max_health: u32,
    /// Length of the timed invulnerability window.
    pub invulnerability_window: Duration,
    /// Length of the knockback lockout applied by a hit.
    pub knockback_window: Duration,
    /// Stamina gauge capacity.
    pub max_stamina: f32,
    /// Stamina drained per second while sprinting.
    pub stamina_drain_rate: f32,
    /// Stamina regenerated per second while not sprinting.
    pub stamina_regen_rate: f32,
    /// Vertical clearance applied above the chosen respawn cell.
    pub respawn_clearance: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracking_range: 20,
            platform_level_y: 0,
            water_level_y: -5,
            cleanup_threshold: 50,
            rng_seed: 0x7c3a_9d14_52b8_e6f0,
            decor_tile_count: 4,
            enemy_pool_size: 15,
            crate_pool_size: 15,
            potion_pool_size: 5,
            enemy_speed: 2.0,
            enemy_score: 5,
            max_health: 3,
            invulnerability_window: Duration::from_secs(3),
            knockback_window: Duration::from_millis(500),
            max_stamina: 100.0,
            stamina_drain_rate: 35.0,
            stamina_regen_rate: 15.0,
            respawn_clearance: 1.5,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct EnemyState {
    position: WorldPos,
    facing: Facing,
}

#[derive(Clone, Copy, Debug)]
struct PotionState {
    kind: PotionKind,
    position: WorldPos,
}

#[derive(Clone, Copy, Debug)]
struct PlayerState {
    position: WorldPos,
    respawn_point: WorldPos,
    saved_score: u32,
    health: u32,
    score: u32,
    invulnerability: Duration,
    knockback: Duration,
    hit_from_right: bool,
    stamina: f32,
    exhausted: bool,
    sprinting: bool,
}

/// Represents the authoritative Reef Runner world state.
#[derive(Debug)]
pub struct World {
    config: Config,
    terrain: Terrain,
    catalog: Vec<PlatformTemplate>,
    rng: ChaCha8Rng,
    last_platform_x: i32,
    last_water_x: i32,
    crate_pool: Pool<CrateId>,
    enemy_pool: Pool<EnemyId>,
    potion_pool: Pool<PotionId>,
    active_crates: Vec<(CrateId, Cell)>,
    active_enemies: Vec<(EnemyId, Cell)>,
    enemies: BTreeMap<EnemyId, EnemyState>,
    potions: BTreeMap<PotionId, PotionState>,
    player: PlayerState,
    score_clock: Duration,
}

impl World {
    /// Creates a new world with default tuning.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a new world with the provided tuning.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let start = WorldPos::new(0.0, (config.platform_level_y + 2) as f32);
        Self {
            terrain: Terrain::default(),
            catalog: templates::catalog(),
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
            last_platform_x: 0,
            last_water_x: 0,
            crate_pool: Pool::new(config.crate_pool_size),
            enemy_pool: Pool::new(config.enemy_pool_size),
            potion_pool: Pool::new(config.potion_pool_size),
            active_crates: Vec::new(),
            active_enemies: Vec::new(),
            enemies: BTreeMap::new(),
            potions: BTreeMap::new(),
            player: PlayerState {
                position: start,
                respawn_point: start,
                saved_score: 0,
                health: config.max_health,
                score: 0,
                invulnerability: Duration::ZERO,
                knockback: Duration::ZERO,
                hit_from_right: false,
                stamina: config.max_stamina,
                exhausted: false,
                sprinting: false,
            },
            score_clock: Duration::ZERO,
            config,
        }
    }

    fn generate_step(&mut self, viewpoint_x: f32, out_events: &mut Vec<Event>) {
        if self.catalog.is_empty() {
            return;
        }
        self.extend_ocean(viewpoint_x, out_events);

        let frontier = viewpoint_x + self.config.tracking_range as f32;
        while (self.last_platform_x as f32) < frontier {
            let template_index = self.rng.gen_range(0..self.catalog.len());
            let spacing = self.rng.gen_range(1..=5);
            let origin = Cell::new(
                self.last_platform_x + spacing,
                self.config.platform_level_y,
            );

            let template = &self.catalog[template_index];
            let kind = template.kind;
            let width = template.footprint.width();
            let height = template.footprint.height();

            for x in 0..width {
                for y in 0..height {
                    if let Some(tile) = template.footprint.tile_at(x, y) {
                        let _ = self
                            .terrain
                            .place_ground(origin.offset(x as i32, y as i32), tile);
                    }
                }
            }

            if let Some(mask) = &template.foreground {
                stamp_decor(
                    &mut self.rng,
                    &mut self.terrain.foreground,
                    mask,
                    origin,
                    self.config.decor_tile_count,
                );
            }
            if let Some(mask) = &template.background {
                stamp_decor(
                    &mut self.rng,
                    &mut self.terrain.background,
                    mask,
                    origin,
                    self.config.decor_tile_count,
                );
            }

            out_events.push(Event::PlatformPlaced {
                kind,
                origin,
                width,
                height,
            });

            let seat = Cell::new(origin.x() + (width / 2) as i32, origin.y() + height as i32);
            if templates::spawns_enemy(kind) {
                self.spawn_enemy(seat, out_events);
            }
            if templates::spawns_crate(kind) {
                self.spawn_crate(seat, out_events);
            }

            self.last_platform_x = origin.x() + width as i32 - 1;
        }
    }

    fn extend_ocean(&mut self, viewpoint_x: f32, out_events: &mut Vec<Event>) {
        let anchor = viewpoint_x.floor() as i32;
        let start_x = anchor - self.config.tracking_range;
        let end_x = anchor + self.config.tracking_range + 10;
        let mut fresh = 0u32;
        for x in start_x..=end_x {
            if self
                .terrain
                .place_ocean(Cell::new(x, self.config.water_level_y))
            {
                fresh += 1;
            }
        }
        self.last_water_x = end_x;
        if fresh > 0 {
            out_events.push(Event::OceanExtended { start_x, end_x });
        }
    }

    fn spawn_enemy(&mut self, cell: Cell, out_events: &mut Vec<Event>) {
        if self.config.enemy_pool_size == 0 {
            return;
        }
        let enemy = self.enemy_pool.acquire();
        self.active_enemies.push((enemy, cell));
        let _ = self.enemies.insert(
            enemy,
            EnemyState {
                position: cell.center(),
                facing: Facing::Left,
            },
        );
        out_events.push(Event::EnemySpawned { enemy, cell });
    }

    fn spawn_crate(&mut self, cell: Cell, out_events: &mut Vec<Event>) {
        if self.config.crate_pool_size == 0 {
            return;
        }
        let crate_id = self.crate_pool.acquire();
        self.active_crates.push((crate_id, cell));
        out_events.push(Event::CrateSpawned { crate_id, cell });
    }

    fn cleanup_step(&mut self, viewpoint_x: f32, out_events: &mut Vec<Event>) {
        let ground_horizon = viewpoint_x - self.config.cleanup_threshold as f32;
        let ocean_horizon = viewpoint_x - (self.config.cleanup_threshold * 2) as f32;

        let ocean_cells = self.terrain.evict_ocean_before(ocean_horizon);
        let ground_cells = self.terrain.evict_ground_before(ground_horizon);
        self.terrain.evict_decor_before(ground_horizon);
        if ground_cells > 0 || ocean_cells > 0 {
            out_events.push(Event::TerrainEvicted {
                ground_cells,
                ocean_cells,
            });
        }

        let mut crates = 0u32;
        let crate_pool = &mut self.crate_pool;
        self.active_crates.retain(|(crate_id, cell)| {
            if (cell.x() as f32) < ground_horizon {
                let _ = crate_pool.release(*crate_id);
                crates += 1;
                false
            } else {
                true
            }
        });

        let mut enemies = 0u32;
        let enemy_pool = &mut self.enemy_pool;
        let enemy_states = &mut self.enemies;
        self.active_enemies.retain(|(enemy, cell)| {
            if (cell.x() as f32) < ground_horizon {
                let _ = enemy_pool.release(*enemy);
                let _ = enemy_states.remove(enemy);
                enemies += 1;
                false
            } else {
                true
            }
        });

        let mut potions = 0u32;
        let potion_pool = &mut self.potion_pool;
        self.potions.retain(|potion, state| {
            if state.position.x() < ground_horizon {
                let _ = potion_pool.release(*potion);
                potions += 1;
                false
            } else {
                true
            }
        });

        if crates > 0 || enemies > 0 || potions > 0 {
            out_events.push(Event::SpawnsReclaimed {
                crates,
                enemies,
                potions,
            });
        }
    }

    fn reset_level(&mut self, position: WorldPos, out_events: &mut Vec<Event>) {
        self.terrain.clear_all();
        let _ = self.crate_pool.release_all();
        let _ = self.enemy_pool.release_all();
        let _ = self.potion_pool.release_all();
        self.active_crates.clear();
        self.active_enemies.clear();
        self.enemies.clear();
        self.potions.clear();

        let anchor = position.x().round() as i32;
        self.last_platform_x = anchor;
        self.last_water_x = anchor;
        out_events.push(Event::LevelReset { position });
        self.generate_step(position.x(), out_events);
    }

    fn damage_player(&mut self, amount: u32, hit_from_right: bool, out_events: &mut Vec<Event>) {
        if !self.player.invulnerability.is_zero() {
            return;
        }
        self.player.knockback = self.config.knockback_window;
        self.player.hit_from_right = hit_from_right;
        self.player.health = self.player.health.saturating_sub(amount);
        if self.player.health == 0 {
            out_events.push(Event::PlayerDied {
                final_score: self.player.score,
            });
            self.respawn_player(out_events);
        } else {
            out_events.push(Event::PlayerDamaged {
                remaining: self.player.health,
            });
        }
    }

    fn respawn_player(&mut self, out_events: &mut Vec<Event>) {
        let position = self.player.position;
        self.reset_level(position, out_events);
        self.generate_step(position.x(), out_events);

        let respawn = if self.terrain.ground_cell_count() == 0 {
            self.player.respawn_point
        } else {
            query::respawn_position_above(self, position.x())
        };

        self.player.position = respawn;
        self.player.health = self.config.max_health;
        self.player.score = self.player.saved_score;
        self.player.invulnerability = Duration::ZERO;
        self.player.knockback = Duration::ZERO;
        self.player.stamina = self.config.max_stamina;
        self.player.exhausted = false;
        self.score_clock = Duration::ZERO;

        out_events.push(Event::ScoreChanged {
            score: self.player.score,
        });
        out_events.push(Event::PlayerRespawned { position: respawn });
    }

    fn award_score(&mut self, amount: u32, out_events: &mut Vec<Event>) {
        self.player.score = self.player.score.saturating_add(amount);
        out_events.push(Event::ScoreChanged {
            score: self.player.score,
        });
    }

    fn grant_invulnerability(&mut self, out_events: &mut Vec<Event>) {
        if self.player.invulnerability.is_zero() {
            self.player.invulnerability = self.config.invulnerability_window;
            out_events.push(Event::InvulnerabilityStarted);
        }
    }

    fn steer_enemy(&mut self, enemy: EnemyId, facing: Facing, out_events: &mut Vec<Event>) {
        if let Some(state) = self.enemies.get_mut(&enemy) {
            if state.facing != facing {
                state.facing = facing;
                out_events.push(Event::EnemyTurned { enemy, facing });
            }
        }
    }

    fn break_crate(&mut self, crate_id: CrateId, out_events: &mut Vec<Event>) {
        let Some(index) = self
            .active_crates
            .iter()
            .position(|(id, _)| *id == crate_id)
        else {
            return;
        };
        let (_, cell) = self.active_crates.remove(index);
        let _ = self.crate_pool.release(crate_id);
        out_events.push(Event::CrateBroken { crate_id });

        if self.config.potion_pool_size == 0 {
            return;
        }
        let kind = if self.rng.gen_range(0..10) > 6 {
            PotionKind::Score
        } else {
            PotionKind::Health
        };
        let potion = self.potion_pool.acquire();
        let position = cell.center();
        let _ = self.potions.insert(potion, PotionState { kind, position });
        out_events.push(Event::PotionSpawned {
            potion,
            kind,
            position,
        });
    }

    fn collect_potion(&mut self, potion: PotionId, out_events: &mut Vec<Event>) {
        let Some(state) = self.potions.remove(&potion) else {
            return;
        };
        let _ = self.potion_pool.release(potion);
        out_events.push(Event::PotionCollected {
            potion,
            kind: state.kind,
        });
        match state.kind {
            PotionKind::Score => self.award_score(10, out_events),
            PotionKind::Health => {
                if self.player.health < self.config.max_health {
                    self.player.health += 1;
                } else {
                    self.grant_invulnerability(out_events);
                }
            }
        }
    }

    fn stomp_enemy(&mut self, enemy: EnemyId, out_events: &mut Vec<Event>) {
        let Some(index) = self.active_enemies.iter().position(|(id, _)| *id == enemy) else {
            return;
        };
        let _ = self.active_enemies.remove(index);
        let _ = self.enemies.remove(&enemy);
        let _ = self.enemy_pool.release(enemy);
        let score = self.config.enemy_score;
        out_events.push(Event::EnemyStomped { enemy, score });
        self.award_score(score, out_events);
    }

    fn integrate_enemies(&mut self, dt: Duration) {
        let step = self.config.enemy_speed * dt.as_secs_f32();
        for state in self.enemies.values_mut() {
            state.position = WorldPos::new(
                state.position.x() + state.facing.sign() * step,
                state.position.y(),
            );
        }
    }

    fn advance_player_clocks(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        if !self.player.invulnerability.is_zero() {
            self.player.invulnerability = self.player.invulnerability.saturating_sub(dt);
            if self.player.invulnerability.is_zero() {
                out_events.push(Event::InvulnerabilityEnded);
            }
        }
        if !self.player.knockback.is_zero() {
            self.player.knockback = self.player.knockback.saturating_sub(dt);
        }

        let seconds = dt.as_secs_f32();
        if self.player.sprinting && !self.player.exhausted && self.player.stamina > 0.0 {
            self.player.stamina =
                (self.player.stamina - self.config.stamina_drain_rate * seconds).max(0.0);
            if self.player.stamina <= 0.0 {
                self.player.exhausted = true;
                out_events.push(Event::ExhaustionStarted);
            }
        } else {
            let was_exhausted = self.player.exhausted;
            self.player.stamina = (self.player.stamina
                + self.config.stamina_regen_rate * seconds)
                .min(self.config.max_stamina);
            if was_exhausted && self.player.stamina >= self.config.max_stamina {
                self.player.exhausted = false;
                out_events.push(Event::ExhaustionEnded);
            }
        }

        self.score_clock = self.score_clock.saturating_add(dt);
        while self.score_clock >= SCORE_TICK {
            self.score_clock -= SCORE_TICK;
            self.award_score(1, out_events);
        }

        // Touching the ocean surface is lethal.
        if self.player.position.y() < (self.config.water_level_y + 1) as f32 {
            self.damage_player(self.config.max_health, false, out_events);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick { dt, viewpoint_x } => {
            out_events.push(Event::TimeAdvanced { dt });
            if viewpoint_x + world.config.tracking_range as f32 > world.last_platform_x as f32 {
                world.generate_step(viewpoint_x, out_events);
            }
            world.cleanup_step(viewpoint_x, out_events);
            world.integrate_enemies(dt);
            world.advance_player_clocks(dt, out_events);
        }
        Command::ResetLevel { position } => world.reset_level(position, out_events),
        Command::GenerateAt { x } => world.generate_step(x, out_events),
        Command::SetPlayerPosition { position } => {
            world.player.position = position;
        }
        Command::SetRespawnPoint { position, score } => {
            world.player.respawn_point = position;
            world.player.saved_score = score;
        }
        Command::DamagePlayer {
            amount,
            hit_from_right,
        } => world.damage_player(amount, hit_from_right, out_events),
        Command::AwardScore { amount } => world.award_score(amount, out_events),
        Command::GrantInvulnerability => world.grant_invulnerability(out_events),
        Command::SetSprinting { engaged } => {
            world.player.sprinting = engaged;
        }
        Command::SteerEnemy { enemy, facing } => world.steer_enemy(enemy, facing, out_events),
        Command::BreakCrate { crate_id } => world.break_crate(crate_id, out_events),
        Command::CollectPotion { potion } => world.collect_potion(potion, out_events),
        Command::StompEnemy { enemy } => world.stomp_enemy(enemy, out_events),
    }
}

fn stamp_decor(
    rng: &mut ChaCha8Rng,
    layer: &mut TileLayer,
    mask: &DecorMask,
    origin: Cell,
    decor_tile_count: u8,
) {
    if decor_tile_count == 0 {
        return;
    }
    let mut last_index: Option<u8> = None;
    for x in 0..mask.width() {
        for y in 0..mask.height() {
            if !mask.is_set(x, y) {
                continue;
            }
            let mut index = weighted_decor_index(rng, decor_tile_count);
            while decor_tile_count > 1 && index != 0 && Some(index) == last_index {
                index = weighted_decor_index(rng, decor_tile_count);
            }
            last_index = Some(index);
            layer.set(
                origin.offset(x as i32, y as i32 + 1),
                TileKind::Decor(DecorId::new(index)),
            );
        }
    }
}

/// Index 0 carries weight 1; every other index carries weight 3.
fn weighted_decor_index(rng: &mut ChaCha8Rng, count: u8) -> u8 {
    let total = 1 + 3 * (u32::from(count) - 1);
    let mut roll = rng.gen_range(0..total);
    for index in 0..count {
        let weight = if index == 0 { 1 } else { 3 };
        if roll < weight {
            return index;
        }
        roll -= weight;
    }
    0
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::time::Duration;

    use reef_runner_core::{
        Cell, CrateId, EnemyId, Facing, Layer, PotionId, PotionKind, TileKind, WorldPos,
    };

    use super::World;

    /// Returns the tile occupying the cell in the requested layer, if any.
    #[must_use]
    pub fn tile(world: &World, layer: Layer, cell: Cell) -> Option<TileKind> {
        match layer {
            Layer::Ground => world.terrain.ground.get(cell),
            Layer::Ocean => world.terrain.ocean.get(cell),
            Layer::Foreground => world.terrain.foreground.get(cell),
            Layer::Background => world.terrain.background.get(cell),
        }
    }

    /// Returns every tile of the requested layer in deterministic order.
    #[must_use]
    pub fn layer_tiles(world: &World, layer: Layer) -> Vec<(Cell, TileKind)> {
        let layer = match layer {
            Layer::Ground => &world.terrain.ground,
            Layer::Ocean => &world.terrain.ocean,
            Layer::Foreground => &world.terrain.foreground,
            Layer::Background => &world.terrain.background,
        };
        let mut tiles: Vec<(Cell, TileKind)> = layer.iter().collect();
        tiles.sort_by_key(|(cell, _)| *cell);
        tiles
    }

    /// Number of cells currently tracked in the ground layer.
    #[must_use]
    pub fn ground_cell_count(world: &World) -> usize {
        world.terrain.ground_cell_count()
    }

    /// Number of cells currently tracked in the ocean layer.
    #[must_use]
    pub fn ocean_cell_count(world: &World) -> usize {
        world.terrain.ocean_cell_count()
    }

    /// Rightmost x-coordinate already covered by platform generation.
    #[must_use]
    pub fn last_platform_x(world: &World) -> i32 {
        world.last_platform_x
    }

    /// Rightmost x-coordinate already covered by ocean generation.
    #[must_use]
    pub fn last_water_x(world: &World) -> i32 {
        world.last_water_x
    }

    /// Finds a safe position above the tracked ground cell nearest to `x`.
    ///
    /// Distance ties prefer the higher cell, then the leftmost, so the result
    /// is deterministic. Falls back to a fixed offset above the platform
    /// level when no ground is tracked.
    #[must_use]
    pub fn respawn_position_above(world: &World, x: f32) -> WorldPos {
        let anchor = x.round() as i32;
        let mut best: Option<Cell> = None;
        for cell in world.terrain.tracked_ground() {
            best = Some(match best {
                None => cell,
                Some(current) => {
                    let cell_distance = (cell.x() - anchor).abs();
                    let current_distance = (current.x() - anchor).abs();
                    let closer = cell_distance < current_distance
                        || (cell_distance == current_distance && cell.y() > current.y())
                        || (cell_distance == current_distance
                            && cell.y() == current.y()
                            && cell.x() < current.x());
                    if closer {
                        cell
                    } else {
                        current
                    }
                }
            });
        }
        match best {
            Some(cell) => {
                let center = cell.center();
                WorldPos::new(center.x(), center.y() + world.config.respawn_clearance)
            }
            None => WorldPos::new(x, (world.config.platform_level_y + 2) as f32),
        }
    }

    /// Captures a read-only snapshot of the player state.
    #[must_use]
    pub fn player(world: &World) -> PlayerSnapshot {
        PlayerSnapshot {
            position: world.player.position,
            respawn_point: world.player.respawn_point,
            saved_score: world.player.saved_score,
            health: world.player.health,
            score: world.player.score,
            invulnerable: !world.player.invulnerability.is_zero(),
            knockback_remaining: world.player.knockback,
            hit_from_right: world.player.hit_from_right,
            stamina: world.player.stamina,
            exhausted: world.player.exhausted,
            sprinting: world.player.sprinting,
        }
    }

    /// Captures a read-only view of the patrolling enemies.
    #[must_use]
    pub fn enemy_view(world: &World) -> EnemyView {
        let snapshots = world
            .enemies
            .iter()
            .map(|(id, state)| EnemySnapshot {
                id: *id,
                position: state.position,
                facing: state.facing,
                score_value: world.config.enemy_score,
            })
            .collect();
        EnemyView { snapshots }
    }

    /// Captures a read-only view of the uncollected potions.
    #[must_use]
    pub fn potion_view(world: &World) -> Vec<PotionSnapshot> {
        world
            .potions
            .iter()
            .map(|(id, state)| PotionSnapshot {
                id: *id,
                kind: state.kind,
                position: state.position,
            })
            .collect()
    }

    /// Active crate spawns paired with the cell each crate sits on.
    #[must_use]
    pub fn active_crates(world: &World) -> Vec<(CrateId, Cell)> {
        world.active_crates.clone()
    }

    /// Active enemy spawns paired with the cell each enemy was seated on.
    #[must_use]
    pub fn active_enemies(world: &World) -> Vec<(EnemyId, Cell)> {
        world.active_enemies.clone()
    }

    /// Occupancy counters for the enemy pool.
    #[must_use]
    pub fn enemy_pool_stats(world: &World) -> PoolStats {
        PoolStats {
            available: world.enemy_pool.available_len(),
            active: world.enemy_pool.active_len(),
        }
    }

    /// Occupancy counters for the crate pool.
    #[must_use]
    pub fn crate_pool_stats(world: &World) -> PoolStats {
        PoolStats {
            available: world.crate_pool.available_len(),
            active: world.crate_pool.active_len(),
        }
    }

    /// Occupancy counters for the potion pool.
    #[must_use]
    pub fn potion_pool_stats(world: &World) -> PoolStats {
        PoolStats {
            available: world.potion_pool.available_len(),
            active: world.potion_pool.active_len(),
        }
    }

    /// Immutable representation of the player state used for queries.
    #[derive(Clone, Copy, Debug)]
    pub struct PlayerSnapshot {
        /// Position the player currently occupies.
        pub position: WorldPos,
        /// Fallback respawn anchor recorded by the adapter.
        pub respawn_point: WorldPos,
        /// Score restored when respawning.
        pub saved_score: u32,
        /// Current health points.
        pub health: u32,
        /// Current score total.
        pub score: u32,
        /// Whether the timed invulnerability window is running.
        pub invulnerable: bool,
        /// Remaining knockback lockout.
        pub knockback_remaining: Duration,
        /// Whether the last hit landed from the player's right side.
        pub hit_from_right: bool,
        /// Current stamina gauge value.
        pub stamina: f32,
        /// Whether the stamina gauge is latched in exhaustion.
        pub exhausted: bool,
        /// Whether sprint input is currently engaged.
        pub sprinting: bool,
    }

    /// Immutable representation of a single enemy used for queries.
    #[derive(Clone, Copy, Debug)]
    pub struct EnemySnapshot {
        /// Identifier lent out by the enemy pool.
        pub id: EnemyId,
        /// Position the enemy currently occupies.
        pub position: WorldPos,
        /// Direction the enemy is walking toward.
        pub facing: Facing,
        /// Score awarded when the enemy is stomped.
        pub score_value: u32,
    }

    /// Read-only snapshot describing all patrolling enemies.
    #[derive(Clone, Debug, Default)]
    pub struct EnemyView {
        snapshots: Vec<EnemySnapshot>,
    }

    impl EnemyView {
        /// Iterator over the captured enemy snapshots in deterministic order.
        pub fn iter(&self) -> impl Iterator<Item = &EnemySnapshot> {
            self.snapshots.iter()
        }

        /// Consumes the view, yielding the underlying snapshots.
        #[must_use]
        pub fn into_vec(self) -> Vec<EnemySnapshot> {
            self.snapshots
        }
    }

    /// Immutable representation of a single potion used for queries.
    #[derive(Clone, Copy, Debug)]
    pub struct PotionSnapshot {
        /// Identifier lent out by the potion pool.
        pub id: PotionId,
        /// Variety of the potion.
        pub kind: PotionKind,
        /// Position the potion rests at.
        pub position: WorldPos,
    }

    /// Occupancy counters exposed for a single pool.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PoolStats {
        /// Instances waiting in the available queue.
        pub available: usize,
        /// Instances currently lent out.
        pub active: usize,
    }
}
