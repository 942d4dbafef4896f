#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Reef Runner gameplay engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Reef Runner.";

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Advances the simulation clock and drives level streaming.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
        /// Viewpoint x-coordinate acting as the streaming frontier.
        viewpoint_x: f32,
    },
    /// Clears all generated terrain and regenerates around a position.
    ResetLevel {
        /// Position the generation cursors are re-anchored to.
        position: WorldPos,
    },
    /// Forces a generation step at the provided x-coordinate.
    GenerateAt {
        /// Frontier x-coordinate to generate toward.
        x: f32,
    },
    /// Reports the player's externally simulated position to the world.
    SetPlayerPosition {
        /// Position the player occupies after physics integration.
        position: WorldPos,
    },
    /// Records the fallback respawn anchor and the score restored there.
    SetRespawnPoint {
        /// Position used when no generated terrain can host a respawn.
        position: WorldPos,
        /// Score the player resumes with after respawning.
        score: u32,
    },
    /// Applies damage to the player, possibly triggering a respawn.
    DamagePlayer {
        /// Number of health points to subtract.
        amount: u32,
        /// Whether the blow landed from the player's right side.
        hit_from_right: bool,
    },
    /// Adds points to the player's running score.
    AwardScore {
        /// Number of points to add.
        amount: u32,
    },
    /// Starts the player's timed invulnerability window if not active.
    GrantInvulnerability,
    /// Engages or disengages the player's sprint.
    SetSprinting {
        /// Whether sprint input is currently held.
        engaged: bool,
    },
    /// Points a patrolling enemy in the provided direction.
    SteerEnemy {
        /// Identifier of the enemy to steer.
        enemy: EnemyId,
        /// Direction the enemy should walk toward.
        facing: Facing,
    },
    /// Breaks an active crate, releasing its contents.
    BreakCrate {
        /// Identifier of the crate to break.
        crate_id: CrateId,
    },
    /// Collects a spawned potion and applies its effect.
    CollectPotion {
        /// Identifier of the potion being collected.
        potion: PotionId,
    },
    /// Defeats an enemy from above, awarding its score value.
    StompEnemy {
        /// Identifier of the enemy that was stomped.
        enemy: EnemyId,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that a platform template was stamped into the ground layer.
    PlatformPlaced {
        /// Template variant that was placed.
        kind: PlatformKind,
        /// Bottom-left cell anchoring the template footprint.
        origin: Cell,
        /// Footprint width in cells.
        width: u32,
        /// Footprint height in cells.
        height: u32,
    },
    /// Confirms that the ocean layer was extended across an x-range.
    OceanExtended {
        /// First column of the freshly covered range.
        start_x: i32,
        /// Last column of the freshly covered range.
        end_x: i32,
    },
    /// Reports how many tracked cells were evicted behind the viewpoint.
    TerrainEvicted {
        /// Number of ground cells cleared and untracked.
        ground_cells: u32,
        /// Number of ocean cells cleared and untracked.
        ocean_cells: u32,
    },
    /// Reports pooled entities reclaimed behind the viewpoint.
    SpawnsReclaimed {
        /// Number of crates returned to their pool.
        crates: u32,
        /// Number of enemies returned to their pool.
        enemies: u32,
        /// Number of uncollected potions returned to their pool.
        potions: u32,
    },
    /// Confirms that an enemy was spawned on top of a platform.
    EnemySpawned {
        /// Identifier lent out by the enemy pool.
        enemy: EnemyId,
        /// Cell the enemy was seated on.
        cell: Cell,
    },
    /// Confirms that a crate was spawned on top of a platform.
    CrateSpawned {
        /// Identifier lent out by the crate pool.
        crate_id: CrateId,
        /// Cell the crate was seated on.
        cell: Cell,
    },
    /// Confirms that a patrolling enemy reversed direction.
    EnemyTurned {
        /// Identifier of the enemy that turned.
        enemy: EnemyId,
        /// Direction the enemy now walks toward.
        facing: Facing,
    },
    /// Confirms that an enemy was defeated by a stomp.
    EnemyStomped {
        /// Identifier of the defeated enemy.
        enemy: EnemyId,
        /// Score value awarded for the defeat.
        score: u32,
    },
    /// Confirms that a crate was broken open.
    CrateBroken {
        /// Identifier of the broken crate.
        crate_id: CrateId,
    },
    /// Confirms that a potion dropped out of a broken crate.
    PotionSpawned {
        /// Identifier lent out by the potion pool.
        potion: PotionId,
        /// Variety of potion that dropped.
        kind: PotionKind,
        /// World position the potion appeared at.
        position: WorldPos,
    },
    /// Confirms that the player collected a potion.
    PotionCollected {
        /// Identifier of the collected potion.
        potion: PotionId,
        /// Variety of potion that was collected.
        kind: PotionKind,
    },
    /// Announces the player's new score total.
    ScoreChanged {
        /// Score total after the change.
        score: u32,
    },
    /// Reports that the player absorbed damage and survived.
    PlayerDamaged {
        /// Health remaining after the hit.
        remaining: u32,
    },
    /// Reports that the player's health reached zero.
    PlayerDied {
        /// Score held at the moment of death.
        final_score: u32,
    },
    /// Reports that the player was moved to a safe position after dying.
    PlayerRespawned {
        /// Position the player now occupies.
        position: WorldPos,
    },
    /// Announces the start of the player's invulnerability window.
    InvulnerabilityStarted,
    /// Announces that the invulnerability window elapsed.
    InvulnerabilityEnded,
    /// Announces that the player's stamina was fully depleted.
    ExhaustionStarted,
    /// Announces that the player's stamina fully refilled after exhaustion.
    ExhaustionEnded,
    /// Confirms that all generated terrain was cleared and re-anchored.
    LevelReset {
        /// Position the generation cursors were re-anchored to.
        position: WorldPos,
    },
}

/// Location of a single tile slot expressed as integer x and y coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    x: i32,
    y: i32,
}

impl Cell {
    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal index of the cell.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical index of the cell.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns the cell displaced by the provided deltas.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns the world position at the center of the cell.
    #[must_use]
    pub fn center(&self) -> WorldPos {
        WorldPos::new(self.x as f32 + 0.5, self.y as f32 + 0.5)
    }
}

/// Continuous position measured in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldPos {
    x: f32,
    y: f32,
}

impl WorldPos {
    /// Creates a new world position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate in world units.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical coordinate in world units.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Returns the cell whose unit square contains this position.
    #[must_use]
    pub fn containing_cell(&self) -> Cell {
        Cell::new(self.x.floor() as i32, self.y.floor() as i32)
    }
}

/// Horizontal walking direction of a patrolling enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    /// Movement toward decreasing x-coordinates.
    Left,
    /// Movement toward increasing x-coordinates.
    Right,
}

impl Facing {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Signed unit factor applied to horizontal velocity.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Identifies one of the four independent tile layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Collidable terrain stamped from platform footprints.
    Ground,
    /// Background water strip beneath the platforms.
    Ocean,
    /// Decoration drawn in front of the platforms.
    Foreground,
    /// Decoration drawn behind the platforms.
    Background,
}

/// Identifies a tile that can occupy a layer slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Soft collidable terrain used by rolling platforms.
    Dirt,
    /// Hard collidable terrain used by constructed platforms.
    Brick,
    /// Background water filling the ocean layer.
    Water,
    /// Decorative tile drawn above platforms.
    Decor(DecorId),
}

/// Index into the fixed set of decorative tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DecorId(u8);

impl DecorId {
    /// Creates a new decorative tile index.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the index.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

/// Named platform template variants available to the level streamer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Long flat dirt run carrying decoration masks.
    Dirt,
    /// Long flat brick run.
    Brick,
    /// Short dirt mound raised in the middle.
    Hill,
    /// Ascending-then-descending brick staircase.
    Stairs,
    /// Brick silhouette that widens toward the middle.
    Pyramid,
    /// Brick silhouette that narrows toward the middle.
    RevPyramid,
    /// Three brick towers joined by a low bridge.
    Triple,
    /// Scattered brick islands separated by gaps.
    Gapped,
}

/// Variety of potion dropped by a broken crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PotionKind {
    /// Awards bonus points when collected.
    Score,
    /// Restores health, or grants invulnerability at full health.
    Health,
}

/// Unique identifier assigned to a pooled enemy instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates a new enemy identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a pooled crate instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CrateId(u32);

impl CrateId {
    /// Creates a new crate identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a pooled potion instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PotionId(u32);

impl PotionId {
    /// Creates a new potion identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, DecorId, Facing, PlatformKind, TileKind, WorldPos};
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn cell_round_trips_through_bincode() {
        assert_round_trip(&Cell::new(-7, 3));
    }

    #[test]
    fn tile_kind_round_trips_through_bincode() {
        assert_round_trip(&TileKind::Decor(DecorId::new(2)));
    }

    #[test]
    fn platform_kind_round_trips_through_bincode() {
        assert_round_trip(&PlatformKind::RevPyramid);
    }

    #[test]
    fn cell_center_sits_half_a_unit_inward() {
        let center = Cell::new(4, -2).center();
        assert!((center.x() - 4.5).abs() < f32::EPSILON);
        assert!((center.y() - -1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn containing_cell_floors_negative_coordinates() {
        let pos = WorldPos::new(-0.25, 1.75);
        assert_eq!(pos.containing_cell(), Cell::new(-1, 1));
    }

    #[test]
    fn facing_flip_reverses_sign() {
        assert_eq!(Facing::Left.flipped(), Facing::Right);
        assert!((Facing::Left.sign() + Facing::Right.sign()).abs() < f32::EPSILON);
    }
}
