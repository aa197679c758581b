//! # Generation Module
//!
//! Procedural content generation for floors, monsters and items.
//!
//! A floor is built by [`RoomCorridorGenerator`]: rectangular rooms joined by
//! L-shaped tunnels, each room after the first stocked from floor-scaled spawn
//! tables ([`MonsterKind`], [`ItemKind`]).

pub mod dungeon;
pub mod encounters;
pub mod items;

pub use dungeon::*;
pub use encounters::*;
pub use items::*;

use crate::config::{
    DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_MAX_ROOMS, DEFAULT_ROOM_MAX_SIZE,
    DEFAULT_ROOM_MIN_SIZE,
};
use crate::{DelverResult, Position};
use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for generating one floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub map_width: i32,
    pub map_height: i32,
    /// Placement attempts; rejected candidates are not retried
    pub max_rooms: u32,
    pub room_min_size: i32,
    pub room_max_size: i32,
    /// 1-based depth, used to pick spawn caps and tables
    pub current_floor: u32,
    /// First id handed to a spawned entity
    pub first_entity_id: u64,
}

impl GenerationConfig {
    /// Creates a configuration with default dimensions for `current_floor`.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(3);
    /// assert_eq!(config.current_floor, 3);
    /// assert!(config.room_max_size >= config.room_min_size);
    /// ```
    pub fn new(current_floor: u32) -> Self {
        Self {
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            max_rooms: DEFAULT_MAX_ROOMS,
            room_min_size: DEFAULT_ROOM_MIN_SIZE,
            room_max_size: DEFAULT_ROOM_MAX_SIZE,
            current_floor,
            first_entity_id: 0,
        }
    }

    /// Creates a configuration for testing with smaller, simpler floors.
    pub fn for_testing(current_floor: u32) -> Self {
        Self {
            map_width: 40,
            map_height: 25,
            max_rooms: 8,
            room_min_size: 4,
            room_max_size: 7,
            current_floor,
            first_entity_id: 0,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

/// A rectangle on the tile grid. The outer edge stays wall; only the inner
/// cells are carved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectangularRoom {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RectangularRoom {
    /// Creates a room from its top-left corner and size.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::{Position, RectangularRoom};
    ///
    /// let room = RectangularRoom::new(5, 5, 10, 8);
    /// assert_eq!(room.center(), Position::new(10, 9));
    /// assert!(room.contains_inner(Position::new(6, 6)));
    /// assert!(!room.contains_inner(Position::new(5, 5)));
    /// ```
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn center(&self) -> Position {
        Position::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Cells carved into floor, row by row.
    pub fn inner(&self) -> impl Iterator<Item = Position> + '_ {
        ((self.y1 + 1)..self.y2)
            .flat_map(move |y| ((self.x1 + 1)..self.x2).map(move |x| Position::new(x, y)))
    }

    pub fn contains_inner(&self, pos: Position) -> bool {
        pos.x > self.x1 && pos.x < self.x2 && pos.y > self.y1 && pos.y < self.y2
    }

    /// Overlap test with inclusive bounds, so rooms sharing a wall intersect.
    pub fn intersects(&self, other: &RectangularRoom) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> DelverResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> DelverResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Highest-threshold value whose threshold is at or below `floor`.
///
/// # Examples
///
/// ```
/// use delver::generation::cap_for_floor;
///
/// let caps = [(1, 2), (4, 3), (6, 5)];
/// assert_eq!(cap_for_floor(&caps, 1), 2);
/// assert_eq!(cap_for_floor(&caps, 5), 3);
/// assert_eq!(cap_for_floor(&caps, 0), 0);
/// ```
pub fn cap_for_floor(table: &[(u32, u32)], floor: u32) -> u32 {
    table
        .iter()
        .filter(|(threshold, _)| *threshold <= floor)
        .max_by_key(|(threshold, _)| *threshold)
        .map_or(0, |(_, cap)| *cap)
}

/// Weighted rows unlocked at a floor threshold.
pub type SpawnTable<K> = [(u32, &'static [(K, u32)])];

/// Pools every row unlocked at `floor`. A kind listed again at a higher
/// threshold takes that row's weight. Kinds keep first-seen order.
pub fn pooled_weights<K: Copy + PartialEq>(table: &SpawnTable<K>, floor: u32) -> Vec<(K, u32)> {
    let mut rows: Vec<&(u32, &'static [(K, u32)])> =
        table.iter().filter(|(threshold, _)| *threshold <= floor).collect();
    rows.sort_by_key(|(threshold, _)| *threshold);

    let mut pooled: Vec<(K, u32)> = Vec::new();
    for (_, entries) in rows {
        for &(kind, weight) in entries.iter() {
            match pooled.iter_mut().find(|(k, _)| *k == kind) {
                Some(existing) => existing.1 = weight,
                None => pooled.push((kind, weight)),
            }
        }
    }
    pooled
}

/// Draws `count` kinds from the pooled table, with replacement.
pub fn choose_weighted<K: Copy + PartialEq>(
    table: &SpawnTable<K>,
    floor: u32,
    count: u32,
    rng: &mut StdRng,
) -> Vec<K> {
    let pooled = pooled_weights(table, floor);
    let Ok(distribution) = WeightedIndex::new(pooled.iter().map(|(_, w)| *w)) else {
        return Vec::new();
    };
    (0..count)
        .map(|_| pooled[distribution.sample(rng)].0)
        .collect()
}
