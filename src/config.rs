//! # Configuration
//!
//! Compile-time defaults and the runtime [`GameConfig`] that the binary can load
//! from a JSON file.

use crate::{DelverError, DelverResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default map width in tiles
pub const DEFAULT_MAP_WIDTH: i32 = 80;

/// Default map height in tiles
pub const DEFAULT_MAP_HEIGHT: i32 = 43;

/// Largest accepted map side
pub const MAX_MAP_DIMENSION: i32 = 1_000;

/// Room placement attempts per floor
pub const DEFAULT_MAX_ROOMS: u32 = 30;

/// Smallest room side, walls included
pub const DEFAULT_ROOM_MIN_SIZE: i32 = 6;

/// Largest room side, walls included
pub const DEFAULT_ROOM_MAX_SIZE: i32 = 10;

/// Sight radius for the player and for monsters
pub const DEFAULT_FOV_RADIUS: i32 = 8;

/// Messages kept before the oldest are dropped
pub const DEFAULT_MESSAGE_LOG_CAPACITY: usize = 1_000;

/// Where the binary keeps its save
pub const DEFAULT_SAVE_PATH: &str = "savegame.json";

/// Runtime game configuration.
///
/// Every field has a default, so a config file only needs to name the values it
/// changes.
///
/// # Examples
///
/// ```
/// use delver::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "max_rooms": 5 }"#).unwrap();
/// assert_eq!(config.max_rooms, 5);
/// assert_eq!(config.fov_radius, delver::config::DEFAULT_FOV_RADIUS);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub map_width: i32,
    pub map_height: i32,
    pub max_rooms: u32,
    pub room_min_size: i32,
    pub room_max_size: i32,
    pub fov_radius: i32,
    pub message_log_capacity: usize,
    pub save_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            max_rooms: DEFAULT_MAX_ROOMS,
            room_min_size: DEFAULT_ROOM_MIN_SIZE,
            room_max_size: DEFAULT_ROOM_MAX_SIZE,
            fov_radius: DEFAULT_FOV_RADIUS,
            message_log_capacity: DEFAULT_MESSAGE_LOG_CAPACITY,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }
}

impl GameConfig {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json(json: &str) -> DelverResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a configuration file.
    pub fn load_from_file(path: &Path) -> DelverResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks that the values can produce a playable floor.
    pub fn validate(&self) -> DelverResult<()> {
        if self.room_min_size < 3 {
            return Err(DelverError::Config(format!(
                "room_min_size must be at least 3, got {}",
                self.room_min_size
            )));
        }
        if self.room_max_size < self.room_min_size {
            return Err(DelverError::Config(format!(
                "room_max_size ({}) is smaller than room_min_size ({})",
                self.room_max_size, self.room_min_size
            )));
        }
        if self.map_width > MAX_MAP_DIMENSION || self.map_height > MAX_MAP_DIMENSION {
            return Err(DelverError::Config(format!(
                "a {}x{} map exceeds the {MAX_MAP_DIMENSION} tile limit",
                self.map_width, self.map_height
            )));
        }
        if self.map_width <= self.room_max_size || self.map_height <= self.room_max_size {
            return Err(DelverError::Config(format!(
                "a {}x{} map cannot hold rooms up to {} tiles",
                self.map_width, self.map_height, self.room_max_size
            )));
        }
        if self.max_rooms == 0 {
            return Err(DelverError::Config("max_rooms must be positive".to_string()));
        }
        if self.fov_radius < 1 {
            return Err(DelverError::Config("fov_radius must be positive".to_string()));
        }
        Ok(())
    }
}
