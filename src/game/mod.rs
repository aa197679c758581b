//! # Game Module
//!
//! The simulation core: tiles and floors, entities and their components, the
//! action pipeline, monster AI, the message log and the turn scheduler.
//!
//! Nothing in here touches a terminal. Front ends read a [`GameState`] and feed
//! it [`Action`] values.

pub mod actions;
pub mod ai;
pub mod color;
pub mod components;
pub mod consumables;
pub mod entities;
pub mod message_log;
pub mod persistence;
pub mod state;
pub mod world;

pub use actions::*;
pub use ai::*;
pub use color::*;
pub use components::*;
pub use consumables::*;
pub use entities::*;
pub use message_log::*;
pub use persistence::*;
pub use state::*;
pub use world::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a 2D coordinate on a floor.
///
/// # Examples
///
/// ```
/// use delver::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
/// assert_eq!(pos.chebyshev_distance(Position::new(12, 9)), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// King-move distance: the number of 8-directional steps between two tiles.
    pub fn chebyshev_distance(self, other: Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Calculates the Euclidean distance to another position.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::Position;
    ///
    /// assert_eq!(Position::new(0, 0).euclidean_distance(Position::new(3, 4)), 5.0);
    /// ```
    pub fn euclidean_distance(self, other: Position) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns all 8 adjacent positions (including diagonals).
    pub fn adjacent_positions(self) -> Vec<Position> {
        Direction::all()
            .into_iter()
            .map(|direction| self + direction.to_delta())
            .collect()
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The eight compass directions an actor can step or attack in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Direction {
    /// Converts a direction to a position delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::{Direction, Position};
    ///
    /// assert_eq!(Direction::North.to_delta(), Position::new(0, -1));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Direction::North => Position::new(0, -1),
            Direction::South => Position::new(0, 1),
            Direction::East => Position::new(1, 0),
            Direction::West => Position::new(-1, 0),
            Direction::Northeast => Position::new(1, -1),
            Direction::Northwest => Position::new(-1, -1),
            Direction::Southeast => Position::new(1, 1),
            Direction::Southwest => Position::new(-1, 1),
        }
    }

    /// Converts a unit delta back to a direction, or `None` for anything else.
    pub fn from_delta(delta: Position) -> Option<Direction> {
        Direction::all()
            .into_iter()
            .find(|direction| direction.to_delta() == delta)
    }

    /// Returns all 8 directions.
    pub fn all() -> [Direction; 8] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::Northeast,
            Direction::Northwest,
            Direction::Southeast,
            Direction::Southwest,
        ]
    }
}

/// Identifier of an entity.
///
/// Ids come from a per-run counter so that a seed plus an input sequence
/// always produces the same run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_chebyshev_distance() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.chebyshev_distance(Position::new(1, 1)), 1);
        assert_eq!(origin.chebyshev_distance(Position::new(-3, 2)), 3);
        assert_eq!(origin.chebyshev_distance(origin), 0);
    }

    #[test]
    fn test_position_adjacent() {
        let pos = Position::new(5, 5);
        let adjacent = pos.adjacent_positions();
        assert_eq!(adjacent.len(), 8);
        assert!(adjacent.contains(&Position::new(4, 4)));
        assert!(adjacent.contains(&Position::new(6, 6)));
        assert!(!adjacent.contains(&pos));
    }

    #[test]
    fn test_position_arithmetic() {
        let pos1 = Position::new(5, 10);
        let pos2 = Position::new(3, 2);
        assert_eq!(pos1 + pos2, Position::new(8, 12));
        assert_eq!(pos1 - pos2, Position::new(2, 8));
        assert_eq!(pos1.offset(-1, 1), Position::new(4, 11));
    }

    #[test]
    fn test_direction_delta_round_trip() {
        for direction in Direction::all() {
            assert_eq!(Direction::from_delta(direction.to_delta()), Some(direction));
        }
        assert_eq!(Direction::from_delta(Position::new(2, 0)), None);
        assert_eq!(Direction::from_delta(Position::new(0, 0)), None);
    }
}
