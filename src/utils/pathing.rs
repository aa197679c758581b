//! # Path-finding
//!
//! Weighted 8-directional A* over a [`CostGrid`], backed by the `pathfinding`
//! crate.
//!
//! A cell cost of `0` means impassable. Stepping into a cell costs the cell's
//! cost times [`CARDINAL_STEP`] or [`DIAGONAL_STEP`], so crowded cells (which
//! carry a [`CROWD_PENALTY`]) are avoided when a cheaper detour exists.

use crate::{Direction, Position};
use ::pathfinding::prelude::astar;

/// Multiplier for orthogonal steps.
pub const CARDINAL_STEP: u32 = 2;

/// Multiplier for diagonal steps.
pub const DIAGONAL_STEP: u32 = 3;

/// Added to a passable cell that holds a blocking entity.
pub const CROWD_PENALTY: u32 = 10;

/// Per-cell movement costs for one path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    width: i32,
    height: i32,
    costs: Vec<u32>,
}

impl CostGrid {
    /// Builds a grid by asking `cost` for every cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::{CostGrid, Position};
    ///
    /// let grid = CostGrid::from_fn(5, 1, |p| if p.x == 2 { 0 } else { 1 });
    /// assert!(grid.find_path(Position::new(0, 0), Position::new(4, 0)).is_empty());
    /// ```
    pub fn from_fn(width: i32, height: i32, mut cost: impl FnMut(Position) -> u32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let mut costs = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                costs.push(cost(Position::new(x, y)));
            }
        }
        Self {
            width,
            height,
            costs,
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            None
        } else {
            Some((pos.y * self.width + pos.x) as usize)
        }
    }

    /// Cost of entering `pos`; cells off the grid are impassable.
    pub fn cost(&self, pos: Position) -> u32 {
        self.index(pos).map_or(0, |i| self.costs[i])
    }

    /// Adds `amount` to a passable cell. Impassable cells stay impassable.
    pub fn add_penalty(&mut self, pos: Position, amount: u32) {
        if let Some(i) = self.index(pos) {
            if self.costs[i] > 0 {
                self.costs[i] += amount;
            }
        }
    }

    /// Finds the cheapest path from `start` to `goal`.
    ///
    /// The returned waypoints exclude `start` and end at `goal`. An unreachable
    /// or impassable goal yields an empty path.
    pub fn find_path(&self, start: Position, goal: Position) -> Vec<Position> {
        if start == goal || self.cost(goal) == 0 {
            return Vec::new();
        }

        let result = astar(
            &start,
            |&pos| self.successors(pos),
            |&pos| octile_estimate(pos, goal),
            |&pos| pos == goal,
        );

        match result {
            Some((mut path, _cost)) => {
                path.remove(0);
                path
            }
            None => Vec::new(),
        }
    }

    fn successors(&self, pos: Position) -> Vec<(Position, u32)> {
        Direction::all()
            .into_iter()
            .filter_map(|direction| {
                let delta = direction.to_delta();
                let next = pos + delta;
                let cell = self.cost(next);
                if cell == 0 {
                    return None;
                }
                let step = if delta.x != 0 && delta.y != 0 {
                    DIAGONAL_STEP
                } else {
                    CARDINAL_STEP
                };
                Some((next, cell * step))
            })
            .collect()
    }
}

/// Lower bound on the remaining cost, given every cell costs at least 1.
fn octile_estimate(from: Position, to: Position) -> u32 {
    let dx = (from.x - to.x).unsigned_abs();
    let dy = (from.y - to.y).unsigned_abs();
    let diagonal = dx.min(dy);
    let straight = dx.max(dy) - diagonal;
    diagonal * DIAGONAL_STEP + straight * CARDINAL_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(width: i32, height: i32) -> CostGrid {
        CostGrid::from_fn(width, height, |_| 1)
    }

    #[test]
    fn test_path_excludes_start_and_ends_at_goal() {
        let grid = open_grid(10, 10);
        let path = grid.find_path(Position::new(1, 1), Position::new(4, 1));
        assert_eq!(
            path,
            vec![Position::new(2, 1), Position::new(3, 1), Position::new(4, 1)]
        );
    }

    #[test]
    fn test_diagonal_moves_are_used() {
        let grid = open_grid(10, 10);
        let path = grid.find_path(Position::new(0, 0), Position::new(3, 3));
        assert_eq!(path.len(), 3);
        assert_eq!(path.last(), Some(&Position::new(3, 3)));
    }

    #[test]
    fn test_walls_force_detour() {
        // Vertical wall at x == 2 with a gap at y == 4
        let grid = CostGrid::from_fn(5, 5, |p| if p.x == 2 && p.y != 4 { 0 } else { 1 });
        let path = grid.find_path(Position::new(0, 0), Position::new(4, 0));
        assert!(path.contains(&Position::new(2, 4)));
        assert!(path.iter().all(|p| grid.cost(*p) > 0));
    }

    #[test]
    fn test_unreachable_goal_gives_empty_path() {
        let grid = CostGrid::from_fn(5, 5, |p| if p.x == 2 { 0 } else { 1 });
        assert!(grid.find_path(Position::new(0, 0), Position::new(4, 4)).is_empty());
        assert!(grid.find_path(Position::new(0, 0), Position::new(9, 9)).is_empty());
    }

    #[test]
    fn test_crowd_penalty_prefers_detour() {
        // A 3-wide corridor; the middle lane is blocked by a crowd at (2, 1)
        let mut grid = CostGrid::from_fn(5, 3, |_| 1);
        grid.add_penalty(Position::new(2, 1), CROWD_PENALTY);
        let path = grid.find_path(Position::new(0, 1), Position::new(4, 1));
        assert!(!path.contains(&Position::new(2, 1)));
        assert_eq!(path.last(), Some(&Position::new(4, 1)));
    }

    #[test]
    fn test_penalty_does_not_open_walls() {
        let mut grid = CostGrid::from_fn(3, 1, |p| if p.x == 1 { 0 } else { 1 });
        grid.add_penalty(Position::new(1, 0), CROWD_PENALTY);
        assert_eq!(grid.cost(Position::new(1, 0)), 0);
    }
}
