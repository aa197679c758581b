//! # Field of View
//!
//! Symmetric shadowcasting over a grid of opaque/transparent cells.
//!
//! The grid is split into four quadrants around the origin. Each quadrant is
//! scanned row by row; a row is the set of cells at one depth between a start
//! and an end slope, and opaque cells narrow those slopes for deeper rows.
//! Floor cells are revealed only when they are symmetric (the origin would also
//! be visible from them); walls are revealed whenever a scan reaches them, so
//! the walls bounding a lit room are lit too.

use crate::Position;

/// Read access to a grid for visibility queries.
pub trait ViewGrid {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    /// Whether `pos` blocks sight. Cells outside the grid must report `true`.
    fn is_opaque(&self, pos: Position) -> bool;
}

/// Computes the cells visible from `origin` within `radius`.
///
/// Returns a row-major `width * height` grid. The origin is always visible
/// when it lies on the grid.
pub fn compute_fov<G: ViewGrid + ?Sized>(grid: &G, origin: Position, radius: i32) -> Vec<bool> {
    let width = grid.width().max(0);
    let height = grid.height().max(0);
    let mut visible = vec![false; (width * height) as usize];

    if origin.x < 0 || origin.y < 0 || origin.x >= width || origin.y >= height {
        return visible;
    }
    visible[(origin.y * width + origin.x) as usize] = true;

    for quadrant in Quadrant::ALL {
        let mut caster = Caster {
            grid,
            origin,
            radius,
            quadrant,
            width,
            height,
            visible: &mut visible,
        };
        caster.scan(Row::first());
    }

    visible
}

/// Whether `target` can be seen from `from` within `radius`.
///
/// Convenience wrapper over [`compute_fov`] used for monster sight checks.
pub fn is_visible_from<G: ViewGrid + ?Sized>(
    grid: &G,
    from: Position,
    target: Position,
    radius: i32,
) -> bool {
    if target.x < 0 || target.y < 0 || target.x >= grid.width() || target.y >= grid.height() {
        return false;
    }
    if from.chebyshev_distance(target) > radius {
        return false;
    }
    let visible = compute_fov(grid, from, radius);
    visible[(target.y * grid.width() + target.x) as usize]
}

#[derive(Debug, Clone, Copy)]
enum Quadrant {
    North,
    East,
    South,
    West,
}

impl Quadrant {
    const ALL: [Quadrant; 4] = [Quadrant::North, Quadrant::East, Quadrant::South, Quadrant::West];

    fn transform(self, origin: Position, depth: i32, col: i32) -> Position {
        match self {
            Quadrant::North => Position::new(origin.x + col, origin.y - depth),
            Quadrant::South => Position::new(origin.x + col, origin.y + depth),
            Quadrant::East => Position::new(origin.x + depth, origin.y + col),
            Quadrant::West => Position::new(origin.x - depth, origin.y + col),
        }
    }
}

/// A rational slope `num / den` with `den > 0`.
#[derive(Debug, Clone, Copy)]
struct Slope {
    num: i32,
    den: i32,
}

impl Slope {
    fn new(num: i32, den: i32) -> Self {
        Self { num, den }
    }

    /// Slope through the left edge of the cell at `(depth, col)`.
    fn at_cell_edge(depth: i32, col: i32) -> Self {
        Self::new(2 * col - 1, 2 * depth)
    }
}

#[derive(Debug, Clone, Copy)]
struct Row {
    depth: i32,
    start: Slope,
    end: Slope,
}

impl Row {
    fn first() -> Self {
        Self {
            depth: 1,
            start: Slope::new(-1, 1),
            end: Slope::new(1, 1),
        }
    }

    fn next(&self) -> Self {
        Self {
            depth: self.depth + 1,
            ..*self
        }
    }

    /// `depth * start` rounded half up.
    fn min_col(&self) -> i32 {
        floor_div(2 * self.depth * self.start.num + self.start.den, 2 * self.start.den)
    }

    /// `depth * end` rounded half down.
    fn max_col(&self) -> i32 {
        ceil_div(2 * self.depth * self.end.num - self.end.den, 2 * self.end.den)
    }

    fn is_symmetric(&self, col: i32) -> bool {
        col * self.start.den >= self.depth * self.start.num
            && col * self.end.den <= self.depth * self.end.num
    }
}

fn floor_div(a: i32, b: i32) -> i32 {
    a.div_euclid(b)
}

fn ceil_div(a: i32, b: i32) -> i32 {
    -(-a).div_euclid(b)
}

struct Caster<'a, G: ViewGrid + ?Sized> {
    grid: &'a G,
    origin: Position,
    radius: i32,
    quadrant: Quadrant,
    width: i32,
    height: i32,
    visible: &'a mut Vec<bool>,
}

impl<G: ViewGrid + ?Sized> Caster<'_, G> {
    fn scan(&mut self, mut row: Row) {
        if row.depth > self.radius {
            return;
        }

        let mut previous_was_wall: Option<bool> = None;
        for col in row.min_col()..=row.max_col() {
            let pos = self.quadrant.transform(self.origin, row.depth, col);
            let is_wall = self.grid.is_opaque(pos);

            if is_wall || row.is_symmetric(col) {
                self.reveal(pos, row.depth, col);
            }

            match previous_was_wall {
                Some(true) if !is_wall => row.start = Slope::at_cell_edge(row.depth, col),
                Some(false) if is_wall => {
                    let mut next = row.next();
                    next.end = Slope::at_cell_edge(row.depth, col);
                    self.scan(next);
                }
                _ => {}
            }
            previous_was_wall = Some(is_wall);
        }

        if previous_was_wall == Some(false) {
            self.scan(row.next());
        }
    }

    fn reveal(&mut self, pos: Position, depth: i32, col: i32) {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return;
        }
        if depth * depth + col * col > self.radius * self.radius {
            return;
        }
        self.visible[(pos.y * self.width + pos.x) as usize] = true;
    }
}
