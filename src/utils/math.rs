//! # Grid Mathematics
//!
//! Line rasterisation used when carving tunnels between rooms.

use crate::Position;

/// Rasterises the segment from `start` to `end` with Bresenham's algorithm.
///
/// Both endpoints are included and every consecutive pair of points is
/// 8-connected.
///
/// # Examples
///
/// ```
/// use delver::{bresenham_line, Position};
///
/// let line = bresenham_line(Position::new(0, 0), Position::new(3, 1));
/// assert_eq!(line.first(), Some(&Position::new(0, 0)));
/// assert_eq!(line.last(), Some(&Position::new(3, 1)));
/// assert_eq!(line.len(), 4);
/// ```
pub fn bresenham_line(start: Position, end: Position) -> Vec<Position> {
    let dx = (end.x - start.x).abs();
    let dy = -(end.y - start.y).abs();
    let step_x = if start.x < end.x { 1 } else { -1 };
    let step_y = if start.y < end.y { 1 } else { -1 };

    let mut points = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    let mut current = start;
    let mut error = dx + dy;

    loop {
        points.push(current);
        if current == end {
            break;
        }
        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            current.x += step_x;
        }
        if doubled <= dx {
            error += dx;
            current.y += step_y;
        }
    }

    points
}
