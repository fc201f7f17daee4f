//! Bresenham line rasterizer for character grids

use super::grid::{Grid, INK};
use super::shapes::Point;

/// Draw a straight line between two cells with the ink character
///
/// Integer-only error accumulation, valid for every octant. Cells outside
/// the grid are skipped, the walk itself never stops early.
pub fn draw_line(x1: i64, y1: i64, x2: i64, y2: i64, grid: &mut Grid) {
    draw_line_with(x1, y1, x2, y2, grid, INK);
}

/// Draw a straight line between two cells with an arbitrary character
pub fn draw_line_with(mut x1: i64, mut y1: i64, x2: i64, y2: i64, grid: &mut Grid, ink: char) {
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        if !grid.set(x1, y1, ink) {
            tracing::trace!(x = x1, y = y1, "line cell clipped");
        }
        if x1 == x2 && y1 == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x1 += sx;
        }
        if e2 < dx {
            err += dx;
            y1 += sy;
        }
    }
}

/// Draw the segment between two points
#[inline]
pub fn draw_segment(from: Point, to: Point, grid: &mut Grid) {
    draw_line(from.x, from.y, to.x, to.y, grid);
}

/// Connect every vertex `i` to vertex `i + step`, wrapping around
///
/// A step of 1 traces a simple polygon, a step of 2 the self-intersecting
/// star topology. Each edge is walked from its upper endpoint, so edges
/// that mirror each other across a vertical axis rasterize as mirrors too.
pub fn connect_vertices(vertices: &[Point], step: usize, grid: &mut Grid) {
    let count = vertices.len();
    for (i, &a) in vertices.iter().enumerate() {
        let b = vertices[(i + step) % count];
        let (from, to) = if (b.y, b.x) < (a.y, a.x) { (b, a) } else { (a, b) };
        draw_segment(from, to, grid);
    }
}
