//! # Canvas - character grid drawing toolkit
//!
//! Shared primitives behind the grid-based patterns:
//!
//! ```text
//!    vertices (f64 trig) ──round──▶ Point ──draw_line──▶ Grid ──to_text──▶ String
//! ```
//!
//! Everything here is synchronous and allocation-local: a [`Grid`] belongs to
//! the draw call that created it.

mod grid;
mod rasterizer;
mod shapes;

pub use grid::{join_lines, Grid, BLANK, INK};
pub use rasterizer::{connect_vertices, draw_line, draw_line_with, draw_segment};
pub use shapes::{polar, ring, star_ring, Point};
