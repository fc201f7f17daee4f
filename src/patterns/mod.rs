//! Shape generators
//!
//! Every pattern validates its parameters in `new` and renders with
//! [`Pattern::draw`], which is a pure function of those parameters.
//!
//! - [`formulaic`]: rows built by repetition and padding
//! - [`stamped`]: cells stamped on a [`Grid`](crate::canvas::Grid) by formula
//! - [`vertex`]: vertices on a circle joined by the line rasterizer
//! - [`freeform`]: hand-composed pictures

pub mod formulaic;
pub mod freeform;
pub mod stamped;
pub mod vertex;

pub use formulaic::{
    Butterfly, Diamond, HalfPyramid, HalfPyramidKind, Ladder, Pyramid, Rectangle, Rhombus,
    Sandglass, Square, Triangle,
};
pub use freeform::{Fish, Ganesh, Heart, Kite, RouterBox};
pub use stamped::{Circle, Shuriken, Swastik, Wave, XPattern, ZigZag};
pub use vertex::{Pentagram, Polygon, Star};

/// A renderable ASCII-art shape
pub trait Pattern: Send + Sync + std::fmt::Debug {
    /// Short human readable name of the shape kind
    fn name(&self) -> &'static str;

    /// Render the shape as newline-terminated rows
    fn draw(&self) -> String;
}

/// `count` ink cells, each followed by a blank
#[inline]
pub(crate) fn cells(count: usize) -> String {
    "* ".repeat(count)
}

#[inline]
pub(crate) fn spaces(count: usize) -> String {
    " ".repeat(count)
}

#[inline]
pub(crate) fn stars(count: usize) -> String {
    "*".repeat(count)
}
