//! # ASCII Patterns
//!
//! Named ASCII-art shapes rendered as newline-terminated text. Each pattern
//! validates its parameters on construction and draws deterministically:
//!
//! ```
//! use ascii_patterns::{Pattern, Triangle};
//!
//! let triangle = Triangle::new(3)?;
//! assert_eq!(triangle.draw(), "* \n* * \n* * * \n");
//! # Ok::<(), ascii_patterns::PatternError>(())
//! ```
//!
//! Grid-based shapes share the [`canvas`] toolkit, a character [`canvas::Grid`]
//! plus a Bresenham line rasterizer. The [`gallery`] module loads titled
//! pattern lists from TOML or JSON and renders them in bulk.

pub mod canvas;
pub mod errors;
pub mod gallery;
pub mod patterns;

pub use errors::{PatternError, Result};
pub use gallery::{Gallery, GalleryEntry, PatternSpec, Rendered};
pub use patterns::*;
