//! Row-built shapes: every row is padding plus repeated ink

use std::fmt;
use std::str::FromStr;

use super::{cells, spaces, stars, Pattern};
use crate::canvas::join_lines;
use crate::errors::{
    diameter, ensure_fits, ensure_odd_at_least, ensure_positive, PatternError, Result,
};

/// Left-aligned triangle, row `i` holds `i` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    size: usize,
}

impl Triangle {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits(
                "size",
                ensure_positive("size", size)?,
                size.saturating_mul(2),
                size,
            )?,
        })
    }
}

impl Pattern for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn draw(&self) -> String {
        join_lines((1..=self.size).map(cells))
    }
}

/// `size` rows of `size` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    size: usize,
}

impl Square {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits(
                "size",
                ensure_positive("size", size)?,
                size.saturating_mul(2),
                size,
            )?,
        })
    }
}

impl Pattern for Square {
    fn name(&self) -> &'static str {
        "square"
    }

    fn draw(&self) -> String {
        let row = cells(self.size);
        join_lines(std::iter::repeat(row).take(self.size))
    }
}

/// Centered triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pyramid {
    size: usize,
}

impl Pyramid {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits(
                "size",
                ensure_positive("size", size)?,
                size.saturating_mul(3),
                size,
            )?,
        })
    }
}

/// Row of a centered stack: `n - i` blanks then `i` cells
fn centered_row(n: usize, i: usize) -> String {
    spaces(n - i) + &cells(i)
}

impl Pattern for Pyramid {
    fn name(&self) -> &'static str {
        "pyramid"
    }

    fn draw(&self) -> String {
        let n = self.size;
        join_lines((1..=n).map(|i| centered_row(n, i)))
    }
}

/// Run lengths `1..=n` followed by `n-1..=1`
fn rise_and_fall(n: usize) -> impl Iterator<Item = usize> {
    (1..=n).chain((1..n).rev())
}

/// Pyramid mirrored under its base row, trailing blanks trimmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diamond {
    size: usize,
}

impl Diamond {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits(
                "size",
                ensure_positive("size", size)?,
                size.saturating_mul(3),
                size.saturating_mul(2),
            )?,
        })
    }
}

impl Pattern for Diamond {
    fn name(&self) -> &'static str {
        "diamond"
    }

    fn draw(&self) -> String {
        let n = self.size;
        join_lines(rise_and_fall(n).map(|i| centered_row(n, i).trim_end().to_string()))
    }
}

/// Diamond silhouette keeping the blank after every cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rhombus {
    size: usize,
}

impl Rhombus {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits(
                "size",
                ensure_positive("size", size)?,
                size.saturating_mul(3),
                size.saturating_mul(2),
            )?,
        })
    }
}

impl Pattern for Rhombus {
    fn name(&self) -> &'static str {
        "rhombus"
    }

    fn draw(&self) -> String {
        let n = self.size;
        join_lines(rise_and_fall(n).map(|i| centered_row(n, i)))
    }
}

/// Two wings that narrow towards the middle, antennae on both ends
///
/// ```text
///  *   *
/// ** **
/// *   *
/// *   *
/// ** **
///  *   *
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Butterfly {
    size: usize,
}

impl Butterfly {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits(
                "size",
                ensure_positive("size", size)?,
                diameter(size),
                size.saturating_mul(2),
            )?,
        })
    }

    fn upper_half(&self) -> Vec<String> {
        let n = self.size;
        let mut rows = Vec::with_capacity(n);
        rows.push(format!(" *{}* ", spaces((2 * n).saturating_sub(3))));
        for k in 1..n {
            let wing = stars(n - k);
            rows.push(format!("{wing}{}{wing}", spaces(2 * k - 1)));
        }
        rows
    }
}

impl Pattern for Butterfly {
    fn name(&self) -> &'static str {
        "butterfly"
    }

    fn draw(&self) -> String {
        let upper = self.upper_half();
        join_lines(upper.iter().chain(upper.iter().rev()))
    }
}

/// Orientation of a [`HalfPyramid`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfPyramidKind {
    /// Growing rows, left aligned
    Straight,
    /// Shrinking rows, left aligned
    Inverted,
    /// Growing rows, right aligned
    Left,
    /// Shrinking rows, right aligned
    InvertedLeft,
}

impl HalfPyramidKind {
    pub const ALL: [Self; 4] = [Self::Straight, Self::Inverted, Self::Left, Self::InvertedLeft];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::Inverted => "inverted",
            Self::Left => "left",
            Self::InvertedLeft => "invertedLeft",
        }
    }

    fn shrinking(self) -> bool {
        matches!(self, Self::Inverted | Self::InvertedLeft)
    }

    fn right_aligned(self) -> bool {
        matches!(self, Self::Left | Self::InvertedLeft)
    }
}

impl fmt::Display for HalfPyramidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HalfPyramidKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                PatternError::unsupported_variant(format!("Invalid pyramid type specified: {s}"))
            })
    }
}

/// Right-angled pyramid in one of four orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfPyramid {
    height: usize,
    kind: HalfPyramidKind,
}

impl HalfPyramid {
    pub fn new(height: usize, kind: HalfPyramidKind) -> Result<Self> {
        Ok(Self {
            height: ensure_fits(
                "height",
                ensure_positive("height", height)?,
                height.saturating_mul(3),
                height,
            )?,
            kind,
        })
    }

    /// Build from a textual orientation tag such as `"invertedLeft"`
    pub fn from_tag(height: usize, tag: &str) -> Result<Self> {
        Self::new(height, tag.parse()?)
    }
}

impl Pattern for HalfPyramid {
    fn name(&self) -> &'static str {
        "half pyramid"
    }

    fn draw(&self) -> String {
        let h = self.height;
        let runs: Box<dyn Iterator<Item = usize>> = if self.kind.shrinking() {
            Box::new((1..=h).rev())
        } else {
            Box::new(1..=h)
        };
        join_lines(runs.map(|i| {
            let indent = if self.kind.right_aligned() { h - i } else { 0 };
            spaces(indent) + cells(i).trim_end()
        }))
    }
}

/// Rectangle of cells, optionally hollow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    height: usize,
    width: usize,
    hollow: bool,
}

impl Rectangle {
    pub fn new(height: usize, width: usize, hollow: bool) -> Result<Self> {
        ensure_positive("height", height)?;
        if width < 2 {
            return Err(PatternError::invalid_parameter(
                "width",
                "rectangles need at least 2 columns",
            ));
        }
        Ok(Self {
            height: ensure_fits("height", height, width.saturating_mul(2), height)?,
            width,
            hollow,
        })
    }
}

impl Pattern for Rectangle {
    fn name(&self) -> &'static str {
        if self.hollow {
            "hollow rectangle"
        } else {
            "filled rectangle"
        }
    }

    fn draw(&self) -> String {
        let edge = cells(self.width).trim_end().to_string();
        let inner = if self.hollow {
            format!("* {}*", "  ".repeat(self.width - 2))
        } else {
            edge.clone()
        };
        join_lines((0..self.height).map(|row| {
            if row == 0 || row == self.height - 1 {
                edge.as_str()
            } else {
                inner.as_str()
            }
        }))
    }
}

/// Rows between consecutive rungs, rung row included
const RUNG_SPACING: usize = 3;

/// Two rails with a rung every third row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ladder {
    height: usize,
    width: usize,
}

impl Ladder {
    pub fn new(height: usize, width: usize) -> Result<Self> {
        Ok(Self {
            height: ensure_fits(
                "height",
                ensure_positive("height", height)?,
                width.saturating_add(2),
                height.saturating_mul(3),
            )?,
            width: ensure_positive("width", width)?,
        })
    }
}

impl Pattern for Ladder {
    fn name(&self) -> &'static str {
        "ladder"
    }

    fn draw(&self) -> String {
        let rung = format!("|{}|", "-".repeat(self.width));
        let gap = format!("|{}|", spaces(self.width));
        join_lines((0..self.height * RUNG_SPACING).map(|i| {
            if i % RUNG_SPACING == 0 {
                rung.as_str()
            } else {
                gap.as_str()
            }
        }))
    }
}

/// Hourglass that narrows to a single cell, odd sizes only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sandglass {
    size: usize,
}

impl Sandglass {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits("size", ensure_odd_at_least("size", size, 1)?, size, size)?,
        })
    }
}

impl Pattern for Sandglass {
    fn name(&self) -> &'static str {
        "sandglass"
    }

    fn draw(&self) -> String {
        let n = self.size;
        let half = n / 2;
        join_lines(
            (0..=half)
                .chain((0..half).rev())
                .map(|i| spaces(i) + &stars(n - 2 * i)),
        )
    }
}
