//! Grid shapes whose cells are stamped directly from coordinate formulas

use std::f64::consts::TAU;

use super::Pattern;
use crate::canvas::{draw_line_with, Grid};
use crate::errors::{diameter, ensure_fits, ensure_odd_at_least, ensure_positive, Result};

/// Hollow circle outline of radius `size`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    radius: usize,
}

impl Circle {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            radius: ensure_fits(
                "size",
                ensure_positive("size", size)?,
                diameter(size),
                diameter(size),
            )?,
        })
    }
}

impl Pattern for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn draw(&self) -> String {
        let r = self.radius as f64;
        let side = 2 * self.radius + 1;
        let mut grid = Grid::square(side);
        for y in 0..side {
            for x in 0..side {
                let dist = (x as f64 - r).hypot(y as f64 - r);
                if dist > r - 0.5 && dist < r + 0.5 {
                    grid.plot(x as i64, y as i64);
                }
            }
        }
        grid.to_text()
    }
}

/// Both diagonals of a square, odd sizes from 3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XPattern {
    size: usize,
}

impl XPattern {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits("size", ensure_odd_at_least("size", size, 3)?, size, size)?,
        })
    }
}

impl Pattern for XPattern {
    fn name(&self) -> &'static str {
        "x pattern"
    }

    fn draw(&self) -> String {
        let n = self.size as i64;
        let mut grid = Grid::square(self.size);
        for i in 0..n {
            grid.plot(i, i);
            grid.plot(n - i - 1, i);
        }
        grid.to_text()
    }
}

/// Full-length horizontal and vertical bars through the middle cell
fn stamp_cross(grid: &mut Grid, n: i64) {
    let mid = n / 2;
    for i in 0..n {
        grid.plot(i, mid);
        grid.plot(mid, i);
    }
}

/// Central cross with a hooked arm at every corner, odd sizes from 5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swastik {
    size: usize,
}

impl Swastik {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits("size", ensure_odd_at_least("size", size, 5)?, size, size)?,
        })
    }
}

impl Pattern for Swastik {
    fn name(&self) -> &'static str {
        "swastik"
    }

    fn draw(&self) -> String {
        let n = self.size as i64;
        let mid = n / 2;
        let mut grid = Grid::square(self.size);
        stamp_cross(&mut grid, n);

        // left edge, below the top row
        for y in 2..mid {
            grid.plot(0, y);
        }
        // right edge, below the horizontal bar
        for y in mid + 1..n - 2 {
            grid.plot(n - 1, y);
        }
        // top edge, left of the vertical bar
        for x in 0..mid {
            grid.plot(x, 0);
        }
        // bottom edge, right of the vertical bar
        for x in mid + 1..n {
            grid.plot(x, n - 1);
        }

        grid.to_text()
    }
}

/// Central cross plus four short diagonal blades, odd sizes from 5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shuriken {
    size: usize,
}

impl Shuriken {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits("size", ensure_odd_at_least("size", size, 5)?, size, size)?,
        })
    }

    /// Length of each diagonal blade, measured from the center
    pub fn arm_length(&self) -> usize {
        self.size / 3
    }
}

impl Pattern for Shuriken {
    fn name(&self) -> &'static str {
        "shuriken"
    }

    fn draw(&self) -> String {
        let n = self.size as i64;
        let mid = n / 2;
        let mut grid = Grid::square(self.size);
        stamp_cross(&mut grid, n);
        for i in 1..=self.arm_length() as i64 {
            grid.plot(mid - i, mid - i);
            grid.plot(mid + i, mid + i);
            grid.plot(mid + i, mid - i);
            grid.plot(mid - i, mid + i);
        }
        grid.to_text()
    }
}

/// Sampled sine trace, one cell per column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wave {
    length: usize,
    amplitude: usize,
    frequency: usize,
}

impl Wave {
    pub fn new(length: usize, amplitude: usize, frequency: usize) -> Result<Self> {
        Ok(Self {
            length: ensure_fits(
                "length",
                ensure_positive("length", length)?,
                length,
                amplitude.saturating_mul(2).saturating_add(1),
            )?,
            amplitude: ensure_positive("amplitude", amplitude)?,
            frequency: ensure_positive("frequency", frequency)?,
        })
    }

    /// Row of the trace in column `x`
    fn row_at(&self, x: usize) -> i64 {
        let amplitude = self.amplitude as f64;
        let phase = (x as f64 / self.length as f64) * self.frequency as f64 * TAU;
        // sin can undershoot by an ulp at the troughs
        let y = (amplitude * phase.sin() + amplitude).clamp(0.0, 2.0 * amplitude);
        y.floor() as i64
    }
}

impl Pattern for Wave {
    fn name(&self) -> &'static str {
        "wave"
    }

    fn draw(&self) -> String {
        let mut grid = Grid::new(self.length, 2 * self.amplitude + 1);
        for x in 0..self.length {
            grid.plot(x as i64, self.row_at(x));
        }
        grid.to_text()
    }
}

/// Staircase of `/` and `\` runs, each row pair shifted right by `width`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZigZag {
    height: usize,
    width: usize,
}

impl ZigZag {
    pub fn new(height: usize, width: usize) -> Result<Self> {
        Ok(Self {
            height: ensure_fits(
                "height",
                ensure_positive("height", height)?,
                width.saturating_mul(height),
                height.saturating_mul(2),
            )?,
            width: ensure_positive("width", width)?,
        })
    }
}

impl Pattern for ZigZag {
    fn name(&self) -> &'static str {
        "zigzag"
    }

    fn draw(&self) -> String {
        let rows = self.height * 2;
        let mut grid = Grid::new(self.width * self.height, rows);
        for row in 0..rows {
            let start = ((row / 2) * self.width) as i64;
            let end = start + self.width as i64 - 1;
            let y = row as i64;
            if row % 2 == 0 {
                draw_line_with(start, y, end, y, &mut grid, '/');
            } else {
                draw_line_with(end, y, start, y, &mut grid, '\\');
            }
        }
        grid.to_text()
    }
}
