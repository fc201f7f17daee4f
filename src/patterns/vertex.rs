//! Shapes traced between vertices placed on a circle

use std::f64::consts::{FRAC_PI_2, PI};

use super::Pattern;
use crate::canvas::{connect_vertices, ring, star_ring, Grid};
use crate::errors::{diameter, ensure_fits, ensure_positive, PatternError, Result};

/// Square canvas that fits a circle of radius `size` around its center cell
fn canvas_for(size: usize) -> Grid {
    Grid::square(diameter(size))
}

/// Regular polygon inscribed in a circle of radius `size - 2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Polygon {
    size: usize,
    sides: usize,
}

impl Polygon {
    pub fn new(size: usize, sides: usize) -> Result<Self> {
        ensure_positive("size", size)?;
        if sides < 3 {
            return Err(PatternError::invalid_parameter(
                "sides",
                "polygons must have at least 3 sides",
            ));
        }
        ensure_fits("sides", sides, sides, 1)?;
        Ok(Self {
            size: ensure_fits("size", size, diameter(size), diameter(size))?,
            sides,
        })
    }
}

impl Pattern for Polygon {
    fn name(&self) -> &'static str {
        match self.sides {
            3 => "triangle polygon",
            4 => "square polygon",
            5 => "pentagon",
            6 => "hexagon",
            8 => "octagon",
            _ => "polygon",
        }
    }

    fn draw(&self) -> String {
        let center = self.size as f64;
        let radius = self.size.saturating_sub(2) as f64;
        let mut grid = canvas_for(self.size);
        let vertices = ring(center, radius, self.sides, 0.0);
        connect_vertices(&vertices, 1, &mut grid);
        grid.to_text()
    }
}

/// Five-pointed star drawn as one continuous path, tip up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pentagram {
    size: usize,
}

impl Pentagram {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits(
                "size",
                ensure_positive("size", size)?,
                diameter(size),
                diameter(size),
            )?,
        })
    }
}

impl Pattern for Pentagram {
    fn name(&self) -> &'static str {
        "pentagram"
    }

    fn draw(&self) -> String {
        let n = self.size as f64;
        let mut grid = canvas_for(self.size);
        let points = ring(n, n, 5, FRAC_PI_2);
        connect_vertices(&points, 2, &mut grid);
        grid.to_text()
    }
}

/// Ten vertices alternating between an outer and an inner radius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    size: usize,
}

impl Star {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: ensure_fits(
                "size",
                ensure_positive("size", size)?,
                diameter(size),
                diameter(size),
            )?,
        })
    }

    /// Radius of the inner vertices of a regular five-pointed star
    pub fn inner_radius(&self) -> usize {
        let n = self.size as f64;
        (n * (PI / 10.0).sin() / (7.0 * PI / 10.0).sin()).floor() as usize
    }
}

impl Pattern for Star {
    fn name(&self) -> &'static str {
        "star"
    }

    fn draw(&self) -> String {
        let n = self.size as f64;
        let mut grid = canvas_for(self.size);
        let points = star_ring(n, n, self.inner_radius() as f64, 5, FRAC_PI_2);
        connect_vertices(&points, 2, &mut grid);
        grid.to_text()
    }
}
