//! Grid points and vertex placement on circles

use std::f64::consts::TAU;

/// Grid cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Round a continuous position to the nearest cell
    #[inline]
    pub fn rounded(x: f64, y: f64) -> Self {
        Self::new(x.round() as i64, y.round() as i64)
    }
}

/// Position on a circle for a given angle
///
/// Angles grow counter-clockwise as seen on screen, so `y` is flipped
/// against the downward row axis.
#[inline]
pub fn polar(center: f64, radius: f64, angle: f64) -> Point {
    Point::rounded(center + radius * angle.cos(), center - radius * angle.sin())
}

/// `count` vertices evenly spaced on a circle, the first one at `phase`
pub fn ring(center: f64, radius: f64, count: usize, phase: f64) -> Vec<Point> {
    let step = TAU / count as f64;
    (0..count)
        .map(|i| polar(center, radius, phase + i as f64 * step))
        .collect()
}

/// `points * 2` vertices alternating between outer and inner radius
pub fn star_ring(center: f64, outer: f64, inner: f64, points: usize, phase: f64) -> Vec<Point> {
    let count = points * 2;
    let step = TAU / count as f64;
    (0..count)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            polar(center, radius, phase + i as f64 * step)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rounding() {
        assert_eq!(Point::rounded(1.4, 2.6), Point::new(1, 3));
        assert_eq!(Point::rounded(-0.6, 0.5), Point::new(-1, 1));
    }

    #[test]
    fn test_ring_points_up() {
        let square = ring(5.0, 5.0, 4, FRAC_PI_2);
        assert_eq!(
            square,
            vec![
                Point::new(5, 0),
                Point::new(0, 5),
                Point::new(5, 10),
                Point::new(10, 5),
            ]
        );
    }

    #[test]
    fn test_star_ring_alternates_radius() {
        let star = star_ring(10.0, 10.0, 4.0, 5, FRAC_PI_2);
        assert_eq!(star.len(), 10);
        assert_eq!(star[0], Point::new(10, 0));
        // Opposite the top tip sits an inner vertex
        assert_eq!(star[5], Point::new(10, 14));
    }
}
