//! Lattice points and the small amount of vector glue the enumerators need.
//!
//! Boundary points live on the integer lattice. Directions and ray marching
//! use nalgebra `f64` vectors; `GridPoint::round` brings a real position back
//! to the nearest lattice point.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Integer lattice coordinate. Projected endpoints may fall outside the
/// image, so coordinates are signed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Nearest lattice point (half away from zero).
    #[inline]
    pub fn round(p: &Point2<f64>) -> Self {
        Self {
            x: p.x.round() as i32,
            y: p.y.round() as i32,
        }
    }

    #[inline]
    pub fn to_point2(self) -> Point2<f64> {
        Point2::new(self.x as f64, self.y as f64)
    }

    /// `round(self + v * t)`.
    #[inline]
    pub fn project(self, v: &Vector2<f64>, t: f64) -> Self {
        Self::round(&(self.to_point2() + v * t))
    }

    /// Chebyshev distance, handy for "equal up to rounding" checks.
    pub fn chebyshev(self, other: GridPoint) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl Add for GridPoint {
    type Output = GridPoint;

    fn add(self, rhs: GridPoint) -> GridPoint {
        GridPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
