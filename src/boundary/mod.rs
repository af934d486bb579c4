//! Canonical parameterization of a `W×H` grid perimeter.
//!
//! The perimeter is an ordered, cyclic walk over the `P = 2(W+H) - 4` lattice
//! points on the border of the grid, split into four sides:
//!
//! - `Right` (`x = W-1`) walked bottom → top,
//! - `Top` (`y = H-1`) walked right → left,
//! - `Left` (`x = 0`) walked top → bottom,
//! - `Bottom` (`y = 0`) walked left → right.
//!
//! Every side owns the corner it starts at and leaves the corner it ends at to
//! the next side, so each corner appears exactly once per lap. A position is a
//! side plus an offset along it; `Boundary::next` is the only stepping rule and
//! both enumerators go through it.

mod dimension;
mod side;

pub use dimension::{BoundaryError, Dimension};
pub use side::Side;

use crate::geometry::GridPoint;
use serde::{Deserialize, Serialize};

/// A side plus a 1-D offset along it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundaryPosition {
    pub side: Side,
    pub offset: usize,
}

impl BoundaryPosition {
    pub const fn new(side: Side, offset: usize) -> Self {
        Self { side, offset }
    }

    /// Offset 0 of `side`, i.e. the corner the side starts at.
    pub const fn start_of(side: Side) -> Self {
        Self { side, offset: 0 }
    }
}

/// Result of one step along the perimeter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub position: BoundaryPosition,
    /// Set when the step crossed from the last side back to `Right`, i.e. a
    /// full lap from the walk origin has been completed.
    pub wrapped: bool,
}

/// Perimeter model of a fixed grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Boundary {
    dim: Dimension,
}

impl Boundary {
    pub fn new(dim: Dimension) -> Self {
        Self { dim }
    }

    /// Shorthand for `Boundary::new(Dimension::new(width, height)?)`.
    pub fn with_size(width: usize, height: usize) -> Result<Self, BoundaryError> {
        Dimension::new(width, height).map(Self::new)
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    #[inline]
    pub fn perimeter(&self) -> usize {
        self.dim.perimeter()
    }

    /// Number of positions owned by `side`.
    #[inline]
    pub fn side_len(&self, side: Side) -> usize {
        if side.is_horizontal() {
            self.dim.width() - 1
        } else {
            self.dim.height() - 1
        }
    }

    /// Lattice coordinate of a perimeter position.
    pub fn point(&self, pos: BoundaryPosition) -> GridPoint {
        debug_assert!(pos.offset < self.side_len(pos.side));
        let (w, h) = (self.dim.w(), self.dim.h());
        let k = pos.offset as i32;
        match pos.side {
            Side::Right => GridPoint::new(w - 1, k),
            Side::Top => GridPoint::new(w - 1 - k, h - 1),
            Side::Left => GridPoint::new(0, h - 1 - k),
            Side::Bottom => GridPoint::new(k, 0),
        }
    }

    /// Perimeter position of a boundary point, `None` for interior or
    /// outside points.
    pub fn position_of(&self, p: GridPoint) -> Option<BoundaryPosition> {
        if !self.contains(p) {
            return None;
        }
        let (w, h) = (self.dim.w(), self.dim.h());
        let (side, offset) = if p.x == w - 1 && p.y < h - 1 {
            (Side::Right, p.y)
        } else if p.y == h - 1 && p.x > 0 {
            (Side::Top, w - 1 - p.x)
        } else if p.x == 0 && p.y > 0 {
            (Side::Left, h - 1 - p.y)
        } else if p.y == 0 && p.x < w - 1 {
            (Side::Bottom, p.x)
        } else {
            return None;
        };
        Some(BoundaryPosition::new(side, offset as usize))
    }

    /// Advance one position in walk order.
    pub fn next(&self, pos: BoundaryPosition) -> Step {
        if pos.offset + 1 < self.side_len(pos.side) {
            Step {
                position: BoundaryPosition::new(pos.side, pos.offset + 1),
                wrapped: false,
            }
        } else {
            Step {
                position: BoundaryPosition::start_of(pos.side.next()),
                wrapped: pos.side == Side::Bottom,
            }
        }
    }

    /// Coordinate form of [`Boundary::next`]: the next boundary point and the
    /// side it belongs to.
    pub fn next_point(&self, p: GridPoint) -> Option<(GridPoint, Side)> {
        let step = self.next(self.position_of(p)?);
        Some((self.point(step.position), step.position.side))
    }

    /// Index of a position within one lap starting at `Right` offset 0.
    pub fn lap_index(&self, pos: BoundaryPosition) -> usize {
        let preceding: usize = Side::ALL[..pos.side.index()]
            .iter()
            .map(|&s| self.side_len(s))
            .sum();
        preceding + pos.offset
    }

    /// All positions of one lap, in walk order.
    pub fn walk(&self) -> impl Iterator<Item = BoundaryPosition> + '_ {
        std::iter::successors(Some(BoundaryPosition::start_of(Side::Right)), move |&pos| {
            Some(self.next(pos).position)
        })
        .take(self.perimeter())
    }

    #[inline]
    pub fn contains(&self, p: GridPoint) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.dim.w() && p.y < self.dim.h()
    }

    /// Nearest point of the grid rectangle.
    #[inline]
    pub fn clamp(&self, p: GridPoint) -> GridPoint {
        GridPoint::new(p.x.clamp(0, self.dim.w() - 1), p.y.clamp(0, self.dim.h() - 1))
    }

    /// Side through which an outside point has left the grid.
    ///
    /// Points beyond a corner resolve to the horizontal side (`Top`/`Bottom`).
    /// Returns `None` for points inside the grid.
    pub fn exit_side(&self, p: GridPoint) -> Option<Side> {
        let mut side = None;
        if p.x < 0 {
            side = Some(Side::Left);
        }
        if p.x >= self.dim.w() {
            side = Some(Side::Right);
        }
        if p.y < 0 {
            side = Some(Side::Bottom);
        }
        if p.y >= self.dim.h() {
            side = Some(Side::Top);
        }
        side
    }
}
