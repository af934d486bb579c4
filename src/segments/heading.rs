//! Direction → start-side table for the orientation sweep.
//!
//! A ray with direction `v` enters the grid through the sides facing against
//! `v`. Axis-aligned headings enter through one side; diagonal headings enter
//! through two adjacent sides and the scan runs from the start corner to the
//! opposite corner.

use crate::angle::is_negligible;
use crate::boundary::{Boundary, BoundaryPosition, Side};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Sign pattern of a direction vector (`y` grows upward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
    DownLeft,
    UpLeft,
    DownRight,
    UpRight,
}

/// How many sides the start points of one orientation cover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SideSpan {
    /// The start side plus the corner closing it.
    Single,
    /// The start side, the following side, and the opposite corner.
    Double,
}

/// Where the start points of one orientation come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanPlan {
    pub start: Side,
    pub span: SideSpan,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Sign {
    Neg,
    Zero,
    Pos,
}

fn sign(c: f64) -> Sign {
    if is_negligible(c) {
        Sign::Zero
    } else if c < 0.0 {
        Sign::Neg
    } else {
        Sign::Pos
    }
}

impl Heading {
    pub const ALL: [Heading; 8] = [
        Heading::Up,
        Heading::Down,
        Heading::Left,
        Heading::Right,
        Heading::DownLeft,
        Heading::UpLeft,
        Heading::DownRight,
        Heading::UpRight,
    ];

    /// Classify a direction; components below `AXIS_EPS` count as zero.
    /// A zero vector falls through to `Down`.
    pub fn classify(v: &Vector2<f64>) -> Heading {
        match (sign(v.x), sign(v.y)) {
            (Sign::Zero, Sign::Pos) => Heading::Up,
            (Sign::Zero, _) => Heading::Down,
            (Sign::Neg, Sign::Zero) => Heading::Left,
            (Sign::Pos, Sign::Zero) => Heading::Right,
            (Sign::Neg, Sign::Neg) => Heading::DownLeft,
            (Sign::Neg, Sign::Pos) => Heading::UpLeft,
            (Sign::Pos, Sign::Neg) => Heading::DownRight,
            (Sign::Pos, Sign::Pos) => Heading::UpRight,
        }
    }

    pub fn plan(self) -> ScanPlan {
        let (start, span) = match self {
            Heading::Up => (Side::Bottom, SideSpan::Single),
            Heading::Down => (Side::Top, SideSpan::Single),
            Heading::Left => (Side::Right, SideSpan::Single),
            Heading::Right => (Side::Left, SideSpan::Single),
            Heading::DownLeft => (Side::Right, SideSpan::Double),
            Heading::UpLeft => (Side::Bottom, SideSpan::Double),
            Heading::DownRight => (Side::Top, SideSpan::Double),
            Heading::UpRight => (Side::Left, SideSpan::Double),
        };
        ScanPlan { start, span }
    }

    pub fn is_axis_aligned(self) -> bool {
        self.plan().span == SideSpan::Single
    }
}

impl ScanPlan {
    /// Start corner: offset 0 of the start side.
    pub fn first(&self) -> BoundaryPosition {
        BoundaryPosition::start_of(self.start)
    }

    /// Last start point of the orientation, a corner.
    pub fn fin(&self) -> BoundaryPosition {
        let closing = match self.span {
            SideSpan::Single => self.start.next(),
            SideSpan::Double => self.start.next().next(),
        };
        BoundaryPosition::start_of(closing)
    }

    /// Number of start points, `first` and `fin` included.
    pub fn len(&self, boundary: &Boundary) -> usize {
        match self.span {
            SideSpan::Single => boundary.side_len(self.start) + 1,
            SideSpan::Double => {
                boundary.side_len(self.start) + boundary.side_len(self.start.next()) + 1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::unit_direction;
    use crate::geometry::GridPoint;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn classify_covers_all_quadrants() {
        let cases = [
            (0.0, Heading::Right),
            (FRAC_PI_4, Heading::UpRight),
            (FRAC_PI_2, Heading::Up),
            (3.0 * FRAC_PI_4, Heading::UpLeft),
            (PI, Heading::Left),
            (5.0 * FRAC_PI_4, Heading::DownLeft),
            (3.0 * FRAC_PI_2, Heading::Down),
            (7.0 * FRAC_PI_4, Heading::DownRight),
        ];
        for (theta, expected) in cases {
            assert_eq!(Heading::classify(&unit_direction(theta)), expected, "θ={theta}");
        }
    }

    #[test]
    fn plan_corners_match_table() {
        let b = Boundary::with_size(5, 4).unwrap();
        let corners = |h: Heading| {
            let plan = h.plan();
            (b.point(plan.first()), b.point(plan.fin()), plan.len(&b))
        };
        let p = GridPoint::new;
        assert_eq!(corners(Heading::Up), (p(0, 0), p(4, 0), 5));
        assert_eq!(corners(Heading::Down), (p(4, 3), p(0, 3), 5));
        assert_eq!(corners(Heading::Left), (p(4, 0), p(4, 3), 4));
        assert_eq!(corners(Heading::Right), (p(0, 3), p(0, 0), 4));
        assert_eq!(corners(Heading::DownLeft), (p(4, 0), p(0, 3), 8));
        assert_eq!(corners(Heading::UpLeft), (p(0, 0), p(4, 3), 8));
        assert_eq!(corners(Heading::DownRight), (p(4, 3), p(0, 0), 8));
        assert_eq!(corners(Heading::UpRight), (p(0, 3), p(4, 0), 8));
    }

    #[test]
    fn plan_len_matches_walk_from_first_to_fin() {
        let b = Boundary::with_size(7, 3).unwrap();
        for heading in Heading::ALL {
            let plan = heading.plan();
            let mut pos = plan.first();
            let mut n = 1;
            while pos != plan.fin() {
                pos = b.next(pos).position;
                n += 1;
            }
            assert_eq!(n, plan.len(&b), "{heading:?}");
        }
    }
}
