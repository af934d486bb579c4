use crate::boundary::Side;
use crate::geometry::GridPoint;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Candidate segment between two boundary points, handed to the significance
/// test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentCandidate {
    pub a: GridPoint,
    pub b: GridPoint,
    pub side_a: Side,
    pub side_b: Side,
}

impl SegmentCandidate {
    /// Endpoints as an order-independent key.
    pub fn unordered(&self) -> (GridPoint, GridPoint) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    pub fn length(&self) -> f64 {
        (self.b.to_point2() - self.a.to_point2()).norm()
    }
}

impl std::fmt::Display for SegmentCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} -- sides {},{}",
            self.a, self.b, self.side_a, self.side_b
        )
    }
}

/// Candidate produced by the orientation sweep.
///
/// `b` is the cheap projected endpoint `round(a + v·(W+H))`, which usually lies
/// outside the grid; only the direction `a → b` is meaningful. Use
/// `AngleSweep::endpoint_exact` when the boundary contact point is needed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrientedCandidate {
    pub orientation: usize,
    pub theta: f64,
    pub direction: Vector2<f64>,
    pub a: GridPoint,
    pub side_a: Side,
    pub b: GridPoint,
}

impl std::fmt::Display for OrientedCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} -- side {} -- a {:3.1} -- vec {:.2},{:.2}",
            self.a,
            self.b,
            self.side_a,
            self.theta.to_degrees(),
            self.direction.x,
            self.direction.y
        )
    }
}
