//! Orientation sweep over boundary-anchored segments.
//!
//! The sweep visits the orientations `θ = 0, Δθ, 2Δθ, …` up to just under a
//! full turn. For each orientation the start point `a` walks the boundary from
//! the start corner of the heading's [`ScanPlan`] to its terminal corner
//! `fin`, and the far endpoint is derived from `a` and the direction
//! `v = (cos θ, sin θ)`:
//!
//! - `endpoint_fast`: `round(a + v·(W+H))`, a point past the far side that only
//!   carries the direction. Constant time; this is what `current` reports.
//! - `endpoint_exact`: marches the ray from `a` in unit steps until the rounded
//!   position leaves the grid and returns the last point inside together with
//!   the side it left through. O(W+H) per call.
//!
//! The sweep yields `Σ plan.len()` candidates, i.e. O((W+H)·2π/Δθ).

use super::candidate::{OrientedCandidate, SegmentCandidate};
use super::heading::Heading;
use super::options::SweepOptions;
use crate::angle::{orientation_angle, orientation_count, unit_direction, MIN_ANGLE_STEP};
use crate::boundary::{Boundary, BoundaryError, BoundaryPosition, Dimension, Side};
use crate::geometry::GridPoint;
use log::{debug, trace};
use nalgebra::Vector2;
use std::ops::Range;

/// Reasons a sweep cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SweepError {
    Boundary(BoundaryError),
    /// The angular step must be finite and at least `MIN_ANGLE_STEP`.
    InvalidAngleStep(f64),
}

impl std::fmt::Display for SweepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepError::Boundary(err) => write!(f, "{err}"),
            SweepError::InvalidAngleStep(step) => {
                write!(f, "invalid angular step {step} (expected finite and ≥ {MIN_ANGLE_STEP})")
            }
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SweepError::Boundary(err) => Some(err),
            SweepError::InvalidAngleStep(_) => None,
        }
    }
}

impl From<BoundaryError> for SweepError {
    fn from(err: BoundaryError) -> Self {
        SweepError::Boundary(err)
    }
}

/// Cursor over the orientation sweep.
///
/// Starts on the first start point of the first orientation. `advance`
/// returns `false` once every orientation has been scanned and keeps returning
/// `false` afterwards. The `Iterator` impl yields the current candidate first.
#[derive(Clone, Debug)]
pub struct AngleSweep {
    boundary: Boundary,
    step: f64,
    orientations: Range<usize>,
    index: usize,
    theta: f64,
    direction: Vector2<f64>,
    heading: Heading,
    a: BoundaryPosition,
    fin: BoundaryPosition,
    b: GridPoint,
    started: bool,
    exhausted: bool,
    emitted: usize,
}

impl AngleSweep {
    pub fn new(dim: Dimension, options: SweepOptions) -> Result<Self, SweepError> {
        Self::from_boundary(Boundary::new(dim), options)
    }

    pub fn with_size(width: usize, height: usize, options: SweepOptions) -> Result<Self, SweepError> {
        Self::new(Dimension::new(width, height)?, options)
    }

    pub fn from_boundary(boundary: Boundary, options: SweepOptions) -> Result<Self, SweepError> {
        if !options.is_valid() {
            return Err(SweepError::InvalidAngleStep(options.angle_step));
        }
        let count = orientation_count(options.angle_step);
        let mut sweep = Self {
            boundary,
            step: options.angle_step,
            orientations: 0..count,
            index: 0,
            theta: 0.0,
            direction: Vector2::new(1.0, 0.0),
            heading: Heading::Right,
            a: BoundaryPosition::start_of(Side::Left),
            fin: BoundaryPosition::start_of(Side::Bottom),
            b: GridPoint::default(),
            started: false,
            exhausted: false,
            emitted: 0,
        };
        sweep.first();
        Ok(sweep)
    }

    /// Restrict the sweep to orientation indices in `range`, clipped to the
    /// orientations of a full turn, and rewind to its first candidate.
    pub fn with_orientations(mut self, range: Range<usize>) -> Self {
        let count = orientation_count(self.step);
        let start = range.start.min(count);
        let end = range.end.min(count).max(start);
        self.orientations = start..end;
        self.first();
        self
    }

    /// Rewind to the first start point of the first orientation.
    pub fn first(&mut self) {
        self.started = false;
        self.exhausted = self.orientations.is_empty();
        self.emitted = usize::from(!self.exhausted);
        self.set_orientation(self.orientations.start);
    }

    fn set_orientation(&mut self, index: usize) {
        self.index = index;
        self.theta = orientation_angle(index, self.step);
        self.direction = unit_direction(self.theta);
        self.heading = Heading::classify(&self.direction);
        let plan = self.heading.plan();
        self.a = plan.first();
        self.fin = plan.fin();
        self.b = self.endpoint_fast();
        trace!(
            "AngleSweep: orientation {} θ={:.2}° heading={:?} start={}",
            index,
            self.theta.to_degrees(),
            self.heading,
            plan.start
        );
    }

    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        if self.a == self.fin {
            let next = self.index + 1;
            if next >= self.orientations.end {
                self.exhausted = true;
                debug!(
                    "AngleSweep: {} exhausted after {} orientations, {} candidates",
                    self.boundary.dimension(),
                    self.orientations.len(),
                    self.emitted
                );
                return false;
            }
            self.set_orientation(next);
        } else {
            self.a = self.boundary.next(self.a).position;
            self.b = self.endpoint_fast();
        }
        self.emitted += 1;
        true
    }

    pub fn current(&self) -> OrientedCandidate {
        OrientedCandidate {
            orientation: self.index,
            theta: self.theta,
            direction: self.direction,
            a: self.boundary.point(self.a),
            side_a: self.a.side,
            b: self.b,
        }
    }

    /// Unit direction of the current orientation.
    pub fn direction(&self) -> Vector2<f64> {
        self.direction
    }

    pub fn angle(&self) -> f64 {
        self.theta
    }

    pub fn orientation_index(&self) -> usize {
        self.index
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn position(&self) -> BoundaryPosition {
        self.a
    }

    /// Last start point of the current orientation.
    pub fn fin(&self) -> BoundaryPosition {
        self.fin
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn orientations(&self) -> Range<usize> {
        self.orientations.clone()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Candidates emitted so far, including the current one.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// `round(a + v·(W+H))`.
    pub fn endpoint_fast(&self) -> GridPoint {
        let dim = self.boundary.dimension();
        let reach = (dim.width() + dim.height()) as f64;
        self.boundary.point(self.a).project(&self.direction, reach)
    }

    /// Ray-march from `a` along `v` to the boundary.
    ///
    /// Returns the last rounded point inside the grid and the side the ray
    /// leaves through (`Top`/`Bottom` win at corners). When `a` already faces
    /// out of the grid the returned point is `a` itself.
    pub fn endpoint_exact(&self) -> (GridPoint, Side) {
        let dim = self.boundary.dimension();
        let start = self.boundary.point(self.a);
        let mut p = start.to_point2();
        let mut last = start;
        let mut rounded = start;
        // A unit step covers the diagonal well within W + H steps.
        for _ in 0..dim.width() + dim.height() + 2 {
            p += self.direction;
            rounded = GridPoint::round(&p);
            if !self.boundary.contains(rounded) {
                break;
            }
            last = rounded;
        }
        let side = self.boundary.exit_side(rounded).unwrap_or(self.a.side);
        (self.boundary.clamp(last), side)
    }

    /// Current start point paired with its exact boundary endpoint.
    pub fn exact_candidate(&self) -> SegmentCandidate {
        let (b, side_b) = self.endpoint_exact();
        SegmentCandidate {
            a: self.boundary.point(self.a),
            b,
            side_a: self.a.side,
            side_b,
        }
    }
}

impl Iterator for AngleSweep {
    type Item = OrientedCandidate;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return (!self.exhausted).then(|| self.current());
        }
        self.advance().then(|| self.current())
    }
}
