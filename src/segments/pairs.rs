//! Exhaustive enumeration of boundary point pairs on different sides.
//!
//! The outer walk moves `a` once around the perimeter starting at the
//! `(0, 0)` corner (offset 0 of `Bottom`), so one lap visits the sides in the
//! order `Bottom, Right, Top, Left`. For each `a`, the inner walk moves `b`
//! from the first point of the side following `a`'s side to the end of that
//! lap. Because `b` never runs past the lap end, each unordered pair of points
//! on different sides is visited exactly once.
//!
//! Pairs lying along a single grid line are kept only when they span the whole
//! grid along that line (a full edge from corner to corner, or a full interior
//! row/column); partial runs along an image edge are skipped.

use super::candidate::SegmentCandidate;
use crate::boundary::{Boundary, BoundaryError, BoundaryPosition, Dimension, Side};
use crate::geometry::GridPoint;
use log::debug;

/// Where the outer walk starts and ends: the `(0, 0)` corner.
const LAP_ORIGIN: BoundaryPosition = BoundaryPosition::start_of(Side::Bottom);

/// Snapshot of the pair walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairState {
    pub a: BoundaryPosition,
    pub b: BoundaryPosition,
}

impl PairState {
    /// `a = (0, 0)` on `Bottom`, `b = (W-1, 0)`, the first point of `Right`.
    pub const fn first() -> Self {
        Self {
            a: LAP_ORIGIN,
            b: BoundaryPosition::start_of(Side::Right),
        }
    }

    pub fn candidate(&self, boundary: &Boundary) -> SegmentCandidate {
        SegmentCandidate {
            a: boundary.point(self.a),
            b: boundary.point(self.b),
            side_a: self.a.side,
            side_b: self.b.side,
        }
    }

    /// Next admissible state, or `None` once `a` has completed its lap.
    pub fn step(&self, boundary: &Boundary) -> Option<PairState> {
        self.step_counting(boundary).0
    }

    /// Like [`PairState::step`], also reporting how many inadmissible pairs
    /// were skipped on the way.
    pub(crate) fn step_counting(&self, boundary: &Boundary) -> (Option<PairState>, usize) {
        let dim = boundary.dimension();
        let perimeter = boundary.perimeter();
        let budget = perimeter * perimeter + perimeter;
        let (mut a, mut b) = (self.a, self.b);
        let mut skipped = 0;

        for _ in 0..budget {
            let next_b = boundary.next(b).position;
            if next_b != LAP_ORIGIN {
                b = next_b;
            } else {
                match advance_outer(boundary, a) {
                    Some((next_a, first_b)) => {
                        a = next_a;
                        b = first_b;
                    }
                    None => return (None, skipped),
                }
            }
            if is_admissible(dim, boundary.point(a), boundary.point(b)) {
                return (Some(PairState { a, b }), skipped);
            }
            skipped += 1;
        }
        (None, skipped)
    }
}

/// First `b` for a given `a`: offset 0 of the side after `a`'s, unless that
/// side lies past the end of the lap.
fn inner_start(a: BoundaryPosition) -> Option<BoundaryPosition> {
    let side = a.side.next();
    (side != LAP_ORIGIN.side).then(|| BoundaryPosition::start_of(side))
}

/// Move `a` to the next position that still has a `b` ahead of it.
fn advance_outer(
    boundary: &Boundary,
    mut a: BoundaryPosition,
) -> Option<(BoundaryPosition, BoundaryPosition)> {
    loop {
        a = boundary.next(a).position;
        if a == LAP_ORIGIN {
            return None;
        }
        if let Some(b) = inner_start(a) {
            return Some((a, b));
        }
    }
}

/// True unless `a` and `b` coincide or run along one grid line without
/// spanning the whole grid.
pub fn is_admissible(dim: Dimension, a: GridPoint, b: GridPoint) -> bool {
    if a == b {
        return false;
    }
    if a.x == b.x {
        return spans(a.y, b.y, dim.h());
    }
    if a.y == b.y {
        return spans(a.x, b.x, dim.w());
    }
    true
}

#[inline]
fn spans(u: i32, v: i32, extent: i32) -> bool {
    u.min(v) == 0 && u.max(v) == extent - 1
}

/// Number of pairs a full traversal emits for `dim`.
///
/// All pairs of perimeter points, minus pairs on the same side, minus the
/// `2(W-2) + 2(H-2)` partial runs along an image edge.
pub fn pair_count(dim: Dimension) -> usize {
    let choose2 = |n: usize| n * n.saturating_sub(1) / 2;
    let (w, h) = (dim.width(), dim.height());
    choose2(dim.perimeter())
        - 2 * choose2(w - 1)
        - 2 * choose2(h - 1)
        - 2 * (w - 2)
        - 2 * (h - 2)
}

/// Cursor over every admissible boundary pair of a grid.
///
/// The cursor starts on [`PairState::first`]. `advance` moves to the next pair
/// and returns `false` once the traversal is exhausted; after that it keeps
/// returning `false` and `current` keeps reporting the last emitted pair.
///
/// The `Iterator` impl yields the current pair first and then every advanced
/// one, so a fresh enumerator iterates the full traversal.
#[derive(Clone, Debug)]
pub struct PairEnumerator {
    boundary: Boundary,
    state: PairState,
    started: bool,
    exhausted: bool,
    emitted: usize,
    skipped: usize,
}

impl PairEnumerator {
    pub fn new(dim: Dimension) -> Self {
        Self::from_boundary(Boundary::new(dim))
    }

    pub fn with_size(width: usize, height: usize) -> Result<Self, BoundaryError> {
        Dimension::new(width, height).map(Self::new)
    }

    pub fn from_boundary(boundary: Boundary) -> Self {
        Self {
            boundary,
            state: PairState::first(),
            started: false,
            exhausted: false,
            emitted: 1,
            skipped: 0,
        }
    }

    /// Reset to the canonical first pair.
    pub fn first(&mut self) {
        *self = Self::from_boundary(self.boundary);
    }

    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        let (next, skipped) = self.state.step_counting(&self.boundary);
        self.skipped += skipped;
        match next {
            Some(state) => {
                self.state = state;
                self.emitted += 1;
                true
            }
            None => {
                self.exhausted = true;
                debug!(
                    "PairEnumerator: {} exhausted after {} pairs ({} skipped)",
                    self.boundary.dimension(),
                    self.emitted,
                    self.skipped
                );
                false
            }
        }
    }

    pub fn current(&self) -> SegmentCandidate {
        self.state.candidate(&self.boundary)
    }

    pub fn state(&self) -> PairState {
        self.state
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Pairs emitted so far, including the first one.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Inadmissible pairs skipped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Iterator for PairEnumerator {
    type Item = SegmentCandidate;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.current());
        }
        self.advance().then(|| self.current())
    }
}
