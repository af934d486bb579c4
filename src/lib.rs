#![doc = include_str!("../README.md")]

// Core enumeration surface
pub mod boundary;
pub mod geometry;
pub mod segments;

// Supporting modules for tools and reporting.
pub mod angle;
pub mod config;
pub mod diagnostics;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::boundary::{Boundary, BoundaryError, BoundaryPosition, Dimension, Side};
pub use crate::geometry::GridPoint;
pub use crate::segments::{
    AngleSweep, OrientedCandidate, PairEnumerator, SegmentCandidate, SweepError, SweepOptions,
};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use border_segments::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dim = Dimension::new(64, 48)?;
/// let pairs = PairEnumerator::new(dim).count();
/// let sweep = AngleSweep::new(dim, SweepOptions::with_orientations(36))?;
/// println!("pairs={} sweep={}", pairs, sweep.count());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::boundary::{Boundary, Dimension, Side};
    pub use crate::segments::{AngleSweep, PairEnumerator, SweepOptions};
}
