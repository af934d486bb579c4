//! Boundary-anchored candidate segments.
//!
//! Two generators feed the significance test with candidate segments whose
//! endpoints sit on the border of a `W×H` grid:
//!
//! - [`PairEnumerator`]: every unordered pair of boundary points on different
//!   sides, exactly once, skipping pairs that run along an image edge without
//!   spanning it. `pair_count` gives the size of a full traversal in closed
//!   form.
//! - [`AngleSweep`]: candidates grouped by discretized orientation. For each
//!   orientation only the sides a ray with that direction can enter through
//!   are scanned (see [`Heading`]), bounding the output to
//!   O((W+H)·2π/Δθ). Far endpoints come from a cheap projection or from an
//!   exact ray march to the boundary.
//!
//! Both are plain cursors (`first` / `advance` / `current`) that also
//! implement `Iterator`. They own their state and hold no resources; separate
//! instances can run on separate threads, which is what
//! [`scan_orientations_par`] does with one sweep per orientation.
//!
//! Scoring the candidates against image gradients is left to the caller.

mod candidate;
mod heading;
mod options;
mod pairs;
#[cfg(feature = "parallel")]
mod parallel;
mod sweep;

pub use candidate::{OrientedCandidate, SegmentCandidate};
pub use heading::{Heading, ScanPlan, SideSpan};
pub use options::SweepOptions;
pub use pairs::{is_admissible, pair_count, PairEnumerator, PairState};
#[cfg(feature = "parallel")]
pub use parallel::scan_orientations_par;
pub use sweep::{AngleSweep, SweepError};
