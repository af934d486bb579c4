//! Orientation-parallel sweep.
//!
//! Every orientation is scanned by its own [`AngleSweep`] restricted to that
//! orientation, so workers share nothing but the (copied) boundary.

use super::candidate::OrientedCandidate;
use super::options::SweepOptions;
use super::sweep::{AngleSweep, SweepError};
use crate::boundary::Boundary;
use rayon::prelude::*;

/// Candidates grouped by orientation index, in sweep order.
pub fn scan_orientations_par(
    boundary: Boundary,
    options: SweepOptions,
) -> Result<Vec<Vec<OrientedCandidate>>, SweepError> {
    let sweep = AngleSweep::from_boundary(boundary, options)?;
    let orientations = sweep.orientations();
    Ok(orientations
        .into_par_iter()
        .map(|k| sweep.clone().with_orientations(k..k + 1).collect())
        .collect())
}
