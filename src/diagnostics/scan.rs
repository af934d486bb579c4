use super::timing::TimingBreakdown;
use crate::boundary::{Dimension, Side};
use crate::segments::{AngleSweep, Heading, PairEnumerator, SweepError, SweepOptions};
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Number of exact endpoints leaving through each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitSideCounts {
    pub right: usize,
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
}

impl ExitSideCounts {
    pub fn record(&mut self, side: Side) {
        match side {
            Side::Right => self.right += 1,
            Side::Top => self.top += 1,
            Side::Left => self.left += 1,
            Side::Bottom => self.bottom += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.right + self.top + self.left + self.bottom
    }
}

/// One orientation of the sweep.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrientationSummary {
    pub index: usize,
    pub angle_deg: f64,
    pub heading: Heading,
    pub start_side: Side,
    pub candidates: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_sides: Option<ExitSideCounts>,
}

/// Result of running both enumerators over one grid.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub dimension: Dimension,
    pub perimeter: usize,
    pub pairs: usize,
    pub skipped_pairs: usize,
    pub angle_step_deg: f64,
    pub sweep_candidates: usize,
    pub orientations: Vec<OrientationSummary>,
    pub timing: TimingBreakdown,
}

/// Drain both enumerators for `dim` and summarize what they produced.
///
/// With `exact_endpoints` every sweep candidate is also ray-marched to the
/// boundary and the exit sides are tallied per orientation.
pub fn run_scan(
    dim: Dimension,
    options: SweepOptions,
    exact_endpoints: bool,
) -> Result<ScanSummary, SweepError> {
    let mut timing = TimingBreakdown::default();

    let t0 = Instant::now();
    let mut pairs = PairEnumerator::new(dim);
    while pairs.advance() {}
    timing.push("pairs", t0.elapsed().as_secs_f64() * 1000.0);

    let t1 = Instant::now();
    let mut sweep = AngleSweep::new(dim, options)?;
    let mut orientations: Vec<OrientationSummary> = Vec::new();
    if !sweep.is_exhausted() {
        loop {
            let c = sweep.current();
            if orientations.last().map(|o| o.index) != Some(c.orientation) {
                orientations.push(OrientationSummary {
                    index: c.orientation,
                    angle_deg: c.theta.to_degrees(),
                    heading: sweep.heading(),
                    start_side: c.side_a,
                    candidates: 0,
                    exit_sides: exact_endpoints.then(ExitSideCounts::default),
                });
            }
            if let Some(summary) = orientations.last_mut() {
                summary.candidates += 1;
                if let Some(exits) = summary.exit_sides.as_mut() {
                    exits.record(sweep.endpoint_exact().1);
                }
            }
            if !sweep.advance() {
                break;
            }
        }
    }
    timing.push(
        if exact_endpoints { "sweep_exact" } else { "sweep" },
        t1.elapsed().as_secs_f64() * 1000.0,
    );

    let sweep_candidates: usize = orientations.iter().map(|o| o.candidates).sum();
    debug!(
        "run_scan: {} pairs={} skipped={} orientations={} sweep_candidates={} elapsed_ms={:.3}",
        dim,
        pairs.emitted(),
        pairs.skipped(),
        orientations.len(),
        sweep_candidates,
        timing.total_ms
    );

    Ok(ScanSummary {
        dimension: dim,
        perimeter: dim.perimeter(),
        pairs: pairs.emitted(),
        skipped_pairs: pairs.skipped(),
        angle_step_deg: options.angle_step.to_degrees(),
        sweep_candidates,
        orientations,
        timing,
    })
}
