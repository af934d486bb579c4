use crate::angle::{orientation_count, MIN_ANGLE_STEP};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Options of the orientation sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepOptions {
    /// Angular step between visited orientations, in radians.
    pub angle_step: f64,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            // 5°, 72 orientations per turn.
            angle_step: TAU / 72.0,
        }
    }
}

impl SweepOptions {
    pub fn new(angle_step: f64) -> Self {
        Self { angle_step }
    }

    pub fn from_degrees(step_deg: f64) -> Self {
        Self::new(step_deg.to_radians())
    }

    /// Split the full turn into `n` orientations.
    pub fn with_orientations(n: usize) -> Self {
        Self::new(TAU / n.max(1) as f64)
    }

    pub fn is_valid(&self) -> bool {
        self.angle_step.is_finite() && self.angle_step >= MIN_ANGLE_STEP
    }

    /// Orientations a full sweep visits.
    pub fn orientation_count(&self) -> usize {
        orientation_count(self.angle_step)
    }
}
