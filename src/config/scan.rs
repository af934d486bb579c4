use crate::boundary::{BoundaryError, Dimension};
use crate::segments::SweepOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ScanToolConfig {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub sweep: SweepConfig,
    pub output: ScanOutputConfig,
}

impl ScanToolConfig {
    pub fn dimension(&self) -> Result<Dimension, BoundaryError> {
        Dimension::new(self.width, self.height)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Angular step between orientations, in degrees.
    pub angle_step_deg: f64,
    /// Ray-march every sweep candidate to the boundary and tally exit sides.
    pub exact_endpoints: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            angle_step_deg: 5.0,
            exact_endpoints: false,
        }
    }
}

impl SweepConfig {
    pub fn to_sweep_options(&self) -> SweepOptions {
        SweepOptions::from_degrees(self.angle_step_deg)
    }
}

#[derive(Debug, Deserialize)]
pub struct ScanOutputConfig {
    #[serde(rename = "summary_json")]
    pub summary_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<ScanToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<ScanToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg = parse_config(
            r#"{
                "width": 163,
                "height": 123,
                "sweep": { "angle_step_deg": 30.0, "exact_endpoints": true },
                "output": { "summary_json": "out/scan.json" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.dimension().unwrap().perimeter(), 568);
        assert!(cfg.sweep.exact_endpoints);
        assert_eq!(cfg.sweep.to_sweep_options().orientation_count(), 12);
        assert_eq!(cfg.output.summary_json, PathBuf::from("out/scan.json"));
    }

    #[test]
    fn sweep_section_defaults() {
        let cfg = parse_config(
            r#"{ "width": 8, "height": 2, "output": { "summary_json": "s.json" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.sweep.angle_step_deg, 5.0);
        assert!(!cfg.sweep.exact_endpoints);
    }

    #[test]
    fn degenerate_dimension_surfaces_after_parse() {
        let cfg = parse_config(r#"{ "width": 1, "height": 9, "output": { "summary_json": "s.json" } }"#)
            .unwrap();
        assert!(cfg.dimension().is_err());
    }
}
