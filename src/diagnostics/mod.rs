//! Serializable summaries of enumeration runs, used by the scan tool.

pub mod scan;
pub mod timing;

pub use scan::{run_scan, ExitSideCounts, OrientationSummary, ScanSummary};
pub use timing::{StageTiming, TimingBreakdown};
