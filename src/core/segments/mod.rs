pub mod breakdown;
pub mod scan_quota;
pub mod total;

use crate::core::report::WorkloadReport;

/// Rendered output of one report section
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentData {
    /// Main line(s) of the section
    pub primary: String,
    /// Optional trailing note, rendered dimmed next to `primary`
    pub secondary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentId {
    Breakdown,
    ScanQuota,
    Total,
}

pub trait Segment {
    fn collect(&self, report: &WorkloadReport) -> Option<SegmentData>;
    fn id(&self) -> SegmentId;
}

/// Format a count without a trailing `.00` for whole numbers
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

// Re-export all segment types
pub use breakdown::BreakdownSegment;
pub use scan_quota::ScanQuotaSegment;
pub use total::TotalSegment;
