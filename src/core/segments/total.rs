use super::{Segment, SegmentData, SegmentId};
use crate::core::report::WorkloadReport;

/// The headline figure. Always rendered, even for an all-zero scenario.
pub struct TotalSegment;

impl Segment for TotalSegment {
    fn collect(&self, report: &WorkloadReport) -> Option<SegmentData> {
        Some(SegmentData {
            primary: format!("Total workloads: {}", report.total),
            secondary: String::new(),
        })
    }

    fn id(&self) -> SegmentId {
        SegmentId::Total
    }
}
