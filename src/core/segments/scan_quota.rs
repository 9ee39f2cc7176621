use super::{format_quantity, Segment, SegmentData, SegmentId};
use crate::billing::types::FREE_SCANS_PER_WORKLOAD;
use crate::core::report::WorkloadReport;

/// Explains how much of the container-image count the free quota absorbed
pub struct ScanQuotaSegment;

impl Segment for ScanQuotaSegment {
    fn collect(&self, report: &WorkloadReport) -> Option<SegmentData> {
        let breakdown = &report.breakdown;
        if breakdown.free_scan_quota == 0.0 && breakdown.billable_scans == 0.0 {
            return None;
        }

        Some(SegmentData {
            primary: format!(
                "Free image scans: {} ({} deployed workloads x {})",
                format_quantity(breakdown.free_scan_quota),
                format_quantity(breakdown.deployed_workloads),
                FREE_SCANS_PER_WORKLOAD
            ),
            secondary: format!("{} billable", format_quantity(breakdown.billable_scans)),
        })
    }

    fn id(&self) -> SegmentId {
        SegmentId::ScanQuota
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::{Category, CategoryCounts};

    #[test]
    fn test_quota_line() {
        let counts = CategoryCounts::default()
            .with(Category::VmsNoContainers, 5.0)
            .with(Category::ContainerImages, 51.0);
        let data = ScanQuotaSegment.collect(&WorkloadReport::new(&counts)).unwrap();
        assert_eq!(
            data.primary,
            "Free image scans: 50 (5 deployed workloads x 10)"
        );
        assert_eq!(data.secondary, "1 billable");
    }

    #[test]
    fn test_no_quota_no_line() {
        let counts = CategoryCounts::default().with(Category::SaasUsers, 10.0);
        assert!(ScanQuotaSegment.collect(&WorkloadReport::new(&counts)).is_none());
    }
}
