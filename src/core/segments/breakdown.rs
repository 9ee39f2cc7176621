use super::{format_quantity, Segment, SegmentData, SegmentId};
use crate::config::OutputConfig;
use crate::core::report::WorkloadReport;

const LABEL_WIDTH: usize = 28;

/// Per-category table: count, billable unit and workloads charged
pub struct BreakdownSegment {
    hide_zero: bool,
}

impl BreakdownSegment {
    pub fn new(output: &OutputConfig) -> Self {
        Self {
            hide_zero: output.hide_zero,
        }
    }
}

impl Segment for BreakdownSegment {
    fn collect(&self, report: &WorkloadReport) -> Option<SegmentData> {
        let rows: Vec<String> = report
            .breakdown
            .categories
            .iter()
            .filter(|line| !(self.hide_zero && line.workloads == 0))
            .map(|line| {
                format!(
                    "{:<width$} {:>10} {:>6} {:>10}",
                    line.category.label(),
                    format_quantity(line.count),
                    line.billable_unit,
                    line.workloads,
                    width = LABEL_WIDTH
                )
            })
            .collect();

        if rows.is_empty() {
            return None;
        }

        let header = format!(
            "{:<width$} {:>10} {:>6} {:>10}",
            "Category",
            "Count",
            "Unit",
            "Workloads",
            width = LABEL_WIDTH
        );

        Some(SegmentData {
            primary: std::iter::once(header)
                .chain(rows)
                .collect::<Vec<_>>()
                .join("\n"),
            secondary: String::new(),
        })
    }

    fn id(&self) -> SegmentId {
        SegmentId::Breakdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::{Category, CategoryCounts};
    use crate::config::Config;

    fn report_for(counts: CategoryCounts) -> WorkloadReport {
        WorkloadReport::new(&counts)
    }

    #[test]
    fn test_lists_every_category() {
        let segment = BreakdownSegment::new(&Config::default().output);
        let data = segment.collect(&report_for(CategoryCounts::default())).unwrap();
        // Header plus one row per category
        assert_eq!(data.primary.lines().count(), 1 + Category::ALL.len());
        assert!(data.primary.contains("DBaaS stored (TB)"));
    }

    #[test]
    fn test_hide_zero_rows() {
        let mut output = Config::default().output;
        output.hide_zero = true;
        let segment = BreakdownSegment::new(&output);

        let counts = CategoryCounts::default().with(Category::Dbaas, 0.5);
        let data = segment.collect(&report_for(counts)).unwrap();
        let lines: Vec<&str> = data.primary.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("DBaaS stored (TB)"));
        assert!(lines[1].contains("0.50"));

        assert!(segment.collect(&report_for(CategoryCounts::default())).is_none());
    }
}
