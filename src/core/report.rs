use super::segments::{BreakdownSegment, ScanQuotaSegment, Segment, SegmentData, SegmentId, TotalSegment};
use crate::billing::{compute_breakdown, encode_code, CategoryCounts, WorkloadBreakdown};
use crate::config::{Config, OutputFormat};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything known about one sizing run, as emitted in JSON mode
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadReport {
    pub total: u64,
    /// Auto-populate code reproducing this scenario
    pub code: String,
    pub counts: CategoryCounts,
    pub breakdown: WorkloadBreakdown,
    pub generated_at: DateTime<Utc>,
}

impl WorkloadReport {
    pub fn new(counts: &CategoryCounts) -> Self {
        let breakdown = compute_breakdown(counts);
        Self {
            total: breakdown.total,
            code: encode_code(counts),
            counts: *counts,
            breakdown,
            generated_at: Utc::now(),
        }
    }
}

pub struct ReportGenerator {
    config: Config,
}

impl ReportGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn generate(&self, report: &WorkloadReport) -> Result<String, Box<dyn std::error::Error>> {
        match self.config.output.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Text => Ok(self.render_text(report)),
        }
    }

    fn segments(&self) -> Vec<Box<dyn Segment>> {
        let mut segments: Vec<Box<dyn Segment>> = Vec::new();
        if self.config.output.breakdown {
            segments.push(Box::new(BreakdownSegment::new(&self.config.output)));
            segments.push(Box::new(ScanQuotaSegment));
        }
        segments.push(Box::new(TotalSegment));
        segments
    }

    fn render_text(&self, report: &WorkloadReport) -> String {
        let blocks: Vec<String> = self
            .segments()
            .iter()
            .filter_map(|segment| {
                segment
                    .collect(report)
                    .map(|data| self.render_segment(segment.id(), &data))
            })
            .collect();

        blocks.join("\n\n")
    }

    fn render_segment(&self, id: SegmentId, data: &SegmentData) -> String {
        let primary = if id == SegmentId::Total {
            self.emphasize(&data.primary)
        } else {
            data.primary.clone()
        };

        if data.secondary.is_empty() {
            primary
        } else {
            format!("{} · {}", primary, data.secondary)
        }
    }

    #[cfg(feature = "color")]
    fn emphasize(&self, text: &str) -> String {
        if self.config.output.color {
            ansi_term::Style::new().bold().paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    #[cfg(not(feature = "color"))]
    fn emphasize(&self, text: &str) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::{parse_code, Category};

    fn plain_config() -> Config {
        let mut config = Config::default();
        config.output.color = false;
        config
    }

    #[test]
    fn test_all_zero_still_shows_total() {
        let mut config = plain_config();
        config.output.breakdown = false;
        let generator = ReportGenerator::new(config);

        let output = generator
            .generate(&WorkloadReport::new(&CategoryCounts::default()))
            .unwrap();
        assert_eq!(output, "Total workloads: 0");
    }

    #[test]
    fn test_text_report_with_breakdown() {
        let counts = parse_code(
            "vms:5,caas:30,sls:25,img:10,bkt:10,paas:2,dbaas_gb:1024",
            &CategoryCounts::default(),
        );
        let generator = ReportGenerator::new(plain_config());
        let output = generator.generate(&WorkloadReport::new(&counts)).unwrap();

        assert!(output.starts_with("Category"));
        assert!(output.contains("Free image scans: 80 (8 deployed workloads x 10) · 0 billable"));
        assert!(output.ends_with("Total workloads: 12"));
    }

    #[test]
    fn test_json_report() {
        let counts = CategoryCounts::default()
            .with(Category::VmsNoContainers, 5.0)
            .with(Category::ContainerImages, 51.0);
        let mut config = plain_config();
        config.output.format = OutputFormat::Json;
        let output = ReportGenerator::new(config)
            .generate(&WorkloadReport::new(&counts))
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["total"], 6);
        assert_eq!(value["code"], "vms:5,caas:0,sls:0,img:51,bkt:0,paas:0,dbaas_gb:0");
        assert_eq!(value["breakdown"]["freeScanQuota"], 50.0);
        assert_eq!(value["breakdown"]["categories"][4]["category"], "containerImages");
        assert_eq!(value["breakdown"]["categories"][4]["workloads"], 1);
        assert!(value["generatedAt"].is_string());
    }

    #[cfg(feature = "color")]
    #[test]
    fn test_color_only_touches_total() {
        let mut config = Config::default();
        config.output.color = true;
        config.output.breakdown = false;
        let output = ReportGenerator::new(config)
            .generate(&WorkloadReport::new(&CategoryCounts::default()))
            .unwrap();
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("Total workloads: 0"));
    }
}
