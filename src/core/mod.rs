pub mod report;
pub mod segments;

pub use report::{ReportGenerator, WorkloadReport};
