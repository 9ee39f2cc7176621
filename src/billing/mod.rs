pub mod calculator;
pub mod code;
pub mod types;

pub use calculator::{compute_breakdown, compute_total_workload, CategoryWorkload, WorkloadBreakdown};
pub use code::{encode_code, parse_code};
pub use types::{Category, CategoryCounts, BILLABLE_UNITS};
