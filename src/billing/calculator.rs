use crate::billing::types::{Category, CategoryCounts, FREE_SCANS_PER_WORKLOAD};
use crate::debug_println;
use crate::utils::coerce::coerce_non_negative_number;
use serde::Serialize;

/// Workloads charged for a single category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWorkload {
    pub category: Category,
    /// Count after coercion (invalid input reads as 0)
    pub count: f64,
    pub billable_unit: u32,
    /// Quantity actually divided by the billable unit. Differs from `count`
    /// only for container images, where the free scan quota is deducted first.
    pub billed_quantity: f64,
    pub workloads: u64,
}

/// Full result of a sizing computation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadBreakdown {
    pub categories: Vec<CategoryWorkload>,
    pub deployed_workloads: f64,
    pub free_scan_quota: f64,
    pub billable_scans: f64,
    pub total: u64,
}

impl WorkloadBreakdown {
    /// Workloads charged for one category
    pub fn workloads_for(&self, category: Category) -> u64 {
        self.categories
            .iter()
            .find(|line| line.category == category)
            .map(|line| line.workloads)
            .unwrap_or(0)
    }
}

/// Coerce every field of a raw record to a usable non-negative count
pub fn coerce_counts(counts: &CategoryCounts) -> CategoryCounts {
    let mut coerced = CategoryCounts::default();
    for category in Category::ALL {
        let raw = counts.get(category);
        let value = coerce_non_negative_number(raw);
        if value != raw {
            debug_println!("coerced {} from {} to {}", category.option_name(), raw, value);
        }
        coerced.set(category, value);
    }
    coerced
}

/// Ceiling division of a non-negative quantity by a billable unit
pub fn ceil_div(quantity: f64, unit: u32) -> u64 {
    if quantity <= 0.0 || unit == 0 {
        return 0;
    }
    (quantity / unit as f64).ceil() as u64
}

/// Run the sizing pipeline and keep every intermediate figure
pub fn compute_breakdown(counts: &CategoryCounts) -> WorkloadBreakdown {
    let counts = coerce_counts(counts);

    // Free scans are earned by VMs and by billed CaaS workloads
    let caas_workloads = ceil_div(counts.caas, Category::Caas.billable_unit());
    let deployed_workloads =
        counts.vms_no_containers + counts.vms_with_containers + caas_workloads as f64;
    let free_scan_quota = deployed_workloads * FREE_SCANS_PER_WORKLOAD as f64;
    let billable_scans = (counts.container_images - free_scan_quota).max(0.0);

    debug_println!(
        "deployed workloads: {}, free scan quota: {}, billable scans: {}",
        deployed_workloads,
        free_scan_quota,
        billable_scans
    );

    let categories: Vec<CategoryWorkload> = Category::ALL
        .iter()
        .map(|&category| {
            let count = counts.get(category);
            let billed_quantity = match category {
                Category::ContainerImages => billable_scans,
                _ => count,
            };
            let billable_unit = category.billable_unit();
            CategoryWorkload {
                category,
                count,
                billable_unit,
                billed_quantity,
                workloads: ceil_div(billed_quantity, billable_unit),
            }
        })
        .collect();

    let total = categories
        .iter()
        .fold(0u64, |acc, line| acc.saturating_add(line.workloads));

    debug_println!("total workloads: {}", total);

    WorkloadBreakdown {
        categories,
        deployed_workloads,
        free_scan_quota,
        billable_scans,
        total,
    }
}

/// Total workload count for a record of category counts
pub fn compute_total_workload(counts: &CategoryCounts) -> u64 {
    compute_breakdown(counts).total
}
