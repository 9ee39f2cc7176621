use crate::billing::types::{Category, CategoryCounts};
use crate::debug_println;
use crate::utils::coerce::{coerce_non_negative_number, parse_int_prefix};

/// Key/category pairs addressable from an auto-populate code, in encoding order
pub const CODE_KEYS: &[(&str, Category)] = &[
    ("vms", Category::VmsNoContainers),
    ("caas", Category::Caas),
    ("sls", Category::Serverless),
    ("img", Category::ContainerImages),
    ("bkt", Category::CloudBuckets),
    ("paas", Category::PaasDb),
    ("dbaas_gb", Category::Dbaas),
];

/// Fields with no code key; applying a code always zeroes them
pub const UNADDRESSABLE: [Category; 3] = [
    Category::VmsWithContainers,
    Category::SaasUsers,
    Category::UnmanagedServices,
];

const GB_PER_TB: f64 = 1024.0;

/// Gigabytes to terabytes, rounded to two decimal places
pub fn gb_to_tb(gb: f64) -> f64 {
    ((gb / GB_PER_TB) * 100.0).round() / 100.0
}

fn category_for_key(key: &str) -> Option<Category> {
    CODE_KEYS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, category)| *category)
}

/// Apply an auto-populate code such as `vms:5,caas:30,dbaas_gb:2048` on top
/// of `base`.
///
/// A blank code leaves `base` untouched. Otherwise the unaddressable fields
/// are reset and each `key:value` token overwrites its field, last one wins.
/// Unknown keys are skipped and unparsable values are stored as `NaN`, to be
/// zeroed by the calculator.
pub fn parse_code(code: &str, base: &CategoryCounts) -> CategoryCounts {
    let code = code.trim();
    let mut counts = *base;

    if code.is_empty() {
        return counts;
    }

    for category in UNADDRESSABLE {
        counts.set(category, 0.0);
    }

    for token in code.split(',') {
        let mut parts = token.split(':');
        let key = parts.next().unwrap_or_default().trim();
        let value = parts.next().map(parse_int_prefix).unwrap_or(f64::NAN);

        match category_for_key(key) {
            Some(Category::Dbaas) => counts.dbaas = gb_to_tb(value),
            Some(category) => counts.set(category, value),
            None => debug_println!("ignoring unknown code key {:?}", key),
        }
    }

    counts
}

/// Render the addressable fields of `counts` as an auto-populate code.
///
/// Counts are written as whole numbers and DBaaS storage goes back to
/// gigabytes, so the output always parses with [`parse_code`].
pub fn encode_code(counts: &CategoryCounts) -> String {
    CODE_KEYS
        .iter()
        .map(|(key, category)| {
            let value = coerce_non_negative_number(counts.get(*category));
            let value = match category {
                Category::Dbaas => (value * GB_PER_TB).round(),
                _ => value.round(),
            };
            format!("{}:{}", key, value as u64)
        })
        .collect::<Vec<_>>()
        .join(",")
}
