use crate::utils::coerce::lenient_number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource categories collected by the sizing form, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    VmsNoContainers,
    VmsWithContainers,
    Caas,
    Serverless,
    ContainerImages,
    CloudBuckets,
    PaasDb,
    Dbaas,
    SaasUsers,
    UnmanagedServices,
}

/// Raw instances per workload for every category billed in bundles.
///
/// VM categories are absent: one VM is always one workload.
pub const BILLABLE_UNITS: &[(Category, u32)] = &[
    (Category::Caas, 10),
    (Category::Serverless, 25),
    (Category::ContainerImages, 10),
    (Category::CloudBuckets, 10),
    (Category::PaasDb, 2),
    (Category::Dbaas, 1),
    (Category::SaasUsers, 10),
    (Category::UnmanagedServices, 4),
];

/// Free container-image scans granted per deployed workload
pub const FREE_SCANS_PER_WORKLOAD: u32 = 10;

impl Category {
    pub const ALL: [Category; 10] = [
        Category::VmsNoContainers,
        Category::VmsWithContainers,
        Category::Caas,
        Category::Serverless,
        Category::ContainerImages,
        Category::CloudBuckets,
        Category::PaasDb,
        Category::Dbaas,
        Category::SaasUsers,
        Category::UnmanagedServices,
    ];

    /// Number of raw instances that make up one workload
    pub fn billable_unit(self) -> u32 {
        BILLABLE_UNITS
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, unit)| *unit)
            .unwrap_or(1)
    }

    /// Human-readable label used in reports
    pub fn label(self) -> &'static str {
        match self {
            Category::VmsNoContainers => "VMs (no containers)",
            Category::VmsWithContainers => "VMs (running containers)",
            Category::Caas => "Managed containers (CaaS)",
            Category::Serverless => "Serverless functions",
            Category::ContainerImages => "Container images",
            Category::CloudBuckets => "Cloud buckets",
            Category::PaasDb => "Managed databases (PaaS)",
            Category::Dbaas => "DBaaS stored (TB)",
            Category::SaasUsers => "SaaS users",
            Category::UnmanagedServices => "Unmanaged assets",
        }
    }

    /// Kebab-case name, matching the CLI option for the category
    pub fn option_name(self) -> &'static str {
        match self {
            Category::VmsNoContainers => "vms-no-containers",
            Category::VmsWithContainers => "vms-with-containers",
            Category::Caas => "caas",
            Category::Serverless => "serverless",
            Category::ContainerImages => "container-images",
            Category::CloudBuckets => "cloud-buckets",
            Category::PaasDb => "paas-db",
            Category::Dbaas => "dbaas",
            Category::SaasUsers => "saas-users",
            Category::UnmanagedServices => "unmanaged-services",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw per-category counts as entered on the form.
///
/// Values are kept as entered: they may be fractional, negative or `NaN`.
/// The calculator zeroes anything invalid when it reads a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCounts {
    #[serde(default, deserialize_with = "lenient_number")]
    pub vms_no_containers: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub vms_with_containers: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub caas: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub serverless: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub container_images: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub cloud_buckets: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub paas_db: f64,
    /// Stored data in terabytes
    #[serde(default, deserialize_with = "lenient_number")]
    pub dbaas: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub saas_users: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub unmanaged_services: f64,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::VmsNoContainers => self.vms_no_containers,
            Category::VmsWithContainers => self.vms_with_containers,
            Category::Caas => self.caas,
            Category::Serverless => self.serverless,
            Category::ContainerImages => self.container_images,
            Category::CloudBuckets => self.cloud_buckets,
            Category::PaasDb => self.paas_db,
            Category::Dbaas => self.dbaas,
            Category::SaasUsers => self.saas_users,
            Category::UnmanagedServices => self.unmanaged_services,
        }
    }

    pub fn set(&mut self, category: Category, value: f64) {
        let field = match category {
            Category::VmsNoContainers => &mut self.vms_no_containers,
            Category::VmsWithContainers => &mut self.vms_with_containers,
            Category::Caas => &mut self.caas,
            Category::Serverless => &mut self.serverless,
            Category::ContainerImages => &mut self.container_images,
            Category::CloudBuckets => &mut self.cloud_buckets,
            Category::PaasDb => &mut self.paas_db,
            Category::Dbaas => &mut self.dbaas,
            Category::SaasUsers => &mut self.saas_users,
            Category::UnmanagedServices => &mut self.unmanaged_services,
        };
        *field = value;
    }

    /// Builder-style setter, handy for assembling scenarios
    pub fn with(mut self, category: Category, value: f64) -> Self {
        self.set(category, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billable_units() {
        assert_eq!(Category::Caas.billable_unit(), 10);
        assert_eq!(Category::Serverless.billable_unit(), 25);
        assert_eq!(Category::ContainerImages.billable_unit(), 10);
        assert_eq!(Category::CloudBuckets.billable_unit(), 10);
        assert_eq!(Category::PaasDb.billable_unit(), 2);
        assert_eq!(Category::Dbaas.billable_unit(), 1);
        assert_eq!(Category::SaasUsers.billable_unit(), 10);
        assert_eq!(Category::UnmanagedServices.billable_unit(), 4);
        assert_eq!(Category::VmsNoContainers.billable_unit(), 1);
        assert_eq!(Category::VmsWithContainers.billable_unit(), 1);
    }

    #[test]
    fn test_get_set_cover_every_category() {
        let mut counts = CategoryCounts::default();
        for (i, category) in Category::ALL.iter().enumerate() {
            counts.set(*category, i as f64 + 1.0);
        }
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(counts.get(*category), i as f64 + 1.0);
        }
    }

    #[test]
    fn test_deserialize_form_record() {
        let json = r#"{
            "vmsNoContainers": 5,
            "vmsWithContainers": "3",
            "caas": "",
            "dbaas": "0.5",
            "saasUsers": null,
            "unmanagedServices": "lots"
        }"#;
        let counts: CategoryCounts = serde_json::from_str(json).unwrap();

        assert_eq!(counts.vms_no_containers, 5.0);
        assert_eq!(counts.vms_with_containers, 3.0);
        assert!(counts.caas.is_nan());
        assert_eq!(counts.dbaas, 0.5);
        assert!(counts.saas_users.is_nan());
        assert!(counts.unmanaged_services.is_nan());
        // Absent fields default to zero
        assert_eq!(counts.serverless, 0.0);
        assert_eq!(counts.cloud_buckets, 0.0);
    }

    #[test]
    fn test_serialize_uses_form_field_names() {
        let counts = CategoryCounts::default().with(Category::PaasDb, 2.0);
        let value = serde_json::to_value(counts).unwrap();
        assert_eq!(value["paasDb"], 2.0);
        assert_eq!(value["vmsNoContainers"], 0.0);
    }
}
