use crate::billing::{parse_code, Category, CategoryCounts};
use crate::config::{OutputConfig, OutputFormat};
use crate::utils::coerce::parse_float_prefix;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "wlsize")]
#[command(version, about = "Cloud workload license sizing calculator")]
pub struct Cli {
    /// VMs not running containers (1 VM = 1 workload)
    #[arg(long, value_name = "COUNT")]
    pub vms_no_containers: Option<String>,

    /// VMs running containers (1 VM = 1 workload)
    #[arg(long, value_name = "COUNT")]
    pub vms_with_containers: Option<String>,

    /// Managed containers (10 = 1 workload)
    #[arg(long, value_name = "COUNT")]
    pub caas: Option<String>,

    /// Serverless functions (25 = 1 workload)
    #[arg(long, value_name = "COUNT")]
    pub serverless: Option<String>,

    /// Container images in registries (10 billable scans = 1 workload)
    #[arg(long, value_name = "COUNT")]
    pub container_images: Option<String>,

    /// Cloud storage buckets (10 = 1 workload)
    #[arg(long, value_name = "COUNT")]
    pub cloud_buckets: Option<String>,

    /// Managed cloud databases (2 = 1 workload)
    #[arg(long, value_name = "COUNT")]
    pub paas_db: Option<String>,

    /// DBaaS data stored, in TB (1 TB = 1 workload)
    #[arg(long, value_name = "TB")]
    pub dbaas: Option<String>,

    /// SaaS users (10 = 1 workload)
    #[arg(long, value_name = "COUNT")]
    pub saas_users: Option<String>,

    /// Unmanaged internet-facing assets (4 = 1 workload)
    #[arg(long, value_name = "COUNT")]
    pub unmanaged_services: Option<String>,

    /// Auto-populate code, e.g. vms:5,caas:30,dbaas_gb:2048
    #[arg(long, value_name = "CODE")]
    pub code: Option<String>,

    /// Read a JSON record of category counts from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Output format (text or json)
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Show the per-category breakdown
    #[arg(short = 'b', long, conflicts_with = "no_breakdown")]
    pub breakdown: bool,

    /// Only print the total
    #[arg(long)]
    pub no_breakdown: bool,

    /// Leave categories with zero workloads out of the breakdown
    #[arg(long)]
    pub hide_zero: bool,

    /// Disable ANSI styling
    #[arg(long)]
    pub no_color: bool,

    /// Print the auto-populate code for the scenario and exit
    #[arg(short = 'e', long)]
    pub encode: bool,

    /// Print current configuration
    #[arg(long = "print")]
    pub print: bool,

    /// Initialize config file
    #[arg(long = "init")]
    pub init: bool,

    /// Check configuration
    #[arg(long = "check")]
    pub check: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    fn field(&self, category: Category) -> Option<&String> {
        match category {
            Category::VmsNoContainers => self.vms_no_containers.as_ref(),
            Category::VmsWithContainers => self.vms_with_containers.as_ref(),
            Category::Caas => self.caas.as_ref(),
            Category::Serverless => self.serverless.as_ref(),
            Category::ContainerImages => self.container_images.as_ref(),
            Category::CloudBuckets => self.cloud_buckets.as_ref(),
            Category::PaasDb => self.paas_db.as_ref(),
            Category::Dbaas => self.dbaas.as_ref(),
            Category::SaasUsers => self.saas_users.as_ref(),
            Category::UnmanagedServices => self.unmanaged_services.as_ref(),
        }
    }

    /// Overwrite `counts` with every category given on the command line.
    ///
    /// Values are parsed like form input: `"12 TB"` reads as 12 and garbage
    /// reads as `NaN`, which the calculator treats as 0.
    pub fn apply_fields(&self, counts: &mut CategoryCounts) {
        for category in Category::ALL {
            if let Some(raw) = self.field(category) {
                counts.set(category, parse_float_prefix(raw));
            }
        }
    }

    /// Assemble the scenario: `base` (stdin record or zeros), then `--code`,
    /// then explicit category options. Later sources win.
    pub fn build_counts(&self, base: CategoryCounts) -> CategoryCounts {
        let mut counts = match &self.code {
            Some(code) => parse_code(code, &base),
            None => base,
        };
        self.apply_fields(&mut counts);
        counts
    }

    /// Layer output flags over the loaded configuration
    pub fn apply_output_overrides(&self, output: &mut OutputConfig) {
        if let Some(format) = self.format {
            output.format = format;
        }
        if self.breakdown {
            output.breakdown = true;
        }
        if self.no_breakdown {
            output.breakdown = false;
        }
        if self.hide_zero {
            output.hide_zero = true;
        }
        if self.no_color {
            output.color = false;
        }
    }
}
