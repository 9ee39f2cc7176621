use std::io;
use workload_sizer::billing::{encode_code, CategoryCounts};
use workload_sizer::cli::Cli;
use workload_sizer::config::{Config, ConfigLoader};
use workload_sizer::core::{ReportGenerator, WorkloadReport};
use workload_sizer::debug_println;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    // Handle configuration commands
    if cli.init {
        Config::init()?;
        return Ok(());
    }

    if cli.print {
        let mut config = ConfigLoader::load();
        cli.apply_output_overrides(&mut config.output);
        config.print()?;
        return Ok(());
    }

    if cli.check {
        let config = Config::load()?;
        config.check()?;
        println!("✓ Configuration valid ({})", Config::get_config_path().display());
        return Ok(());
    }

    // Load configuration and layer CLI flags on top
    let mut config = ConfigLoader::load();
    cli.apply_output_overrides(&mut config.output);

    // Form record from stdin, if requested
    let base = if cli.stdin {
        let stdin = io::stdin();
        serde_json::from_reader::<_, CategoryCounts>(stdin.lock())?
    } else {
        CategoryCounts::default()
    };

    let counts = cli.build_counts(base);
    debug_println!("input counts: {:?}", counts);

    if cli.encode {
        println!("{}", encode_code(&counts));
        return Ok(());
    }

    let report = WorkloadReport::new(&counts);
    let generator = ReportGenerator::new(config);
    println!("{}", generator.generate(&report)?);

    Ok(())
}
