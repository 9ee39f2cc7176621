use super::types::{Config, OutputConfig, OutputFormat};

pub const DEFAULT_CONFIG: Config = Config {
    output: OutputConfig {
        format: OutputFormat::Text,
        breakdown: true,
        hide_zero: false,
        color: true,
    },
};

impl Default for OutputConfig {
    fn default() -> Self {
        // https://no-color.org
        let color_enabled = std::env::var_os("NO_COLOR").is_none();
        OutputConfig {
            color: color_enabled,
            ..DEFAULT_CONFIG.output
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputConfig::default(),
        }
    }
}
