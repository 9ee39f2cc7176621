use super::types::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Error types for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    FileAccess(std::io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileAccess(e) => {
                write!(f, "Failed to access configuration file: {}", e)
            }
            ConfigError::Parse(e) => write!(f, "Configuration file is corrupted: {}", e),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize configuration: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::FileAccess(error)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        ConfigError::Parse(error)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(error: toml::ser::Error) -> Self {
        ConfigError::Serialize(error)
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user config, falling back to defaults on any error
    pub fn load() -> Config {
        match Config::load() {
            Ok(config) => config,
            Err(e) => {
                crate::debug_println!("Falling back to default config: {}", e);
                Config::default()
            }
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Config {
    /// Load configuration from default location
    pub fn load() -> Result<Config, ConfigError> {
        Self::load_from(&Self::get_config_path())
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        ConfigLoader::load_from_path(path)
    }

    /// Save configuration to default location
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path (~/.config/wlsize/config.toml on Linux)
    pub fn get_config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("wlsize").join("config.toml")
        } else {
            PathBuf::from(".wlsize/config.toml")
        }
    }

    /// Initialize config directory and create default config
    pub fn init() -> Result<(), ConfigError> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            Config::default().save_to(&config_path)?;
            println!("Created config at {}", config_path.display());
        } else {
            println!("Config already exists at {}", config_path.display());
        }

        Ok(())
    }

    /// Validate configuration
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.output.hide_zero && !self.output.breakdown {
            return Err(ConfigError::Invalid(
                "hide_zero has no effect unless breakdown is enabled".to_string(),
            ));
        }

        Ok(())
    }

    /// Print configuration as TOML
    pub fn print(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        println!("{}", content);
        Ok(())
    }
}
