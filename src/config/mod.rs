pub mod defaults;
pub mod loader;
pub mod types;

pub use defaults::DEFAULT_CONFIG;
pub use loader::{ConfigError, ConfigLoader};
pub use types::*;
