mod backend_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use backend_config::BackendConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;
pub use validation_config::ValidationConfig;

pub const CONFIG_DIR_ENV: &str = "GUIDE_CONFIG_DIR";
pub const CONFIG_DIR_NAME: &str = ".guide";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_FILENAME: &str = "storage.json";
const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;
const MIN_BACKEND_TIMEOUT_SECS: u64 = 1;
const MAX_BACKEND_TIMEOUT_SECS: u64 = 300;
const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;
const MIN_MIN_PASSWORD_LENGTH: usize = 1;
const MAX_MIN_PASSWORD_LENGTH: usize = 128;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
