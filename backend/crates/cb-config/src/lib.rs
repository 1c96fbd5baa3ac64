mod config;
mod error;
mod log_level;
mod logging_config;
mod reconciler_config;
mod store_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use reconciler_config::ReconcilerConfig;
pub use store_config::StoreConfig;

const CONFIG_DIR_ENV: &str = "CB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".cb";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_STORE_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_PROFILES_TABLE: &str = "user_profiles";
const DEFAULT_READ_RPC: &str = "get_user_profile_safe";
const DEFAULT_CREATE_RPC: &str = "create_user_profile_safe";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
