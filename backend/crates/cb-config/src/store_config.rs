use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CREATE_RPC, DEFAULT_PROFILES_TABLE, DEFAULT_READ_RPC,
    DEFAULT_STORE_URL,
};

use std::time::Duration;

use serde::Deserialize;

// Request timeout constraints
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the hosted profile store (PostgREST API).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL of the project, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public anon key sent as the `apikey` header
    pub anon_key: Option<String>,
    /// Table queried by the direct (policy-constrained) read
    pub profiles_table: String,
    /// Function reading a profile with row-level policy bypassed
    pub read_rpc: String,
    /// Function creating a profile with row-level policy bypassed
    pub create_rpc: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_STORE_URL),
            anon_key: None,
            profiles_table: String::from(DEFAULT_PROFILES_TABLE),
            read_rpc: String::from(DEFAULT_READ_RPC),
            create_rpc: String::from(DEFAULT_CREATE_RPC),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::store(format!(
                "store.url must start with http:// or https://, got '{}'",
                self.url
            )));
        }

        Self::validate_identifier("store.profiles_table", &self.profiles_table)?;
        Self::validate_identifier("store.read_rpc", &self.read_rpc)?;
        Self::validate_identifier("store.create_rpc", &self.create_rpc)?;

        if let Some(key) = &self.anon_key
            && key.trim().is_empty()
        {
            return Err(ConfigError::store("store.anon_key cannot be empty when set"));
        }

        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::store(format!(
                "store.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate_identifier(name: &str, value: &str) -> ConfigErrorResult<()> {
        if value.is_empty() {
            return Err(ConfigError::store(format!("{} cannot be empty", name)));
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ConfigError::store(format!(
                "{} may only contain letters, digits and '_', got '{}'",
                name, value
            )));
        }
        Ok(())
    }
}
