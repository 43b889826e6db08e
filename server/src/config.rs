//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TABLE: &str = "pets";
pub const DEFAULT_API_KEY_ENV: &str = "PETS_BACKEND_KEY";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: String, value: String },

    /// The backend URL is set but its API key is not.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Connection details for the hosted pet table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project base URL without a trailing slash.
    pub url: String,
    pub api_key: String,
    pub table: String,
    pub timeouts: BackendTimeouts,
}

impl BackendConfig {
    /// REST endpoint of the pet table.
    #[must_use]
    pub fn table_endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.url, self.table)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` runs the server on the seeded in-memory store.
    pub backend: Option<BackendConfig>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PETS_BACKEND_URL`: hosted backend base URL; unset selects the memory store
    /// - `PETS_BACKEND_KEY_ENV`: names the env var holding the API key (default `PETS_BACKEND_KEY`)
    /// - `PETS_TABLE`: default `pets`
    /// - `PETS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PETS_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is malformed or the backend URL
    /// is set without an API key.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;

        let backend = match non_empty(&lookup, "PETS_BACKEND_URL") {
            None => None,
            Some(url) => {
                let key_var = non_empty(&lookup, "PETS_BACKEND_KEY_ENV").unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_owned());
                let api_key = non_empty(&lookup, &key_var).ok_or(ConfigError::MissingApiKey { var: key_var })?;
                let table = non_empty(&lookup, "PETS_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_owned());
                let timeouts = BackendTimeouts {
                    request_secs: parse_or(&lookup, "PETS_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
                    connect_secs: parse_or(&lookup, "PETS_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?,
                };
                Some(BackendConfig { url: url.trim_end_matches('/').to_owned(), api_key, table, timeouts })
            }
        };

        Ok(Self { port, backend })
    }

    #[cfg(test)]
    pub fn from_map(vars: &std::collections::HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match non_empty(lookup, key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { var: key.to_owned(), value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
