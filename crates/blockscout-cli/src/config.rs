//! Configuration for the Blockscout MCP server.
//!
//! Provides the [`McpConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `BLOCKSCOUT_MCP_CONFIG` environment variable
//! 3. XDG default: `~/.config/blockscout-mcp/config.toml`
//! 4. Built-in defaults

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use blockscout_core::chain::{DEFAULT_REGISTRY_URL, MERLIN_CHAIN_ID, MERLIN_EXPLORER_URL};
use blockscout_core::client::default_user_agent;
use blockscout_core::{ChainId, ClientConfig, Error, Result, RetryPolicy};
use confyg::{Confygery, env};
use serde::{Deserialize, Deserializer, Serialize};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "BLOCKSCOUT_MCP_CONFIG";

/// Prefix for environment overrides, e.g. `BLOCKSCOUT_MCP_REGISTRY_URL`.
pub const ENV_PREFIX: &str = "BLOCKSCOUT_MCP";

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct McpConfig {
    /// Project name, used for default paths.
    pub project_name: String,

    /// Chain registry settings.
    pub registry: RegistryConfig,

    /// Outbound HTTP settings.
    pub http: HttpConfig,

    /// Explorer base URLs keyed by chain id, bypassing the registry.
    pub explorers: BTreeMap<String, String>,
}

/// Chain registry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Registry endpoint.
    pub url: String,

    /// Seconds a registry entry stays cached. 0 keeps entries forever.
    #[serde(deserialize_with = "from_str_or_num")]
    pub cache_ttl_secs: u64,
}

/// Outbound HTTP settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in seconds.
    #[serde(deserialize_with = "from_str_or_num")]
    pub timeout_secs: u64,

    /// Retries after the first attempt for transient failures.
    #[serde(deserialize_with = "from_str_or_num")]
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds.
    #[serde(deserialize_with = "from_str_or_num")]
    pub retry_min_delay_ms: u64,

    /// Upper bound for the retry delay, in milliseconds.
    #[serde(deserialize_with = "from_str_or_num")]
    pub retry_max_delay_ms: u64,

    /// `User-Agent` header.
    pub user_agent: String,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            project_name: "blockscout-mcp".to_string(),
            registry: RegistryConfig::default(),
            http: HttpConfig::default(),
            explorers: BTreeMap::from([(
                MERLIN_CHAIN_ID.to_string(),
                MERLIN_EXPLORER_URL.to_string(),
            )]),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REGISTRY_URL.to_string(),
            cache_ttl_secs: 0,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        let retry = RetryPolicy::default();
        Self {
            timeout_secs: 30,
            max_retries: retry.max_retries,
            retry_min_delay_ms: retry.min_delay.as_millis() as u64,
            retry_max_delay_ms: retry.max_delay.as_millis() as u64,
            user_agent: default_user_agent(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl McpConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// A missing config file is not an error.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config file");
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level(ENV_PREFIX);
        env_opts.add_section("registry");
        env_opts.add_section("http");
        env_opts.add_section("explorers");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("blockscout-mcp").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten this config into environment variable pairs with `BLOCKSCOUT_MCP_` prefix.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value: toml::Value =
            toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_toml_value(&value, ENV_PREFIX, &mut vars);
        Ok(vars)
    }

    /// Build the core client settings.
    pub fn client_config(&self) -> Result<ClientConfig> {
        if self.http.timeout_secs == 0 {
            return Err(Error::config("http.timeout_secs must be greater than 0"));
        }
        if self.http.retry_min_delay_ms > self.http.retry_max_delay_ms {
            return Err(Error::config(
                "http.retry_min_delay_ms must not exceed http.retry_max_delay_ms",
            ));
        }

        let cache_ttl = match self.registry.cache_ttl_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        let retry = RetryPolicy {
            max_retries: self.http.max_retries,
            min_delay: Duration::from_millis(self.http.retry_min_delay_ms),
            max_delay: Duration::from_millis(self.http.retry_max_delay_ms),
        };

        let mut config = ClientConfig::default()
            .with_registry_url(self.registry.url.as_str())
            .with_timeout(Duration::from_secs(self.http.timeout_secs))
            .with_retry(retry)
            .with_user_agent(self.http.user_agent.as_str())
            .with_cache_ttl(cache_ttl);

        for (key, url) in &self.explorers {
            let chain_id: ChainId = key.trim().parse().map_err(|_| {
                Error::config(format!("explorers.{key}: key must be a numeric chain id"))
            })?;
            config = config.with_explorer_override(chain_id, url.as_str());
        }

        Ok(config)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Accept numbers either natively or as strings; env overrides arrive as strings.
fn from_str_or_num<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Num(T),
        Text(String),
    }

    match Raw::<T>::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Recursively flatten a TOML value into `KEY=value` pairs.
fn flatten_toml_value(value: &toml::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                let env_key = format!("{}_{}", prefix, key.to_uppercase());
                flatten_toml_value(val, &env_key, out);
            }
        }
        toml::Value::Array(arr) => {
            if let Ok(json) = serde_json::to_string(arr) {
                out.push((prefix.to_string(), json));
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        toml::Value::Integer(i) => out.push((prefix.to_string(), i.to_string())),
        toml::Value::Float(f) => out.push((prefix.to_string(), f.to_string())),
        toml::Value::Boolean(b) => out.push((prefix.to_string(), b.to_string())),
        toml::Value::Datetime(dt) => out.push((prefix.to_string(), dt.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================
