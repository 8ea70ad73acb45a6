//! Blockscout explorer client.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Url;
use serde_json::{Value, json};

use crate::chain::{ChainId, ChainRegistry, DEFAULT_REGISTRY_URL, default_explorer_overrides};
use crate::http::{HttpFetcher, RetryPolicy};
use crate::query::Query;
use crate::{Error, Result};

/// Settings for [`BlockscoutClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Chain registry endpoint.
    pub registry_url: String,
    /// Explorer base URLs used instead of the registry for these chains.
    pub explorer_overrides: HashMap<ChainId, String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retry behavior for transient failures.
    pub retry: RetryPolicy,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// How long registry entries stay cached. `None` keeps them forever.
    pub cache_ttl: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            explorer_overrides: default_explorer_overrides(),
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
            user_agent: default_user_agent(),
            cache_ttl: None,
        }
    }
}

impl ClientConfig {
    /// Sets the registry endpoint.
    pub fn with_registry_url(mut self, url: impl Into<String>) -> Self {
        self.registry_url = url.into();
        self
    }

    /// Adds or replaces an explorer override.
    pub fn with_explorer_override(mut self, chain_id: ChainId, url: impl Into<String>) -> Self {
        self.explorer_overrides.insert(chain_id, url.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the registry cache TTL.
    pub fn with_cache_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.cache_ttl = ttl;
        self
    }
}

/// `blockscout-mcp/<version>`
pub fn default_user_agent() -> String {
    format!("blockscout-mcp/{}", env!("CARGO_PKG_VERSION"))
}

/// Client for the Blockscout v2 REST API of any registered chain.
///
/// Cloning is cheap; clones share the HTTP connection pool and the chain
/// registry cache.
#[derive(Debug, Clone)]
pub struct BlockscoutClient {
    registry: ChainRegistry,
    http: HttpFetcher,
}

impl BlockscoutClient {
    /// Creates a client from the given settings.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::http("Failed to build HTTP client", e))?;

        let http = HttpFetcher::new(client, config.retry);
        let registry = ChainRegistry::new(
            config.registry_url,
            config.explorer_overrides,
            config.cache_ttl,
            http.clone(),
        );
        Ok(Self { registry, http })
    }

    /// The chain registry used to resolve explorers.
    pub fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    /// Build the full URL for an API path on a chain's explorer.
    pub async fn api_url(&self, chain_id: ChainId, path: &str, query: &Query) -> Result<Url> {
        let base = self.registry.explorer_url(chain_id).await?;
        let raw = format!("{base}api/v2/{}", path.trim_start_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| Error::invalid_url(format!("{raw}: {e}")))?;
        query.apply(&mut url);
        Ok(url)
    }

    /// Registry entry and resolved explorer URL of a chain.
    ///
    /// `chain` is null for chains reached through an explorer override.
    pub async fn chain_info(&self, chain_id: ChainId) -> Result<Value> {
        let explorer_url = self.registry.explorer_url(chain_id).await?;
        let chain = match self.registry.explorer_override(chain_id) {
            Some(_) => Value::Null,
            None => serde_json::to_value(self.registry.get_chain(chain_id).await?)?,
        };
        Ok(json!({
            "chain_id": chain_id,
            "explorer_url": explorer_url,
            "chain": chain,
        }))
    }

    /// GET `api/v2/{path}` on the chain's explorer and return the JSON body.
    pub async fn request(&self, chain_id: ChainId, path: &str, query: Query) -> Result<Value> {
        let url = self.api_url(chain_id, path, &query).await?;
        tracing::debug!(chain_id, %url, "explorer request");
        self.http.get_json(&url).await
    }
}
