//! Chain registry lookups.
//!
//! Blockscout publishes a registry of the chains it indexes at
//! `https://chains.blockscout.com/api/chains/{chain_id}`. Each entry lists
//! one or more explorers; the first one is used as the API base for that
//! chain. Entries are cached in process memory and shared by every clone
//! of the [`ChainRegistry`]. Each chain has its own cache slot, so a slow
//! lookup for one chain never holds up another.
//!
//! Chains whose explorer is not listed in the registry are reached through
//! explorer overrides, which bypass the registry entirely.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Url;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, OnceCell};

use crate::http::HttpFetcher;
use crate::{Error, Result};

/// EVM chain identifier.
pub type ChainId = u64;

/// Default Blockscout chain registry endpoint.
pub const DEFAULT_REGISTRY_URL: &str = "https://chains.blockscout.com/api/chains";

/// Merlin mainnet, whose explorer is not in the Blockscout registry.
pub const MERLIN_CHAIN_ID: ChainId = 4200;

/// Explorer used for [`MERLIN_CHAIN_ID`].
pub const MERLIN_EXPLORER_URL: &str = "https://scan.merlinverify.com/";

/// Built-in explorer overrides.
pub fn default_explorer_overrides() -> HashMap<ChainId, String> {
    HashMap::from([(MERLIN_CHAIN_ID, MERLIN_EXPLORER_URL.to_string())])
}

/// A chain entry as served by the registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chain {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Whether the chain is a testnet.
    #[serde(rename = "isTestnet")]
    pub is_testnet: bool,
    /// Project website, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Explorers indexing this chain, preferred first.
    pub explorers: Vec<ChainExplorer>,
}

/// One explorer instance for a chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainExplorer {
    /// Explorer base URL.
    pub url: String,
    /// Who operates the explorer.
    #[serde(rename = "hostedBy", skip_serializing_if = "Option::is_none")]
    pub hosted_by: Option<String>,
}

impl Chain {
    /// URL of the preferred explorer.
    pub fn explorer_url(&self) -> Option<&str> {
        self.explorers
            .first()
            .map(|e| e.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

/// Ensure an explorer base URL ends with `/` so that relative API paths
/// join underneath it.
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

#[derive(Debug, Clone)]
struct CachedChain {
    chain: Chain,
    fetched_at: Instant,
}

/// Filled at most once; concurrent callers share the in-flight fetch.
type ChainSlot = Arc<OnceCell<CachedChain>>;

/// Cached chain registry client.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    base_url: String,
    overrides: Arc<HashMap<ChainId, String>>,
    ttl: Option<Duration>,
    cache: Arc<Mutex<HashMap<ChainId, ChainSlot>>>,
    http: HttpFetcher,
}

impl ChainRegistry {
    pub(crate) fn new(
        base_url: impl Into<String>,
        overrides: HashMap<ChainId, String>,
        ttl: Option<Duration>,
        http: HttpFetcher,
    ) -> Self {
        let overrides = overrides
            .into_iter()
            .map(|(id, url)| (id, normalize_base_url(&url)))
            .collect();
        Self {
            base_url: base_url.into(),
            overrides: Arc::new(overrides),
            ttl,
            cache: Arc::new(Mutex::new(HashMap::new())),
            http,
        }
    }

    /// Registry endpoint this instance queries.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Explorer override for `chain_id`, if one is configured.
    pub fn explorer_override(&self, chain_id: ChainId) -> Option<&str> {
        self.overrides.get(&chain_id).map(String::as_str)
    }

    /// Look up a chain, consulting the cache first.
    ///
    /// The map lock is only held to find the chain's slot. Concurrent misses
    /// for the same chain wait on one registry request; other chains are
    /// unaffected.
    pub async fn get_chain(&self, chain_id: ChainId) -> Result<Chain> {
        let slot = self.slot(chain_id).await;
        if let Some(entry) = slot.get() {
            tracing::debug!(chain_id, "chain registry cache hit");
            return Ok(entry.chain.clone());
        }

        let entry = slot
            .get_or_try_init(|| async {
                let chain = self.fetch(chain_id).await?;
                Ok::<_, Error>(CachedChain {
                    chain,
                    fetched_at: Instant::now(),
                })
            })
            .await?;
        Ok(entry.chain.clone())
    }

    /// The cache slot for `chain_id`, replaced first if its entry expired.
    async fn slot(&self, chain_id: ChainId) -> ChainSlot {
        let mut cache = self.cache.lock().await;
        let slot = cache.entry(chain_id).or_default();
        if slot.get().is_some_and(|entry| !self.is_fresh(entry)) {
            *slot = ChainSlot::default();
        }
        Arc::clone(slot)
    }

    /// Resolve the explorer base URL for a chain, always ending in `/`.
    pub async fn explorer_url(&self, chain_id: ChainId) -> Result<String> {
        if let Some(url) = self.explorer_override(chain_id) {
            return Ok(url.to_string());
        }
        let chain = self.get_chain(chain_id).await?;
        chain
            .explorer_url()
            .map(normalize_base_url)
            .ok_or(Error::NoExplorer(chain_id))
    }

    /// Number of chains currently cached.
    pub async fn cached_chains(&self) -> usize {
        self.cache
            .lock()
            .await
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    /// Drop every cached entry.
    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
    }

    fn is_fresh(&self, entry: &CachedChain) -> bool {
        match self.ttl {
            Some(ttl) => entry.fetched_at.elapsed() < ttl,
            None => true,
        }
    }

    fn chain_url(&self, chain_id: ChainId) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url.trim_end_matches('/'), chain_id);
        Url::parse(&raw).map_err(|e| Error::invalid_url(format!("{raw}: {e}")))
    }

    async fn fetch(&self, chain_id: ChainId) -> Result<Chain> {
        let url = self.chain_url(chain_id)?;
        tracing::info!(chain_id, %url, "fetching chain from registry");
        let value = self.http.get_json(&url).await.map_err(|e| match e {
            Error::Status { status: 404, .. } => Error::ChainNotFound(chain_id),
            other => other,
        })?;
        Ok(serde_json::from_value(value)?)
    }
}
