//! Blockscout v2 REST endpoints.
//!
//! Every method resolves the chain's explorer and returns the response body
//! untouched. List endpoints return 50 items per page; pass the previous
//! response's `next_page_params` as `page` to continue.

use serde_json::Value;

use crate::chain::ChainId;
use crate::client::BlockscoutClient;
use crate::params::{
    AddressInternalTransactionsParams, AddressNftsParams, AddressTokenTransfersParams,
    AddressTokensParams, AddressTransactionsParams, BlocksParams, SearchParams, TokensParams,
    TransactionTokenTransfersParams, TransactionsParams,
};
use crate::query::{PageParams, Query};
use crate::{Error, Result};

/// Validate a caller-supplied path segment (hash, block id, token id).
///
/// Only ASCII letters, digits, `_` and `-` are accepted, so the value can
/// never be reinterpreted as a separator, dot segment or escape.
pub fn path_segment<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::invalid_params(format!("{name} must not be empty")));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(Error::invalid_params(format!(
            "{name} contains invalid characters: {value}"
        )));
    }
    Ok(value)
}

fn page_query(page: Option<&PageParams>) -> Query {
    Query::new().with_page(page)
}

impl BlockscoutClient {
    // ------------------------------------------------------------------
    // Chain-wide
    // ------------------------------------------------------------------

    /// Search tokens, addresses, transactions and blocks.
    pub async fn search(&self, chain_id: ChainId, params: &SearchParams) -> Result<Value> {
        if params.q.trim().is_empty() {
            return Err(Error::invalid_params("search query must not be empty"));
        }
        self.request(chain_id, "search", Query::from_params(params)?)
            .await
    }

    /// Latest transactions.
    pub async fn get_transactions(
        &self,
        chain_id: ChainId,
        params: &TransactionsParams,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let query = Query::from_params(params)?.with_page(page);
        self.request(chain_id, "transactions", query).await
    }

    /// Latest blocks.
    pub async fn get_blocks(
        &self,
        chain_id: ChainId,
        params: &BlocksParams,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let query = Query::from_params(params)?.with_page(page);
        self.request(chain_id, "blocks", query).await
    }

    /// Latest token transfers.
    pub async fn get_transfers(&self, chain_id: ChainId, page: Option<&PageParams>) -> Result<Value> {
        self.request(chain_id, "token-transfers", page_query(page))
            .await
    }

    /// Latest internal transactions.
    pub async fn get_internal_transactions(
        &self,
        chain_id: ChainId,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        self.request(chain_id, "internal-transactions", page_query(page))
            .await
    }

    /// Latest withdrawals.
    pub async fn get_withdrawals(
        &self,
        chain_id: ChainId,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        self.request(chain_id, "withdrawals", page_query(page))
            .await
    }

    /// Chain statistics counters.
    pub async fn get_stats(&self, chain_id: ChainId) -> Result<Value> {
        self.request(chain_id, "stats", Query::new()).await
    }

    // ------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------

    /// Transaction details.
    pub async fn get_transaction_info(&self, chain_id: ChainId, hash: &str) -> Result<Value> {
        let hash = path_segment("transaction hash", hash)?;
        self.request(chain_id, &format!("transactions/{hash}"), Query::new())
            .await
    }

    /// Token transfers inside a transaction.
    pub async fn get_transaction_token_transfers(
        &self,
        chain_id: ChainId,
        hash: &str,
        params: &TransactionTokenTransfersParams,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let hash = path_segment("transaction hash", hash)?;
        let query = Query::from_params(params)?.with_page(page);
        self.request(chain_id, &format!("transactions/{hash}/token-transfers"), query)
            .await
    }

    /// Internal transactions of a transaction.
    pub async fn get_transaction_internal_transactions(
        &self,
        chain_id: ChainId,
        hash: &str,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let hash = path_segment("transaction hash", hash)?;
        self.request(
            chain_id,
            &format!("transactions/{hash}/internal-transactions"),
            page_query(page),
        )
        .await
    }

    /// Event logs emitted by a transaction.
    pub async fn get_transaction_logs(
        &self,
        chain_id: ChainId,
        hash: &str,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let hash = path_segment("transaction hash", hash)?;
        self.request(chain_id, &format!("transactions/{hash}/logs"), page_query(page))
            .await
    }

    /// Human-readable transaction summary.
    pub async fn get_transaction_summary(&self, chain_id: ChainId, hash: &str) -> Result<Value> {
        let hash = path_segment("transaction hash", hash)?;
        self.request(chain_id, &format!("transactions/{hash}/summary"), Query::new())
            .await
    }

    // ------------------------------------------------------------------
    // Blocks
    // ------------------------------------------------------------------

    /// Block details by number or hash.
    pub async fn get_block_info(&self, chain_id: ChainId, number_or_hash: &str) -> Result<Value> {
        let id = path_segment("block number or hash", number_or_hash)?;
        self.request(chain_id, &format!("blocks/{id}"), Query::new())
            .await
    }

    /// Transactions included in a block.
    pub async fn get_block_transactions(
        &self,
        chain_id: ChainId,
        number_or_hash: &str,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let id = path_segment("block number or hash", number_or_hash)?;
        self.request(chain_id, &format!("blocks/{id}/transactions"), page_query(page))
            .await
    }

    /// Withdrawals included in a block.
    pub async fn get_block_withdrawals(
        &self,
        chain_id: ChainId,
        number_or_hash: &str,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let id = path_segment("block number or hash", number_or_hash)?;
        self.request(chain_id, &format!("blocks/{id}/withdrawals"), page_query(page))
            .await
    }

    // ------------------------------------------------------------------
    // Addresses
    // ------------------------------------------------------------------

    /// Top native coin holders.
    pub async fn get_addresses(&self, chain_id: ChainId, page: Option<&PageParams>) -> Result<Value> {
        self.request(chain_id, "addresses", page_query(page)).await
    }

    /// Address details.
    pub async fn get_address_info(&self, chain_id: ChainId, hash: &str) -> Result<Value> {
        let hash = path_segment("address hash", hash)?;
        self.request(chain_id, &format!("addresses/{hash}"), Query::new())
            .await
    }

    /// Transaction, transfer and gas counters of an address.
    pub async fn get_address_counters(&self, chain_id: ChainId, hash: &str) -> Result<Value> {
        let hash = path_segment("address hash", hash)?;
        self.request(chain_id, &format!("addresses/{hash}/counters"), Query::new())
            .await
    }

    /// Transactions sent or received by an address.
    pub async fn get_address_transactions(
        &self,
        chain_id: ChainId,
        hash: &str,
        params: &AddressTransactionsParams,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let hash = path_segment("address hash", hash)?;
        let query = Query::from_params(params)?.with_page(page);
        self.request(chain_id, &format!("addresses/{hash}/transactions"), query)
            .await
    }

    /// Token transfers involving an address.
    pub async fn get_address_token_transfers(
        &self,
        chain_id: ChainId,
        hash: &str,
        params: &AddressTokenTransfersParams,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let hash = path_segment("address hash", hash)?;
        let query = Query::from_params(params)?.with_page(page);
        self.request(chain_id, &format!("addresses/{hash}/token-transfers"), query)
            .await
    }

    /// Internal transactions involving an address.
    pub async fn get_address_internal_transactions(
        &self,
        chain_id: ChainId,
        hash: &str,
        params: &AddressInternalTransactionsParams,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let hash = path_segment("address hash", hash)?;
        let query = Query::from_params(params)?.with_page(page);
        self.request(
            chain_id,
            &format!("addresses/{hash}/internal-transactions"),
            query,
        )
        .await
    }

    /// Event logs emitted by a contract address.
    pub async fn get_address_logs(
        &self,
        chain_id: ChainId,
        hash: &str,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let hash = path_segment("address hash", hash)?;
        self.request(chain_id, &format!("addresses/{hash}/logs"), page_query(page))
            .await
    }

    /// Token balances held by an address.
    pub async fn get_address_tokens(
        &self,
        chain_id: ChainId,
        hash: &str,
        params: &AddressTokensParams,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let hash = path_segment("address hash", hash)?;
        let query = Query::from_params(params)?.with_page(page);
        self.request(chain_id, &format!("addresses/{hash}/tokens"), query)
            .await
    }

    /// Native coin balance changes of an address.
    pub async fn get_address_coin_balance_history(
        &self,
        chain_id: ChainId,
        hash: &str,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let hash = path_segment("address hash", hash)?;
        self.request(
            chain_id,
            &format!("addresses/{hash}/coin-balance-history"),
            page_query(page),
        )
        .await
    }

    /// Daily native coin balance of an address.
    pub async fn get_address_coin_balance_history_by_day(
        &self,
        chain_id: ChainId,
        hash: &str,
    ) -> Result<Value> {
        let hash = path_segment("address hash", hash)?;
        self.request(
            chain_id,
            &format!("addresses/{hash}/coin-balance-history-by-day"),
            Query::new(),
        )
        .await
    }

    /// Withdrawals to an address.
    pub async fn get_address_withdrawals(
        &self,
        chain_id: ChainId,
        hash: &str,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let hash = path_segment("address hash", hash)?;
        self.request(
            chain_id,
            &format!("addresses/{hash}/withdrawals"),
            page_query(page),
        )
        .await
    }

    /// NFT instances owned by an address.
    pub async fn get_address_nfts(
        &self,
        chain_id: ChainId,
        hash: &str,
        params: &AddressNftsParams,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let hash = path_segment("address hash", hash)?;
        let query = Query::from_params(params)?.with_page(page);
        self.request(chain_id, &format!("addresses/{hash}/nft"), query)
            .await
    }

    /// NFT instances owned by an address, grouped by collection.
    pub async fn get_address_nft_collections(
        &self,
        chain_id: ChainId,
        hash: &str,
        params: &AddressNftsParams,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let hash = path_segment("address hash", hash)?;
        let query = Query::from_params(params)?.with_page(page);
        self.request(chain_id, &format!("addresses/{hash}/nft/collections"), query)
            .await
    }

    // ------------------------------------------------------------------
    // Tokens
    // ------------------------------------------------------------------

    /// Tokens ordered by holder count.
    pub async fn get_tokens(
        &self,
        chain_id: ChainId,
        params: &TokensParams,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let query = Query::from_params(params)?.with_page(page);
        self.request(chain_id, "tokens", query).await
    }

    /// Token details.
    pub async fn get_token_info(&self, chain_id: ChainId, address: &str) -> Result<Value> {
        let address = path_segment("token address", address)?;
        self.request(chain_id, &format!("tokens/{address}"), Query::new())
            .await
    }

    /// Transfers of a token.
    pub async fn get_token_transfers(
        &self,
        chain_id: ChainId,
        address: &str,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let address = path_segment("token address", address)?;
        self.request(chain_id, &format!("tokens/{address}/transfers"), page_query(page))
            .await
    }

    /// Holders of a token.
    pub async fn get_token_holders(
        &self,
        chain_id: ChainId,
        address: &str,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let address = path_segment("token address", address)?;
        self.request(chain_id, &format!("tokens/{address}/holders"), page_query(page))
            .await
    }

    /// Holder and transfer counters of a token.
    pub async fn get_token_counters(&self, chain_id: ChainId, address: &str) -> Result<Value> {
        let address = path_segment("token address", address)?;
        self.request(chain_id, &format!("tokens/{address}/counters"), Query::new())
            .await
    }

    /// Instances of an NFT collection.
    pub async fn get_token_instances(
        &self,
        chain_id: ChainId,
        address: &str,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let address = path_segment("token address", address)?;
        self.request(chain_id, &format!("tokens/{address}/instances"), page_query(page))
            .await
    }

    /// A single NFT instance.
    pub async fn get_token_instance_info(
        &self,
        chain_id: ChainId,
        address: &str,
        id: &str,
    ) -> Result<Value> {
        let address = path_segment("token address", address)?;
        let id = path_segment("token id", id)?;
        self.request(chain_id, &format!("tokens/{address}/instances/{id}"), Query::new())
            .await
    }

    /// Transfers of a single NFT instance.
    pub async fn get_token_instance_transfers(
        &self,
        chain_id: ChainId,
        address: &str,
        id: &str,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let address = path_segment("token address", address)?;
        let id = path_segment("token id", id)?;
        self.request(
            chain_id,
            &format!("tokens/{address}/instances/{id}/transfers"),
            page_query(page),
        )
        .await
    }

    /// Holders of a single NFT instance.
    pub async fn get_token_instance_holders(
        &self,
        chain_id: ChainId,
        address: &str,
        id: &str,
        page: Option<&PageParams>,
    ) -> Result<Value> {
        let address = path_segment("token address", address)?;
        let id = path_segment("token id", id)?;
        self.request(
            chain_id,
            &format!("tokens/{address}/instances/{id}/holders"),
            page_query(page),
        )
        .await
    }

    /// Number of transfers of a single NFT instance.
    pub async fn get_token_instance_transfers_count(
        &self,
        chain_id: ChainId,
        address: &str,
        id: &str,
    ) -> Result<Value> {
        let address = path_segment("token address", address)?;
        let id = path_segment("token id", id)?;
        self.request(
            chain_id,
            &format!("tokens/{address}/instances/{id}/transfers-count"),
            Query::new(),
        )
        .await
    }
}
