//! Tool argument types.
//!
//! Doc comments on fields become the JSON schema descriptions shown to
//! MCP clients, so they are written for the model, not for Rust readers.

use std::fmt;

use blockscout_core::{ChainId, PageParams};
use schemars::JsonSchema;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Chain-wide
// ---------------------------------------------------------------------------

/// Arguments naming only a chain.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BaseRequest {
    /// The chain id to query, e.g. 1 for Ethereum mainnet.
    pub chain_id: ChainId,
}

/// Arguments for chain-wide lists.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChainPageRequest {
    /// The chain id to query, e.g. 1 for Ethereum mainnet.
    pub chain_id: ChainId,
    /// The `next_page_params` object from the previous page, to fetch the next 50 items.
    #[serde(default)]
    pub next_page_params: Option<PageParams>,
}

/// Arguments for search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// The query to search, it can be token name, token symbol, address, transaction hash, block number, block hash.
    pub q: String,
}

/// Arguments for the latest transactions list.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransactionsRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// Optional status filter: `pending` or `validated`.
    #[serde(default)]
    pub filter: Option<String>,
    /// Optional comma-separated types: token_transfer, contract_creation, contract_call, coin_transfer, token_creation.
    #[serde(default, rename = "type")]
    pub typ: Option<String>,
    /// Optional method name or selector, e.g. `approve`.
    #[serde(default)]
    pub method: Option<String>,
    /// The `next_page_params` object from the previous page.
    #[serde(default)]
    pub next_page_params: Option<PageParams>,
}

/// Arguments for the latest blocks list.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BlocksRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// Optional block type: `block`, `uncle` or `reorg`.
    #[serde(default, rename = "type")]
    pub typ: Option<String>,
    /// The `next_page_params` object from the previous page.
    #[serde(default)]
    pub next_page_params: Option<PageParams>,
}

/// Arguments for the token list.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TokensRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// Optional token name or symbol to match.
    #[serde(default)]
    pub q: Option<String>,
    /// Optional comma-separated token standards, e.g. `ERC-20,ERC-721`.
    #[serde(default, rename = "type")]
    pub typ: Option<String>,
    /// The `next_page_params` object from the previous page.
    #[serde(default)]
    pub next_page_params: Option<PageParams>,
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

/// Arguments naming a transaction.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransactionRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// The transaction hash to query.
    pub transaction_hash: String,
}

/// Arguments for lists scoped to a transaction.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransactionPageRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// The transaction hash to query.
    pub transaction_hash: String,
    /// The `next_page_params` object from the previous page.
    #[serde(default)]
    pub next_page_params: Option<PageParams>,
}

/// Arguments for token transfers inside a transaction.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransactionTokenTransfersRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// The transaction hash to query.
    pub transaction_hash: String,
    /// Optional comma-separated token standards, e.g. `ERC-20,ERC-721`.
    #[serde(default, rename = "type")]
    pub typ: Option<String>,
    /// The `next_page_params` object from the previous page.
    #[serde(default)]
    pub next_page_params: Option<PageParams>,
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

/// Arguments naming a block.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BlockRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// The block number or block hash to query.
    pub number_or_hash: String,
}

/// Arguments for lists scoped to a block.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BlockPageRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// The block number or block hash to query.
    pub number_or_hash: String,
    /// The `next_page_params` object from the previous page.
    #[serde(default)]
    pub next_page_params: Option<PageParams>,
}

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

/// Arguments naming an address.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddressRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// The address hash to query.
    pub address_hash: String,
}

/// Arguments for lists scoped to an address.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddressPageRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// The address hash to query.
    pub address_hash: String,
    /// The `next_page_params` object from the previous page.
    #[serde(default)]
    pub next_page_params: Option<PageParams>,
}

/// Arguments for address transactions and internal transactions.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddressFilterRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// The address hash to query.
    pub address_hash: String,
    /// Optional direction filter: `to` or `from`.
    #[serde(default)]
    pub filter: Option<String>,
    /// The `next_page_params` object from the previous page.
    #[serde(default)]
    pub next_page_params: Option<PageParams>,
}

/// Arguments for address token transfers.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddressTokenTransfersRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// The address hash to query.
    pub address_hash: String,
    /// Optional comma-separated token standards, e.g. `ERC-20,ERC-1155`.
    #[serde(default, rename = "type")]
    pub typ: Option<String>,
    /// Optional direction filter: `to` or `from`.
    #[serde(default)]
    pub filter: Option<String>,
    /// Optional token contract address to restrict transfers to.
    #[serde(default)]
    pub token: Option<String>,
    /// The `next_page_params` object from the previous page.
    #[serde(default)]
    pub next_page_params: Option<PageParams>,
}

/// Arguments for address token balances and NFTs.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddressTypedRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// The address hash to query.
    pub address_hash: String,
    /// Optional comma-separated token standards, e.g. `ERC-20` or `ERC-721,ERC-1155`.
    #[serde(default, rename = "type")]
    pub typ: Option<String>,
    /// The `next_page_params` object from the previous page.
    #[serde(default)]
    pub next_page_params: Option<PageParams>,
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// Arguments naming a token contract.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TokenRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// The token address to query.
    pub token_address: String,
}

/// Arguments for lists scoped to a token contract.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TokenPageRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// The token address to query.
    pub token_address: String,
    /// The `next_page_params` object from the previous page.
    #[serde(default)]
    pub next_page_params: Option<PageParams>,
}

/// NFT token id, accepted as a JSON number or a decimal string.
///
/// Ids above `u64::MAX` must be passed as strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TokenId {
    /// Numeric id.
    Number(u64),
    /// Decimal string id.
    Text(String),
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Arguments naming a single NFT instance.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TokenInstanceRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// The token address to query.
    pub token_address: String,
    /// The token id to query.
    pub token_id: TokenId,
}

/// Arguments for lists scoped to a single NFT instance.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TokenInstancePageRequest {
    /// The chain id to query.
    pub chain_id: ChainId,
    /// The token address to query.
    pub token_address: String,
    /// The token id to query.
    pub token_id: TokenId,
    /// The `next_page_params` object from the previous page.
    #[serde(default)]
    pub next_page_params: Option<PageParams>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_id_number_or_string() {
        let a: TokenInstanceRequest =
            serde_json::from_value(json!({"chain_id": 1, "token_address": "0x1", "token_id": 7}))
                .unwrap();
        assert_eq!(a.token_id, TokenId::Number(7));
        assert_eq!(a.token_id.to_string(), "7");

        let big = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        let b: TokenInstanceRequest =
            serde_json::from_value(json!({"chain_id": 1, "token_address": "0x1", "token_id": big}))
                .unwrap();
        assert_eq!(b.token_id.to_string(), big);
    }

    #[test]
    fn test_page_params_optional() {
        let req: ChainPageRequest = serde_json::from_value(json!({"chain_id": 10})).unwrap();
        assert_eq!(req.chain_id, 10);
        assert!(req.next_page_params.is_none());

        let req: ChainPageRequest = serde_json::from_value(json!({
            "chain_id": 10,
            "next_page_params": {"block_number": 1, "index": 2}
        }))
        .unwrap();
        assert_eq!(req.next_page_params.unwrap().len(), 2);
    }

    #[test]
    fn test_type_field_renamed() {
        let req: AddressTypedRequest = serde_json::from_value(json!({
            "chain_id": 1,
            "address_hash": "0xabc",
            "type": "ERC-721"
        }))
        .unwrap();
        assert_eq!(req.typ.as_deref(), Some("ERC-721"));
    }

    #[test]
    fn test_schema_documents_fields() {
        let schema = serde_json::to_value(schemars::schema_for!(SearchRequest)).unwrap();
        let q = &schema["properties"]["q"]["description"];
        assert!(q.as_str().unwrap().contains("token symbol"));
        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&json!("chain_id")));
        assert!(required.contains(&json!("q")));
    }

    #[test]
    fn test_schema_marks_filters_optional() {
        let schema = serde_json::to_value(schemars::schema_for!(TransactionsRequest)).unwrap();
        assert!(schema["properties"]["type"].is_object());
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required, &vec![json!("chain_id")]);
    }
}
