//! Filter parameters accepted by Blockscout v2 list endpoints.
//!
//! Empty strings mean "no filter" and are left out of the query string.

use serde::{Deserialize, Serialize};

/// `GET /search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Token name or symbol, address, transaction hash, block number or hash.
    pub q: String,
}

/// `GET /transactions`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionsParams {
    /// `pending` or `validated`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filter: String,
    /// Comma-separated transaction types, e.g. `token_transfer,contract_call`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub typ: String,
    /// Method name or selector, e.g. `approve`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub method: String,
}

/// `GET /blocks`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlocksParams {
    /// `block`, `uncle` or `reorg`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub typ: String,
}

/// `GET /transactions/{hash}/token-transfers`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionTokenTransfersParams {
    /// Token standards, e.g. `ERC-20,ERC-721`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub typ: String,
}

/// `GET /addresses/{hash}/transactions`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressTransactionsParams {
    /// `to` or `from`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filter: String,
}

/// `GET /addresses/{hash}/token-transfers`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressTokenTransfersParams {
    /// Token standards, e.g. `ERC-20`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub typ: String,
    /// `to` or `from`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filter: String,
    /// Restrict to one token contract.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,
}

/// `GET /addresses/{hash}/internal-transactions`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressInternalTransactionsParams {
    /// `to` or `from`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filter: String,
}

/// `GET /addresses/{hash}/tokens`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressTokensParams {
    /// Token standards, e.g. `ERC-20,ERC-1155`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub typ: String,
}

/// `GET /addresses/{hash}/nft` and `/nft/collections`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressNftsParams {
    /// NFT standards, e.g. `ERC-721,ERC-404`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub typ: String,
}

/// `GET /tokens`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokensParams {
    /// Name or symbol substring.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub q: String,
    /// Token standards, e.g. `ERC-20`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub typ: String,
}
