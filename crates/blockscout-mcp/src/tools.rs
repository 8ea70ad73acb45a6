//! MCP tools backed by [`BlockscoutClient`].
//!
//! Every tool resolves the chain's explorer through the registry, calls one
//! Blockscout v2 endpoint and returns the response body as pretty-printed
//! JSON text.

use blockscout_core::chain::MERLIN_CHAIN_ID;
use blockscout_core::params::{
    AddressInternalTransactionsParams, AddressNftsParams, AddressTokenTransfersParams,
    AddressTokensParams, AddressTransactionsParams, BlocksParams, SearchParams,
    TransactionTokenTransfersParams, TransactionsParams, TokensParams,
};
use blockscout_core::{BlockscoutClient, Error};
use rmcp::ErrorData;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Tool};
use rmcp::{tool, tool_router};
use serde_json::{Value, json};

use crate::error::McpErrorExt;
use crate::requests::{
    AddressFilterRequest, AddressPageRequest, AddressRequest, AddressTokenTransfersRequest,
    AddressTypedRequest, BaseRequest, BlockPageRequest, BlockRequest, BlocksRequest,
    ChainPageRequest, SearchRequest, TokenInstancePageRequest, TokenInstanceRequest,
    TokenPageRequest, TokenRequest, TokensRequest, TransactionPageRequest, TransactionRequest,
    TransactionTokenTransfersRequest, TransactionsRequest,
};

type ToolResult = Result<CallToolResult, ErrorData>;

const MERLIN_NOTE: &str = "The native token on merlin is BTC, but the decimals of merlin BTC is 18, so 1 merlin BTC = 1 * 10^18 wei";

/// MCP server exposing Blockscout on-chain data tools.
#[derive(Clone)]
pub struct OnChainServer {
    client: BlockscoutClient,
    pub(crate) tool_router: ToolRouter<Self>,
}

/// Serialize a JSON value into a pretty-printed text result.
pub fn serialize_response(value: &Value) -> ToolResult {
    let json = serde_json::to_string_pretty(value).map_err(|e| Error::from(e).to_mcp_error())?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn respond(result: blockscout_core::Result<Value>) -> ToolResult {
    match result {
        Ok(value) => serialize_response(&value),
        Err(e) => {
            tracing::warn!(error = %e, "tool call failed");
            Err(e.to_mcp_error())
        }
    }
}

impl OnChainServer {
    /// Creates a server around an existing client.
    pub fn new(client: BlockscoutClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    /// The underlying Blockscout client.
    pub fn client(&self) -> &BlockscoutClient {
        &self.client
    }

    /// Definitions of every registered tool.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

impl std::fmt::Debug for OnChainServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnChainServer")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

#[tool_router(vis = "pub(crate)")]
impl OnChainServer {
    // ------------------------------------------------------------------
    // Chain
    // ------------------------------------------------------------------

    #[tool(
        description = "Search chain data with token name, token symbol, account name, address, transaction hash"
    )]
    async fn search(&self, Parameters(req): Parameters<SearchRequest>) -> ToolResult {
        respond(
            self.client
                .search(req.chain_id, &SearchParams { q: req.q })
                .await,
        )
    }

    #[tool(description = "Get Merlin chain info")]
    async fn get_merlin_chain_info(&self) -> ToolResult {
        serialize_response(&json!({
            "chain_id": MERLIN_CHAIN_ID.to_string(),
            "native_token_symbol": "BTC",
            "native_token_decimals": "18",
            "note": MERLIN_NOTE,
        }))
    }

    #[tool(description = "Get the registry entry and explorer URL of a chain")]
    async fn get_chain_info(&self, Parameters(req): Parameters<BaseRequest>) -> ToolResult {
        respond(self.client.chain_info(req.chain_id).await)
    }

    #[tool(description = "List latest 50 transactions")]
    async fn get_transactions(&self, Parameters(req): Parameters<TransactionsRequest>) -> ToolResult {
        let params = TransactionsParams {
            filter: req.filter.unwrap_or_default(),
            typ: req.typ.unwrap_or_default(),
            method: req.method.unwrap_or_default(),
        };
        respond(
            self.client
                .get_transactions(req.chain_id, &params, req.next_page_params.as_ref())
                .await,
        )
    }

    #[tool(description = "List latest 50 blocks")]
    async fn get_blocks(&self, Parameters(req): Parameters<BlocksRequest>) -> ToolResult {
        let params = BlocksParams {
            typ: req.typ.unwrap_or_default(),
        };
        respond(
            self.client
                .get_blocks(req.chain_id, &params, req.next_page_params.as_ref())
                .await,
        )
    }

    #[tool(description = "List latest 50 token transfers")]
    async fn get_transfers(&self, Parameters(req): Parameters<ChainPageRequest>) -> ToolResult {
        respond(
            self.client
                .get_transfers(req.chain_id, req.next_page_params.as_ref())
                .await,
        )
    }

    #[tool(description = "List latest 50 internal transactions")]
    async fn get_internal_transactions(
        &self,
        Parameters(req): Parameters<ChainPageRequest>,
    ) -> ToolResult {
        respond(
            self.client
                .get_internal_transactions(req.chain_id, req.next_page_params.as_ref())
                .await,
        )
    }

    #[tool(description = "List latest 50 withdrawals")]
    async fn get_withdrawals(&self, Parameters(req): Parameters<ChainPageRequest>) -> ToolResult {
        respond(
            self.client
                .get_withdrawals(req.chain_id, req.next_page_params.as_ref())
                .await,
        )
    }

    #[tool(description = "Get chain stats counters")]
    async fn get_chain_stats(&self, Parameters(req): Parameters<BaseRequest>) -> ToolResult {
        respond(self.client.get_stats(req.chain_id).await)
    }

    // ------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------

    #[tool(description = "Get transaction info")]
    async fn get_transaction_info(&self, Parameters(req): Parameters<TransactionRequest>) -> ToolResult {
        respond(
            self.client
                .get_transaction_info(req.chain_id, &req.transaction_hash)
                .await,
        )
    }

    #[tool(description = "Get transaction token transfers")]
    async fn get_transaction_token_transfers(
        &self,
        Parameters(req): Parameters<TransactionTokenTransfersRequest>,
    ) -> ToolResult {
        let params = TransactionTokenTransfersParams {
            typ: req.typ.unwrap_or_default(),
        };
        respond(
            self.client
                .get_transaction_token_transfers(
                    req.chain_id,
                    &req.transaction_hash,
                    &params,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "Get transaction internal transactions")]
    async fn get_transaction_internal_transactions(
        &self,
        Parameters(req): Parameters<TransactionPageRequest>,
    ) -> ToolResult {
        respond(
            self.client
                .get_transaction_internal_transactions(
                    req.chain_id,
                    &req.transaction_hash,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "Get transaction logs")]
    async fn get_transaction_logs(
        &self,
        Parameters(req): Parameters<TransactionPageRequest>,
    ) -> ToolResult {
        respond(
            self.client
                .get_transaction_logs(
                    req.chain_id,
                    &req.transaction_hash,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "Get transaction summary")]
    async fn get_transaction_summary(
        &self,
        Parameters(req): Parameters<TransactionRequest>,
    ) -> ToolResult {
        respond(
            self.client
                .get_transaction_summary(req.chain_id, &req.transaction_hash)
                .await,
        )
    }

    // ------------------------------------------------------------------
    // Blocks
    // ------------------------------------------------------------------

    #[tool(description = "Get block info")]
    async fn get_block_info(&self, Parameters(req): Parameters<BlockRequest>) -> ToolResult {
        respond(
            self.client
                .get_block_info(req.chain_id, &req.number_or_hash)
                .await,
        )
    }

    #[tool(description = "Get block transactions")]
    async fn get_block_transactions(&self, Parameters(req): Parameters<BlockPageRequest>) -> ToolResult {
        respond(
            self.client
                .get_block_transactions(
                    req.chain_id,
                    &req.number_or_hash,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "Get block withdrawals")]
    async fn get_block_withdrawals(&self, Parameters(req): Parameters<BlockPageRequest>) -> ToolResult {
        respond(
            self.client
                .get_block_withdrawals(
                    req.chain_id,
                    &req.number_or_hash,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    // ------------------------------------------------------------------
    // Addresses
    // ------------------------------------------------------------------

    #[tool(description = "List top 50 native coin holders")]
    async fn get_addresses(&self, Parameters(req): Parameters<ChainPageRequest>) -> ToolResult {
        respond(
            self.client
                .get_addresses(req.chain_id, req.next_page_params.as_ref())
                .await,
        )
    }

    #[tool(description = "Get address info")]
    async fn get_address_info(&self, Parameters(req): Parameters<AddressRequest>) -> ToolResult {
        respond(
            self.client
                .get_address_info(req.chain_id, &req.address_hash)
                .await,
        )
    }

    #[tool(description = "Get address counters")]
    async fn get_address_counters(&self, Parameters(req): Parameters<AddressRequest>) -> ToolResult {
        respond(
            self.client
                .get_address_counters(req.chain_id, &req.address_hash)
                .await,
        )
    }

    #[tool(description = "List latest 50 transactions of the address")]
    async fn get_address_transactions(
        &self,
        Parameters(req): Parameters<AddressFilterRequest>,
    ) -> ToolResult {
        let params = AddressTransactionsParams {
            filter: req.filter.unwrap_or_default(),
        };
        respond(
            self.client
                .get_address_transactions(
                    req.chain_id,
                    &req.address_hash,
                    &params,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "List latest 50 token transfers of the address")]
    async fn get_address_token_transfers(
        &self,
        Parameters(req): Parameters<AddressTokenTransfersRequest>,
    ) -> ToolResult {
        let params = AddressTokenTransfersParams {
            typ: req.typ.unwrap_or_default(),
            filter: req.filter.unwrap_or_default(),
            token: req.token.unwrap_or_default(),
        };
        respond(
            self.client
                .get_address_token_transfers(
                    req.chain_id,
                    &req.address_hash,
                    &params,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "List latest 50 internal transactions of the address")]
    async fn get_address_internal_transactions(
        &self,
        Parameters(req): Parameters<AddressFilterRequest>,
    ) -> ToolResult {
        let params = AddressInternalTransactionsParams {
            filter: req.filter.unwrap_or_default(),
        };
        respond(
            self.client
                .get_address_internal_transactions(
                    req.chain_id,
                    &req.address_hash,
                    &params,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "List latest 50 logs emitted by the address")]
    async fn get_address_logs(&self, Parameters(req): Parameters<AddressPageRequest>) -> ToolResult {
        respond(
            self.client
                .get_address_logs(
                    req.chain_id,
                    &req.address_hash,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "Get address tokens")]
    async fn get_address_tokens(&self, Parameters(req): Parameters<AddressTypedRequest>) -> ToolResult {
        let params = AddressTokensParams {
            typ: req.typ.unwrap_or_default(),
        };
        respond(
            self.client
                .get_address_tokens(
                    req.chain_id,
                    &req.address_hash,
                    &params,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "Get address coin balance history")]
    async fn get_address_coin_balance_history(
        &self,
        Parameters(req): Parameters<AddressPageRequest>,
    ) -> ToolResult {
        respond(
            self.client
                .get_address_coin_balance_history(
                    req.chain_id,
                    &req.address_hash,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "Get address coin balance history by day")]
    async fn get_address_coin_balance_history_by_day(
        &self,
        Parameters(req): Parameters<AddressRequest>,
    ) -> ToolResult {
        respond(
            self.client
                .get_address_coin_balance_history_by_day(req.chain_id, &req.address_hash)
                .await,
        )
    }

    #[tool(description = "Get address withdrawals")]
    async fn get_address_withdrawals(
        &self,
        Parameters(req): Parameters<AddressPageRequest>,
    ) -> ToolResult {
        respond(
            self.client
                .get_address_withdrawals(
                    req.chain_id,
                    &req.address_hash,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "Get address NFTs")]
    async fn get_address_nfts(&self, Parameters(req): Parameters<AddressTypedRequest>) -> ToolResult {
        let params = AddressNftsParams {
            typ: req.typ.unwrap_or_default(),
        };
        respond(
            self.client
                .get_address_nfts(
                    req.chain_id,
                    &req.address_hash,
                    &params,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "Get address NFT collections")]
    async fn get_address_nft_collections(
        &self,
        Parameters(req): Parameters<AddressTypedRequest>,
    ) -> ToolResult {
        let params = AddressNftsParams {
            typ: req.typ.unwrap_or_default(),
        };
        respond(
            self.client
                .get_address_nft_collections(
                    req.chain_id,
                    &req.address_hash,
                    &params,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    // ------------------------------------------------------------------
    // Tokens
    // ------------------------------------------------------------------

    #[tool(description = "List top 50 tokens with the most holders")]
    async fn get_tokens(&self, Parameters(req): Parameters<TokensRequest>) -> ToolResult {
        let params = TokensParams {
            q: req.q.unwrap_or_default(),
            typ: req.typ.unwrap_or_default(),
        };
        respond(
            self.client
                .get_tokens(req.chain_id, &params, req.next_page_params.as_ref())
                .await,
        )
    }

    #[tool(description = "Get token info")]
    async fn get_token_info(&self, Parameters(req): Parameters<TokenRequest>) -> ToolResult {
        respond(
            self.client
                .get_token_info(req.chain_id, &req.token_address)
                .await,
        )
    }

    #[tool(description = "List latest 50 transfers of the token")]
    async fn get_token_transfers(&self, Parameters(req): Parameters<TokenPageRequest>) -> ToolResult {
        respond(
            self.client
                .get_token_transfers(
                    req.chain_id,
                    &req.token_address,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "List top 50 holders of the token")]
    async fn get_token_holders(&self, Parameters(req): Parameters<TokenPageRequest>) -> ToolResult {
        respond(
            self.client
                .get_token_holders(
                    req.chain_id,
                    &req.token_address,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "Get token counters")]
    async fn get_token_counters(&self, Parameters(req): Parameters<TokenRequest>) -> ToolResult {
        respond(
            self.client
                .get_token_counters(req.chain_id, &req.token_address)
                .await,
        )
    }

    #[tool(description = "List first 50 instances of the NFT")]
    async fn get_token_instances(&self, Parameters(req): Parameters<TokenPageRequest>) -> ToolResult {
        respond(
            self.client
                .get_token_instances(
                    req.chain_id,
                    &req.token_address,
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "Get NFT instance info")]
    async fn get_token_instance_info(
        &self,
        Parameters(req): Parameters<TokenInstanceRequest>,
    ) -> ToolResult {
        respond(
            self.client
                .get_token_instance_info(
                    req.chain_id,
                    &req.token_address,
                    &req.token_id.to_string(),
                )
                .await,
        )
    }

    #[tool(description = "List latest 50 transfers of the NFT instance")]
    async fn get_token_instance_transfers(
        &self,
        Parameters(req): Parameters<TokenInstancePageRequest>,
    ) -> ToolResult {
        respond(
            self.client
                .get_token_instance_transfers(
                    req.chain_id,
                    &req.token_address,
                    &req.token_id.to_string(),
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "List first 50 holders of the NFT instance")]
    async fn get_token_instance_holders(
        &self,
        Parameters(req): Parameters<TokenInstancePageRequest>,
    ) -> ToolResult {
        respond(
            self.client
                .get_token_instance_holders(
                    req.chain_id,
                    &req.token_address,
                    &req.token_id.to_string(),
                    req.next_page_params.as_ref(),
                )
                .await,
        )
    }

    #[tool(description = "Get the NFT instance transfers count")]
    async fn get_token_instance_transfers_count(
        &self,
        Parameters(req): Parameters<TokenInstanceRequest>,
    ) -> ToolResult {
        respond(
            self.client
                .get_token_instance_transfers_count(
                    req.chain_id,
                    &req.token_address,
                    &req.token_id.to_string(),
                )
                .await,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::TokenId;
    use blockscout_core::{ClientConfig, RetryPolicy};
    use rmcp::model::ErrorCode;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_for(mock: &MockServer) -> OnChainServer {
        let client = BlockscoutClient::new(
            ClientConfig::default()
                .with_registry_url(format!("{}/api/chains", mock.uri()))
                .with_explorer_override(1, mock.uri())
                .with_retry(RetryPolicy::none()),
        )
        .unwrap();
        OnChainServer::new(client)
    }

    fn text_of(result: &CallToolResult) -> Value {
        let text = &result.content[0].as_text().unwrap().text;
        serde_json::from_str(text).unwrap()
    }

    #[tokio::test]
    async fn test_tool_count() {
        let mock = MockServer::start().await;
        let server = server_for(&mock);
        let tools = server.tools();
        assert_eq!(tools.len(), 40);

        let names: Vec<_> = tools.iter().map(|t| t.name.to_string()).collect();
        for expected in [
            "search",
            "get_merlin_chain_info",
            "get_chain_info",
            "get_chain_stats",
            "get_address_coin_balance_history_by_day",
            "get_token_instance_transfers_count",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing tool {expected}");
        }
        assert!(tools.iter().all(|t| t.description.is_some()));
    }

    #[tokio::test]
    async fn test_merlin_chain_info() {
        let mock = MockServer::start().await;
        let server = server_for(&mock);
        let result = server.get_merlin_chain_info().await.unwrap();
        assert_eq!(result.is_error, Some(false));

        let value = text_of(&result);
        assert_eq!(value["chain_id"], "4200");
        assert_eq!(value["native_token_symbol"], "BTC");
        assert_eq!(value["native_token_decimals"], "18");
        assert!(value["note"].as_str().unwrap().contains("10^18"));
    }

    #[tokio::test]
    async fn test_chain_stats_pretty_json() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_blocks": "100"})))
            .mount(&mock)
            .await;

        let server = server_for(&mock);
        let result = server
            .get_chain_stats(Parameters(BaseRequest { chain_id: 1 }))
            .await
            .unwrap();
        let text = &result.content[0].as_text().unwrap().text;
        assert!(text.contains('\n'));
        assert_eq!(text_of(&result)["total_blocks"], "100");
    }

    #[tokio::test]
    async fn test_filters_and_pagination_forwarded() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/addresses/0xabc/token-transfers"))
            .and(query_param("type", "ERC-20"))
            .and(query_param("filter", "to"))
            .and(query_param("block_number", "19000000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .expect(1)
            .mount(&mock)
            .await;

        let mut page = blockscout_core::PageParams::new();
        page.insert("block_number".into(), json!(19000000));

        let server = server_for(&mock);
        let result = server
            .get_address_token_transfers(Parameters(AddressTokenTransfersRequest {
                chain_id: 1,
                address_hash: "0xabc".into(),
                typ: Some("ERC-20".into()),
                filter: Some("to".into()),
                token: None,
                next_page_params: Some(page),
            }))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
    }

    #[tokio::test]
    async fn test_token_instance_id_in_path() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/tokens/0xnft/instances/42/transfers-count"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"transfers_count": 3})))
            .expect(1)
            .mount(&mock)
            .await;

        let server = server_for(&mock);
        let result = server
            .get_token_instance_transfers_count(Parameters(TokenInstanceRequest {
                chain_id: 1,
                token_address: "0xnft".into(),
                token_id: TokenId::Number(42),
            }))
            .await
            .unwrap();
        assert_eq!(text_of(&result)["transfers_count"], 3);
    }

    #[tokio::test]
    async fn test_chain_info_from_registry() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/chains/10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "OP Mainnet",
                "explorers": [{"url": "https://optimism.blockscout.com", "hostedBy": "blockscout"}]
            })))
            .expect(1)
            .mount(&mock)
            .await;

        let server = server_for(&mock);
        let result = server
            .get_chain_info(Parameters(BaseRequest { chain_id: 10 }))
            .await
            .unwrap();
        let value = text_of(&result);
        assert_eq!(value["chain_id"], 10);
        assert_eq!(value["explorer_url"], "https://optimism.blockscout.com/");
        assert_eq!(value["chain"]["name"], "OP Mainnet");
    }

    #[tokio::test]
    async fn test_chain_info_for_override() {
        let mock = MockServer::start().await;
        let server = server_for(&mock);
        let result = server
            .get_chain_info(Parameters(BaseRequest { chain_id: 4200 }))
            .await
            .unwrap();
        let value = text_of(&result);
        assert_eq!(value["explorer_url"], "https://scan.merlinverify.com/");
        assert!(value["chain"].is_null());
    }

    #[tokio::test]
    async fn test_unknown_chain_maps_to_not_found() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/chains/999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock)
            .await;

        let server = server_for(&mock);
        let err = server
            .get_chain_stats(Parameters(BaseRequest { chain_id: 999 }))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_empty_search_is_invalid_params() {
        let mock = MockServer::start().await;
        let server = server_for(&mock);
        let err = server
            .search(Parameters(SearchRequest {
                chain_id: 1,
                q: "  ".into(),
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_internal_error() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/transactions/0xabc"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock)
            .await;

        let server = server_for(&mock);
        let err = server
            .get_transaction_info(Parameters(TransactionRequest {
                chain_id: 1,
                transaction_hash: "0xabc".into(),
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("500"));
    }
}
