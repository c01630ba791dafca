use std::time::Duration;

use alloy_primitives::U256;
use tracing::debug;

use crate::error::ServiceError;
use crate::models::jsonrpc::{parse_hex_u256, JsonRpcRequest, JsonRpcResponse};

/// Ethereum RPC client for balance queries
///
/// This client speaks JSON-RPC 2.0 over raw HTTP POST with serde_json rather
/// than pulling in a full provider stack, keeping the binary lean. One
/// outbound call per invocation; no connection state beyond reqwest's pool.
#[derive(Clone)]
pub struct EthereumClient {
    /// URL of the JSON-RPC endpoint, including any embedded access key
    rpc_url: String,

    /// Underlying HTTP client, configured with the request timeout
    client: reqwest::Client,
}

impl EthereumClient {
    /// Create a new Ethereum client for the given endpoint
    ///
    /// # Arguments
    ///
    /// * `rpc_url` - URL of the Ethereum RPC endpoint
    /// * `timeout` - Upper bound on the full request round trip
    ///
    /// # Returns
    ///
    /// * `Result<Self, ServiceError>` - New client instance or an error
    pub fn new(rpc_url: &str, timeout: Duration) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Network(format!("building HTTP client: {}", e)))?;

        Ok(Self {
            rpc_url: rpc_url.to_string(),
            client,
        })
    }

    /// Query the wei balance of `address` at the latest block
    ///
    /// Sends a single `eth_getBalance` request and decodes the hex result.
    /// Failures are not retried; the caller observes them directly.
    ///
    /// # Arguments
    ///
    /// * `address` - The account address to query (validated by the endpoint,
    ///   not locally)
    ///
    /// # Returns
    ///
    /// * `Result<U256, ServiceError>` - Balance in wei or an error
    pub async fn get_balance(&self, address: &str) -> Result<U256, ServiceError> {
        let request = JsonRpcRequest::balance_of(address);
        debug!("Sending eth_getBalance request to {}", self.rpc_url);

        // reqwest's .json() sets the content-type: application/json header
        let response = self
            .client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ServiceError::Network(format!("connecting to {}: {}", self.rpc_url, e))
            })?;

        let body: JsonRpcResponse<String> = response
            .json()
            .await
            .map_err(|e| ServiceError::MalformedResponse(format!("parsing RPC response: {}", e)))?;

        if let Some(err) = body.error {
            return Err(ServiceError::MalformedResponse(format!("RPC error: {}", err)));
        }

        let result = body.result.ok_or_else(|| {
            ServiceError::MalformedResponse("response is missing the result field".to_string())
        })?;

        debug!("Received balance result: {}", result);
        parse_hex_u256(&result).map_err(ServiceError::InvalidHex)
    }
}
