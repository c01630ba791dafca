use crate::{error::ServiceError, rpc::EthereumClient, units};
use alloy_primitives::U256;
use std::sync::Arc;
use tracing::{debug, instrument};

/// A balance read from the chain, in both denominations
///
/// Holds the raw wei value and its exact decimal ether rendering. Both are
/// derived from the same RPC result within a single request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceReading {
    /// Balance in wei, the smallest unit
    pub wei: U256,

    /// Balance in ether, rendered as an exact decimal string
    pub ether: String,
}

/// Balance fetcher service that queries account balances over JSON-RPC
///
/// This service composes a single balance query with the wei-to-ether unit
/// conversion. Each invocation is independent and stateless.
#[derive(Clone)]
pub struct BalanceFetcher {
    /// Ethereum client for interacting with the blockchain
    pub eth_client: Arc<EthereumClient>,
}

impl BalanceFetcher {
    /// Creates a new balance fetcher with the provided client
    pub fn new(eth_client: Arc<EthereumClient>) -> Self {
        Self { eth_client }
    }

    /// Fetch the balance of `address` at the latest block
    ///
    /// Performs exactly one outbound RPC call and converts the result into
    /// both denominations. Errors propagate directly without retry.
    ///
    /// # Arguments
    ///
    /// * `address` - The account address to query
    ///
    /// # Returns
    ///
    /// * `Result<BalanceReading, ServiceError>` - The balance reading or an error
    #[instrument(skip(self), err)]
    pub async fn fetch_balance(&self, address: &str) -> Result<BalanceReading, ServiceError> {
        debug!("Fetching balance for {}", address);

        let wei = self.eth_client.get_balance(address).await?;
        debug!("Balance for {}: {} wei", address, wei);

        Ok(BalanceReading {
            wei,
            ether: units::format_ether(wei),
        })
    }
}
