use eyre::Result;
use serde::Deserialize;
use std::env;

/// Service configuration structure
///
/// This structure contains all the configuration parameters for the balance
/// fetcher. It handles loading values from environment variables with
/// appropriate defaults, and is passed explicitly to the components that need
/// it; there is no process-wide mutable state.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Ethereum RPC endpoint URL, including any embedded access key
    pub ethereum_rpc_url: String,

    /// Account address whose balance is queried
    pub ethereum_address: String,

    /// HTTP request timeout in seconds (default: 30)
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This method reads configuration from environment variables,
    /// using default values when variables are not defined.
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - Configuration structure or error
    ///
    /// # Environment Variables
    ///
    /// * `ETHEREUM_RPC_URL` - Ethereum RPC URL (default: "http://localhost:8545")
    /// * `ETHEREUM_ADDRESS` - Account address to query (required)
    /// * `REQUEST_TIMEOUT_SECS` - HTTP request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (useful for development)
        let _ = dotenv::dotenv();

        // Create configuration with values from environment or defaults
        Ok(Config {
            ethereum_rpc_url: env::var("ETHEREUM_RPC_URL")
                .unwrap_or_else(|_| "http://localhost:8545".to_string()),
            ethereum_address: env::var("ETHEREUM_ADDRESS")
                .map_err(|_| eyre::eyre!("ETHEREUM_ADDRESS must be set"))?,
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()?,
        })
    }
}
