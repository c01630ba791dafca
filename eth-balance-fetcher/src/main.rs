use crate::fetcher::BalanceFetcher;
use crate::rpc::EthereumClient;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod fetcher;
mod models;
mod rpc;
mod units;

/// Application entry point
///
/// This is the main function that:
/// 1. Sets up logging
/// 2. Loads configuration
/// 3. Creates the RPC client and balance fetcher
/// 4. Performs one balance query and prints both denominations
#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Configure logging with appropriate log levels for different components
    // - Info level for our service
    // - Lower levels for dependencies to reduce noise
    let filter = EnvFilter::from_default_env()
        .add_directive("eth_balance_fetcher=info".parse().unwrap())
        .add_directive("hyper=warn".parse().unwrap())
        .add_directive("reqwest=warn".parse().unwrap());

    // Initialize the tracing subscriber with our filter
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    // Load configuration from environment variables
    let config = config::Config::from_env()?;

    // Create the Ethereum RPC client with the configured timeout
    let client = EthereumClient::new(
        &config.ethereum_rpc_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;

    // Build the fetcher and perform a single balance query
    let fetcher = BalanceFetcher::new(Arc::new(client));
    let reading = fetcher.fetch_balance(&config.ethereum_address).await?;

    println!("{} wei", reading.wei);
    println!("{} ETH", reading.ether);

    Ok(())
}
