// Export modules for integration testing
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod rpc;
pub mod units;
