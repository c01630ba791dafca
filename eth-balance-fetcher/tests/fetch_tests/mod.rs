//! Integration tests for balance fetching against a mocked JSON-RPC endpoint

use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::U256;

use eth_balance_fetcher::{
    error::ServiceError,
    fetcher::BalanceFetcher,
    rpc::EthereumClient,
};

use helpers::spawn_mock_rpc;

const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Build a fetcher pointed at the given URL with a short timeout.
fn fetcher_for(url: &str) -> BalanceFetcher {
    let client = EthereumClient::new(url, Duration::from_secs(5)).unwrap();
    BalanceFetcher::new(Arc::new(client))
}

#[tokio::test]
async fn test_fetch_balance_two_ether() {
    // Mock a node holding exactly 2 ETH for the address.
    let (server, url) =
        spawn_mock_rpc(r#"{"jsonrpc":"2.0","id":0,"result":"0x1bc16d674ec80000"}"#);

    let fetcher = fetcher_for(&url);
    let reading = fetcher.fetch_balance(TEST_ADDRESS).await.unwrap();

    assert_eq!(reading.wei, U256::from(2_000_000_000_000_000_000u64));
    assert_eq!(reading.ether, "2.0");

    // Verify the wire format of the request the client sent.
    let request_body = server.join().unwrap();
    let request: serde_json::Value = serde_json::from_str(&request_body)
        .expect("Failed to parse request body as JSON");

    assert_eq!(request["jsonrpc"], "2.0");
    assert_eq!(request["method"], "eth_getBalance");
    assert_eq!(request["params"][0], TEST_ADDRESS);
    assert_eq!(request["params"][1], "latest");
    assert!(request["id"].is_number());
}

#[tokio::test]
async fn test_fetch_balance_one_ether() {
    let (server, url) =
        spawn_mock_rpc(r#"{"jsonrpc":"2.0","id":0,"result":"0xde0b6b3a7640000"}"#);

    let fetcher = fetcher_for(&url);
    let reading = fetcher.fetch_balance(TEST_ADDRESS).await.unwrap();

    assert_eq!(reading.wei, U256::from(1_000_000_000_000_000_000u64));
    assert_eq!(reading.ether, "1.0");

    server.join().unwrap();
}

#[tokio::test]
async fn test_fetch_balance_zero() {
    let (server, url) = spawn_mock_rpc(r#"{"jsonrpc":"2.0","id":0,"result":"0x0"}"#);

    let fetcher = fetcher_for(&url);
    let reading = fetcher.fetch_balance(TEST_ADDRESS).await.unwrap();

    assert_eq!(reading.wei, U256::ZERO);
    assert_eq!(reading.ether, "0.0");

    server.join().unwrap();
}

#[tokio::test]
async fn test_missing_result_is_malformed_response() {
    // An endpoint that answers with an error body and no result field.
    let (server, url) = spawn_mock_rpc(r#"{"error":"bad request"}"#);

    let fetcher = fetcher_for(&url);
    let err = fetcher.fetch_balance(TEST_ADDRESS).await.unwrap_err();

    assert!(
        matches!(err, ServiceError::MalformedResponse(_)),
        "expected MalformedResponse, got: {:?}",
        err
    );

    server.join().unwrap();
}

#[tokio::test]
async fn test_rpc_error_object_is_malformed_response() {
    let (server, url) = spawn_mock_rpc(
        r#"{"jsonrpc":"2.0","id":0,"error":{"code":-32602,"message":"invalid address"}}"#,
    );

    let fetcher = fetcher_for(&url);
    let err = fetcher.fetch_balance(TEST_ADDRESS).await.unwrap_err();

    assert!(matches!(err, ServiceError::MalformedResponse(_)));

    server.join().unwrap();
}

#[tokio::test]
async fn test_non_json_body_is_malformed_response() {
    let (server, url) = spawn_mock_rpc("upstream exploded");

    let fetcher = fetcher_for(&url);
    let err = fetcher.fetch_balance(TEST_ADDRESS).await.unwrap_err();

    assert!(matches!(err, ServiceError::MalformedResponse(_)));

    server.join().unwrap();
}

#[tokio::test]
async fn test_invalid_hex_result() {
    let (server, url) = spawn_mock_rpc(r#"{"jsonrpc":"2.0","id":0,"result":"0xnothex"}"#);

    let fetcher = fetcher_for(&url);
    let err = fetcher.fetch_balance(TEST_ADDRESS).await.unwrap_err();

    assert!(matches!(err, ServiceError::InvalidHex(_)));

    server.join().unwrap();
}

#[tokio::test]
async fn test_unprefixed_hex_result_is_invalid() {
    let (server, url) = spawn_mock_rpc(r#"{"jsonrpc":"2.0","id":0,"result":"de0b6b3a7640000"}"#);

    let fetcher = fetcher_for(&url);
    let err = fetcher.fetch_balance(TEST_ADDRESS).await.unwrap_err();

    assert!(matches!(err, ServiceError::InvalidHex(_)));

    server.join().unwrap();
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Bind a free port, then drop the listener so nothing answers there.
    let listener = TcpListener::bind("127.0.0.1:0").expect("Could not bind to port");
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let fetcher = fetcher_for(&url);
    let err = fetcher.fetch_balance(TEST_ADDRESS).await.unwrap_err();

    assert!(
        matches!(err, ServiceError::Network(_)),
        "expected Network, got: {:?}",
        err
    );
}
