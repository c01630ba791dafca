use thiserror::Error;

/// Service-specific error types
///
/// This enum defines all possible errors that can occur while fetching a balance.
/// Each variant maps to one stage of the query: the HTTP transport, the JSON-RPC
/// response body, or the hex-encoded result value.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Transport-level failure reaching the RPC endpoint
    #[error("RPC network error: {0}")]
    Network(String),

    /// Response body is not valid JSON, carries an RPC error, or lacks a result
    #[error("Malformed RPC response: {0}")]
    MalformedResponse(String),

    /// Result field is not a valid hexadecimal-encoded integer
    #[error("Invalid hex in RPC result: {0}")]
    InvalidHex(String),
}
