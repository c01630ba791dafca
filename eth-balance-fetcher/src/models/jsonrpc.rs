use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 request structure
///
/// This structure represents a standard JSON-RPC request with generic parameters.
/// It is serialized as-is into the HTTP POST body.
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<T> {
    /// JSON-RPC protocol version (always "2.0")
    pub jsonrpc: String,

    /// Method name to call
    pub method: String,

    /// Method parameters
    pub params: T,

    /// Request identifier
    pub id: u64,
}

/// JSON-RPC 2.0 response structure
///
/// This structure represents a JSON-RPC response with a generic result.
/// All fields are optional so that non-conforming bodies still deserialize;
/// the caller decides what a usable response looks like.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    /// JSON-RPC protocol version
    #[serde(default)]
    pub jsonrpc: Option<String>,

    /// Request identifier (matching the request)
    #[serde(default)]
    pub id: Option<serde_json::Value>,

    /// Method result, present on success
    #[serde(default)]
    pub result: Option<T>,

    /// Error details, present on failure
    ///
    /// Conforming servers send an object with `code` and `message`, but some
    /// endpoints answer with a bare string. Kept as a raw value so either
    /// shape survives deserialization.
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl JsonRpcRequest<Vec<String>> {
    /// Build an `eth_getBalance` request for `address` at the latest block.
    ///
    /// # Arguments
    ///
    /// * `address` - The account address to query
    ///
    /// # Returns
    ///
    /// * A request ready to be serialized into an HTTP POST body
    pub fn balance_of(address: &str) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: "eth_getBalance".to_string(),
            params: vec![address.to_string(), "latest".to_string()],
            id: 0,
        }
    }
}

/// Helper functions to parse hex values from JSON-RPC responses using alloy primitives.

/// Parse a hexadecimal string into a `U256` value.
///
/// Expects a string starting with "0x".
///
/// # Arguments
///
/// * `hex` - The hexadecimal string
///
/// # Returns
///
/// * `Result<U256, String>` - Parsed value or error message
pub fn parse_hex_u256(hex: &str) -> Result<U256, String> {
    let hex = hex
        .strip_prefix("0x")
        .ok_or_else(|| "Hex value must start with 0x".to_string())?;
    U256::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex value: {}", e))
}

/// Format a `U256` value into a hexadecimal string prefixed with "0x".
///
/// # Arguments
///
/// * `value` - The U256 value to format
///
/// # Returns
///
/// * String representation of the value in hexadecimal
pub fn format_hex_u256(value: U256) -> String {
    format!("0x{:x}", value)
}
