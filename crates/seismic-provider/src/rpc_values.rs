//! Small helpers for picking apart the JSON values a seismic node returns
//! for the handful of `eth_*`/`seismic_*` methods this crate calls.

use crate::error::ProviderError;
use alloy_primitives::B256;
use serde_json::Value;

/// Parses a `0x`-prefixed quantity string into a `u64`.
pub(crate) fn hex_u64(value: &Value) -> Result<u64, ProviderError> {
    let s = hex_str(value)?;
    u64::from_str_radix(s.trim_start_matches("0x"), 16)
        .map_err(|e| ProviderError::InsufficientData(format!("not a hex u64: {e}")))
}

/// Parses a `0x`-prefixed quantity string into a `u128`.
pub(crate) fn hex_u128(value: &Value) -> Result<u128, ProviderError> {
    let s = hex_str(value)?;
    u128::from_str_radix(s.trim_start_matches("0x"), 16)
        .map_err(|e| ProviderError::InsufficientData(format!("not a hex u128: {e}")))
}

/// Parses a `0x`-prefixed 32-byte hash string.
pub(crate) fn hex_b256(value: &Value) -> Result<B256, ProviderError> {
    let s = hex_str(value)?;
    s.parse::<B256>().map_err(|e| ProviderError::InsufficientData(format!("not a 32-byte hash: {e}")))
}

/// Parses a `0x`-prefixed byte string into raw bytes.
pub(crate) fn hex_bytes(value: &Value) -> Result<Vec<u8>, ProviderError> {
    let s = hex_str(value)?;
    hex::decode(s.trim_start_matches("0x"))
        .map_err(|e| ProviderError::InsufficientData(format!("not a hex byte string: {e}")))
}

fn hex_str(value: &Value) -> Result<&str, ProviderError> {
    value
        .as_str()
        .ok_or_else(|| ProviderError::InsufficientData(format!("expected a hex string, got {value}")))
}

/// Pulls a named field out of a JSON object response, erroring with
/// context if it's missing.
pub(crate) fn field<'a>(value: &'a Value, name: &str) -> Result<&'a Value, ProviderError> {
    value
        .get(name)
        .ok_or_else(|| ProviderError::InsufficientData(format!("response missing `{name}`")))
}
