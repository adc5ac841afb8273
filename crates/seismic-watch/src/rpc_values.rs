//! Small helpers for picking apart the JSON values a seismic node returns
//! for `eth_blockNumber`/`eth_getLogs`.

use crate::error::WatchError;
use alloy_primitives::{Address, B256};
use serde_json::Value;

pub(crate) fn hex_u64(value: &Value) -> Result<u64, WatchError> {
    let s = hex_str(value)?;
    u64::from_str_radix(s.trim_start_matches("0x"), 16)
        .map_err(|e| WatchError::InsufficientData(format!("not a hex u64: {e}")))
}

pub(crate) fn hex_b256(value: &Value) -> Result<B256, WatchError> {
    let s = hex_str(value)?;
    s.parse::<B256>().map_err(|e| WatchError::InsufficientData(format!("not a 32-byte hash: {e}")))
}

pub(crate) fn hex_address(value: &Value) -> Result<Address, WatchError> {
    // Indexed address topics are left-padded to 32 bytes; the address is
    // the low 20 bytes.
    let hash = hex_b256(value)?;
    Ok(Address::from_slice(&hash[12..]))
}

pub(crate) fn hex_bytes(value: &Value) -> Result<Vec<u8>, WatchError> {
    let s = hex_str(value)?;
    hex::decode(s.trim_start_matches("0x"))
        .map_err(|e| WatchError::InsufficientData(format!("not a hex byte string: {e}")))
}

fn hex_str(value: &Value) -> Result<&str, WatchError> {
    value
        .as_str()
        .ok_or_else(|| WatchError::InsufficientData(format!("expected a hex string, got {value}")))
}

pub(crate) fn field<'a>(value: &'a Value, name: &str) -> Result<&'a Value, WatchError> {
    value.get(name).ok_or_else(|| WatchError::InsufficientData(format!("log missing `{name}`")))
}
