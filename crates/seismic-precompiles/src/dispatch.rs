//! Shared raw `eth_call` dispatch for every precompile client: no `from`
//! field (the node rejects unsigned calls carrying a non-zero sender),
//! a plain `to`/`data` object, always against `"latest"`.

use crate::error::PrecompileError;
use alloy_primitives::{Address, Bytes};
use seismic_rpc::SeismicTransport;
use serde_json::json;

/// Calls the precompile at `address` with `input`, returning its raw
/// output bytes.
pub(crate) async fn call_precompile(
    transport: &dyn SeismicTransport,
    address: Address,
    input: &[u8],
) -> Result<Vec<u8>, PrecompileError> {
    let call = json!({ "to": address, "data": Bytes::copy_from_slice(input) });
    let result = transport.call("eth_call", json!([call, "latest"])).await?;
    let hex = result
        .as_str()
        .ok_or_else(|| PrecompileError::InsufficientData(format!("expected a hex string, got {result}")))?;
    hex::decode(hex.trim_start_matches("0x"))
        .map_err(|e| PrecompileError::InsufficientData(format!("not a hex byte string: {e}")))
}
