use crate::{
    dispatch::call_precompile,
    error::PrecompileError,
    gas::{calc_linear_gas_cost, HKDF_EXPAND_COST_GAS, SHA256_PER_WORD_GAS, SHARED_SECRET_GAS},
};
use alloy_primitives::{address, Address};
use seismic_rpc::SeismicTransport;

/// The on-chain HKDF precompile, at `0x68`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hkdf;

impl Hkdf {
    /// The precompile's fixed address.
    pub const ADDRESS: Address = address!("0000000000000000000000000000000000000068");

    /// The input is the raw IKM bytes, unpacked.
    pub fn encode_input(ikm: &[u8]) -> Vec<u8> {
        ikm.to_vec()
    }

    /// Execution gas cost: two SHA-256 compressions' worth of linear cost
    /// over `ikm`'s length (extract, then expand), plus the expand step's
    /// fixed overhead.
    pub fn gas_cost(ikm_len: usize) -> u64 {
        let linear = calc_linear_gas_cost(32, ikm_len, SHARED_SECRET_GAS, SHA256_PER_WORD_GAS);
        2 * linear + HKDF_EXPAND_COST_GAS
    }

    /// Calls the precompile, returning the derived key material.
    pub async fn call(transport: &dyn SeismicTransport, ikm: &[u8]) -> Result<Vec<u8>, PrecompileError> {
        let input = Self::encode_input(ikm);
        call_precompile(transport, Self::ADDRESS, &input).await
    }
}
