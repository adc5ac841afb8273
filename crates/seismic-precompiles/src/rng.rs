use crate::{
    dispatch::call_precompile,
    error::PrecompileError,
    gas::{calc_linear_gas_cost_u32, RNG_INIT_BASE_GAS, STROBE_128_WORD_GAS},
};
use alloy_primitives::{address, Address, U256};
use seismic_rpc::SeismicTransport;

/// The enclave random number generator precompile, at `0x64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rng;

impl Rng {
    /// The precompile's fixed address.
    pub const ADDRESS: Address = address!("0000000000000000000000000000000000000064");

    /// Packs a request for `length` random bytes (`1..=32`), with optional
    /// personalization bytes mixed into the enclave's draw.
    pub fn encode_input(length: u8, personalization: &[u8]) -> Vec<u8> {
        let mut input = Vec::with_capacity(4 + personalization.len());
        input.extend((length as u32).to_be_bytes());
        input.extend(personalization);
        input
    }

    /// Execution gas cost: a fixed init cost over `personalization`'s
    /// length plus a linear fill cost over `num_bytes`, both billed per
    /// 32-byte word.
    pub fn gas_cost(num_bytes: u8, personalization: &[u8]) -> u64 {
        let init_cost =
            calc_linear_gas_cost_u32(personalization.len(), RNG_INIT_BASE_GAS, STROBE_128_WORD_GAS);
        let fill_cost = calc_linear_gas_cost_u32(num_bytes as usize, 0, STROBE_128_WORD_GAS);
        init_cost + fill_cost
    }

    /// Decodes the enclave's response: a big-endian integer, right-aligned
    /// and zero-padded to 32 bytes.
    pub fn decode_output(output: &[u8]) -> Result<U256, PrecompileError> {
        if output.len() > 32 {
            return Err(PrecompileError::InsufficientData(format!(
                "rng output longer than 32 bytes: {}",
                output.len()
            )));
        }
        Ok(U256::from_be_slice(output))
    }

    /// Calls the precompile and decodes its response.
    pub async fn call(
        transport: &dyn SeismicTransport,
        length: u8,
        personalization: &[u8],
    ) -> Result<U256, PrecompileError> {
        let input = Self::encode_input(length, personalization);
        let output = call_precompile(transport, Self::ADDRESS, &input).await?;
        Self::decode_output(&output)
    }
}
