use crate::{
    dispatch::call_precompile,
    error::PrecompileError,
    gas::{HKDF_EXPAND_COST_GAS, SHARED_SECRET_GAS},
};
use alloy_primitives::{address, Address};
use seismic_primitives::{Bytes32, CompressedPublicKey};
use seismic_rpc::SeismicTransport;

/// The on-chain ECDH precompile, at `0x65`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ecdh;

impl Ecdh {
    /// The precompile's fixed address.
    pub const ADDRESS: Address = address!("0000000000000000000000000000000000000065");

    /// Packs `secret ‖ pubkey`: 32 bytes then 33 bytes.
    pub fn encode_input(secret: &Bytes32, pubkey: &CompressedPublicKey) -> Vec<u8> {
        let mut input = Vec::with_capacity(65);
        input.extend(secret.as_slice());
        input.extend(pubkey.as_slice());
        input
    }

    /// Execution gas cost: fixed, since the shared-secret computation and
    /// the HKDF expand step that follows it don't depend on the input.
    pub fn gas_cost() -> u64 {
        SHARED_SECRET_GAS + HKDF_EXPAND_COST_GAS
    }

    /// Calls the precompile, returning its raw output bytes.
    pub async fn call(
        transport: &dyn SeismicTransport,
        secret: &Bytes32,
        pubkey: &CompressedPublicKey,
    ) -> Result<Vec<u8>, PrecompileError> {
        let input = Self::encode_input(secret, pubkey);
        call_precompile(transport, Self::ADDRESS, &input).await
    }
}
