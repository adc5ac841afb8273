use crate::{dispatch::call_precompile, error::PrecompileError, gas::SECP256K1_SIG_BASE_GAS};
use alloy_primitives::{address, keccak256, Address, B256};
use seismic_primitives::Bytes32;
use seismic_rpc::SeismicTransport;

/// The on-chain secp256k1 signing precompile, at `0x69`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Sign;

impl Secp256k1Sign {
    /// The precompile's fixed address.
    pub const ADDRESS: Address = address!("0000000000000000000000000000000000000069");

    /// EIP-191 personal-sign prefix hash: `keccak256("\x19Ethereum Signed
    /// Message:\n" ‖ len(message) ‖ message)`.
    pub fn personal_sign_hash(message: &[u8]) -> B256 {
        let mut prefixed = format!("\x19Ethereum Signed Message:\n{}", message.len()).into_bytes();
        prefixed.extend(message);
        keccak256(prefixed)
    }

    /// Packs `sk ‖ msghash`: the ABI encoding of `(bytes32, bytes32)` is
    /// their 32-byte words concatenated in order, with no offsets (both
    /// are static types).
    pub fn encode_input(sk: &Bytes32, msghash: &B256) -> Vec<u8> {
        let mut input = Vec::with_capacity(64);
        input.extend(sk.as_slice());
        input.extend(msghash.as_slice());
        input
    }

    /// Execution gas cost: fixed, independent of message length since the
    /// signing operation itself doesn't scale with input size.
    pub fn gas_cost() -> u64 {
        SECP256K1_SIG_BASE_GAS
    }

    /// Calls the precompile against an already-hashed digest.
    pub async fn call_digest(
        transport: &dyn SeismicTransport,
        sk: &Bytes32,
        msghash: &B256,
    ) -> Result<Vec<u8>, PrecompileError> {
        let input = Self::encode_input(sk, msghash);
        call_precompile(transport, Self::ADDRESS, &input).await
    }

    /// Calls the precompile against a plain message, pre-hashing it with
    /// EIP-191 personal-sign first.
    pub async fn call_personal_sign(
        transport: &dyn SeismicTransport,
        sk: &Bytes32,
        message: &[u8],
    ) -> Result<Vec<u8>, PrecompileError> {
        let msghash = Self::personal_sign_hash(message);
        Self::call_digest(transport, sk, &msghash).await
    }
}
