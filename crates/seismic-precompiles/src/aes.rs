use crate::{
    dispatch::call_precompile,
    error::PrecompileError,
    gas::{calc_linear_gas_cost, AES_GCM_BASE_GAS, AES_GCM_PER_BLOCK_GAS},
};
use alloy_primitives::{address, Address};
use seismic_primitives::{Bytes32, EncryptionNonce};
use seismic_rpc::SeismicTransport;

fn encode_keyed_input(key: &Bytes32, nonce: &EncryptionNonce, payload: &[u8]) -> Vec<u8> {
    let mut input = Vec::with_capacity(32 + 12 + payload.len());
    input.extend(key.as_slice());
    input.extend(nonce.as_slice());
    input.extend(payload);
    input
}

/// Execution gas cost: linear in the payload length, billed per 16-byte
/// block. Shared by both AES-GCM directions.
fn aes_gas_cost(payload_len: usize) -> u64 {
    calc_linear_gas_cost(16, payload_len, AES_GCM_BASE_GAS, AES_GCM_PER_BLOCK_GAS)
}

/// The on-chain AES-256-GCM encrypt precompile, at `0x66`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesEncrypt;

impl AesEncrypt {
    /// The precompile's fixed address.
    pub const ADDRESS: Address = address!("0000000000000000000000000000000000000066");

    /// Packs `key ‖ nonce ‖ plaintext`.
    pub fn encode_input(key: &Bytes32, nonce: &EncryptionNonce, plaintext: &[u8]) -> Vec<u8> {
        encode_keyed_input(key, nonce, plaintext)
    }

    /// Execution gas cost for encrypting `plaintext_len` bytes.
    pub fn gas_cost(plaintext_len: usize) -> u64 {
        aes_gas_cost(plaintext_len)
    }

    /// Calls the precompile, returning the ciphertext (including tag).
    pub async fn call(
        transport: &dyn SeismicTransport,
        key: &Bytes32,
        nonce: &EncryptionNonce,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, PrecompileError> {
        let input = Self::encode_input(key, nonce, plaintext);
        call_precompile(transport, Self::ADDRESS, &input).await
    }
}

/// The on-chain AES-256-GCM decrypt precompile, at `0x67`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesDecrypt;

impl AesDecrypt {
    /// The precompile's fixed address.
    pub const ADDRESS: Address = address!("0000000000000000000000000000000000000067");

    /// Packs `key ‖ nonce ‖ ciphertext`.
    pub fn encode_input(key: &Bytes32, nonce: &EncryptionNonce, ciphertext: &[u8]) -> Vec<u8> {
        encode_keyed_input(key, nonce, ciphertext)
    }

    /// Execution gas cost for decrypting `ciphertext_len` bytes.
    pub fn gas_cost(ciphertext_len: usize) -> u64 {
        aes_gas_cost(ciphertext_len)
    }

    /// Calls the precompile, returning the recovered plaintext.
    pub async fn call(
        transport: &dyn SeismicTransport,
        key: &Bytes32,
        nonce: &EncryptionNonce,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, PrecompileError> {
        let input = Self::encode_input(key, nonce, ciphertext);
        call_precompile(transport, Self::ADDRESS, &input).await
    }
}
