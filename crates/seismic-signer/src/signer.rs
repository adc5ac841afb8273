//! A local secp256k1 signer for `ShieldedTx` digests.
//!
//! Unlike a standard Ethereum signer, the chain never folds `chain_id`
//! into `v` (no EIP-155): the recovery id is returned as a bare
//! `y_parity ∈ {0, 1}`.

use crate::error::SignerError;
use alloy_primitives::{keccak256, Address, B256};
use secp256k1::{ecdsa::RecoveryId, Message, PublicKey, SecretKey, SECP256K1};
use seismic_consensus::Signature;

/// A signer backed by a raw secp256k1 private key held in memory.
#[derive(Clone)]
pub struct ShieldedSigner {
    secret_key: SecretKey,
    address: Address,
}

impl std::fmt::Debug for ShieldedSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShieldedSigner").field("address", &self.address).finish_non_exhaustive()
    }
}

impl ShieldedSigner {
    /// Builds a signer from a raw 32-byte secp256k1 scalar.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, SignerError> {
        let secret_key = SecretKey::from_slice(bytes)?;
        Ok(Self::from_secret_key(secret_key))
    }

    /// Builds a signer from a hex-encoded (with or without `0x`) private
    /// key.
    pub fn from_hex(hex_key: &str) -> Result<Self, SignerError> {
        let bytes = hex::decode(hex_key.trim_start_matches("0x"))?;
        let secret_key = SecretKey::from_slice(&bytes)?;
        Ok(Self::from_secret_key(secret_key))
    }

    /// Generates a fresh random signer.
    pub fn random() -> Self {
        let (secret_key, _) = SECP256K1.generate_keypair(&mut rand::thread_rng());
        Self::from_secret_key(secret_key)
    }

    fn from_secret_key(secret_key: SecretKey) -> Self {
        let address = secret_key_to_address(&secret_key);
        Self { secret_key, address }
    }

    /// The address derived from this signer's public key: the low 20
    /// bytes of `keccak256(uncompressed_public_key[1..])`.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Signs a 32-byte digest, returning a `y_parity`-only signature
    /// (`v ∈ {0, 1}`, no EIP-155 chain folding).
    pub fn sign_hash(&self, hash: &B256) -> Signature {
        let message = Message::from_digest(hash.0);
        let recoverable = SECP256K1.sign_ecdsa_recoverable(&message, &self.secret_key);
        let (recovery_id, data) = recoverable.serialize_compact();

        let r = alloy_primitives::U256::from_be_slice(&data[..32]);
        let s = alloy_primitives::U256::from_be_slice(&data[32..64]);
        let v = if recovery_id == RecoveryId::One { 1 } else { 0 };
        Signature { v, r, s }
    }
}

fn secret_key_to_address(secret_key: &SecretKey) -> Address {
    let public_key = PublicKey::from_secret_key(SECP256K1, secret_key);
    let uncompressed = public_key.serialize_uncompressed();
    let hash = keccak256(&uncompressed[1..]);
    Address::from_slice(&hash[12..])
}
