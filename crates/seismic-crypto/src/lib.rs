//! Key agreement, AEAD, and nonce generation for the Seismic
//! shielded-transaction pipeline.
//!
//! This crate has no I/O: [`EncryptionState`] is built once per session
//! from a TEE public key fetched by the caller, then used to encrypt and
//! decrypt every transaction/read in that session.

mod aead;
mod ecdh;
mod error;
mod nonce_gen;

pub use aead::{decrypt, encrypt};
pub use ecdh::{
    address_from_signing_key, generate_aes_key, generate_aes_key_for_session, EphemeralKeypair,
};
pub use error::CryptoError;
pub use nonce_gen::generate_nonce;

use seismic_primitives::{Bytes32, CompressedPublicKey};

/// The immutable per-session encryption context: the negotiated AES-256-GCM
/// key and the client's ephemeral ECDH keypair, bound into every envelope.
#[derive(Clone)]
pub struct EncryptionState {
    aes_key: Bytes32,
    keypair: EphemeralKeypair,
    tee_pubkey: CompressedPublicKey,
}

impl EncryptionState {
    /// Negotiates a new session against the given TEE public key, generating
    /// a fresh ephemeral keypair if `client_sk` is not supplied.
    pub fn new(
        client_sk: Option<&Bytes32>,
        tee_pubkey: CompressedPublicKey,
    ) -> Result<Self, CryptoError> {
        let (keypair, aes_key) = generate_aes_key_for_session(client_sk, &tee_pubkey)?;
        Ok(Self { aes_key, keypair, tee_pubkey })
    }

    /// The negotiated AES-256-GCM key.
    pub fn aes_key(&self) -> &Bytes32 {
        &self.aes_key
    }

    /// The client's ephemeral public key, bound into every envelope so the
    /// node can re-derive the same key.
    pub fn encryption_pubkey(&self) -> CompressedPublicKey {
        self.keypair.public_key()
    }

    /// The TEE public key this session negotiated against.
    pub fn tee_pubkey(&self) -> CompressedPublicKey {
        self.tee_pubkey
    }

    /// Encrypts `plaintext`, binding `aad`.
    pub fn encrypt(
        &self,
        nonce: &seismic_primitives::EncryptionNonce,
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        encrypt(&self.aes_key, nonce, aad, plaintext)
    }

    /// Decrypts `ciphertext`, verifying `aad`.
    pub fn decrypt(
        &self,
        nonce: &seismic_primitives::EncryptionNonce,
        aad: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        decrypt(&self.aes_key, nonce, aad, ciphertext)
    }
}

impl std::fmt::Debug for EncryptionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionState")
            .field("encryption_pubkey", &self.encryption_pubkey())
            .field("tee_pubkey", &self.tee_pubkey)
            .finish_non_exhaustive()
    }
}
