use crate::{decode_hex, error::PrimitiveError};
use alloy_primitives::FixedBytes;
use std::fmt;

/// A compressed secp256k1 public key: a leading `0x02`/`0x03` parity byte
/// followed by the 32-byte x-coordinate.
///
/// Used both as the node's advertised TEE encryption key and as the
/// client's ephemeral ECDH key bound into every [`SeismicElements`]
/// envelope (see `seismic-consensus`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressedPublicKey(FixedBytes<33>);

impl CompressedPublicKey {
    /// Builds a compressed public key from raw bytes, validating length and
    /// parity-byte prefix.
    pub fn new(bytes: [u8; 33]) -> Result<Self, PrimitiveError> {
        match bytes[0] {
            0x02 | 0x03 => Ok(Self(FixedBytes::from(bytes))),
            other => Err(PrimitiveError::InvalidPublicKeyPrefix(other)),
        }
    }

    /// Builds a compressed public key from a byte slice of any length,
    /// erroring if it is not exactly 33 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, PrimitiveError> {
        let array: [u8; 33] = bytes
            .try_into()
            .map_err(|_| PrimitiveError::InvalidLength { expected: 33, actual: bytes.len() })?;
        Self::new(array)
    }

    /// Builds a compressed public key from a hex string, optionally
    /// `0x`-prefixed.
    pub fn from_hex(s: &str) -> Result<Self, PrimitiveError> {
        Self::from_slice(&decode_hex(s)?)
    }

    /// Returns the raw 33-byte encoding.
    pub fn as_bytes(&self) -> &[u8; 33] {
        self.0.as_ref()
    }

    /// Returns the raw encoding as a slice.
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl AsRef<[u8]> for CompressedPublicKey {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for CompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompressedPublicKey(0x{})", hex::encode(self.as_slice()))
    }
}

impl fmt::Display for CompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.as_slice()))
    }
}
