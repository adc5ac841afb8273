//! Fixed-size byte primitives used throughout the Seismic shielded-transaction
//! pipeline: a 32-byte generic hash/scalar type, a compressed secp256k1
//! public key, and a 12-byte AES-GCM nonce. Each type validates its length
//! (and any additional format constraint) at construction time and never
//! silently truncates or pads.

mod error;
mod nonce;
mod pubkey;

pub use error::PrimitiveError;
pub use nonce::EncryptionNonce;
pub use pubkey::CompressedPublicKey;

/// A generic 32-byte value: a hash, a scalar, a block hash, or any other
/// 32-byte quantity that does not need its own newtype.
///
/// This is a direct re-export of [`alloy_primitives::B256`], which already
/// provides length-checked construction from hex strings and byte slices.
pub type Bytes32 = alloy_primitives::B256;

/// Strips an optional `0x`/`0X` prefix from a hex string.
pub(crate) fn strip_0x(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}

/// Decodes a hex string (with or without a `0x` prefix) into raw bytes.
pub(crate) fn decode_hex(s: &str) -> Result<Vec<u8>, PrimitiveError> {
    Ok(hex::decode(strip_0x(s))?)
}

/// Parses a [`Bytes32`] from a hex string, optionally `0x`-prefixed.
pub fn bytes32_from_hex(s: &str) -> Result<Bytes32, PrimitiveError> {
    let bytes = decode_hex(s)?;
    bytes32_from_slice(&bytes)
}

/// Parses a [`Bytes32`] from a raw byte slice.
pub fn bytes32_from_slice(bytes: &[u8]) -> Result<Bytes32, PrimitiveError> {
    if bytes.len() != 32 {
        return Err(PrimitiveError::InvalidLength { expected: 32, actual: bytes.len() });
    }
    Ok(Bytes32::from_slice(bytes))
}
