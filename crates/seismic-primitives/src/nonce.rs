use crate::{decode_hex, error::PrimitiveError};
use alloy_primitives::FixedBytes;
use std::fmt;

/// A 12-byte AES-GCM encryption nonce.
///
/// The leading byte must be nonzero: the node's RLP decoder treats the
/// nonce as sensitive to leading-zero truncation, so a nonce that happened
/// to start with `0x00` would round-trip as a shorter byte string. See
/// `seismic-crypto`'s nonce generator for the reject-and-resample logic
/// that keeps freshly drawn nonces within this invariant.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncryptionNonce(FixedBytes<12>);

impl EncryptionNonce {
    /// Builds a nonce from raw bytes, validating length and the nonzero
    /// leading byte.
    pub fn new(bytes: [u8; 12]) -> Result<Self, PrimitiveError> {
        if bytes[0] == 0 {
            return Err(PrimitiveError::ZeroLeadingByte);
        }
        Ok(Self(FixedBytes::from(bytes)))
    }

    /// Builds a nonce from a byte slice of any length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, PrimitiveError> {
        let array: [u8; 12] = bytes
            .try_into()
            .map_err(|_| PrimitiveError::InvalidLength { expected: 12, actual: bytes.len() })?;
        Self::new(array)
    }

    /// Builds a nonce from a byte slice of any length, without the
    /// nonzero-leading-byte check `new`/`from_slice` enforce.
    ///
    /// That check only protects nonces about to be RLP-encoded into a
    /// fresh transaction envelope, where a leading zero byte would get
    /// silently truncated on the wire. A nonce already embedded inside
    /// previously-encrypted data (for example the nonce packed into an
    /// on-chain log's `encryptedAmount` payload) was never subject to that
    /// encoding path, so enforcing the same invariant here would reject
    /// roughly 1 in 256 legitimately-encrypted values.
    pub fn from_wire_slice(bytes: &[u8]) -> Result<Self, PrimitiveError> {
        let array: [u8; 12] = bytes
            .try_into()
            .map_err(|_| PrimitiveError::InvalidLength { expected: 12, actual: bytes.len() })?;
        Ok(Self(FixedBytes::from(array)))
    }

    /// Builds a nonce from a hex string, optionally `0x`-prefixed.
    pub fn from_hex(s: &str) -> Result<Self, PrimitiveError> {
        Self::from_slice(&decode_hex(s)?)
    }

    /// Returns the raw 12-byte encoding.
    pub fn as_bytes(&self) -> &[u8; 12] {
        self.0.as_ref()
    }

    /// Returns the raw encoding as a slice.
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl AsRef<[u8]> for EncryptionNonce {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for EncryptionNonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncryptionNonce(0x{})", hex::encode(self.as_slice()))
    }
}

impl fmt::Display for EncryptionNonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_leading_byte() {
        let mut bytes = [1u8; 12];
        bytes[0] = 0;
        assert_eq!(EncryptionNonce::new(bytes).unwrap_err(), PrimitiveError::ZeroLeadingByte);
    }

    #[test]
    fn accepts_nonzero_leading_byte() {
        let bytes = [1u8; 12];
        assert!(EncryptionNonce::new(bytes).is_ok());
    }

    #[test]
    fn rejects_wrong_length() {
        let err = EncryptionNonce::from_slice(&[1u8; 11]).unwrap_err();
        assert_eq!(err, PrimitiveError::InvalidLength { expected: 12, actual: 11 });
    }

    #[test]
    fn wire_slice_accepts_zero_leading_byte() {
        let mut bytes = [1u8; 12];
        bytes[0] = 0;
        let nonce = EncryptionNonce::from_wire_slice(&bytes).unwrap();
        assert_eq!(nonce.as_bytes(), &bytes);
    }

    #[test]
    fn wire_slice_still_rejects_wrong_length() {
        let err = EncryptionNonce::from_wire_slice(&[1u8; 11]).unwrap_err();
        assert_eq!(err, PrimitiveError::InvalidLength { expected: 12, actual: 11 });
    }

    #[test]
    fn hex_and_raw_construction_agree() {
        let hex_form = "46a2b60000000000000076a6";
        let from_hex = EncryptionNonce::from_hex(hex_form).unwrap();
        let raw = hex::decode(hex_form).unwrap();
        let from_raw = EncryptionNonce::from_slice(&raw).unwrap();
        assert_eq!(from_hex, from_raw);
    }
}
