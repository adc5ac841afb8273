use thiserror::Error;

/// Errors raised constructing a fixed-size byte primitive.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PrimitiveError {
    /// Input did not have the expected byte length.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// The required length, in bytes.
        expected: usize,
        /// The length actually supplied.
        actual: usize,
    },
    /// A compressed secp256k1 public key did not start with `0x02`/`0x03`.
    #[error("invalid compressed public key prefix: 0x{0:02x}")]
    InvalidPublicKeyPrefix(u8),
    /// An encryption nonce had a zero leading byte.
    #[error("encryption nonce must have a nonzero leading byte")]
    ZeroLeadingByte,
    /// Hex decoding failed.
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}
