use thiserror::Error;

/// Errors raised building, serializing, or decoding a `ShieldedTx` envelope.
#[derive(Debug, Error)]
pub enum ConsensusError {
    /// A byte-typed primitive (public key, nonce, hash) failed validation.
    #[error(transparent)]
    Primitive(#[from] seismic_primitives::PrimitiveError),
    /// RLP decoding failed, or the decoded envelope did not have the shape
    /// a `ShieldedTx` requires (wrong item count, wrong type prefix byte).
    #[error(transparent)]
    Rlp(#[from] alloy_rlp::Error),
    /// The first byte of a purportedly signed envelope was not `0x4A`.
    #[error("expected 0x4a type prefix, got 0x{0:02x}")]
    WrongTypePrefix(u8),
    /// A decoded envelope did not have the expected number of RLP items.
    #[error("expected {expected} rlp items, got {actual}")]
    WrongItemCount {
        /// The required item count.
        expected: usize,
        /// The item count actually decoded.
        actual: usize,
    },
    /// `message_version` was outside `{0, 2}`.
    #[error("invalid message version: {0}")]
    InvalidMessageVersion(u8),
    /// A boolean field decoded to a byte other than the RLP empty string or
    /// the raw byte `0x01`.
    #[error("invalid rlp boolean encoding: 0x{0:02x}")]
    InvalidBoolEncoding(u8),
    /// An optional-address field decoded as an RLP list instead of a string.
    #[error("expected an rlp string for an optional address, got a list")]
    AddressFieldIsList,
}
