use thiserror::Error;

/// Errors raised constructing or using a [`crate::ShieldedSigner`].
#[derive(Debug, Error)]
pub enum SignerError {
    /// The private key bytes weren't a valid secp256k1 scalar.
    #[error(transparent)]
    InvalidKey(#[from] secp256k1::Error),
    /// The private key hex string wasn't valid hex.
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}
