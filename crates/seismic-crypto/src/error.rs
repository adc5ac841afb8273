use thiserror::Error;

/// Errors raised by the key-agreement and AEAD layer.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The supplied secp256k1 scalar or point was invalid.
    #[error("invalid secp256k1 key material: {0}")]
    Curve(#[from] k256::elliptic_curve::Error),
    /// AES-GCM decryption failed to authenticate.
    #[error("AEAD authentication failure")]
    AuthenticationFailure,
    /// A fixed-size byte primitive failed to construct.
    #[error(transparent)]
    Primitive(#[from] seismic_primitives::PrimitiveError),
}
