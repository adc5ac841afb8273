use thiserror::Error;

/// Errors raised decoding or decrypting one log, or talking to the node.
#[derive(Debug, Error)]
pub enum WatchError {
    /// A fixed-size byte value failed validation.
    #[error(transparent)]
    Primitive(#[from] seismic_primitives::PrimitiveError),
    /// AES-GCM decryption failed (wrong viewing key, or a corrupted log).
    #[error(transparent)]
    Crypto(#[from] seismic_crypto::CryptoError),
    /// A log's `encryptedAmount` field failed to ABI-decode as `bytes`.
    #[error(transparent)]
    Abi(#[from] seismic_abi::AbiError),
    /// The RPC transport failed.
    #[error(transparent)]
    Transport(#[from] seismic_rpc::TransportError),
    /// A node response didn't parse as the JSON shape this call expects.
    #[error("failed to decode rpc result: {0}")]
    Json(#[from] serde_json::Error),
    /// A log's `encryptedAmount` field was malformed: too short to be a
    /// valid dynamic-bytes ABI encoding, or shorter than the 12-byte
    /// nonce it's required to carry.
    #[error("insufficient data: {0}")]
    InsufficientData(String),
}
