use thiserror::Error;

/// Errors raised building, sending, or reading a `ShieldedTx` against a
/// node. Aggregates every lower-crate error the pipeline can hit.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// A fixed-size byte value failed validation.
    #[error(transparent)]
    Primitive(#[from] seismic_primitives::PrimitiveError),
    /// Key agreement or AEAD failed.
    #[error(transparent)]
    Crypto(#[from] seismic_crypto::CryptoError),
    /// Envelope encoding, decoding, or hashing failed.
    #[error(transparent)]
    Consensus(#[from] seismic_consensus::ConsensusError),
    /// Shielded ABI encoding or decoding failed.
    #[error(transparent)]
    Abi(#[from] seismic_abi::AbiError),
    /// The RPC transport failed.
    #[error(transparent)]
    Transport(#[from] seismic_rpc::TransportError),
    /// A node response didn't parse as the JSON shape this call expects.
    #[error("failed to decode rpc result: {0}")]
    Json(#[from] serde_json::Error),
    /// A node response was missing fields needed to proceed, or was
    /// shorter than the minimum valid length for its kind (e.g. a
    /// decrypted payload too short to contain a value).
    #[error("insufficient data: {0}")]
    InsufficientData(String),
    /// The blocking facade's dedicated runtime failed to start.
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
