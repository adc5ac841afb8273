use thiserror::Error;

/// Errors raised calling or decoding the response of a precompile.
#[derive(Debug, Error)]
pub enum PrecompileError {
    /// A fixed-size byte value failed validation.
    #[error(transparent)]
    Primitive(#[from] seismic_primitives::PrimitiveError),
    /// The RPC transport failed.
    #[error(transparent)]
    Transport(#[from] seismic_rpc::TransportError),
    /// The response wasn't a hex string, or was shorter than the
    /// precompile's output is defined to be.
    #[error("insufficient data: {0}")]
    InsufficientData(String),
}
