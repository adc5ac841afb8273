use thiserror::Error;

/// Errors raised parsing a shielded function signature or encoding/decoding
/// against it.
#[derive(Debug, Error)]
pub enum AbiError {
    /// The signature wasn't `name(type,type,...)`.
    #[error("malformed function signature: {0}")]
    MalformedSignature(String),
    /// A parenthesis or bracket in a signature's parameter list was
    /// unbalanced.
    #[error("unbalanced parentheses in parameter list: {0}")]
    UnbalancedParens(String),
    /// A remapped standard type string did not parse as a Solidity ABI
    /// type.
    #[error(transparent)]
    DynAbi(#[from] alloy_dyn_abi::Error),
    /// The number of values passed to [`crate::encode_call`] didn't match
    /// the number of parameters in the signature.
    #[error("expected {expected} arguments, got {actual}")]
    ArgCountMismatch {
        /// Parameter count in the signature.
        expected: usize,
        /// Argument count supplied.
        actual: usize,
    },
}
