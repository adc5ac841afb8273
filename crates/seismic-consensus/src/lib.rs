//! The `ShieldedTx` (type `0x4A`) data model, RLP serializer, AAD encoder,
//! and the two interchangeable signing-hash schemes.
//!
//! This crate has no I/O and no cryptographic signing of its own — it
//! produces the bytes a signer signs and consumes the `(v, r, s)` a signer
//! returns. `seismic-signer` and `seismic-provider` build on top of it.

mod aad;
mod elements;
mod eip712;
mod envelope;
mod error;
mod rlp_ext;

pub use aad::encode_aad;
pub use elements::{LegacyFields, MessageVersion, SeismicElements, Signature, TxSeismicMetadata};
pub use eip712::{domain_separator, signing_hash as eip712_signing_hash, struct_hash};
pub use envelope::{UnsignedShieldedTx, SHIELDED_TX_TYPE};
pub use error::ConsensusError;
