#![warn(missing_debug_implementations, missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]

//! Umbrella crate for the shielded-transaction client: key agreement and
//! AEAD, the shielded transaction envelope and its two signing hashes, the
//! shielded ABI codec, a signer, a JSON-RPC transport, a provider that
//! drives the send/signed-read pipelines and the viewing-key directory, raw
//! precompile clients, and a viewing-key event scanner.
//!
//! Each concern lives in its own `seismic-*` crate; this crate just
//! re-exports them under one namespace plus a [`prelude`] for the common
//! path of building and sending one shielded transaction.

#[doc(inline)]
pub use seismic_primitives as primitives;
#[doc(inline)]
pub use seismic_crypto as crypto;
#[doc(inline)]
pub use seismic_consensus as consensus;
#[doc(inline)]
pub use seismic_abi as abi;
#[doc(inline)]
pub use seismic_signer as signer;
#[doc(inline)]
pub use seismic_rpc as rpc;
#[doc(inline)]
pub use seismic_provider as provider;
#[doc(inline)]
pub use seismic_precompiles as precompiles;
#[doc(inline)]
pub use seismic_watch as watch;

/// The types most programs need to build, sign, send, and decrypt a
/// shielded transaction, gathered into one `use seismic::prelude::*;`.
pub mod prelude {
    pub use seismic_abi::{decode_output, encode_call, is_shielded, remap_type, ParsedSignature};
    pub use seismic_consensus::{MessageVersion, TxSeismicMetadata, UnsignedShieldedTx};
    pub use seismic_crypto::{CryptoError, EncryptionState};
    pub use seismic_primitives::{Bytes32, CompressedPublicKey, EncryptionNonce};
    pub use seismic_provider::{
        DirectoryClient, ProviderError, SeismicClient, SeismicProvider, SendOptions,
    };
    pub use seismic_rpc::{HttpTransport, SeismicTransport};
    pub use seismic_signer::ShieldedSigner;
    pub use seismic_watch::{ApprovalEvent, ScannerBuilder, ScannerConfig, TransferEvent};
}
