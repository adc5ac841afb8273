//! Remaps shielded Solidity type names (`suintN`, `sintN`, `sbool`,
//! `saddress`) to their standard counterparts for argument encoding,
//! while keeping the on-chain function selector computed from the
//! shielded signature.

mod codec;
mod error;
mod signature;

pub use alloy_dyn_abi::{DynSolType, DynSolValue};
pub use codec::{decode_output, encode_call, selector};
pub use error::AbiError;
pub use signature::{is_shielded, remap_type, ParsedSignature};
