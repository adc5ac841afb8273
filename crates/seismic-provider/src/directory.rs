//! A client for the viewing-key directory genesis contract: lets a party
//! register a viewing key and lets anyone else look up whether an address
//! has one, without exposing the key itself on plain reads.

use crate::{config::SendOptions, error::ProviderError, provider::SeismicProvider};
use alloy_primitives::{address, Address, B256, U256};
use seismic_abi::{decode_output, encode_call, DynSolValue};
use seismic_rpc::SeismicTransport;

/// The directory's fixed genesis address.
pub const DIRECTORY_ADDRESS: Address = address!("1000000000000000000000000000000000000004");

/// A client for the directory contract at [`DIRECTORY_ADDRESS`].
#[derive(Debug)]
pub struct DirectoryClient<'a, T: SeismicTransport> {
    provider: &'a SeismicProvider<T>,
}

impl<'a, T: SeismicTransport> DirectoryClient<'a, T> {
    /// Wraps `provider` to call the directory contract.
    pub fn new(provider: &'a SeismicProvider<T>) -> Self {
        Self { provider }
    }

    /// `checkHasKey(address) -> bool`: a plain, unshielded read — whether
    /// `owner` has registered a viewing key.
    pub async fn check_has_key(&self, owner: Address) -> Result<bool, ProviderError> {
        let calldata = encode_call("checkHasKey(address)", &[DynSolValue::Address(owner)])?;
        let output = self.provider.eth_call(DIRECTORY_ADDRESS, &calldata).await?;
        let decoded = decode_output(&["bool"], &output)?;
        match decoded.as_slice() {
            [DynSolValue::Bool(has_key)] => Ok(*has_key),
            other => Err(ProviderError::InsufficientData(format!(
                "unexpected checkHasKey output shape: {other:?}"
            ))),
        }
    }

    /// `keyHash(address) -> bytes32`: a plain, unshielded read — a
    /// commitment to `owner`'s registered viewing key, or zero if none.
    pub async fn key_hash(&self, owner: Address) -> Result<B256, ProviderError> {
        let calldata = encode_call("keyHash(address)", &[DynSolValue::Address(owner)])?;
        let output = self.provider.eth_call(DIRECTORY_ADDRESS, &calldata).await?;
        let decoded = decode_output(&["bytes32"], &output)?;
        match decoded.as_slice() {
            [DynSolValue::FixedBytes(hash, 32)] => Ok(*hash),
            other => Err(ProviderError::InsufficientData(format!(
                "unexpected keyHash output shape: {other:?}"
            ))),
        }
    }

    /// `getKey() -> uint256`: the caller's own viewing key. Requires a
    /// signed read, since the value is only ever revealed to its owner.
    pub async fn get_key(&self, opts: &SendOptions) -> Result<U256, ProviderError> {
        let calldata = encode_call("getKey()", &[])?;
        let response = self.provider.signed_read(DIRECTORY_ADDRESS, &calldata, opts).await?;
        let plaintext = response
            .ok_or_else(|| ProviderError::InsufficientData("getKey returned no data".into()))?;
        let decoded = decode_output(&["uint256"], &plaintext)?;
        match decoded.as_slice() {
            [DynSolValue::Uint(key, 256)] => Ok(*key),
            other => Err(ProviderError::InsufficientData(format!(
                "unexpected getKey output shape: {other:?}"
            ))),
        }
    }

    /// `setKey(suint256)`: registers `key` as the caller's viewing key, a
    /// shielded write.
    pub async fn set_key(&self, key: U256, opts: &SendOptions) -> Result<B256, ProviderError> {
        let calldata = encode_call("setKey(suint256)", &[DynSolValue::Uint(key, 256)])?;
        self.provider.send_transaction(Some(DIRECTORY_ADDRESS), U256::ZERO, &calldata, opts).await
    }
}
