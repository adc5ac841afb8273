//! Resolves the node-dependent fields of a `ShieldedTx` — chain id,
//! nonce, gas price, recency window, and encryption nonce — against
//! whatever the caller didn't already supply in [`crate::SendOptions`].

use crate::{
    config::{SendOptions, DEFAULT_GAS},
    error::ProviderError,
    rpc_values::{field, hex_b256, hex_bytes, hex_u128, hex_u64},
};
use alloy_primitives::{Address, B256, U256};
use seismic_consensus::{LegacyFields, SeismicElements, TxSeismicMetadata};
use seismic_crypto::EncryptionState;
use seismic_primitives::CompressedPublicKey;
use seismic_rpc::SeismicTransport;
use serde_json::json;

/// Fetches the enclave's compressed public key via the node's custom
/// `seismic_getTeePublicKey` method. Called once per session to seed
/// [`EncryptionState::new`].
pub async fn fetch_tee_public_key(
    transport: &dyn SeismicTransport,
) -> Result<CompressedPublicKey, ProviderError> {
    let value = transport.call("seismic_getTeePublicKey", json!([])).await?;
    let bytes = hex_bytes(&value)?;
    Ok(CompressedPublicKey::from_slice(&bytes)?)
}

async fn chain_id(transport: &dyn SeismicTransport) -> Result<u64, ProviderError> {
    hex_u64(&transport.call("eth_chainId", json!([])).await?)
}

async fn transaction_count(
    transport: &dyn SeismicTransport,
    sender: Address,
) -> Result<u64, ProviderError> {
    hex_u64(&transport.call("eth_getTransactionCount", json!([sender, "latest"])).await?)
}

async fn gas_price(transport: &dyn SeismicTransport) -> Result<u128, ProviderError> {
    hex_u128(&transport.call("eth_gasPrice", json!([])).await?)
}

struct Head {
    number: u64,
    hash: B256,
}

async fn latest_head(transport: &dyn SeismicTransport) -> Result<Head, ProviderError> {
    let block = transport.call("eth_getBlockByNumber", json!(["latest", false])).await?;
    let number = hex_u64(field(&block, "number")?)?;
    let hash = hex_b256(field(&block, "hash")?)?;
    Ok(Head { number, hash })
}

/// Everything resolved for one send or signed-read, beyond what gets
/// bound into the AAD: the gas limit and gas price, which the envelope
/// carries but the ciphertext binding does not.
pub struct ResolvedCall {
    /// The resolved transaction metadata (AAD input).
    pub metadata: TxSeismicMetadata,
    /// The resolved gas limit.
    pub gas: u64,
    /// The resolved gas price.
    pub gas_price: u128,
}

/// Resolves every metadata field a send or signed-read needs, applying
/// `opts`' overrides and falling back to a fresh node query or freshly
/// generated nonce for anything left unset.
pub async fn resolve(
    transport: &dyn SeismicTransport,
    encryption: &EncryptionState,
    sender: Address,
    to: Option<Address>,
    value: U256,
    signed_read: bool,
    opts: &SendOptions,
) -> Result<ResolvedCall, ProviderError> {
    let chain = chain_id(transport).await?;
    let nonce = match opts.nonce {
        Some(n) => n,
        None => transaction_count(transport, sender).await?,
    };
    let resolved_gas_price = match opts.gas_price {
        Some(p) => p,
        None => gas_price(transport).await?,
    };
    let gas = opts.gas.unwrap_or(DEFAULT_GAS);

    let (recent_block_hash, expires_at_block) =
        match (opts.recent_block_hash, opts.expires_at_block) {
            (Some(hash), Some(block)) => (hash, block),
            (maybe_hash, maybe_block) => {
                let head = latest_head(transport).await?;
                (maybe_hash.unwrap_or(head.hash), maybe_block.unwrap_or(head.number + opts.blocks_window))
            }
        };
    let encryption_nonce = match opts.encryption_nonce {
        Some(nonce) => nonce,
        None => seismic_crypto::generate_nonce(&mut rand::thread_rng()),
    };

    let metadata = TxSeismicMetadata {
        sender,
        legacy: LegacyFields { chain_id: chain, nonce, to, value },
        seismic: SeismicElements {
            encryption_pubkey: encryption.encryption_pubkey(),
            encryption_nonce,
            message_version: opts.message_version,
            recent_block_hash,
            expires_at_block,
            signed_read,
        },
    };

    Ok(ResolvedCall { metadata, gas, gas_price: resolved_gas_price })
}
