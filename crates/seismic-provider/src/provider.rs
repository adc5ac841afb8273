//! The transaction-sending and signed-read pipeline: resolves metadata
//! against a node, encrypts calldata, signs the envelope, and submits it.

use crate::{
    config::SendOptions,
    error::ProviderError,
    metadata::{self, ResolvedCall},
    rpc_values::hex_bytes,
};
use alloy_primitives::{Address, Bytes, B256, U256};
use seismic_consensus::{encode_aad, UnsignedShieldedTx};
use seismic_crypto::EncryptionState;
use seismic_rpc::SeismicTransport;
use seismic_signer::ShieldedSigner;
use serde_json::json;

/// Everything a caller might want to inspect from a send that was built
/// but not submitted: the plaintext calldata, the envelope that would be
/// broadcast, and the hash that was actually signed.
#[derive(Debug)]
pub struct DebugSend {
    /// The calldata before shielded encryption.
    pub plaintext: Vec<u8>,
    /// The unsigned envelope, with `data` already set to ciphertext.
    pub tx: UnsignedShieldedTx,
    /// The hash that was signed, per `tx.seismic.message_version`.
    pub hash: B256,
}

/// A client for one seismic node, holding a signer and a negotiated
/// encryption session. `T` is the RPC transport, usually
/// [`seismic_rpc::HttpTransport`].
#[derive(Debug)]
pub struct SeismicProvider<T: SeismicTransport> {
    transport: T,
    signer: ShieldedSigner,
    encryption: EncryptionState,
}

impl<T: SeismicTransport> SeismicProvider<T> {
    /// Negotiates a new session against `transport`: fetches the node's
    /// TEE public key and derives a fresh ephemeral ECDH keypair.
    pub async fn new(transport: T, signer: ShieldedSigner) -> Result<Self, ProviderError> {
        let tee_pubkey = metadata::fetch_tee_public_key(&transport).await?;
        let encryption = EncryptionState::new(None, tee_pubkey)?;
        Ok(Self { transport, signer, encryption })
    }

    /// Builds a provider from an already-negotiated encryption session,
    /// skipping the `seismic_getTeePublicKey` round trip.
    pub fn from_parts(transport: T, signer: ShieldedSigner, encryption: EncryptionState) -> Self {
        Self { transport, signer, encryption }
    }

    /// The address this provider signs and sends as.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// The negotiated encryption session.
    pub fn encryption(&self) -> &EncryptionState {
        &self.encryption
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn build_envelope(
        &self,
        to: Option<Address>,
        value: U256,
        calldata: &[u8],
        signed_read: bool,
        opts: &SendOptions,
    ) -> Result<(UnsignedShieldedTx, Vec<u8>), ProviderError> {
        let ResolvedCall { metadata, gas, gas_price } = metadata::resolve(
            &self.transport,
            &self.encryption,
            self.signer.address(),
            to,
            value,
            signed_read,
            opts,
        )
        .await?;

        let aad = encode_aad(&metadata);
        let ciphertext =
            self.encryption.encrypt(&metadata.seismic.encryption_nonce, &aad, calldata)?;

        let tx = UnsignedShieldedTx {
            chain_id: metadata.legacy.chain_id,
            nonce: metadata.legacy.nonce,
            gas_price,
            gas,
            to: metadata.legacy.to,
            value: metadata.legacy.value,
            data: ciphertext,
            seismic: metadata.seismic,
        };
        Ok((tx, aad))
    }

    /// Builds, encrypts, and signs a state-changing transaction but does
    /// not submit it — useful for inspecting the pipeline's intermediate
    /// state before broadcasting.
    pub async fn debug_send_transaction(
        &self,
        to: Option<Address>,
        value: U256,
        calldata: &[u8],
        opts: &SendOptions,
    ) -> Result<DebugSend, ProviderError> {
        let (tx, _aad) = self.build_envelope(to, value, calldata, false, opts).await?;
        let hash = tx.signing_hash();
        Ok(DebugSend { plaintext: calldata.to_vec(), tx, hash })
    }

    /// Builds, encrypts, signs, and submits a state-changing transaction,
    /// returning the transaction hash the node assigned it.
    pub async fn send_transaction(
        &self,
        to: Option<Address>,
        value: U256,
        calldata: &[u8],
        opts: &SendOptions,
    ) -> Result<B256, ProviderError> {
        let (tx, _aad) = self.build_envelope(to, value, calldata, false, opts).await?;
        let sig = self.signer.sign_hash(&tx.signing_hash());
        let raw = tx.encode_signed(&sig);

        let result = self
            .transport
            .call("eth_sendRawTransaction", json!([Bytes::from(raw)]))
            .await?;
        let hash_bytes = hex_bytes(&result)?;
        if hash_bytes.len() != 32 {
            return Err(ProviderError::InsufficientData(format!(
                "expected a 32-byte transaction hash, got {} bytes",
                hash_bytes.len()
            )));
        }
        Ok(B256::from_slice(&hash_bytes))
    }

    /// Builds, encrypts, signs, and submits a signed read: an `eth_call`
    /// whose first argument is the raw signed envelope rather than a
    /// transaction object. The node recognizes the `0x4a` type byte and
    /// dispatches accordingly. Returns `None` if the node's response was
    /// empty (e.g. the call target has no code, or the call reverted with
    /// no return data).
    pub async fn signed_read(
        &self,
        to: Address,
        calldata: &[u8],
        opts: &SendOptions,
    ) -> Result<Option<Vec<u8>>, ProviderError> {
        let (tx, aad) = self.build_envelope(Some(to), U256::ZERO, calldata, true, opts).await?;
        let sig = self.signer.sign_hash(&tx.signing_hash());
        let raw = tx.encode_signed(&sig);

        let result = self.transport.call("eth_call", json!([Bytes::from(raw), "latest"])).await?;
        let response = hex_bytes(&result)?;
        if response.is_empty() {
            return Ok(None);
        }

        let plaintext = self.encryption.decrypt(&tx.seismic.encryption_nonce, &aad, &response)?;
        Ok(Some(plaintext))
    }

    /// A plain, unshielded `eth_call` against `to` with `data`: no `from`,
    /// no value, no envelope. Used for contract reads that don't need
    /// privacy, such as the directory's `checkHasKey`/`keyHash`.
    pub async fn eth_call(&self, to: Address, data: &[u8]) -> Result<Vec<u8>, ProviderError> {
        let call = json!({ "to": to, "data": Bytes::copy_from_slice(data) });
        let result = self.transport.call("eth_call", json!([call, "latest"])).await?;
        hex_bytes(&result)
    }
}
