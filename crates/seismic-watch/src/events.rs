//! SRC20-style transfer/approval events: `Transfer`/`Approval(address
//! indexed from, address indexed to, bytes32 indexed encryptKeyHash,
//! bytes encryptedAmount)`, where `encryptedAmount` packs
//! `ciphertext(32+tag) ‖ nonce(12)`, AES-GCM-encrypted with no AAD.

use crate::error::WatchError;
use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{keccak256, Address, B256, U256};
use seismic_primitives::{Bytes32, EncryptionNonce};

/// `keccak256("Transfer(address,address,bytes32,bytes)")`.
pub fn transfer_topic0() -> B256 {
    keccak256(b"Transfer(address,address,bytes32,bytes)")
}

/// `keccak256("Approval(address,address,bytes32,bytes)")`.
pub fn approval_topic0() -> B256 {
    keccak256(b"Approval(address,address,bytes32,bytes)")
}

/// `keccak256(viewing_key)`: the topic-3 filter value that scopes
/// `eth_getLogs` to logs decryptable by `viewing_key`.
pub fn viewing_key_topic(viewing_key: &Bytes32) -> B256 {
    keccak256(viewing_key.as_slice())
}

/// A decoded, decrypted `Transfer` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferEvent {
    /// The indexed sender.
    pub from: Address,
    /// The indexed recipient.
    pub to: Address,
    /// The indexed viewing-key commitment this log was encrypted under.
    pub encrypt_key_hash: B256,
    /// The decrypted transfer amount.
    pub amount: U256,
    /// The block this log was included in.
    pub block_number: u64,
}

/// A decoded, decrypted `Approval` event. Structurally identical to
/// [`TransferEvent`]; kept as a distinct type so scanner callbacks can't
/// mix the two up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalEvent {
    /// The indexed owner.
    pub from: Address,
    /// The indexed spender.
    pub to: Address,
    /// The indexed viewing-key commitment this log was encrypted under.
    pub encrypt_key_hash: B256,
    /// The decrypted approval amount.
    pub amount: U256,
    /// The block this log was included in.
    pub block_number: u64,
}

/// Decodes the ABI encoding of the single non-indexed `bytes
/// encryptedAmount` parameter, via the same decoder the shielded ABI codec
/// uses for contract return values.
pub(crate) fn decode_dynamic_bytes(data: &[u8]) -> Result<Vec<u8>, WatchError> {
    let mut values = seismic_abi::decode_output(&["bytes"], data)?;
    match values.pop() {
        Some(DynSolValue::Bytes(bytes)) => Ok(bytes),
        other => Err(WatchError::InsufficientData(format!(
            "expected a single dynamic bytes value, got {other:?}"
        ))),
    }
}

/// Splits `ciphertext(32+tag) ‖ nonce(12)` into its two parts and decrypts
/// the amount with no AAD, interpreting the plaintext as a big-endian
/// `u256`.
pub(crate) fn decrypt_amount(
    viewing_key: &Bytes32,
    payload: &[u8],
) -> Result<U256, WatchError> {
    if payload.len() < 12 {
        return Err(WatchError::InsufficientData(format!(
            "encrypted amount shorter than the 12-byte nonce: {} bytes",
            payload.len()
        )));
    }
    let (ciphertext, nonce_bytes) = payload.split_at(payload.len() - 12);
    // A log's nonce was never RLP-encoded into an envelope, so it isn't
    // subject to the nonzero-leading-byte invariant `EncryptionNonce::new`
    // enforces for freshly generated, outgoing nonces.
    let nonce = EncryptionNonce::from_wire_slice(nonce_bytes)?;
    let plaintext = seismic_crypto::decrypt(viewing_key, &nonce, &[], ciphertext)?;
    Ok(U256::from_be_slice(&plaintext))
}
