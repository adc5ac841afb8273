use crate::error::ConsensusError;
use alloy_primitives::{Address, U256};
use seismic_primitives::{Bytes32, CompressedPublicKey, EncryptionNonce};

/// Which hash a `ShieldedTx` was signed over.
///
/// `Raw` signs `keccak256(0x4a ‖ rlp(unsigned))` directly; `Eip712`
/// signs the typed-data digest instead. Both produce identical envelope
/// bytes once signed — the node dispatches on this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageVersion {
    /// Raw type-prefixed keccak hash.
    Raw = 0,
    /// EIP-712 typed-data hash.
    Eip712 = 2,
}

impl MessageVersion {
    /// The wire value for this version.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for MessageVersion {
    type Error = ConsensusError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Raw),
            2 => Ok(Self::Eip712),
            other => Err(ConsensusError::InvalidMessageVersion(other)),
        }
    }
}

/// The Seismic-specific fields every `ShieldedTx` carries in addition to the
/// legacy Ethereum ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeismicElements {
    /// The client's ephemeral ECDH public key, bound into the envelope so
    /// the node can re-derive the AES key.
    pub encryption_pubkey: CompressedPublicKey,
    /// The AES-GCM nonce used to encrypt `data`.
    pub encryption_nonce: EncryptionNonce,
    /// Which signing-hash scheme was used.
    pub message_version: MessageVersion,
    /// A recent block hash, bound in for replay/staleness protection.
    pub recent_block_hash: Bytes32,
    /// The block number after which this transaction is no longer valid.
    pub expires_at_block: u64,
    /// Whether this envelope is a signed read (`eth_call`) rather than a
    /// state-changing transaction.
    pub signed_read: bool,
}

/// The legacy Ethereum fields of a `ShieldedTx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyFields {
    /// EIP-155 chain identifier.
    pub chain_id: u64,
    /// Sender's transaction count at the time this was built.
    pub nonce: u64,
    /// Call target; `None` is a contract-creation transaction.
    pub to: Option<Address>,
    /// Wei value transferred.
    pub value: U256,
}

/// The context used to derive AAD: everything but `gas`, `gas_price`,
/// and `data`, which are envelope fields but not bound into the ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxSeismicMetadata {
    /// The transaction sender.
    pub sender: Address,
    /// Legacy fields (chain id, nonce, to, value).
    pub legacy: LegacyFields,
    /// Seismic-specific fields.
    pub seismic: SeismicElements,
}

/// A y-parity-only ECDSA signature: `v ∈ {0, 1}`, no EIP-155 chain folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Recovery id, `0` or `1`.
    pub v: u8,
    /// Signature `r` component.
    pub r: U256,
    /// Signature `s` component.
    pub s: U256,
}
