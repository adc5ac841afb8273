use seismic_consensus::MessageVersion;
use seismic_primitives::EncryptionNonce;
use alloy_primitives::B256;

/// The default gas limit applied when a caller doesn't supply one, for
/// both state-changing sends and signed reads.
pub const DEFAULT_GAS: u64 = 30_000_000;

/// The default window, in blocks, after which a built transaction expires
/// if the caller doesn't supply `recent_block_hash`/`expires_at_block`
/// themselves.
pub const DEFAULT_BLOCKS_WINDOW: u64 = 100;

/// Per-call overrides for the metadata a [`crate::SeismicProvider`] would
/// otherwise resolve against the node. Every field left `None`/default is
/// fetched, generated, or computed fresh.
#[derive(Debug, Clone)]
pub struct SendOptions {
    /// Gas limit. Defaults to [`DEFAULT_GAS`].
    pub gas: Option<u64>,
    /// Gas price, in wei. Defaults to the node's current `eth_gasPrice`.
    pub gas_price: Option<u128>,
    /// Sender nonce. Defaults to `eth_getTransactionCount(sender, "latest")`.
    pub nonce: Option<u64>,
    /// How many blocks ahead of the latest block this transaction expires.
    /// Ignored if `expires_at_block` is set directly.
    pub blocks_window: u64,
    /// Which signing-hash scheme to sign with.
    pub message_version: MessageVersion,
    /// The encryption nonce to bind the calldata under. Defaults to a
    /// freshly generated nonce.
    pub encryption_nonce: Option<EncryptionNonce>,
    /// The recency-window anchor block's hash. Defaults to the latest
    /// block's hash.
    pub recent_block_hash: Option<B256>,
    /// The block number after which this transaction expires. Defaults to
    /// the latest block's number plus `blocks_window`.
    pub expires_at_block: Option<u64>,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            gas: None,
            gas_price: None,
            nonce: None,
            blocks_window: DEFAULT_BLOCKS_WINDOW,
            message_version: MessageVersion::Raw,
            encryption_nonce: None,
            recent_block_hash: None,
            expires_at_block: None,
        }
    }
}
