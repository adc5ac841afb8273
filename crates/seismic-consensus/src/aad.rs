//! RLP encoding of transaction metadata for AEAD additional authenticated
//! data. Binds the metadata a node can independently recompute
//! from the envelope into the GCM tag, without encrypting it.

use crate::{
    elements::TxSeismicMetadata,
    rlp_ext::{bool_length, encode_bool, encode_optional_address, optional_address_length},
};
use alloy_rlp::{Encodable, Header};

/// RLP-encodes the 11 AAD fields, in this exact order:
/// `sender, chain_id, nonce, to, value, encryption_pubkey,
/// encryption_nonce, message_version, recent_block_hash, expires_at_block,
/// signed_read`.
///
/// Note that `gas`, `gas_price`, and `data` are envelope fields but are
/// *not* part of the AAD.
pub fn encode_aad(metadata: &TxSeismicMetadata) -> Vec<u8> {
    let payload_length = metadata.sender.length()
        + metadata.legacy.chain_id.length()
        + metadata.legacy.nonce.length()
        + optional_address_length(metadata.legacy.to)
        + metadata.legacy.value.length()
        + metadata.seismic.encryption_pubkey.as_slice().length()
        + metadata.seismic.encryption_nonce.as_slice().length()
        + metadata.seismic.message_version.as_u8().length()
        + metadata.seismic.recent_block_hash.length()
        + metadata.seismic.expires_at_block.length()
        + bool_length(metadata.seismic.signed_read);

    let mut out = Vec::with_capacity(payload_length + 4);
    Header { list: true, payload_length }.encode(&mut out);

    metadata.sender.encode(&mut out);
    metadata.legacy.chain_id.encode(&mut out);
    metadata.legacy.nonce.encode(&mut out);
    encode_optional_address(metadata.legacy.to, &mut out);
    metadata.legacy.value.encode(&mut out);
    metadata.seismic.encryption_pubkey.as_slice().encode(&mut out);
    metadata.seismic.encryption_nonce.as_slice().encode(&mut out);
    metadata.seismic.message_version.as_u8().encode(&mut out);
    metadata.seismic.recent_block_hash.encode(&mut out);
    metadata.seismic.expires_at_block.encode(&mut out);
    encode_bool(metadata.seismic.signed_read, &mut out);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{LegacyFields, MessageVersion, SeismicElements};
    use alloy_primitives::{Address, B256, U256};
    use seismic_primitives::{CompressedPublicKey, EncryptionNonce};

    fn sample_metadata() -> TxSeismicMetadata {
        TxSeismicMetadata {
            sender: Address::repeat_byte(0x11),
            legacy: LegacyFields {
                chain_id: 31337,
                nonce: 2,
                to: Some(Address::repeat_byte(0x22)),
                value: U256::from(1_000u64),
            },
            seismic: SeismicElements {
                encryption_pubkey: CompressedPublicKey::from_hex(
                    "028e76821eb4d77fd30223ca971c49738eb5b5b71eabe93f96b348fdce788ae5a0",
                )
                .unwrap(),
                encryption_nonce: EncryptionNonce::from_hex("46a2b6020bba77fcb1e676a6").unwrap(),
                message_version: MessageVersion::Raw,
                recent_block_hash: B256::repeat_byte(0x33),
                expires_at_block: 100,
                signed_read: false,
            },
        }
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let metadata = sample_metadata();
        assert_eq!(encode_aad(&metadata), encode_aad(&metadata));
    }

    #[test]
    fn excludes_gas_gas_price_and_data() {
        // The AAD encoder takes a `TxSeismicMetadata`, which structurally
        // has no `gas`, `gas_price`, or `data` fields to encode — this test
        // documents that omission rather than exercising behavior.
        let metadata = sample_metadata();
        let aad = encode_aad(&metadata);
        assert!(!aad.is_empty());
    }

    #[test]
    fn changing_to_changes_aad() {
        let mut metadata = sample_metadata();
        let base = encode_aad(&metadata);
        metadata.legacy.to = None;
        assert_ne!(encode_aad(&metadata), base);
    }

    #[test]
    fn changing_signed_read_changes_aad() {
        let mut metadata = sample_metadata();
        let base = encode_aad(&metadata);
        metadata.seismic.signed_read = true;
        assert_ne!(encode_aad(&metadata), base);
    }
}
