//! EIP-712 typed-data signing path. Used when
//! `message_version == Eip712`; the resulting signed envelope is
//! byte-identical in shape to the raw-signed one — only the
//! digest that gets signed differs.

use crate::envelope::UnsignedShieldedTx;
use alloy_primitives::{keccak256, Address, B256, U256};

/// Canonical EIP-712 domain type string.
const DOMAIN_TYPE_STR: &[u8] =
    b"EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// Canonical EIP-712 type string for `TxSeismic`. Field order is fixed by
/// fixed and must not be reordered — it determines the struct hash.
const TX_SEISMIC_TYPE_STR: &[u8] = b"TxSeismic(\
uint64 chainId,\
uint64 nonce,\
uint128 gasPrice,\
uint64 gasLimit,\
address to,\
uint256 value,\
bytes input,\
bytes encryptionPubkey,\
uint96 encryptionNonce,\
uint8 messageVersion,\
bytes32 recentBlockHash,\
uint64 expiresAtBlock,\
bool signedRead)";

const DOMAIN_NAME: &[u8] = b"Seismic Transaction";
const DOMAIN_VERSION: &[u8] = b"2";

fn pad32_u64(value: u64) -> B256 {
    B256::from(U256::from(value))
}

fn pad32_u128(value: u128) -> B256 {
    B256::from(U256::from(value))
}

fn pad32_address(address: Option<Address>) -> B256 {
    let mut out = [0u8; 32];
    if let Some(address) = address {
        out[12..].copy_from_slice(address.as_slice());
    }
    B256::from(out)
}

fn pad32_bool(value: bool) -> B256 {
    pad32_u64(value as u64)
}

/// The EIP-712 domain separator for a given chain id. `verifyingContract`
/// is always the zero address — signing happens off-chain, before the
/// node sees the envelope.
pub fn domain_separator(chain_id: u64) -> B256 {
    let domain_type_hash = keccak256(DOMAIN_TYPE_STR);
    let name_hash = keccak256(DOMAIN_NAME);
    let version_hash = keccak256(DOMAIN_VERSION);

    let mut preimage = Vec::with_capacity(32 * 5);
    preimage.extend_from_slice(domain_type_hash.as_slice());
    preimage.extend_from_slice(name_hash.as_slice());
    preimage.extend_from_slice(version_hash.as_slice());
    preimage.extend_from_slice(pad32_u64(chain_id).as_slice());
    preimage.extend_from_slice(pad32_address(None).as_slice());
    keccak256(preimage)
}

/// The EIP-712 struct hash of a `TxSeismic`.
///
/// `data` and `encryption_pubkey` are dynamic `bytes` fields, so they are
/// replaced with their own keccak digest rather than padded inline.
/// `encryption_nonce`'s 12 raw bytes are reinterpreted as a big-endian
/// `uint96` rather than padded as an opaque byte string.
pub fn struct_hash(tx: &UnsignedShieldedTx) -> B256 {
    let type_hash = keccak256(TX_SEISMIC_TYPE_STR);
    let enc_nonce_int = u128::from_be_bytes({
        let mut buf = [0u8; 16];
        buf[4..].copy_from_slice(tx.seismic.encryption_nonce.as_slice());
        buf
    });

    let mut preimage = Vec::with_capacity(32 * 13);
    preimage.extend_from_slice(type_hash.as_slice());
    preimage.extend_from_slice(pad32_u64(tx.chain_id).as_slice());
    preimage.extend_from_slice(pad32_u64(tx.nonce).as_slice());
    preimage.extend_from_slice(pad32_u128(tx.gas_price).as_slice());
    preimage.extend_from_slice(pad32_u64(tx.gas).as_slice());
    preimage.extend_from_slice(pad32_address(tx.to).as_slice());
    preimage.extend_from_slice(tx.value.to_be_bytes::<32>().as_slice());
    preimage.extend_from_slice(keccak256(&tx.data).as_slice());
    preimage.extend_from_slice(keccak256(tx.seismic.encryption_pubkey.as_slice()).as_slice());
    preimage.extend_from_slice(pad32_u128(enc_nonce_int).as_slice());
    preimage.extend_from_slice(pad32_u64(tx.seismic.message_version.as_u8() as u64).as_slice());
    preimage.extend_from_slice(tx.seismic.recent_block_hash.as_slice());
    preimage.extend_from_slice(pad32_u64(tx.seismic.expires_at_block).as_slice());
    preimage.extend_from_slice(pad32_bool(tx.seismic.signed_read).as_slice());
    keccak256(preimage)
}

/// `keccak256(0x19 0x01 ‖ domain_separator ‖ struct_hash)` — the digest
/// that gets ECDSA-signed in EIP-712 mode.
pub fn signing_hash(tx: &UnsignedShieldedTx) -> B256 {
    let mut preimage = Vec::with_capacity(2 + 32 + 32);
    preimage.push(0x19);
    preimage.push(0x01);
    preimage.extend_from_slice(domain_separator(tx.chain_id).as_slice());
    preimage.extend_from_slice(struct_hash(tx).as_slice());
    keccak256(preimage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{MessageVersion, SeismicElements};
    use alloy_primitives::U256;
    use seismic_primitives::{CompressedPublicKey, EncryptionNonce};

    /// `seismic-alloy`'s `test_eip712_hash` fixture, lifted verbatim from
    /// the reference client's `test_eip712.py`.
    fn reference_tx() -> UnsignedShieldedTx {
        let data = hex::decode(
            "4e69e56c3bb999b8c98772ebb32aebcbd43b33e9e65a46333dfe6636f37f3009\
             e93bad334235aec73bd54d11410e64eb2cab4da8",
        )
        .unwrap();
        UnsignedShieldedTx {
            chain_id: 5124,
            nonce: 48,
            gas_price: 360_000,
            gas: 169_477,
            to: Some("0x3aB946eEC2553114040dE82D2e18798a51cf1e14".parse().unwrap()),
            value: U256::from(1_000_000_000_000_000u64),
            data,
            seismic: SeismicElements {
                encryption_pubkey: CompressedPublicKey::from_hex(
                    "028e76821eb4d77fd30223ca971c49738eb5b5b71eabe93f96b348fdce788ae5a0",
                )
                .unwrap(),
                encryption_nonce: EncryptionNonce::from_hex("7da3a99bf0f90d56551d99ea").unwrap(),
                message_version: MessageVersion::Eip712,
                recent_block_hash: B256::from_slice(
                    &hex::decode(
                        "abcdef1234567890abcdef1234567890abcdef1234567890abcdef1234567890",
                    )
                    .unwrap(),
                ),
                expires_at_block: 1_000_000,
                signed_read: false,
            },
        }
    }

    #[test]
    fn known_answer_domain_separator() {
        assert_eq!(
            domain_separator(5124),
            "0x8c18a115e1d4ee84a16bce167a1f8213215705f0a5fd00475741e2cd7a53fed6"
                .parse::<B256>()
                .unwrap()
        );
    }

    #[test]
    fn known_answer_struct_hash_and_signing_hash() {
        let tx = reference_tx();
        assert_eq!(
            struct_hash(&tx),
            "0x683f681e3a89f9fabcd7175e53c2d72ee0ecd9843e217aa9e97cfeebdad129de"
                .parse::<B256>()
                .unwrap()
        );
        assert_eq!(
            signing_hash(&tx),
            "0x6152c0b10ef0cc2eb90a4bf27f5449d8a1f0529fb09998006dcee7a2e6f51f3f"
                .parse::<B256>()
                .unwrap()
        );
    }

    #[test]
    fn changing_any_field_changes_struct_hash() {
        let base = reference_tx();
        let base_hash = struct_hash(&base);

        let mut bumped = base.clone();
        bumped.seismic.expires_at_block += 1;
        assert_ne!(struct_hash(&bumped), base_hash);

        let mut flipped = base.clone();
        flipped.seismic.signed_read = true;
        assert_ne!(struct_hash(&flipped), base_hash);
    }
}
