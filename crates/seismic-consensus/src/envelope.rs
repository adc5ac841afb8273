use crate::{
    elements::{MessageVersion, SeismicElements, Signature},
    error::ConsensusError,
    rlp_ext::{
        bool_length, decode_bool, decode_optional_address, encode_bool, encode_optional_address,
        optional_address_length,
    },
};
use alloy_primitives::{keccak256, Address, B256, U256};
use alloy_rlp::{BufMut, Decodable, Encodable, Header};

/// The chain's custom transaction type byte. A signed envelope always
/// begins with this byte; it is never itself RLP-encoded.
pub const SHIELDED_TX_TYPE: u8 = 0x4A;

/// The number of RLP items in an unsigned envelope.
const UNSIGNED_FIELD_COUNT: usize = 13;
/// The number of RLP items in a signed envelope: the 13 unsigned fields
/// plus `y_parity, r, s`.
const SIGNED_FIELD_COUNT: usize = UNSIGNED_FIELD_COUNT + 3;

/// Splits the payload of an RLP list into the raw encoded bytes (header +
/// payload) of each of its items, without assuming anything about the
/// items' types.
fn split_rlp_items(mut payload: &[u8]) -> Result<Vec<&[u8]>, ConsensusError> {
    let mut items = Vec::new();
    while !payload.is_empty() {
        let before = payload;
        let item_header = Header::decode(&mut payload)?;
        let header_len = before.len() - payload.len();
        let total_len = header_len + item_header.payload_length;
        if total_len > before.len() {
            return Err(ConsensusError::Rlp(alloy_rlp::Error::InputTooShort));
        }
        items.push(&before[..total_len]);
        payload = &before[total_len..];
    }
    Ok(items)
}

/// An unsigned `ShieldedTx` envelope. `data` is always ciphertext
/// by the time it reaches this type — plaintext never passes through here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedShieldedTx {
    /// EIP-155 chain identifier.
    pub chain_id: u64,
    /// Sender's transaction count at build time.
    pub nonce: u64,
    /// Wei per unit of gas.
    pub gas_price: u128,
    /// Gas limit.
    pub gas: u64,
    /// Call target; `None` is a contract-creation transaction.
    pub to: Option<Address>,
    /// Wei value transferred.
    pub value: U256,
    /// AES-256-GCM ciphertext (including the 16-byte tag) of the call data.
    pub data: Vec<u8>,
    /// The Seismic-specific envelope fields.
    pub seismic: SeismicElements,
}

impl UnsignedShieldedTx {
    /// Total length, in bytes, of the 13 encoded fields without a list
    /// header — i.e. the RLP list's payload length.
    fn fields_payload_length(&self) -> usize {
        self.chain_id.length()
            + self.nonce.length()
            + self.gas_price.length()
            + self.gas.length()
            + optional_address_length(self.to)
            + self.value.length()
            + self.seismic.encryption_pubkey.as_slice().length()
            + self.seismic.encryption_nonce.as_slice().length()
            + self.seismic.message_version.as_u8().length()
            + self.seismic.recent_block_hash.length()
            + self.seismic.expires_at_block.length()
            + bool_length(self.seismic.signed_read)
            + self.data.as_slice().length()
    }

    /// Encodes the 13 fields, in the exact wire order, with no list
    /// header — the shared core of both the unsigned and signed forms.
    fn encode_fields(&self, out: &mut dyn BufMut) {
        self.chain_id.encode(out);
        self.nonce.encode(out);
        self.gas_price.encode(out);
        self.gas.encode(out);
        encode_optional_address(self.to, out);
        self.value.encode(out);
        self.seismic.encryption_pubkey.as_slice().encode(out);
        self.seismic.encryption_nonce.as_slice().encode(out);
        self.seismic.message_version.as_u8().encode(out);
        self.seismic.recent_block_hash.encode(out);
        self.seismic.expires_at_block.encode(out);
        encode_bool(self.seismic.signed_read, out);
        self.data.as_slice().encode(out);
    }

    /// RLP-encodes just the 13 fields, with a list header but no `0x4a`
    /// type prefix and no signature.
    pub fn encode_unsigned(&self) -> Vec<u8> {
        let payload_length = self.fields_payload_length();
        let mut out = Vec::with_capacity(payload_length + 4);
        Header { list: true, payload_length }.encode(&mut out);
        self.encode_fields(&mut out);
        out
    }

    /// `keccak256(0x4a ‖ rlp(unsigned))` — the raw (non-EIP-712) signing
    /// hash.
    pub fn raw_signing_hash(&self) -> B256 {
        let mut payload = Vec::with_capacity(1);
        payload.push(SHIELDED_TX_TYPE);
        payload.extend(self.encode_unsigned());
        keccak256(payload)
    }

    /// Builds the signing hash appropriate for this envelope's
    /// `message_version`.
    pub fn signing_hash(&self) -> B256 {
        match self.seismic.message_version {
            MessageVersion::Raw => self.raw_signing_hash(),
            MessageVersion::Eip712 => crate::eip712::signing_hash(self),
        }
    }

    /// Serializes the signed envelope: `0x4a ‖ rlp([fields.., y_parity, r, s])`.
    ///
    /// The RLP bytes are identical in shape regardless of which signing
    /// hash produced `sig` — the node dispatches on `message_version`
    /// inside the envelope, not on anything about the signature encoding.
    pub fn encode_signed(&self, sig: &Signature) -> Vec<u8> {
        let v = U256::from(sig.v);
        let payload_length = self.fields_payload_length() + v.length() + sig.r.length() + sig.s.length();
        let mut out = Vec::with_capacity(1 + payload_length + 4);
        out.push(SHIELDED_TX_TYPE);
        Header { list: true, payload_length }.encode(&mut out);
        self.encode_fields(&mut out);
        v.encode(&mut out);
        sig.r.encode(&mut out);
        sig.s.encode(&mut out);
        out
    }

    /// Parses a signed envelope back into its unsigned fields and signature.
    ///
    /// `raw` must begin with the `0x4a` type byte.
    pub fn decode_signed(raw: &[u8]) -> Result<(Self, Signature), ConsensusError> {
        let (prefix, mut body) = raw
            .split_first()
            .ok_or(ConsensusError::Rlp(alloy_rlp::Error::InputTooShort))?;
        if *prefix != SHIELDED_TX_TYPE {
            return Err(ConsensusError::WrongTypePrefix(*prefix));
        }

        let header = Header::decode(&mut body)?;
        if !header.list {
            return Err(ConsensusError::Rlp(alloy_rlp::Error::UnexpectedString));
        }
        if body.len() < header.payload_length {
            return Err(ConsensusError::Rlp(alloy_rlp::Error::InputTooShort));
        }
        let list_payload = &body[..header.payload_length];
        let items = split_rlp_items(list_payload)?;
        if items.len() != SIGNED_FIELD_COUNT {
            return Err(ConsensusError::WrongItemCount {
                expected: SIGNED_FIELD_COUNT,
                actual: items.len(),
            });
        }

        let chain_id = u64::decode(&mut &items[0][..])?;
        let nonce = u64::decode(&mut &items[1][..])?;
        let gas_price = u128::decode(&mut &items[2][..])?;
        let gas = u64::decode(&mut &items[3][..])?;
        let to = decode_optional_address(&mut &items[4][..])?;
        let value = U256::decode(&mut &items[5][..])?;
        let encryption_pubkey = seismic_primitives::CompressedPublicKey::from_slice(
            &alloy_primitives::Bytes::decode(&mut &items[6][..])?,
        )?;
        let encryption_nonce = seismic_primitives::EncryptionNonce::from_slice(
            &alloy_primitives::Bytes::decode(&mut &items[7][..])?,
        )?;
        let message_version = MessageVersion::try_from(u8::decode(&mut &items[8][..])?)?;
        let recent_block_hash = B256::decode(&mut &items[9][..])?;
        let expires_at_block = u64::decode(&mut &items[10][..])?;
        let signed_read = decode_bool(&mut &items[11][..])?;
        let data = alloy_primitives::Bytes::decode(&mut &items[12][..])?.to_vec();
        let v = u8::decode(&mut &items[13][..])?;
        let r = U256::decode(&mut &items[14][..])?;
        let s = U256::decode(&mut &items[15][..])?;

        let tx = Self {
            chain_id,
            nonce,
            gas_price,
            gas,
            to,
            value,
            data,
            seismic: SeismicElements {
                encryption_pubkey,
                encryption_nonce,
                message_version,
                recent_block_hash,
                expires_at_block,
                signed_read,
            },
        };
        Ok((tx, Signature { v, r, s }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::MessageVersion;
    use seismic_primitives::{CompressedPublicKey, EncryptionNonce};

    /// Anvil-key-#0 fixture, lifted verbatim from the reference client's
    /// `test_serialize.py` known-vector test (itself cross-validated
    /// against seismic-viem's encoding test suite).
    fn vector_tx() -> UnsignedShieldedTx {
        let data = hex::decode(
            "bf645e68de8096b62950fac2d5bceb71ab1a085aed2e973a8b4f961ca77209f9\
             9116130edecd27c39fc62e1b3c05ff42d9e4382f987fc55c2011f8e4f2e66204\
             e17174e9d2756bb20f4cdfe48bd5d237",
        )
        .unwrap();
        UnsignedShieldedTx {
            chain_id: 31337,
            nonce: 2,
            gas_price: 1_000_000_000,
            gas: 100_000,
            to: Some("0xd3e8763675e4c425df46cc3b5c0f6cbdac396046".parse().unwrap()),
            value: U256::from(1_000_000_000_000_000u64),
            data,
            seismic: SeismicElements {
                encryption_pubkey: CompressedPublicKey::from_hex(
                    "028e76821eb4d77fd30223ca971c49738eb5b5b71eabe93f96b348fdce788ae5a0",
                )
                .unwrap(),
                encryption_nonce: EncryptionNonce::from_hex("46a2b6020bba77fcb1e676a6").unwrap(),
                message_version: MessageVersion::Raw,
                recent_block_hash: B256::from_slice(
                    &hex::decode(
                        "934207181885f6859ca848f5f01091d1957444a920a2bfb262fa043c6c239f90",
                    )
                    .unwrap(),
                ),
                expires_at_block: 100,
                signed_read: false,
            },
        }
    }

    const EXPECTED_SIGNED_TX: &str = "4af90112827a6902843b9aca00830186a094d3e8763675e4c425df46cc3b5c0f\
        6cbdac39604687038d7ea4c68000a1028e76821eb4d77fd30223ca971c49738eb5\
        b5b71eabe93f96b348fdce788ae5a08c46a2b6020bba77fcb1e676a680a0934207\
        181885f6859ca848f5f01091d1957444a920a2bfb262fa043c6c239f906480b850\
        bf645e68de8096b62950fac2d5bceb71ab1a085aed2e973a8b4f961ca77209f991\
        16130edecd27c39fc62e1b3c05ff42d9e4382f987fc55c2011f8e4f2e66204e171\
        74e9d2756bb20f4cdfe48bd5d23780a0fea7db32f4e44d75eb13f84d2cf04c2808\
        a5c8dba8dac629476fe27e04c7629fa001f17d58cf879dc2c787d526b90a17b6d7\
        bcbf4fbd581215ae3f6099e43c84c5";

    fn vector_signature() -> Signature {
        Signature {
            v: 0,
            r: U256::from_be_bytes::<32>(
                hex::decode("fea7db32f4e44d75eb13f84d2cf04c2808a5c8dba8dac629476fe27e04c7629f")
                    .unwrap()
                    .try_into()
                    .unwrap(),
            ),
            s: U256::from_be_bytes::<32>(
                hex::decode("01f17d58cf879dc2c787d526b90a17b6d7bcbf4fbd581215ae3f6099e43c84c5")
                    .unwrap()
                    .try_into()
                    .unwrap(),
            ),
        }
    }

    #[test]
    fn known_answer_signed_envelope() {
        let tx = vector_tx();
        let sig = vector_signature();
        let signed = tx.encode_signed(&sig);
        assert_eq!(hex::encode(&signed), EXPECTED_SIGNED_TX);
    }

    #[test]
    fn signed_envelope_starts_with_type_byte_and_has_16_items() {
        let tx = vector_tx();
        let sig = vector_signature();
        let signed = tx.encode_signed(&sig);
        assert_eq!(signed[0], SHIELDED_TX_TYPE);

        let (decoded_tx, decoded_sig) = UnsignedShieldedTx::decode_signed(&signed).unwrap();
        assert_eq!(decoded_tx, tx);
        assert_eq!(decoded_sig, sig);
    }

    #[test]
    fn changing_any_field_changes_the_raw_signing_hash() {
        let base = vector_tx();
        let base_hash = base.raw_signing_hash();

        let mut bumped_nonce = base.clone();
        bumped_nonce.nonce += 1;
        assert_ne!(bumped_nonce.raw_signing_hash(), base_hash);

        let mut bumped_value = base.clone();
        bumped_value.value += U256::from(1);
        assert_ne!(bumped_value.raw_signing_hash(), base_hash);

        let mut flipped_read = base.clone();
        flipped_read.seismic.signed_read = !flipped_read.seismic.signed_read;
        assert_ne!(flipped_read.raw_signing_hash(), base_hash);
    }

    #[test]
    fn contract_creation_round_trips_with_empty_to() {
        let mut tx = vector_tx();
        tx.to = None;
        let sig = vector_signature();
        let signed = tx.encode_signed(&sig);
        let (decoded_tx, _) = UnsignedShieldedTx::decode_signed(&signed).unwrap();
        assert_eq!(decoded_tx.to, None);
    }
}
