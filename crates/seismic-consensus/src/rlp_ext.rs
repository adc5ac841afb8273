//! Field-encoding helpers for the two envelope rules that don't have a
//! direct `alloy_rlp` primitive: optional addresses and booleans.

use crate::error::ConsensusError;
use alloy_primitives::Address;
use alloy_rlp::{BufMut, Encodable, Header};

/// `to == None` (contract creation) encodes as the RLP empty string;
/// `Some(addr)` encodes as the raw 20 address bytes.
pub(crate) fn encode_optional_address(to: Option<Address>, out: &mut dyn BufMut) {
    match to {
        Some(addr) => addr.encode(out),
        None => Header { list: false, payload_length: 0 }.encode(out),
    }
}

pub(crate) fn optional_address_length(to: Option<Address>) -> usize {
    match to {
        Some(addr) => addr.length(),
        None => 1,
    }
}

pub(crate) fn decode_optional_address(
    buf: &mut &[u8],
) -> Result<Option<Address>, ConsensusError> {
    let header = Header::decode(buf)?;
    if header.list {
        return Err(ConsensusError::AddressFieldIsList);
    }
    match header.payload_length {
        0 => Ok(None),
        20 => {
            let (addr, rest) = buf.split_at(20);
            *buf = rest;
            Ok(Some(Address::from_slice(addr)))
        }
        other => Err(ConsensusError::WrongItemCount { expected: 20, actual: other }),
    }
}

/// `true` encodes as the single raw byte `0x01` (self-encoding, below the
/// RLP short-string threshold); `false` encodes as the RLP empty string.
pub(crate) fn encode_bool(value: bool, out: &mut dyn BufMut) {
    if value {
        out.put_u8(0x01);
    } else {
        Header { list: false, payload_length: 0 }.encode(out);
    }
}

pub(crate) fn bool_length(_value: bool) -> usize {
    1
}

pub(crate) fn decode_bool(buf: &mut &[u8]) -> Result<bool, ConsensusError> {
    match buf.first().copied() {
        Some(0x80) => {
            *buf = &buf[1..];
            Ok(false)
        }
        Some(0x01) => {
            *buf = &buf[1..];
            Ok(true)
        }
        Some(other) => Err(ConsensusError::InvalidBoolEncoding(other)),
        None => Err(ConsensusError::Rlp(alloy_rlp::Error::InputTooShort)),
    }
}
