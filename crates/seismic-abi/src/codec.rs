//! Selector computation and argument encode/decode against a shielded
//! function signature.

use crate::{error::AbiError, signature::ParsedSignature};
use alloy_dyn_abi::{DynSolType, DynSolValue};
use alloy_primitives::{keccak256, Address, I256, Selector, B256, U256};

/// `keccak256(shielded_signature)[0:4]` — the on-chain selector. Computed
/// from the *shielded* signature text, never the remapped one: the
/// selector is part of the contract's public interface and shielded types
/// are part of that interface's spelling.
pub fn selector(shielded_signature: &str) -> Selector {
    Selector::from_slice(&keccak256(shielded_signature.as_bytes())[..4])
}

/// ABI-encodes a call to `shielded_signature` with `args`, returning
/// `selector ‖ encoded_params`.
///
/// `args` are encoded against the *standard* (remapped) parameter types,
/// since a shielded value's wire layout is identical to its unshielded
/// counterpart — only the selector differs.
pub fn encode_call(shielded_signature: &str, args: &[DynSolValue]) -> Result<Vec<u8>, AbiError> {
    let parsed = ParsedSignature::parse(shielded_signature)?;
    if parsed.params.len() != args.len() {
        return Err(AbiError::ArgCountMismatch { expected: parsed.params.len(), actual: args.len() });
    }
    // Parsing each remapped parameter validates that the standard form is
    // itself a well-formed ABI type; the parsed types aren't otherwise
    // needed since `args` are already `DynSolValue`s.
    for param in &parsed.params {
        DynSolType::parse(&remap_only(param))?;
    }

    let mut out = selector(shielded_signature).to_vec();
    out.extend(DynSolValue::Tuple(args.to_vec()).abi_encode_params());
    Ok(out)
}

fn remap_only(param: &str) -> String {
    crate::signature::remap_type(param)
}

/// ABI-decodes `data` as the output of `shielded_signature`, whose return
/// types are given by `output_types` (standard Solidity type strings —
/// outputs are never remapped).
///
/// An empty `data` with a non-empty `output_types` decodes as the zero
/// value of each declared type, rather than erroring.
pub fn decode_output(
    output_types: &[&str],
    data: &[u8],
) -> Result<Vec<DynSolValue>, AbiError> {
    let types: Vec<DynSolType> =
        output_types.iter().map(|t| DynSolType::parse(t)).collect::<Result<_, _>>()?;

    if data.is_empty() {
        return Ok(types.iter().map(zero_value).collect());
    }

    match DynSolType::Tuple(types).abi_decode_params(data)? {
        DynSolValue::Tuple(values) => Ok(values),
        other => Ok(vec![other]),
    }
}

/// The zero value of a Solidity ABI type: `0` for numerics, `false` for
/// bool, the zero address, empty dynamic bytes/string, zero-length
/// dynamic arrays, and recursively-zeroed fixed arrays and tuples.
fn zero_value(ty: &DynSolType) -> DynSolValue {
    match ty {
        DynSolType::Bool => DynSolValue::Bool(false),
        DynSolType::Int(size) => DynSolValue::Int(I256::ZERO, *size),
        DynSolType::Uint(size) => DynSolValue::Uint(U256::ZERO, *size),
        DynSolType::Address => DynSolValue::Address(Address::ZERO),
        DynSolType::FixedBytes(size) => DynSolValue::FixedBytes(B256::ZERO, *size),
        DynSolType::Bytes => DynSolValue::Bytes(Vec::new()),
        DynSolType::String => DynSolValue::String(String::new()),
        DynSolType::Array(_inner) => DynSolValue::Array(Vec::new()),
        DynSolType::FixedArray(inner, len) => {
            DynSolValue::FixedArray((0..*len).map(|_| zero_value(inner)).collect())
        }
        DynSolType::Tuple(inner) => DynSolValue::Tuple(inner.iter().map(zero_value).collect()),
        other => unreachable!("unsupported output type in shielded ABI: {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scenario E: `setNumber(suint256)` called with `42` encodes as the
    /// keccak of the *shielded* signature's first 4 bytes, followed by
    /// the standard ABI encoding of `uint256(42)`.
    #[test]
    fn known_answer_shielded_call() {
        let encoded = encode_call("setNumber(suint256)", &[DynSolValue::Uint(U256::from(42), 256)])
            .unwrap();

        let expected_selector = keccak256(b"setNumber(suint256)")[..4].to_vec();
        assert_eq!(&encoded[..4], expected_selector.as_slice());
        assert_eq!(encoded.len(), 4 + 32);
        assert_eq!(&encoded[4..], U256::from(42).to_be_bytes::<32>().as_slice());
    }

    #[test]
    fn selector_differs_from_standard_signature_selector() {
        let shielded = selector("setNumber(suint256)");
        let standard = selector("setNumber(uint256)");
        assert_ne!(shielded, standard);
    }

    #[test]
    fn empty_output_decodes_to_zero_values() {
        let decoded = decode_output(&["uint256", "bool", "address"], &[]).unwrap();
        assert_eq!(decoded, vec![
            DynSolValue::Uint(U256::ZERO, 256),
            DynSolValue::Bool(false),
            DynSolValue::Address(Address::ZERO),
        ]);
    }

    #[test]
    fn non_empty_output_decodes_normally() {
        let mut data = vec![0u8; 32];
        data[31] = 7;
        let decoded = decode_output(&["uint256"], &data).unwrap();
        assert_eq!(decoded, vec![DynSolValue::Uint(U256::from(7), 256)]);
    }

    #[test]
    fn rejects_wrong_argument_count() {
        let err = encode_call("setNumber(suint256)", &[]).unwrap_err();
        assert!(matches!(err, AbiError::ArgCountMismatch { expected: 1, actual: 0 }));
    }
}
