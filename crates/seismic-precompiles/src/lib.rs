//! Clients for the chain's six fixed-address cryptographic precompiles:
//! RNG, ECDH, AES-256-GCM encrypt/decrypt, HKDF, and secp256k1 signing.
//!
//! Every call dispatches through [`SeismicTransport::call`] as a raw
//! `eth_call` with no `from` field, matching how the node rejects
//! unsigned calls carrying a non-zero sender.

mod aes;
mod dispatch;
mod ecdh;
mod error;
mod gas;
mod hkdf;
mod rng;
mod sign;

pub use aes::{AesDecrypt, AesEncrypt};
pub use ecdh::Ecdh;
pub use error::PrecompileError;
pub use hkdf::Hkdf;
pub use rng::Rng;
pub use sign::Secp256k1Sign;

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{keccak256, Bytes, B256, U256};
    use async_trait::async_trait;
    use seismic_primitives::{bytes32_from_hex, Bytes32, CompressedPublicKey, EncryptionNonce};
    use seismic_rpc::{SeismicTransport, TransportError};
    use serde_json::{json, Value};

    struct FixedTransport(Value);

    #[async_trait]
    impl SeismicTransport for FixedTransport {
        async fn call(&self, _method: &str, _params: Value) -> Result<Value, TransportError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn rng_packs_length_then_personalization() {
        let input = Rng::encode_input(32, b"ctx");
        assert_eq!(&input[..4], &32u32.to_be_bytes());
        assert_eq!(&input[4..], b"ctx");
    }

    #[test]
    fn rng_decodes_right_aligned_output() {
        let mut word = [0u8; 32];
        word[31] = 7;
        let decoded = Rng::decode_output(&word).unwrap();
        assert_eq!(decoded, U256::from(7));

        let short = [0u8, 0, 7];
        assert_eq!(Rng::decode_output(&short).unwrap(), U256::from(7));
    }

    #[test]
    fn ecdh_packs_secret_then_pubkey() {
        let secret = bytes32_from_hex(
            "a30363336e1bb949185292a2a302de86e447d98f3a43d823c8c234d9e3e5ad77",
        )
        .unwrap();
        let pubkey = CompressedPublicKey::from_hex(
            "028e76821eb4d77fd30223ca971c49738eb5b5b71eabe93f96b348fdce788ae5a0",
        )
        .unwrap();
        let input = Ecdh::encode_input(&secret, &pubkey);
        assert_eq!(input.len(), 65);
        assert_eq!(&input[..32], secret.as_slice());
        assert_eq!(&input[32..], pubkey.as_slice());
    }

    #[test]
    fn aes_inputs_pack_key_nonce_then_payload() {
        let key = Bytes32::repeat_byte(0xaa);
        let nonce = EncryptionNonce::from_hex("46a2b6020bba77fcb1e676a6").unwrap();
        let input = AesEncrypt::encode_input(&key, &nonce, b"hello");
        assert_eq!(input.len(), 32 + 12 + 5);
        assert_eq!(&input[..32], key.as_slice());
        assert_eq!(&input[32..44], nonce.as_slice());
        assert_eq!(&input[44..], b"hello");
    }

    #[test]
    fn hkdf_input_is_the_raw_ikm() {
        assert_eq!(Hkdf::encode_input(b"ikm-bytes"), b"ikm-bytes".to_vec());
    }

    #[test]
    fn sign_input_is_sk_then_msghash() {
        let sk = Bytes32::repeat_byte(0x11);
        let msghash = B256::repeat_byte(0x22);
        let input = Secp256k1Sign::encode_input(&sk, &msghash);
        assert_eq!(input.len(), 64);
        assert_eq!(&input[..32], sk.as_slice());
        assert_eq!(&input[32..], msghash.as_slice());
    }

    #[test]
    fn personal_sign_hash_matches_eip191() {
        let message = b"hello world";
        let mut expected = format!("\x19Ethereum Signed Message:\n{}", message.len()).into_bytes();
        expected.extend(message);
        assert_eq!(Secp256k1Sign::personal_sign_hash(message), keccak256(expected));
    }

    #[tokio::test]
    async fn rng_round_trips_through_a_transport() {
        let mut word = [0u8; 32];
        word[31] = 9;
        let transport = FixedTransport(json!(Bytes::copy_from_slice(&word)));
        let out = Rng::call(&transport, 32, &[]).await.unwrap();
        assert_eq!(out, U256::from(9));
    }

    #[test]
    fn rng_gas_cost_with_no_personalization() {
        // init cost is base-only since personalization is empty; fill cost
        // is one word per byte requested, rounded up to a 32-byte word.
        assert_eq!(Rng::gas_cost(32, &[]), 3500 + 5);
    }

    #[test]
    fn aes_gas_cost_matches_the_linear_formula() {
        assert_eq!(AesEncrypt::gas_cost(0), 1000);
        assert_eq!(AesEncrypt::gas_cost(16), 1000 + 30);
        assert_eq!(AesDecrypt::gas_cost(17), 1000 + 60);
    }

    #[test]
    fn ecdh_gas_cost_is_fixed() {
        assert_eq!(Ecdh::gas_cost(), 3120);
    }

    #[test]
    fn hkdf_gas_cost_matches_the_reference_formula() {
        // The linear term's base is billed even for empty input; only the
        // per-word multiplier is skipped.
        assert_eq!(Hkdf::gas_cost(0), 2 * 3000 + 120);
        assert_eq!(Hkdf::gas_cost(32), 2 * (3000 + 12) + 120);
    }

    #[test]
    fn secp256k1_sign_gas_cost_is_fixed() {
        assert_eq!(Secp256k1Sign::gas_cost(), 3000);
    }
}
