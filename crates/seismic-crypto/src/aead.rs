//! AES-256-GCM AEAD wrapper.

use crate::error::CryptoError;
use aes_gcm::{
    aead::{generic_array::GenericArray, Aead, KeyInit, Payload},
    Aes256Gcm,
};
use seismic_primitives::{Bytes32, EncryptionNonce};

/// Encrypts `plaintext` under `key`/`nonce`, binding `aad` into the GCM tag.
///
/// Empty plaintext is a short-circuit identity case: it encrypts to an
/// empty byte string with no tag appended, matching the chain's handling of
/// zero-length calldata.
pub fn encrypt(
    key: &Bytes32,
    nonce: &EncryptionNonce,
    aad: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    if plaintext.is_empty() {
        return Ok(Vec::new());
    }
    let cipher = Aes256Gcm::new(GenericArray::from_slice(key.as_slice()));
    let nonce = GenericArray::from_slice(nonce.as_slice());
    cipher
        .encrypt(nonce, Payload { msg: plaintext, aad })
        .map_err(|_| CryptoError::AuthenticationFailure)
}

/// Decrypts `ciphertext` (with its 16-byte tag appended) under `key`/`nonce`,
/// verifying `aad`.
///
/// Empty ciphertext decrypts to empty plaintext, mirroring [`encrypt`]'s
/// identity case. A wrong key, nonce, or AAD fails with
/// [`CryptoError::AuthenticationFailure`]; callers must not retry with the
/// same ciphertext.
pub fn decrypt(
    key: &Bytes32,
    nonce: &EncryptionNonce,
    aad: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    if ciphertext.is_empty() {
        return Ok(Vec::new());
    }
    let cipher = Aes256Gcm::new(GenericArray::from_slice(key.as_slice()));
    let nonce = GenericArray::from_slice(nonce.as_slice());
    cipher
        .decrypt(nonce, Payload { msg: ciphertext, aad })
        .map_err(|_| CryptoError::AuthenticationFailure)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_and_nonce() -> (Bytes32, EncryptionNonce) {
        (Bytes32::ZERO, EncryptionNonce::new([0x01; 12]).unwrap())
    }

    #[test]
    fn known_answer_no_aad() {
        // Scenario B's vector uses an all-zero nonce, which our
        // `EncryptionNonce` type rejects (leading byte must be nonzero per
        // the envelope invariant); exercise the raw AEAD primitive directly
        // to match the published vector.
        let cipher = Aes256Gcm::new(GenericArray::from_slice(&[0u8; 32]));
        let raw_nonce = GenericArray::from_slice(&[0u8; 12]);
        let ct = cipher.encrypt(raw_nonce, b"HelloAESGCM".as_slice()).unwrap();
        assert_eq!(hex::encode(&ct), "86c22c5122212e3d400d886f80dfcfcbacb96cbc815db886e1a6cd");
    }

    #[test]
    fn round_trips_with_matching_aad() {
        let (key, nonce) = key_and_nonce();
        let aad = b"metadata";
        let pt = b"shielded calldata";
        let ct = encrypt(&key, &nonce, aad, pt).unwrap();
        let decrypted = decrypt(&key, &nonce, aad, &ct).unwrap();
        assert_eq!(decrypted, pt);
    }

    #[test]
    fn wrong_aad_fails_authentication() {
        let (key, nonce) = key_and_nonce();
        let ct = encrypt(&key, &nonce, b"aad-a", b"payload").unwrap();
        let err = decrypt(&key, &nonce, b"aad-b", &ct).unwrap_err();
        assert!(matches!(err, CryptoError::AuthenticationFailure));
    }

    #[test]
    fn empty_plaintext_round_trips_to_empty() {
        let (key, nonce) = key_and_nonce();
        let ct = encrypt(&key, &nonce, b"aad", b"").unwrap();
        assert!(ct.is_empty());
        let pt = decrypt(&key, &nonce, b"aad", &ct).unwrap();
        assert!(pt.is_empty());
    }
}
