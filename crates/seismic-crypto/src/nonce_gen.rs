//! Encryption nonce generation.

use rand::{CryptoRng, RngCore};
use seismic_primitives::EncryptionNonce;

/// Draws a fresh 12-byte nonce, rejecting and re-sampling if the leading
/// byte is zero. Expected retry rate is ~1/256.
pub fn generate_nonce<R: RngCore + CryptoRng>(rng: &mut R) -> EncryptionNonce {
    loop {
        let mut bytes = [0u8; 12];
        rng.fill_bytes(&mut bytes);
        if let Ok(nonce) = EncryptionNonce::new(bytes) {
            return nonce;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_nonces_have_nonzero_leading_byte() {
        let mut rng = rand::thread_rng();
        for _ in 0..256 {
            let nonce = generate_nonce(&mut rng);
            assert_ne!(nonce.as_bytes()[0], 0);
        }
    }
}
