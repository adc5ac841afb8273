//! ECDH + HKDF key agreement.
//!
//! This is *not* the standard "SHA-256 of the compressed point" ECIES
//! convention: the version byte mixed into the hash is derived from the
//! shared point's y-parity, but the hashed payload is the x-coordinate
//! alone. Implementers porting this to another language must reproduce
//! exactly the three steps below, not a generic ECDH+HKDF helper.

use crate::error::CryptoError;
use k256::elliptic_curve::{group::Curve, sec1::ToEncodedPoint};
use k256::{ecdsa::SigningKey, ProjectivePoint, PublicKey, Scalar, SecretKey};
use rand::{CryptoRng, RngCore};
use seismic_primitives::{Bytes32, CompressedPublicKey};
use sha2::{Digest, Sha256};

const HKDF_INFO: &[u8] = b"aes-gcm key";

/// An ephemeral secp256k1 keypair used for one session's ECDH negotiation
/// with the node's TEE public key.
#[derive(Clone)]
pub struct EphemeralKeypair {
    secret: SecretKey,
    public: CompressedPublicKey,
}

impl EphemeralKeypair {
    /// Generates a new keypair from a cryptographically secure RNG.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let secret = SecretKey::random(rng);
        Self::from_secret(secret)
    }

    /// Builds a keypair from a caller-supplied 32-byte private scalar.
    pub fn from_bytes(bytes: &Bytes32) -> Result<Self, CryptoError> {
        let secret = SecretKey::from_slice(bytes.as_slice())?;
        Ok(Self::from_secret(secret))
    }

    fn from_secret(secret: SecretKey) -> Self {
        let compressed = secret.public_key().to_sec1_bytes();
        let public = CompressedPublicKey::from_slice(&compressed)
            .expect("k256 always emits a 33-byte 0x02/0x03-prefixed point");
        Self { secret, public }
    }

    /// The compressed public key to bind into the transaction envelope.
    pub fn public_key(&self) -> CompressedPublicKey {
        self.public
    }

    /// The raw 32-byte private scalar.
    pub fn private_key_bytes(&self) -> Bytes32 {
        Bytes32::from_slice(&self.secret.to_bytes())
    }

    pub(crate) fn secret(&self) -> &SecretKey {
        &self.secret
    }
}

/// Performs secp256k1 point multiplication and returns the uncompressed
/// `x ‖ y` coordinates (no `0x04` prefix), per spec step 1.
fn ecdh_point(client_sk: &SecretKey, network_pk: &PublicKey) -> [u8; 64] {
    let scalar: Scalar = *client_sk.to_nonzero_scalar();
    let point = ProjectivePoint::from(*network_pk.as_affine()) * scalar;
    let affine = point.to_affine();
    let encoded = affine.to_encoded_point(false);
    let mut out = [0u8; 64];
    out.copy_from_slice(&encoded.as_bytes()[1..]);
    out
}

/// Derives the non-standard shared-key bytes from the ECDH point, per spec
/// step 2: `SHA256((y_31 & 1 | 0x02) ‖ x)`.
fn shared_key_from_point(point: &[u8; 64]) -> [u8; 32] {
    let (x, y) = point.split_at(32);
    let version_byte = (y[31] & 0x01) | 0x02;
    let mut hasher = Sha256::new();
    hasher.update([version_byte]);
    hasher.update(x);
    hasher.finalize().into()
}

/// Derives the 32-byte AES-256-GCM key from `client_sk` and the node's
/// advertised TEE `network_pk`.
pub fn generate_aes_key(
    client_sk: &SecretKey,
    network_pk: &CompressedPublicKey,
) -> Result<Bytes32, CryptoError> {
    let network_pk = PublicKey::from_sec1_bytes(network_pk.as_slice())?;
    let point = ecdh_point(client_sk, &network_pk);
    let shared_key = shared_key_from_point(&point);

    let hk = hkdf::Hkdf::<Sha256>::new(None, &shared_key);
    let mut aes_key = [0u8; 32];
    hk.expand(HKDF_INFO, &mut aes_key).expect("32 <= 255 * HashLen for SHA-256");
    Ok(Bytes32::from(aes_key))
}

/// Convenience wrapper combining [`EphemeralKeypair`] generation (if not
/// supplied) with [`generate_aes_key`].
pub fn generate_aes_key_for_session(
    client_sk: Option<&Bytes32>,
    network_pk: &CompressedPublicKey,
) -> Result<(EphemeralKeypair, Bytes32), CryptoError> {
    let keypair = match client_sk {
        Some(bytes) => EphemeralKeypair::from_bytes(bytes)?,
        None => EphemeralKeypair::random(&mut rand::thread_rng()),
    };
    let aes_key = generate_aes_key(keypair.secret(), network_pk)?;
    Ok((keypair, aes_key))
}

/// Derives the ethereum-style address (last 20 bytes of `keccak256` of the
/// uncompressed public key) for a signing key. Kept here because callers of
/// `generate_aes_key_for_session` frequently need the sibling signing
/// identity in the same breath.
pub fn address_from_signing_key(signing_key: &SigningKey) -> alloy_primitives::Address {
    alloy_primitives::Address::from_public_key(signing_key.verifying_key())
}
