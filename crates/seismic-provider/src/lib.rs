//! The node-facing half of the Seismic shielded-transaction pipeline:
//! resolves transaction metadata, encrypts calldata, signs the envelope,
//! and submits it — plus a client for the viewing-key directory genesis
//! contract.
//!
//! Everything here is generic over [`SeismicTransport`]; [`SeismicClient`]
//! in [`blocking`] wraps it for non-async callers.

mod config;
mod directory;
mod error;
mod metadata;
mod provider;
mod rpc_values;

pub mod blocking;

pub use config::{SendOptions, DEFAULT_BLOCKS_WINDOW, DEFAULT_GAS};
pub use directory::{DirectoryClient, DIRECTORY_ADDRESS};
pub use error::ProviderError;
pub use metadata::fetch_tee_public_key;
pub use provider::{DebugSend, SeismicProvider};

pub use blocking::SeismicClient;
pub use seismic_rpc::{HttpTransport, SeismicTransport};

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{keccak256, Address, Bytes, U256};
    use async_trait::async_trait;
    use seismic_crypto::{EncryptionState, EphemeralKeypair};
    use seismic_rpc::TransportError;
    use serde_json::{json, Value};
    use std::{collections::VecDeque, sync::Mutex};

    /// A FIFO mock transport: each `call` pops the next queued response,
    /// in the order the pipeline is expected to issue its requests.
    #[derive(Debug, Default)]
    struct MockTransport {
        responses: Mutex<VecDeque<Value>>,
    }

    impl MockTransport {
        fn push(&self, value: Value) {
            self.responses.lock().unwrap().push_back(value);
        }
    }

    #[async_trait]
    impl SeismicTransport for MockTransport {
        async fn call(&self, _method: &str, _params: Value) -> Result<Value, TransportError> {
            self.responses.lock().unwrap().pop_front().ok_or(TransportError::EmptyResponse)
        }
    }

    fn mock_session() -> (MockTransport, EncryptionState) {
        let tee_keypair = EphemeralKeypair::random(&mut rand::thread_rng());
        let encryption = EncryptionState::new(None, tee_keypair.public_key()).unwrap();
        (MockTransport::default(), encryption)
    }

    fn queue_metadata_round_trip(transport: &MockTransport, nonce: &str) {
        transport.push(json!("0x7a69")); // eth_chainId
        transport.push(json!(nonce)); // eth_getTransactionCount
        transport.push(json!("0x3b9aca00")); // eth_gasPrice
        transport.push(json!({ "number": "0x64", "hash": format!("0x{}", "11".repeat(32)) }));
    }

    #[tokio::test]
    async fn send_transaction_round_trips_through_mock_node() {
        let (transport, encryption) = mock_session();
        let signer = seismic_signer::ShieldedSigner::random();
        queue_metadata_round_trip(&transport, "0x5");

        let expected_hash = keccak256(b"pretend-tx-hash");
        transport.push(json!(Bytes::copy_from_slice(expected_hash.as_slice())));

        let provider = SeismicProvider::from_parts(transport, signer, encryption);
        let hash = provider
            .send_transaction(None, U256::ZERO, b"hello", &SendOptions::default())
            .await
            .unwrap();
        assert_eq!(hash, expected_hash);
    }

    #[tokio::test]
    async fn signed_read_returns_none_for_empty_response() {
        let (transport, encryption) = mock_session();
        let signer = seismic_signer::ShieldedSigner::random();
        let to = Address::repeat_byte(0x42);
        queue_metadata_round_trip(&transport, "0x0");
        transport.push(json!("0x"));

        let provider = SeismicProvider::from_parts(transport, signer, encryption);
        let result =
            provider.signed_read(to, b"getKey()", &SendOptions::default()).await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn directory_check_has_key_decodes_bool_output() {
        let (transport, encryption) = mock_session();
        let signer = seismic_signer::ShieldedSigner::random();
        let mut word = [0u8; 32];
        word[31] = 1;
        transport.push(json!(Bytes::from(word.to_vec())));

        let provider = SeismicProvider::from_parts(transport, signer, encryption);
        let directory = DirectoryClient::new(&provider);
        let has_key = directory.check_has_key(Address::repeat_byte(0x01)).await.unwrap();
        assert!(has_key);
    }

    #[tokio::test]
    async fn debug_send_does_not_consume_a_send_raw_transaction_response() {
        let (transport, encryption) = mock_session();
        let signer = seismic_signer::ShieldedSigner::random();
        queue_metadata_round_trip(&transport, "0x1");

        let provider = SeismicProvider::from_parts(transport, signer, encryption);
        let debug = provider
            .debug_send_transaction(None, U256::ZERO, b"hello", &SendOptions::default())
            .await
            .unwrap();
        assert_eq!(debug.plaintext, b"hello");
        assert_eq!(debug.tx.nonce, 1);
        assert_eq!(debug.hash, debug.tx.raw_signing_hash());
    }
}
