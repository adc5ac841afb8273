//! Polling scanner for shielded `Transfer`/`Approval` events, decrypting
//! amounts with a viewing key as logs are pulled.

mod config;
mod error;
mod events;
mod rpc_values;
mod scanner;

pub use config::{ScannerConfig, StartBlock, DEFAULT_POLL_INTERVAL};
pub use error::WatchError;
pub use events::{approval_topic0, transfer_topic0, viewing_key_topic, ApprovalEvent, TransferEvent};
pub use scanner::{Scanner, ScannerBuilder};

#[cfg(test)]
mod tests {
    use super::*;
    use aes_gcm::aead::{generic_array::GenericArray, Aead, KeyInit, Payload};
    use aes_gcm::Aes256Gcm;
    use alloy_primitives::{address, keccak256, U256};
    use async_trait::async_trait;
    use seismic_primitives::Bytes32;
    use seismic_rpc::{SeismicTransport, TransportError};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    struct FixedTransport {
        block_number: Value,
        logs: Value,
    }

    #[async_trait]
    impl SeismicTransport for FixedTransport {
        async fn call(&self, method: &str, _params: Value) -> Result<Value, TransportError> {
            match method {
                "eth_blockNumber" => Ok(self.block_number.clone()),
                "eth_getLogs" => Ok(self.logs.clone()),
                other => panic!("unexpected rpc call in test: {other}"),
            }
        }
    }

    fn encrypt_no_aad(key: &[u8; 32], nonce: &[u8; 12], plaintext: &[u8]) -> Vec<u8> {
        let cipher = Aes256Gcm::new(GenericArray::from_slice(key));
        let nonce_arr = GenericArray::from_slice(nonce);
        cipher.encrypt(nonce_arr, Payload { msg: plaintext, aad: &[] }).unwrap()
    }

    #[tokio::test]
    async fn transfer_log_decrypts_to_the_known_amount() {
        // Scenario F: encrypt amount = 42_000 under key = 0xab..ab (32
        // bytes) and nonce = 0x01..01 (12 bytes) with no AAD; the scanner
        // must report exactly one callback with the decrypted amount and
        // the log's indexed from/to.
        let key = [0xabu8; 32];
        let nonce = [0x01u8; 12];
        let amount = U256::from(42_000u64);
        let ciphertext = encrypt_no_aad(&key, &nonce, &amount.to_be_bytes::<32>());

        let mut payload = ciphertext;
        payload.extend_from_slice(&nonce);

        let offset = U256::from(32u64).to_be_bytes::<32>();
        let length = U256::from(payload.len() as u64).to_be_bytes::<32>();
        let mut data = Vec::new();
        data.extend_from_slice(&offset);
        data.extend_from_slice(&length);
        data.extend_from_slice(&payload);
        // Right-pad the dynamic bytes field to a 32-byte boundary, as ABI
        // encoding requires.
        let pad = (32 - data.len() % 32) % 32;
        data.extend(std::iter::repeat(0u8).take(pad));

        let from = address!("1111111111111111111111111111111111111111");
        let to = address!("2222222222222222222222222222222222222222");
        let viewing_key = Bytes32::new(key);
        let key_topic = keccak256(viewing_key.as_slice());

        let log = json!({
            "topics": [
                format!("0x{}", hex::encode(transfer_topic0())),
                format!("0x{:0>64}", hex::encode(from)),
                format!("0x{:0>64}", hex::encode(to)),
                format!("0x{}", hex::encode(key_topic)),
            ],
            "blockNumber": "0x10",
            "data": format!("0x{}", hex::encode(&data)),
        });

        let transport = FixedTransport { block_number: json!("0x10"), logs: json!([log]) };

        let transfers: Arc<Mutex<Vec<TransferEvent>>> = Arc::new(Mutex::new(Vec::new()));
        let approvals: Arc<Mutex<Vec<ApprovalEvent>>> = Arc::new(Mutex::new(Vec::new()));
        let transfers_cb = transfers.clone();
        let approvals_cb = approvals.clone();

        let scanner = ScannerBuilder::new(transport, viewing_key)
            .config(ScannerConfig {
                start_block: StartBlock::Number(0x10),
                poll_interval: Duration::from_millis(5),
            })
            .on_transfer(move |e| transfers_cb.lock().unwrap().push(e))
            .on_approval(move |e| approvals_cb.lock().unwrap().push(e))
            .build();

        let cancel = CancellationToken::new();
        let cancel_clone = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            cancel_clone.cancel();
        });
        scanner.run(cancel).await;

        let seen = transfers.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].amount, amount);
        assert_eq!(seen[0].from, from);
        assert_eq!(seen[0].to, to);
        assert!(approvals.lock().unwrap().is_empty());
    }
}
