//! Polling scanner: periodically pulls `Transfer`/`Approval` logs scoped to
//! one viewing key and dispatches decrypted events to callbacks.

use crate::config::{ScannerConfig, StartBlock};
use crate::error::WatchError;
use crate::events::{self, ApprovalEvent, TransferEvent};
use crate::rpc_values::{field, hex_address, hex_b256, hex_bytes, hex_u64};
use seismic_primitives::Bytes32;
use seismic_rpc::SeismicTransport;
use serde_json::json;
use tokio_util::sync::CancellationToken;

type TransferCallback = Box<dyn Fn(TransferEvent) + Send + Sync>;
type ApprovalCallback = Box<dyn Fn(ApprovalEvent) + Send + Sync>;
type ErrorCallback = Box<dyn Fn(WatchError) + Send + Sync>;

/// Builds a [`Scanner`].
pub struct ScannerBuilder<T: SeismicTransport> {
    transport: T,
    viewing_key: Bytes32,
    config: ScannerConfig,
    on_transfer: Option<TransferCallback>,
    on_approval: Option<ApprovalCallback>,
    on_error: Option<ErrorCallback>,
}

impl<T: SeismicTransport> ScannerBuilder<T> {
    /// Starts a builder scoped to `viewing_key`, with default tuning.
    pub fn new(transport: T, viewing_key: Bytes32) -> Self {
        Self {
            transport,
            viewing_key,
            config: ScannerConfig::default(),
            on_transfer: None,
            on_approval: None,
            on_error: None,
        }
    }

    /// Overrides the default tuning.
    pub fn config(mut self, config: ScannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers the callback invoked for each decrypted `Transfer` log.
    pub fn on_transfer(mut self, f: impl Fn(TransferEvent) + Send + Sync + 'static) -> Self {
        self.on_transfer = Some(Box::new(f));
        self
    }

    /// Registers the callback invoked for each decrypted `Approval` log.
    pub fn on_approval(mut self, f: impl Fn(ApprovalEvent) + Send + Sync + 'static) -> Self {
        self.on_approval = Some(Box::new(f));
        self
    }

    /// Registers the callback invoked when a tick fails instead of
    /// crashing the poll loop.
    pub fn on_error(mut self, f: impl Fn(WatchError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    /// Builds the scanner. Event kinds with no registered callback are
    /// silently dropped rather than erroring.
    pub fn build(self) -> Scanner<T> {
        Scanner {
            transport: self.transport,
            viewing_key: self.viewing_key,
            config: self.config,
            on_transfer: self.on_transfer.unwrap_or_else(|| Box::new(|_| {})),
            on_approval: self.on_approval.unwrap_or_else(|| Box::new(|_| {})),
            on_error: self.on_error,
        }
    }
}

/// A running (or runnable) log scanner for one viewing key.
pub struct Scanner<T: SeismicTransport> {
    transport: T,
    viewing_key: Bytes32,
    config: ScannerConfig,
    on_transfer: TransferCallback,
    on_approval: ApprovalCallback,
    on_error: Option<ErrorCallback>,
}

impl<T: SeismicTransport> Scanner<T> {
    /// Runs the poll loop until `cancel` fires. Returns cleanly on
    /// cancellation; calling `run` again on a fresh [`Scanner`] with the
    /// same config is safe and picks up wherever `start_block` says to.
    pub async fn run(mut self, cancel: CancellationToken) {
        let mut current_block = match self.config.start_block {
            StartBlock::Number(n) => n,
            StartBlock::Latest => match fetch_head(&self.transport).await {
                Ok(head) => head,
                Err(e) => {
                    self.notify_error(e);
                    return;
                }
            },
        };

        loop {
            if cancel.is_cancelled() {
                return;
            }

            let head = match fetch_head(&self.transport).await {
                Ok(head) => head,
                Err(e) => {
                    self.notify_error(e);
                    if sleep_or_cancel(self.config.poll_interval, &cancel).await {
                        return;
                    }
                    continue;
                }
            };

            if current_block > head {
                if sleep_or_cancel(self.config.poll_interval, &cancel).await {
                    return;
                }
                continue;
            }

            if let Err(e) = self.scan_range(current_block, head).await {
                self.notify_error(e);
            }
            current_block = head + 1;
        }
    }

    fn notify_error(&self, e: WatchError) {
        match &self.on_error {
            Some(cb) => cb(e),
            None => tracing::warn!(error = %e, "seismic-watch: scan tick failed"),
        }
    }

    async fn scan_range(&self, from_block: u64, to_block: u64) -> Result<(), WatchError> {
        let key_topic = events::viewing_key_topic(&self.viewing_key);
        let filter = json!({
            "fromBlock": format!("0x{from_block:x}"),
            "toBlock": format!("0x{to_block:x}"),
            "topics": [
                [events::transfer_topic0(), events::approval_topic0()],
                null,
                null,
                key_topic,
            ],
        });
        let response = self
            .transport
            .call("eth_getLogs", json!([filter]))
            .await
            .map_err(WatchError::Transport)?;
        let logs = response
            .as_array()
            .ok_or_else(|| WatchError::InsufficientData("eth_getLogs did not return an array".to_string()))?;

        for log in logs {
            self.dispatch_log(log)?;
        }
        Ok(())
    }

    fn dispatch_log(&self, log: &serde_json::Value) -> Result<(), WatchError> {
        let topics = field(log, "topics")?
            .as_array()
            .ok_or_else(|| WatchError::InsufficientData("log `topics` is not an array".to_string()))?;
        if topics.len() < 4 {
            return Err(WatchError::InsufficientData(format!(
                "log has {} topics, expected 4",
                topics.len()
            )));
        }
        let topic0 = hex_b256(&topics[0])?;
        let from = hex_address(&topics[1])?;
        let to = hex_address(&topics[2])?;
        let encrypt_key_hash = hex_b256(&topics[3])?;
        let block_number = hex_u64(field(log, "blockNumber")?)?;
        let data = hex_bytes(field(log, "data")?)?;

        let payload = events::decode_dynamic_bytes(&data)?;
        let amount = events::decrypt_amount(&self.viewing_key, &payload)?;

        if topic0 == events::transfer_topic0() {
            (self.on_transfer)(TransferEvent { from, to, encrypt_key_hash, amount, block_number });
        } else if topic0 == events::approval_topic0() {
            (self.on_approval)(ApprovalEvent { from, to, encrypt_key_hash, amount, block_number });
        } else {
            return Err(WatchError::InsufficientData(format!(
                "log topic0 {topic0} matched neither Transfer nor Approval"
            )));
        }
        Ok(())
    }
}

async fn fetch_head<T: SeismicTransport>(transport: &T) -> Result<u64, WatchError> {
    let response =
        transport.call("eth_blockNumber", json!([])).await.map_err(WatchError::Transport)?;
    hex_u64(&response)
}

async fn sleep_or_cancel(duration: std::time::Duration, cancel: &CancellationToken) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(duration) => false,
        _ = cancel.cancelled() => true,
    }
}
