//! A minimal JSON-RPC 2.0 transport: just enough to call `eth_*` methods
//! against a seismic node over HTTP. Unlike a general-purpose RPC client,
//! there is no transport-agnostic tower stack, no subscription support,
//! and no batching — callers needing those should layer them on top of
//! [`SeismicTransport`].

mod error;
mod packet;
mod transport;

pub use error::TransportError;
pub use packet::{RpcError, RpcRequest, RpcResponse};
pub use transport::{HttpTransport, SeismicTransport};
