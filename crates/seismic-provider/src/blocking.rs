//! A synchronous facade over [`SeismicProvider`], for callers that aren't
//! already inside a tokio runtime. Wraps every async call in
//! `Runtime::block_on` against a dedicated current-thread runtime — this
//! is strictly slower than driving the async client directly and exists
//! only for non-async call sites.

use crate::{
    config::SendOptions,
    directory::DirectoryClient,
    error::ProviderError,
    provider::{DebugSend, SeismicProvider},
};
use alloy_primitives::{Address, B256, U256};
use seismic_rpc::SeismicTransport;
use seismic_signer::ShieldedSigner;
use tokio::runtime::{Builder, Runtime};

/// A blocking client wrapping an async [`SeismicProvider`].
#[derive(Debug)]
pub struct SeismicClient<T: SeismicTransport> {
    inner: SeismicProvider<T>,
    runtime: Runtime,
}

impl<T: SeismicTransport> SeismicClient<T> {
    /// Negotiates a session and builds a blocking client, running the
    /// negotiation on a freshly spawned current-thread runtime.
    pub fn new(transport: T, signer: ShieldedSigner) -> Result<Self, ProviderError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let inner = runtime.block_on(SeismicProvider::new(transport, signer))?;
        Ok(Self { inner, runtime })
    }

    /// The address this client signs and sends as.
    pub fn address(&self) -> Address {
        self.inner.address()
    }

    /// A directory client bound to this client's provider.
    pub fn directory(&self) -> DirectoryClient<'_, T> {
        DirectoryClient::new(&self.inner)
    }

    /// Blocking equivalent of [`SeismicProvider::debug_send_transaction`].
    pub fn debug_send_transaction(
        &self,
        to: Option<Address>,
        value: U256,
        calldata: &[u8],
        opts: &SendOptions,
    ) -> Result<DebugSend, ProviderError> {
        self.runtime.block_on(self.inner.debug_send_transaction(to, value, calldata, opts))
    }

    /// Blocking equivalent of [`SeismicProvider::send_transaction`].
    pub fn send_transaction(
        &self,
        to: Option<Address>,
        value: U256,
        calldata: &[u8],
        opts: &SendOptions,
    ) -> Result<B256, ProviderError> {
        self.runtime.block_on(self.inner.send_transaction(to, value, calldata, opts))
    }

    /// Blocking equivalent of [`SeismicProvider::signed_read`].
    pub fn signed_read(
        &self,
        to: Address,
        calldata: &[u8],
        opts: &SendOptions,
    ) -> Result<Option<Vec<u8>>, ProviderError> {
        self.runtime.block_on(self.inner.signed_read(to, calldata, opts))
    }
}
