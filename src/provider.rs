//! Read-only RPC provider factory.

use alloy::providers::{DynProvider, Provider, ProviderBuilder};

use crate::config::{ChainConfig, NetworkId};
use crate::error::{ChainError, ChainResult};

/// Build a read-only RPC provider bound to the network's registered endpoint.
///
/// The endpoint is never probed here; reachability failures surface on first
/// use, as transport errors from the underlying client. A syntactically
/// invalid (or empty) endpoint fails immediately, since the client requires a
/// parsed URL.
pub fn rpc_provider(config: &ChainConfig, network: NetworkId) -> ChainResult<DynProvider> {
    let descriptor = config.network(network)?;

    let url: url::Url = descriptor
        .rpc_url
        .parse()
        .map_err(|e: url::ParseError| ChainError::InvalidEndpoint {
            network: network.to_string(),
            url: descriptor.rpc_url.clone(),
            reason: e.to_string(),
        })?;

    Ok(ProviderBuilder::new().connect_http(url).erased())
}
