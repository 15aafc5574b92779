//! Contract proxy accessor.

use alloy::contract::{ContractInstance, Interface};
use alloy::primitives::Address;
use alloy::providers::DynProvider;

use crate::config::{ChainConfig, DeploymentArtifact, NetworkId};
use crate::error::{ChainError, ChainResult};
use crate::provider::rpc_provider;
use crate::wallet::SigningIdentity;

/// Callable proxy to the deployed contract.
///
/// Its method set comes entirely from the artifact's ABI, which is passed
/// through uninspected; invocation errors come straight from alloy.
pub type ContractProxy = ContractInstance<DynProvider>;

/// Read-only contract proxy bound to the network's registered endpoint.
pub fn contract_instance(
    config: &ChainConfig,
    artifact: &DeploymentArtifact,
    network: NetworkId,
) -> ChainResult<ContractProxy> {
    let address = deployed_address(config, network)?;
    let provider = rpc_provider(config, network)?;

    Ok(ContractInstance::new(
        address,
        provider,
        Interface::new(artifact.abi.clone()),
    ))
}

/// Write-capable contract proxy routed through the connected wallet.
///
/// The address is resolved before the signer is touched, so an unregistered
/// network fails without involving the wallet.
pub fn signed_contract_instance(
    signer: &SigningIdentity,
    config: &ChainConfig,
    artifact: &DeploymentArtifact,
    network: NetworkId,
) -> ChainResult<ContractProxy> {
    let address = deployed_address(config, network)?;

    Ok(ContractInstance::new(
        address,
        signer.transport().clone(),
        Interface::new(artifact.abi.clone()),
    ))
}

/// Parse the address registered for `network`.
///
/// An empty registry entry means the contract is not deployed there; with
/// typed addresses that surfaces here rather than on the first call.
fn deployed_address(config: &ChainConfig, network: NetworkId) -> ChainResult<Address> {
    let raw = config.address(network)?;
    raw.parse().map_err(|e| ChainError::InvalidAddress {
        network: network.to_string(),
        address: raw.to_string(),
        reason: format!("{e}"),
    })
}
