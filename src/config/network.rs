//! Network and contract-address registries.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::artifact::DeploymentArtifact;
use crate::error::{ChainError, ChainResult};

/// Identifier for one supported network configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NetworkId {
    Sepolia,
    Mainnet,
    EduChain,
}

impl NetworkId {
    /// Canonical short key, as used in configuration files and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkId::Sepolia => "sepolia",
            NetworkId::Mainnet => "mainnet",
            NetworkId::EduChain => "eduChain",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkId {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sepolia" => Ok(NetworkId::Sepolia),
            "mainnet" => Ok(NetworkId::Mainnet),
            "eduChain" => Ok(NetworkId::EduChain),
            other => Err(ChainError::UnknownNetwork(other.to_string())),
        }
    }
}

/// Static description of one network: chain id, display name, RPC endpoint.
///
/// Field names mirror the deployment artifact's `network` object, so the
/// artifact deserializes straight into this type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDescriptor {
    /// Numeric protocol identifier (EIP-155).
    pub chain_id: u64,

    /// Human-readable network name.
    pub name: String,

    /// JSON-RPC endpoint. May be empty for networks without a configured
    /// endpoint; reachability is never checked here.
    #[serde(default)]
    pub rpc_url: String,

    /// Block explorer base URL, if one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_explorer: Option<String>,

    /// Native currency symbol, if it differs from ETH.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Immutable network and contract-address registries.
///
/// Constructed once at startup and passed explicitly to the provider factory
/// and contract accessor, so test fixtures can substitute their own instance.
/// An empty address string means "not deployed on this network"; lookups
/// return it as-is without validating non-emptiness.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    networks: BTreeMap<NetworkId, NetworkDescriptor>,
    addresses: BTreeMap<NetworkId, String>,
    default_network: NetworkId,
}

impl ChainConfig {
    /// Build a configuration from explicit registries.
    ///
    /// Every registered network is guaranteed an address entry; networks
    /// missing from `addresses` get the empty string. `default_network`
    /// should itself be registered in `networks`; if it is not, lookups
    /// through [`ChainConfig::default_network`] fail with
    /// [`ChainError::UnknownNetwork`] like any other unregistered key.
    pub fn new(
        networks: BTreeMap<NetworkId, NetworkDescriptor>,
        mut addresses: BTreeMap<NetworkId, String>,
        default_network: NetworkId,
    ) -> Self {
        for id in networks.keys() {
            addresses.entry(*id).or_default();
        }
        addresses.retain(|id, _| networks.contains_key(id));

        Self {
            networks,
            addresses,
            default_network,
        }
    }

    /// Canonical registries assembled around a deployment artifact.
    ///
    /// Sepolia and Mainnet carry their well-known chain ids with empty
    /// endpoints and addresses; the artifact's network becomes the `eduChain`
    /// entry and the default, with the deployed address registered for it.
    pub fn from_artifact(artifact: &DeploymentArtifact) -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(
            NetworkId::Sepolia,
            NetworkDescriptor {
                chain_id: 11_155_111,
                name: "Sepolia".to_string(),
                rpc_url: String::new(),
                block_explorer: Some("https://sepolia.etherscan.io".to_string()),
                currency: None,
            },
        );
        networks.insert(
            NetworkId::Mainnet,
            NetworkDescriptor {
                chain_id: 1,
                name: "Ethereum Mainnet".to_string(),
                rpc_url: String::new(),
                block_explorer: Some("https://etherscan.io".to_string()),
                currency: None,
            },
        );
        networks.insert(NetworkId::EduChain, artifact.network.clone());

        let mut addresses = BTreeMap::new();
        addresses.insert(NetworkId::EduChain, artifact.address.to_string());

        Self::new(networks, addresses, NetworkId::EduChain)
    }

    /// Fill the Sepolia and Mainnet endpoints from an Infura project key.
    ///
    /// A blank key is a no-op: both endpoints stay empty and only the
    /// artifact's network is usable.
    pub fn with_infura_key(mut self, key: &str) -> Self {
        if key.is_empty() {
            return self;
        }
        if let Some(descriptor) = self.networks.get_mut(&NetworkId::Sepolia) {
            descriptor.rpc_url = format!("https://sepolia.infura.io/v3/{key}");
        }
        if let Some(descriptor) = self.networks.get_mut(&NetworkId::Mainnet) {
            descriptor.rpc_url = format!("https://mainnet.infura.io/v3/{key}");
        }
        self
    }

    /// The network used when callers do not name one.
    pub fn default_network(&self) -> NetworkId {
        self.default_network
    }

    /// Look up the descriptor for `id`.
    pub fn network(&self, id: NetworkId) -> ChainResult<&NetworkDescriptor> {
        self.networks
            .get(&id)
            .ok_or_else(|| ChainError::UnknownNetwork(id.to_string()))
    }

    /// Look up the contract address registered for `id`.
    ///
    /// The returned string may be empty, signaling that the contract is not
    /// deployed on that network. Callers decide how to treat that.
    pub fn address(&self, id: NetworkId) -> ChainResult<&str> {
        self.addresses
            .get(&id)
            .map(String::as_str)
            .ok_or_else(|| ChainError::UnknownNetwork(id.to_string()))
    }

    /// Registered network identifiers, in stable order.
    pub fn network_ids(&self) -> impl Iterator<Item = NetworkId> + '_ {
        self.networks.keys().copied()
    }
}
