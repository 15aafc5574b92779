//! Deployment artifact loading.

use std::fs;
use std::path::Path;

use alloy::json_abi::JsonAbi;
use alloy::primitives::Address;
use serde::Deserialize;

use crate::config::network::NetworkDescriptor;
use crate::error::{ChainError, ChainResult};

/// Output of the contract deployment pipeline: the ABI, the deployed address,
/// and the network it was deployed to.
///
/// Loaded once at startup and treated as read-only configuration. The ABI is
/// passed through to the contract proxy uninspected.
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentArtifact {
    /// Interface description of the deployed contract.
    pub abi: JsonAbi,

    /// Address the contract was deployed at.
    pub address: Address,

    /// Network the deployment targeted.
    pub network: NetworkDescriptor,
}

impl DeploymentArtifact {
    /// Load and parse the artifact from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ChainResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(ChainError::ArtifactIo)?;
        let artifact: Self =
            serde_json::from_str(&content).map_err(ChainError::ArtifactParse)?;

        tracing::info!(
            address = %artifact.address,
            chain_id = artifact.network.chain_id,
            network = %artifact.network.name,
            "Deployment artifact loaded"
        );

        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = r#"{
        "abi": [
            {
                "type": "function",
                "name": "storeReport",
                "inputs": [{ "name": "reportHash", "type": "bytes32" }],
                "outputs": [],
                "stateMutability": "nonpayable"
            },
            {
                "type": "function",
                "name": "getReport",
                "inputs": [{ "name": "reportHash", "type": "bytes32" }],
                "outputs": [{ "name": "exists", "type": "bool" }],
                "stateMutability": "view"
            }
        ],
        "address": "0x5fbdb2315678afecb367f032d93f642f64180aa3",
        "network": {
            "chainId": 656476,
            "name": "EDU Chain Testnet",
            "rpcUrl": "https://rpc.open-campus-codex.gelato.digital",
            "blockExplorer": "https://opencampus-codex.blockscout.com",
            "currency": "EDU"
        }
    }"#;

    #[test]
    fn test_parse_fixture() {
        let artifact: DeploymentArtifact = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(artifact.network.chain_id, 656476);
        assert_eq!(artifact.abi.functions().count(), 2);
        assert_eq!(
            artifact.address.to_string().to_lowercase(),
            "0x5fbdb2315678afecb367f032d93f642f64180aa3"
        );
        assert_eq!(artifact.network.currency.as_deref(), Some("EDU"));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();

        let artifact = DeploymentArtifact::load(file.path()).unwrap();
        assert_eq!(artifact.network.name, "EDU Chain Testnet");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = DeploymentArtifact::load("/nonexistent/contract-deployment.json");
        assert!(matches!(result, Err(ChainError::ArtifactIo(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let result = DeploymentArtifact::load(file.path());
        assert!(matches!(result, Err(ChainError::ArtifactParse(_))));
    }
}
