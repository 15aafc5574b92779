//! Chain configuration and contract access for the BGV report dapp.

pub mod config;
pub mod contract;
pub mod error;
pub mod hash;
pub mod provider;
pub mod wallet;

pub use config::{ChainConfig, DeploymentArtifact, NetworkDescriptor, NetworkId};
pub use contract::{contract_instance, signed_contract_instance, ContractProxy};
pub use error::{ChainError, ChainResult};
pub use hash::{file_to_hash, string_to_hash, ContentHash};
pub use provider::rpc_provider;
pub use wallet::{connect_wallet, InjectedProvider, SigningIdentity, WalletHost};
