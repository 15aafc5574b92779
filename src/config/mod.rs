//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! contract-deployment.json
//!     → artifact.rs (parse & deserialize)
//!     → network.rs (registries assembled around the artifact)
//!     → ChainConfig (immutable, passed explicitly to every consumer)
//! ```
//!
//! # Design Decisions
//! - `ChainConfig` is immutable once constructed; test fixtures build their
//!   own instance instead of patching a global
//! - Network keys form a closed enumeration; lookups are total and fail
//!   explicitly on unregistered keys

pub mod artifact;
pub mod network;

pub use artifact::DeploymentArtifact;
pub use network::{ChainConfig, NetworkDescriptor, NetworkId};
