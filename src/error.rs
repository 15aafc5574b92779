//! Error definitions shared across the crate.

use thiserror::Error;

/// Errors surfaced by registry lookups, wallet negotiation, and hashing.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Requested network identifier is absent from the registries.
    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    /// Registered RPC endpoint is not a usable URL.
    #[error("invalid RPC endpoint '{url}' for network {network}: {reason}")]
    InvalidEndpoint {
        network: String,
        url: String,
        reason: String,
    },

    /// Registered contract address is empty or not a 20-byte hex address.
    #[error("invalid contract address '{address}' for network {network}: {reason}")]
    InvalidAddress {
        network: String,
        address: String,
        reason: String,
    },

    /// Wallet-dependent call made outside a host that can carry a wallet.
    #[error("no browser execution context is available")]
    EnvironmentUnsupported,

    /// No wallet provider is injected into the host context.
    #[error("MetaMask is not installed. Please install it to use this application.")]
    WalletNotInstalled,

    /// The wallet, or the user behind it, denied the account request.
    #[error("wallet request rejected: {0}")]
    WalletRequestRejected(String),

    /// Reading file content for hashing failed.
    #[error("failed to read file")]
    FileRead(#[source] std::io::Error),

    /// Deployment artifact could not be read from disk.
    #[error("failed to read deployment artifact")]
    ArtifactIo(#[source] std::io::Error),

    /// Deployment artifact is not valid JSON of the expected shape.
    #[error("malformed deployment artifact")]
    ArtifactParse(#[source] serde_json::Error),
}

/// Result type for chain configuration operations.
pub type ChainResult<T> = Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_not_installed_message() {
        // The message is part of the contract: the front end shows it verbatim.
        assert_eq!(
            ChainError::WalletNotInstalled.to_string(),
            "MetaMask is not installed. Please install it to use this application."
        );
    }

    #[test]
    fn test_unknown_network_display() {
        let err = ChainError::UnknownNetwork("ropsten".to_string());
        assert_eq!(err.to_string(), "unknown network: ropsten");
    }

    #[test]
    fn test_file_read_keeps_source() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ChainError::FileRead(io);
        assert!(err.source().is_some());
    }
}
