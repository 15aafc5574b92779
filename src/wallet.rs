//! Wallet connection negotiation.
//!
//! The browser-global wallet is modeled as injected capabilities: the host
//! context hands out an [`InjectedProvider`] if one is present, and the
//! connector negotiates account access through it. Nothing here talks to a
//! real browser, so the whole flow is testable with in-process fakes.

use std::fmt;
use std::sync::Arc;

use alloy::primitives::Address;
use alloy::providers::DynProvider;
use async_trait::async_trait;

use crate::error::{ChainError, ChainResult};

/// Host execution context that may carry an injected wallet provider.
///
/// In a browser this corresponds to `window`; headless callers pass `None`
/// to [`connect_wallet`] instead of implementing it.
pub trait WalletHost {
    /// The injected provider, if the host has one (`window.ethereum`).
    fn injected_provider(&self) -> Option<Arc<dyn InjectedProvider>>;
}

/// EIP-1193-style wallet provider injected into the host context.
#[async_trait]
pub trait InjectedProvider: Send + Sync {
    /// Request account authorization (`eth_requestAccounts`).
    ///
    /// May pop a visible permission prompt in the wallet UI. A denial comes
    /// back as [`ChainError::WalletRequestRejected`] and is never retried
    /// here.
    async fn request_accounts(&self) -> ChainResult<Vec<Address>>;

    /// Transport handle that signs and submits through the wallet.
    fn transport(&self) -> DynProvider;
}

/// Identity capable of authorizing transactions through a connected wallet.
///
/// The wallet runtime owns the keys; this holds only the authorized account
/// and a transport handle routed through the wallet.
#[derive(Clone)]
pub struct SigningIdentity {
    account: Address,
    transport: DynProvider,
}

impl SigningIdentity {
    /// Bind an identity directly. Normally obtained via [`connect_wallet`].
    pub fn new(account: Address, transport: DynProvider) -> Self {
        Self { account, transport }
    }

    /// The authorized account.
    pub fn account(&self) -> Address {
        self.account
    }

    /// Wallet-routed transport for submitting transactions.
    pub fn transport(&self) -> &DynProvider {
        &self.transport
    }
}

impl fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("account", &self.account)
            .finish_non_exhaustive()
    }
}

/// Negotiate a wallet connection and return the signing identity for the
/// first authorized account.
///
/// `host` is `None` outside a browser-like context. Preconditions are checked
/// in order: no host fails with [`ChainError::EnvironmentUnsupported`], a host
/// without an injected provider with [`ChainError::WalletNotInstalled`]. A
/// single attempt is made; failures are logged and re-surfaced, never retried.
pub async fn connect_wallet(host: Option<&dyn WalletHost>) -> ChainResult<SigningIdentity> {
    match negotiate(host).await {
        Ok(identity) => {
            tracing::info!(account = %identity.account, "Wallet connected");
            Ok(identity)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error connecting to wallet");
            Err(e)
        }
    }
}

async fn negotiate(host: Option<&dyn WalletHost>) -> ChainResult<SigningIdentity> {
    let host = host.ok_or(ChainError::EnvironmentUnsupported)?;
    let provider = host
        .injected_provider()
        .ok_or(ChainError::WalletNotInstalled)?;

    let accounts = provider.request_accounts().await?;
    let account = accounts.first().copied().ok_or_else(|| {
        ChainError::WalletRequestRejected("no accounts authorized".to_string())
    })?;

    Ok(SigningIdentity {
        account,
        transport: provider.transport(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::providers::ProviderBuilder;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn loopback_transport() -> DynProvider {
        use alloy::providers::Provider;

        let url: url::Url = "http://localhost:8545".parse().unwrap();
        ProviderBuilder::new().connect_http(url).erased()
    }

    struct FakeWallet {
        accounts: Vec<Address>,
        reject: bool,
    }

    #[async_trait]
    impl InjectedProvider for FakeWallet {
        async fn request_accounts(&self) -> ChainResult<Vec<Address>> {
            if self.reject {
                return Err(ChainError::WalletRequestRejected(
                    "user rejected the request".to_string(),
                ));
            }
            Ok(self.accounts.clone())
        }

        fn transport(&self) -> DynProvider {
            loopback_transport()
        }
    }

    struct FakeHost {
        wallet: Option<Arc<dyn InjectedProvider>>,
    }

    impl WalletHost for FakeHost {
        fn injected_provider(&self) -> Option<Arc<dyn InjectedProvider>> {
            self.wallet.clone()
        }
    }

    #[tokio::test]
    async fn test_no_host_context() {
        let err = connect_wallet(None).await.unwrap_err();
        assert!(matches!(err, ChainError::EnvironmentUnsupported));
    }

    #[tokio::test]
    async fn test_no_injected_provider() {
        let host = FakeHost { wallet: None };
        let err = connect_wallet(Some(&host)).await.unwrap_err();
        assert!(matches!(err, ChainError::WalletNotInstalled));
        assert!(err.to_string().contains("MetaMask is not installed"));
    }

    #[tokio::test]
    async fn test_rejection_propagates_unchanged() {
        init_tracing();
        let host = FakeHost {
            wallet: Some(Arc::new(FakeWallet {
                accounts: vec![],
                reject: true,
            })),
        };

        let err = connect_wallet(Some(&host)).await.unwrap_err();
        match err {
            ChainError::WalletRequestRejected(reason) => {
                assert_eq!(reason, "user rejected the request");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_first_account_becomes_identity() {
        init_tracing();
        let first = Address::repeat_byte(0x11);
        let second = Address::repeat_byte(0x22);
        let host = FakeHost {
            wallet: Some(Arc::new(FakeWallet {
                accounts: vec![first, second],
                reject: false,
            })),
        };

        let identity = connect_wallet(Some(&host)).await.unwrap();
        assert_eq!(identity.account(), first);
    }

    #[tokio::test]
    async fn test_empty_account_list_is_rejection() {
        let host = FakeHost {
            wallet: Some(Arc::new(FakeWallet {
                accounts: vec![],
                reject: false,
            })),
        };

        let err = connect_wallet(Some(&host)).await.unwrap_err();
        assert!(matches!(err, ChainError::WalletRequestRejected(_)));
    }
}
