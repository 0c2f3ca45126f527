//! Checkout service capability
//!
//! The payment flow is an external collaborator: the application only needs
//! "start a checkout, get a session or an error". Real provider integration
//! lives with the embedding application; the stub here is deterministic for
//! tests and local development.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A checkout session handed back by the payment provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider-assigned session id
    pub id: String,
    /// URL the user is redirected to for payment
    pub redirect_url: String,
}

/// Checkout initiation failures
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Provider rejected the request
    #[error("checkout declined: {0}")]
    Declined(String),

    /// Provider could not be reached
    #[error("checkout provider unavailable: {0}")]
    Unavailable(#[source] anyhow::Error),
}

/// Payment provider seam
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Start a checkout session
    async fn initiate_checkout(&self) -> Result<CheckoutSession, CheckoutError>;
}

/// Deterministic stub provider
///
/// Always returns the same session; flip `decline` to exercise the failure
/// path.
pub struct StubCheckout {
    decline: bool,
}

impl StubCheckout {
    pub fn new() -> Self {
        Self { decline: false }
    }

    /// Stub that declines every checkout
    pub fn declining() -> Self {
        Self { decline: true }
    }
}

impl Default for StubCheckout {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CheckoutService for StubCheckout {
    async fn initiate_checkout(&self) -> Result<CheckoutSession, CheckoutError> {
        if self.decline {
            return Err(CheckoutError::Declined("stub configured to decline".into()));
        }
        Ok(CheckoutSession {
            id: "stub-session".to_string(),
            redirect_url: "https://checkout.invalid/stub-session".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_returns_session() {
        let service = StubCheckout::new();
        let session = service.initiate_checkout().await.unwrap();
        assert_eq!(session.id, "stub-session");
        assert!(session.redirect_url.contains(&session.id));
    }

    #[tokio::test]
    async fn test_declining_stub_errors() {
        let service = StubCheckout::declining();
        let err = service.initiate_checkout().await.unwrap_err();
        assert!(matches!(err, CheckoutError::Declined(_)));
    }
}
