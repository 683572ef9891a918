//! Verifier port for identity provider tokens.

use crate::identity::domain::VerifiedClaims;
use async_trait::async_trait;
use thiserror::Error;

/// Identity provider token verification contract.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verifies a raw bearer token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`TokenRejection`] when the token is malformed, signed by an
    /// unknown key, expired, or issued for another audience.
    async fn verify(&self, token: &str) -> Result<VerifiedClaims, TokenRejection>;
}

/// Reasons a token is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenRejection {
    /// The token could not be decoded.
    #[error("malformed token: {0}")]
    Malformed(String),

    /// The token names a signing key the verifier does not hold.
    #[error("unknown signing key: {}", .0.as_deref().unwrap_or("<none>"))]
    UnknownKey(Option<String>),

    /// Signature, expiry, issuer, or audience validation failed.
    #[error("token rejected: {0}")]
    Invalid(String),
}
