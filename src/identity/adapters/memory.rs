//! In-memory token verifier for tests and local tooling.

use crate::identity::{
    domain::VerifiedClaims,
    ports::{TokenRejection, TokenVerifier},
};
use async_trait::async_trait;
use std::collections::HashMap;

/// Verifier that accepts a fixed table of opaque tokens.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenVerifier {
    tokens: HashMap<String, VerifiedClaims>,
}

impl StaticTokenVerifier {
    /// Creates a verifier that rejects every token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `token` and resolves it to `claims`.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>, claims: VerifiedClaims) -> Self {
        self.tokens.insert(token.into(), claims);
        self
    }

    /// Accepts `token` as a login for `email`.
    #[must_use]
    pub fn with_user(self, token: impl Into<String>, email: impl Into<String>) -> Self {
        self.with_token(token, VerifiedClaims::with_email(email))
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedClaims, TokenRejection> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| TokenRejection::Invalid("unrecognised token".to_owned()))
    }
}
