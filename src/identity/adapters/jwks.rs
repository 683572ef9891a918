//! Token verifier backed by the identity provider's published key set.
//!
//! The provider signs ID tokens with RS256 and rotates keys; tokens name
//! their signing key in the `kid` header. Fetching the key set is the
//! provider client's job, this adapter only reads a JWK set document.

use crate::identity::{
    domain::VerifiedClaims,
    ports::{TokenRejection, TokenVerifier},
};
use async_trait::async_trait;
use jsonwebtoken::{
    Algorithm, DecodingKey, Validation, decode, decode_header, errors::ErrorKind, jwk::JwkSet,
};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Issuer prefix of Firebase-style secure token ID tokens.
const SECURE_TOKEN_ISSUER: &str = "https://securetoken.google.com/";

/// Errors raised while loading a JWK set.
#[derive(Debug, Error)]
pub enum JwksSetupError {
    /// The key set file could not be read.
    #[error("failed to read key set: {0}")]
    Read(#[source] std::io::Error),

    /// The key set document is not valid JSON.
    #[error("failed to parse key set: {0}")]
    Parse(#[source] serde_json::Error),

    /// A key could not be converted into a decoding key.
    #[error("unusable key '{kid}': {source}")]
    Key {
        /// Key identifier of the rejected key.
        kid: String,
        /// Underlying conversion error.
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    /// A key in the set has no `kid`.
    #[error("key set contains a key without a kid")]
    MissingKeyId,

    /// The key set has no keys.
    #[error("key set is empty")]
    Empty,
}

/// Verifies ID tokens against a fixed set of provider keys.
#[derive(Clone)]
pub struct JwksTokenVerifier {
    keys: HashMap<String, DecodingKey>,
    validation: Validation,
}

impl JwksTokenVerifier {
    /// Creates a verifier from a parsed JWK set for the given provider
    /// project.
    ///
    /// # Errors
    ///
    /// Returns [`JwksSetupError`] when the set is empty or contains a key
    /// without a `kid` or with unusable parameters.
    pub fn from_jwk_set(set: &JwkSet, project_id: &str) -> Result<Self, JwksSetupError> {
        if set.keys.is_empty() {
            return Err(JwksSetupError::Empty);
        }

        let mut keys = HashMap::with_capacity(set.keys.len());
        for jwk in &set.keys {
            let kid = jwk
                .common
                .key_id
                .clone()
                .ok_or(JwksSetupError::MissingKeyId)?;
            let key = DecodingKey::from_jwk(jwk).map_err(|source| JwksSetupError::Key {
                kid: kid.clone(),
                source,
            })?;
            keys.insert(kid, key);
        }

        Ok(Self::from_keys(keys, Self::provider_validation(project_id)))
    }

    /// Loads a JWK set document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`JwksSetupError`] when the file cannot be read or parsed, or
    /// when [`Self::from_jwk_set`] rejects its contents.
    pub fn from_path(path: &Path, project_id: &str) -> Result<Self, JwksSetupError> {
        let raw = std::fs::read_to_string(path).map_err(JwksSetupError::Read)?;
        let set: JwkSet = serde_json::from_str(&raw).map_err(JwksSetupError::Parse)?;
        Self::from_jwk_set(&set, project_id)
    }

    /// Creates a verifier from pre-built keys and validation rules.
    #[must_use]
    pub const fn from_keys(keys: HashMap<String, DecodingKey>, validation: Validation) -> Self {
        Self { keys, validation }
    }

    /// Validation rules for ID tokens issued to `project_id`.
    #[must_use]
    pub fn provider_validation(project_id: &str) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[project_id]);
        validation.set_issuer(&[format!("{SECURE_TOKEN_ISSUER}{project_id}")]);
        validation
    }

    /// Returns the number of keys held.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }
}

#[async_trait]
impl TokenVerifier for JwksTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedClaims, TokenRejection> {
        let header =
            decode_header(token).map_err(|err| TokenRejection::Malformed(err.to_string()))?;
        let key = header
            .kid
            .as_ref()
            .and_then(|kid| self.keys.get(kid))
            .ok_or_else(|| TokenRejection::UnknownKey(header.kid.clone()))?;

        let data = decode::<VerifiedClaims>(token, key, &self.validation)
            .map_err(|err| match err.kind() {
                ErrorKind::InvalidToken
                | ErrorKind::Base64(_)
                | ErrorKind::Json(_)
                | ErrorKind::Utf8(_) => TokenRejection::Malformed(err.to_string()),
                _ => TokenRejection::Invalid(err.to_string()),
            })?;
        Ok(data.claims)
    }
}
