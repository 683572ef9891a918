//! Verified token claims and the identity derived from them.

use super::UserEmail;
use serde::{Deserialize, Serialize};

/// Claims of a token whose signature, issuer, audience, and expiry have been
/// checked by a verifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedClaims {
    /// Provider-scoped user identifier.
    #[serde(rename = "sub", default)]
    pub subject: Option<String>,
    /// Email asserted by the provider, if the account has one.
    #[serde(default)]
    pub email: Option<String>,
}

impl VerifiedClaims {
    /// Creates claims carrying only an email.
    #[must_use]
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            subject: None,
            email: Some(email.into()),
        }
    }
}

/// Authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    email: UserEmail,
    subject: Option<String>,
}

impl Identity {
    /// Creates an identity for an email without a provider subject.
    #[must_use]
    pub const fn new(email: UserEmail) -> Self {
        Self {
            email,
            subject: None,
        }
    }

    /// Derives an identity from verified claims.
    ///
    /// Returns `None` when the claims carry no usable email.
    #[must_use]
    pub fn from_claims(claims: VerifiedClaims) -> Option<Self> {
        let email = UserEmail::new(claims.email?).ok()?;
        Some(Self {
            email,
            subject: claims.subject,
        })
    }

    /// Returns the user's email.
    #[must_use]
    pub const fn email(&self) -> &UserEmail {
        &self.email
    }

    /// Returns the provider subject, if known.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }
}
