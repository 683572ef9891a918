//! Outcome of resolving a request's credentials.

use super::Identity;

/// Session state of an inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// The request carried a valid token with an email claim.
    Authenticated(Identity),
    /// No token, or a token that failed verification.
    Anonymous,
}

impl Session {
    /// Returns `true` for authenticated sessions.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Returns the identity of an authenticated session.
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Anonymous => None,
        }
    }

    /// Consumes the session and returns its identity.
    #[must_use]
    pub fn into_identity(self) -> Option<Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Anonymous => None,
        }
    }
}
