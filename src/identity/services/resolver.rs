//! Resolves request credentials into sessions.

use crate::identity::{
    domain::{Identity, Session},
    ports::TokenVerifier,
};
use std::sync::Arc;
use tracing::debug;

/// Name of the cookie carrying the identity provider token.
pub const SESSION_COOKIE: &str = "token";

/// Maps bearer tokens to sessions.
///
/// Verification is pure: no state is recorded for resolved sessions.
pub struct SessionResolver<V>
where
    V: TokenVerifier + ?Sized,
{
    verifier: Arc<V>,
}

impl<V> Clone for SessionResolver<V>
where
    V: TokenVerifier + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            verifier: Arc::clone(&self.verifier),
        }
    }
}

impl<V> SessionResolver<V>
where
    V: TokenVerifier + ?Sized,
{
    /// Creates a resolver over a token verifier.
    #[must_use]
    pub const fn new(verifier: Arc<V>) -> Self {
        Self { verifier }
    }

    /// Resolves an optional raw token into a session.
    ///
    /// Missing, blank, and rejected tokens resolve to [`Session::Anonymous`],
    /// as do verified tokens without an email claim.
    pub async fn resolve(&self, token: Option<&str>) -> Session {
        let Some(raw) = token.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Session::Anonymous;
        };

        match self.verifier.verify(raw).await {
            Ok(claims) => Identity::from_claims(claims).map_or_else(
                || {
                    debug!("verified token carries no email claim");
                    Session::Anonymous
                },
                Session::Authenticated,
            ),
            Err(rejection) => {
                debug!(%rejection, "token verification failed");
                Session::Anonymous
            }
        }
    }

    /// Returns whether the token yields an authenticated session.
    pub async fn is_authenticated(&self, token: Option<&str>) -> bool {
        self.resolve(token).await.is_authenticated()
    }

    /// Returns the identity behind the token, if any.
    pub async fn current_user(&self, token: Option<&str>) -> Option<Identity> {
        self.resolve(token).await.into_identity()
    }
}
