//! Request extractors resolving the `token` cookie into a session.

use super::{AppState, WebError};
use crate::identity::{domain::Identity, services::SESSION_COOKIE};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use std::convert::Infallible;

async fn resolve(parts: &Parts, state: &AppState) -> Option<Identity> {
    let jar = CookieJar::from_headers(&parts.headers);
    let token = jar.get(SESSION_COOKIE).map(|cookie| cookie.value().to_owned());
    state.sessions.current_user(token.as_deref()).await
}

/// The authenticated user; anonymous requests are redirected to `/login`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = WebError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve(parts, state)
            .await
            .map(Self)
            .ok_or(WebError::Unauthenticated)
    }
}

/// The authenticated user, if any.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<Identity>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(resolve(parts, state).await))
    }
}
