//! Mapping of service failures onto HTTP responses.

use crate::board::services::BoardServiceError;
use crate::error::FailureKind;
use crate::task::services::TaskServiceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;
use tracing::error;

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum WebError {
    /// No authenticated session; the client is sent to the login page.
    #[error("authentication required")]
    Unauthenticated,

    /// A path identifier does not name any resource.
    #[error("no such resource")]
    UnknownResource,

    /// A board operation failed.
    #[error(transparent)]
    Board(#[from] BoardServiceError),

    /// A task operation failed.
    #[error(transparent)]
    Task(#[from] TaskServiceError),

    /// A page failed to render.
    #[error("failed to render page: {0}")]
    Render(#[from] minijinja::Error),
}

impl WebError {
    /// Returns the failure category, `None` for missing authentication.
    #[must_use]
    pub const fn kind(&self) -> Option<FailureKind> {
        match self {
            Self::Unauthenticated => None,
            Self::UnknownResource => Some(FailureKind::NotFound),
            Self::Board(err) => Some(err.kind()),
            Self::Task(err) => Some(err.kind()),
            Self::Render(_) => Some(FailureKind::Internal),
        }
    }

    /// Returns the HTTP status code for this error.
    ///
    /// - Unauthenticated: 303 See Other (to `/login`)
    /// - Not found: 404
    /// - Forbidden: 403
    /// - Invalid state, conflict, invalid argument: 400
    /// - Internal: 500
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self.kind() {
            None => StatusCode::SEE_OTHER,
            Some(FailureKind::NotFound) => StatusCode::NOT_FOUND,
            Some(FailureKind::Forbidden) => StatusCode::FORBIDDEN,
            Some(
                FailureKind::InvalidState | FailureKind::Conflict | FailureKind::InvalidArgument,
            ) => StatusCode::BAD_REQUEST,
            Some(FailureKind::Internal) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self.kind() {
            None => Redirect::to("/login").into_response(),
            Some(FailureKind::Internal) => {
                error!(error = %self, "request failed");
                (status, "Internal server error").into_response()
            }
            Some(_) => (status, self.to_string()).into_response(),
        }
    }
}
