//! Service-level errors for board directory and membership operations.

use super::BoardLookupError;
use crate::board::{
    domain::{AccessDenied, BoardDomainError, BoardId},
    ports::BoardRepositoryError,
};
use crate::error::FailureKind;
use crate::identity::domain::IdentityDomainError;
use crate::task::ports::TaskRepositoryError;
use thiserror::Error;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// The board does not exist.
    #[error("board not found: {0}")]
    NotFound(BoardId),
    /// The access policy rejected the requester.
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),
    /// A board rule rejected the action.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// A submitted email was malformed.
    #[error(transparent)]
    InvalidEmail(#[from] IdentityDomainError),
    /// Board repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
    /// Task repository operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
}

impl BoardServiceError {
    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::NotFound(_) | Self::Repository(BoardRepositoryError::NotFound(_)) => {
                FailureKind::NotFound
            }
            Self::Forbidden(_) => FailureKind::Forbidden,
            Self::Domain(err) => err.kind(),
            Self::InvalidEmail(_) => FailureKind::InvalidArgument,
            Self::Repository(_) | Self::Tasks(_) => FailureKind::Internal,
        }
    }
}

impl From<BoardLookupError> for BoardServiceError {
    fn from(err: BoardLookupError) -> Self {
        match err {
            BoardLookupError::NotFound(id) => Self::NotFound(id),
            BoardLookupError::Forbidden(denied) => Self::Forbidden(denied),
            BoardLookupError::Repository(repo) => Self::Repository(repo),
        }
    }
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;
