//! Service-level errors for task operations.

use crate::board::{
    domain::{AccessDenied, BoardId},
    ports::BoardRepositoryError,
    services::BoardLookupError,
};
use crate::error::FailureKind;
use crate::identity::domain::IdentityDomainError;
use crate::task::{
    domain::{TaskDomainError, TaskId},
    ports::TaskRepositoryError,
};
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The board does not exist.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),
    /// The board has no such task.
    #[error("task {task_id} not found on board {board_id}")]
    TaskNotFound {
        /// Board searched.
        board_id: BoardId,
        /// Missing task.
        task_id: TaskId,
    },
    /// The access policy rejected the requester.
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),
    /// A task rule rejected the action.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// A submitted email was malformed.
    #[error(transparent)]
    InvalidEmail(#[from] IdentityDomainError),
    /// Board lookup failed.
    #[error(transparent)]
    BoardRepository(#[from] BoardRepositoryError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskServiceError {
    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::BoardNotFound(_)
            | Self::TaskNotFound { .. }
            | Self::Repository(TaskRepositoryError::NotFound { .. }) => FailureKind::NotFound,
            Self::Forbidden(_) => FailureKind::Forbidden,
            Self::Domain(err) => err.kind(),
            Self::InvalidEmail(_) => FailureKind::InvalidArgument,
            Self::BoardRepository(_) | Self::Repository(_) => FailureKind::Internal,
        }
    }
}

impl From<BoardLookupError> for TaskServiceError {
    fn from(err: BoardLookupError) -> Self {
        match err {
            BoardLookupError::NotFound(id) => Self::BoardNotFound(id),
            BoardLookupError::Forbidden(denied) => Self::Forbidden(denied),
            BoardLookupError::Repository(repo) => Self::BoardRepository(repo),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
