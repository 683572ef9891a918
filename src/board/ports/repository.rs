//! Repository port for boards and their member sets.

use crate::board::domain::{Board, BoardDetails, BoardId};
use crate::identity::domain::UserEmail;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Board persistence contract.
///
/// Member changes are set primitives applied atomically to the stored board,
/// never a rewrite of the whole member list.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Stores a new board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::DuplicateBoard`] when the board ID
    /// already exists.
    async fn store(&self, board: &Board) -> BoardRepositoryResult<()>;

    /// Finds a board by identifier.
    ///
    /// Returns `None` when the board does not exist.
    async fn find_by_id(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>>;

    /// Returns every board created by `creator`.
    async fn find_by_creator(&self, creator: &UserEmail) -> BoardRepositoryResult<Vec<Board>>;

    /// Returns every board listing `member` in its member set.
    async fn find_by_member(&self, member: &UserEmail) -> BoardRepositoryResult<Vec<Board>>;

    /// Overwrites name and description in one write.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::NotFound`] when the board does not
    /// exist.
    async fn update_details(
        &self,
        id: BoardId,
        details: &BoardDetails,
    ) -> BoardRepositoryResult<()>;

    /// Adds `member` to the member set if absent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::NotFound`] when the board does not
    /// exist.
    async fn add_member(&self, id: BoardId, member: &UserEmail) -> BoardRepositoryResult<()>;

    /// Removes `member` from the member set if present.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::NotFound`] when the board does not
    /// exist.
    async fn remove_member(&self, id: BoardId, member: &UserEmail) -> BoardRepositoryResult<()>;

    /// Deletes the board record.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::NotFound`] when the board does not
    /// exist.
    async fn delete(&self, id: BoardId) -> BoardRepositoryResult<()>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// A board with the same identifier already exists.
    #[error("duplicate board identifier: {0}")]
    DuplicateBoard(BoardId),

    /// The board was not found.
    #[error("board not found: {0}")]
    NotFound(BoardId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
