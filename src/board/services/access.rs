//! Board resolution followed by the access check, shared by every service
//! that acts on a board.

use crate::board::{
    domain::{AccessDenied, Board, BoardAction, BoardId, BoardRole, authorize},
    ports::{BoardRepository, BoardRepositoryError},
};
use crate::identity::domain::UserEmail;
use thiserror::Error;

/// A board together with the requester's role on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedBoard {
    /// The resolved board.
    pub board: Board,
    /// Role the requester holds.
    pub role: BoardRole,
}

/// Failures while resolving and authorizing a board.
#[derive(Debug, Error)]
pub enum BoardLookupError {
    /// The board does not exist.
    #[error("board not found: {0}")]
    NotFound(BoardId),
    /// The requester lacks the required role.
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),
    /// Repository lookup failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
}

/// Loads a board and authorizes `requester` for `action` on it.
///
/// Existence is checked before authorization, so an unknown board reports
/// not-found regardless of who asks.
///
/// # Errors
///
/// Returns [`BoardLookupError::NotFound`] for unknown boards,
/// [`BoardLookupError::Forbidden`] when the policy rejects the requester,
/// and [`BoardLookupError::Repository`] when the lookup fails.
pub async fn authorize_board<R>(
    repository: &R,
    board_id: BoardId,
    requester: &UserEmail,
    action: BoardAction,
) -> Result<AuthorizedBoard, BoardLookupError>
where
    R: BoardRepository + ?Sized,
{
    let board = repository
        .find_by_id(board_id)
        .await?
        .ok_or(BoardLookupError::NotFound(board_id))?;
    let role = authorize(&board, requester, action)?;
    Ok(AuthorizedBoard { board, role })
}
