//! Error types for board membership and lifecycle rules.

use super::BoardId;
use crate::error::FailureKind;
use crate::identity::domain::UserEmail;
use thiserror::Error;

/// Errors returned when a board rule rejects an action.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The proposed member is the board's creator.
    #[error("{0} is the creator of this board")]
    CreatorCannotBeMember(UserEmail),

    /// The proposed member already belongs to the board.
    #[error("{0} is already a member of this board")]
    AlreadyMember(UserEmail),

    /// The user is not a member of the board.
    #[error("{0} is not a member of this board")]
    NotAMember(UserEmail),

    /// The address given for removal is not an email, so it names no member.
    #[error("{0} is not a member of this board")]
    UnknownMember(String),

    /// Boards with members cannot be deleted.
    #[error("cannot delete board {0} with members")]
    HasMembers(BoardId),

    /// Boards that still own tasks cannot be deleted.
    #[error("cannot delete board {0} with tasks")]
    HasTasks(BoardId),
}

impl BoardDomainError {
    /// Returns the failure category of this rule violation.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::CreatorCannotBeMember(_) | Self::AlreadyMember(_) => FailureKind::Conflict,
            Self::NotAMember(_)
            | Self::UnknownMember(_)
            | Self::HasMembers(_)
            | Self::HasTasks(_) => FailureKind::InvalidState,
        }
    }
}
