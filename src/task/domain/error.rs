//! Error types for task rules.

use crate::error::FailureKind;
use crate::identity::domain::UserEmail;
use thiserror::Error;

/// Errors returned when a task rule rejects an action.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The proposed assignee is neither the creator nor a member.
    #[error("assignee {0} is not a member of this board")]
    AssigneeNotOnBoard(UserEmail),
}

impl TaskDomainError {
    /// Returns the failure category of this rule violation.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::AssigneeNotOnBoard(_) => FailureKind::InvalidArgument,
        }
    }
}
