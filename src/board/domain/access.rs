//! Board access policy.
//!
//! Each [`BoardAction`] declares the [`RequiredRole`] it needs; [`authorize`]
//! is the single place where a requester's role on a board is compared
//! against it.

use super::{Board, BoardId};
use crate::identity::domain::UserEmail;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Role a user holds on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardRole {
    /// The board's owner.
    Creator,
    /// A user the creator shared the board with.
    Member,
}

impl BoardRole {
    /// Returns `true` for the creator role.
    #[must_use]
    pub const fn is_creator(self) -> bool {
        matches!(self, Self::Creator)
    }
}

/// Minimum role an action demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredRole {
    /// Only the creator.
    Creator,
    /// The creator or any member.
    Participant,
}

impl RequiredRole {
    /// Returns whether `role` satisfies this requirement.
    #[must_use]
    pub const fn admits(self, role: BoardRole) -> bool {
        match self {
            Self::Creator => role.is_creator(),
            Self::Participant => true,
        }
    }
}

/// Actions guarded by the access policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardAction {
    /// Read the board, its members, and its tasks.
    View,
    /// Rename or re-describe the board, or view its settings.
    ManageSettings,
    /// Delete the board.
    Delete,
    /// Add or remove members.
    ManageMembers,
    /// Create a task.
    CreateTask,
    /// Edit, complete, or delete a task.
    ModifyTask,
    /// Assign or unassign users on a task.
    AssignTask,
}

impl BoardAction {
    /// Returns the role this action requires.
    #[must_use]
    pub const fn required_role(self) -> RequiredRole {
        match self {
            Self::View | Self::CreateTask | Self::ModifyTask => RequiredRole::Participant,
            Self::ManageSettings | Self::Delete | Self::ManageMembers | Self::AssignTask => {
                RequiredRole::Creator
            }
        }
    }

    /// Returns a short human-readable description.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::View => "view this board",
            Self::ManageSettings => "manage board settings",
            Self::Delete => "delete this board",
            Self::ManageMembers => "manage board members",
            Self::CreateTask => "add tasks to this board",
            Self::ModifyTask => "modify tasks on this board",
            Self::AssignTask => "assign users to tasks",
        }
    }
}

impl fmt::Display for BoardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// The requester lacks the role an action requires.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("not authorized to {action} (board {board_id})")]
pub struct AccessDenied {
    /// Board the action targeted.
    pub board_id: BoardId,
    /// Rejected action.
    pub action: BoardAction,
}

/// Checks `requester` against the role `action` requires on `board`.
///
/// # Errors
///
/// Returns [`AccessDenied`] when the requester holds no role on the board or
/// a role the action does not admit.
pub fn authorize(
    board: &Board,
    requester: &UserEmail,
    action: BoardAction,
) -> Result<BoardRole, AccessDenied> {
    board
        .role_of(requester)
        .filter(|role| action.required_role().admits(*role))
        .ok_or(AccessDenied {
            board_id: board.id(),
            action,
        })
}
