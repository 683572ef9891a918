//! Board aggregate root.

use super::{BoardDomainError, BoardId, BoardRole};
use crate::identity::domain::UserEmail;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// User-editable board fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDetails {
    name: String,
    description: String,
}

impl BoardDetails {
    /// Creates board details.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Returns the board name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the board description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Board aggregate root.
///
/// The creator is never part of `members`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    details: BoardDetails,
    creator: UserEmail,
    members: BTreeSet<UserEmail>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedBoardData {
    /// Persisted board identifier.
    pub id: BoardId,
    /// Persisted name and description.
    pub details: BoardDetails,
    /// Persisted creator.
    pub creator: UserEmail,
    /// Persisted member list.
    pub members: Vec<UserEmail>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Creates a board owned by `creator` with no members.
    #[must_use]
    pub fn new(creator: UserEmail, details: BoardDetails, clock: &impl Clock) -> Self {
        Self {
            id: BoardId::new(),
            details,
            creator,
            members: BTreeSet::new(),
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a board from persisted storage.
    ///
    /// Duplicate member entries collapse, and a stored member equal to the
    /// creator is dropped.
    #[must_use]
    pub fn from_persisted(data: PersistedBoardData) -> Self {
        let PersistedBoardData {
            id,
            details,
            creator,
            members: persisted_members,
            created_at,
        } = data;
        let members = persisted_members
            .into_iter()
            .filter(|member| *member != creator)
            .collect();

        Self {
            id,
            details,
            creator,
            members,
            created_at,
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the name and description.
    #[must_use]
    pub const fn details(&self) -> &BoardDetails {
        &self.details
    }

    /// Returns the board name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.details.name()
    }

    /// Returns the board description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.details.description()
    }

    /// Returns the board owner.
    #[must_use]
    pub const fn creator(&self) -> &UserEmail {
        &self.creator
    }

    /// Returns the board members, excluding the creator.
    #[must_use]
    pub const fn members(&self) -> &BTreeSet<UserEmail> {
        &self.members
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the role `user` holds on this board.
    #[must_use]
    pub fn role_of(&self, user: &UserEmail) -> Option<BoardRole> {
        if *user == self.creator {
            Some(BoardRole::Creator)
        } else if self.members.contains(user) {
            Some(BoardRole::Member)
        } else {
            None
        }
    }

    /// Returns whether `user` is the creator or a member.
    #[must_use]
    pub fn is_participant(&self, user: &UserEmail) -> bool {
        self.role_of(user).is_some()
    }

    /// Returns the members followed by the creator, the users a task may be
    /// assigned to.
    #[must_use]
    pub fn participants(&self) -> Vec<UserEmail> {
        self.members
            .iter()
            .cloned()
            .chain(std::iter::once(self.creator.clone()))
            .collect()
    }

    /// Checks that `candidate` may join the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::CreatorCannotBeMember`] for the creator
    /// and [`BoardDomainError::AlreadyMember`] for existing members.
    pub fn ensure_can_add_member(&self, candidate: &UserEmail) -> Result<(), BoardDomainError> {
        if *candidate == self.creator {
            return Err(BoardDomainError::CreatorCannotBeMember(candidate.clone()));
        }
        if self.members.contains(candidate) {
            return Err(BoardDomainError::AlreadyMember(candidate.clone()));
        }
        Ok(())
    }

    /// Checks that `member` can be removed from the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NotAMember`] when `member` is not in the
    /// member set.
    pub fn ensure_removable_member(&self, member: &UserEmail) -> Result<(), BoardDomainError> {
        if self.members.contains(member) {
            Ok(())
        } else {
            Err(BoardDomainError::NotAMember(member.clone()))
        }
    }

    /// Checks the deletion preconditions given the board's task count.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::HasMembers`] when members remain and
    /// [`BoardDomainError::HasTasks`] when tasks remain.
    pub fn ensure_deletable(&self, task_count: usize) -> Result<(), BoardDomainError> {
        if !self.members.is_empty() {
            return Err(BoardDomainError::HasMembers(self.id));
        }
        if task_count > 0 {
            return Err(BoardDomainError::HasTasks(self.id));
        }
        Ok(())
    }

    /// Returns whether the deletion preconditions hold.
    #[must_use]
    pub fn can_delete(&self, task_count: usize) -> bool {
        self.ensure_deletable(task_count).is_ok()
    }

    /// Replaces name and description.
    pub fn set_details(&mut self, details: BoardDetails) {
        self.details = details;
    }

    /// Set-union insert of a member. The creator is never inserted.
    ///
    /// Returns `true` when the member set changed.
    pub fn union_member(&mut self, member: UserEmail) -> bool {
        if member == self.creator {
            return false;
        }
        self.members.insert(member)
    }

    /// Set-remove of a member.
    ///
    /// Returns `true` when the member set changed.
    pub fn remove_member(&mut self, member: &UserEmail) -> bool {
        self.members.remove(member)
    }
}
