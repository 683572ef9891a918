//! Task aggregate and its field-scoped edits.

use super::{TaskId, TaskStatus};
use crate::board::domain::BoardId;
use crate::identity::domain::UserEmail;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Free-text task fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskContent {
    title: String,
    description: String,
    due_date: String,
}

impl TaskContent {
    /// Creates task content. The due date is kept as submitted.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: due_date.into(),
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date as submitted.
    #[must_use]
    pub fn due_date(&self) -> &str {
        &self.due_date
    }
}

/// Overwrite of a task's content and completion, applied as one write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEdit {
    content: TaskContent,
    completed_at: Option<DateTime<Utc>>,
}

impl TaskEdit {
    /// Creates an edit. A complete status stamps the completion time from
    /// `clock`; an incomplete status clears it.
    #[must_use]
    pub fn new(content: TaskContent, status: TaskStatus, clock: &impl Clock) -> Self {
        let completed_at = status.is_complete().then(|| clock.utc());
        Self {
            content,
            completed_at,
        }
    }

    /// Returns the new content.
    #[must_use]
    pub const fn content(&self) -> &TaskContent {
        &self.content
    }

    /// Returns the new completion time, `None` for incomplete.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }
}

/// Task aggregate.
///
/// Completion is stored only as the completion time, so a task is complete
/// exactly when `completed_at` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    board_id: BoardId,
    content: TaskContent,
    created_by: UserEmail,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    assignees: BTreeSet<UserEmail>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning board.
    pub board_id: BoardId,
    /// Persisted free-text fields.
    pub content: TaskContent,
    /// Persisted author.
    pub created_by: UserEmail,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted assignee list.
    pub assignees: Vec<UserEmail>,
}

impl Task {
    /// Creates an open task on `board_id` authored by `created_by`.
    #[must_use]
    pub fn new(
        board_id: BoardId,
        created_by: UserEmail,
        content: TaskContent,
        assignees: impl IntoIterator<Item = UserEmail>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskId::new(),
            board_id,
            content,
            created_by,
            created_at: clock.utc(),
            completed_at: None,
            assignees: assignees.into_iter().collect(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            board_id: data.board_id,
            content: data.content,
            created_by: data.created_by,
            created_at: data.created_at,
            completed_at: data.completed_at,
            assignees: data.assignees.into_iter().collect(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning board.
    #[must_use]
    pub const fn board_id(&self) -> BoardId {
        self.board_id
    }

    /// Returns the free-text fields.
    #[must_use]
    pub const fn content(&self) -> &TaskContent {
        &self.content
    }

    /// Returns the author.
    #[must_use]
    pub const fn created_by(&self) -> &UserEmail {
        &self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp of a completed task.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns whether the task is complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        if self.is_completed() {
            TaskStatus::Complete
        } else {
            TaskStatus::Incomplete
        }
    }

    /// Returns the assignees.
    #[must_use]
    pub const fn assignees(&self) -> &BTreeSet<UserEmail> {
        &self.assignees
    }

    /// Returns whether `user` is assigned.
    #[must_use]
    pub fn is_assigned(&self, user: &UserEmail) -> bool {
        self.assignees.contains(user)
    }

    /// Returns whether nobody is assigned.
    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        self.assignees.is_empty()
    }

    /// Applies an edit to content and completion.
    pub fn apply_edit(&mut self, edit: &TaskEdit) {
        self.content = edit.content.clone();
        self.completed_at = edit.completed_at;
    }

    /// Marks the task complete at `at`, replacing any earlier completion
    /// time.
    pub const fn mark_completed(&mut self, at: DateTime<Utc>) {
        self.completed_at = Some(at);
    }

    /// Set-union insert of an assignee.
    ///
    /// Returns `true` when the assignee set changed.
    pub fn assign(&mut self, user: UserEmail) -> bool {
        self.assignees.insert(user)
    }

    /// Set-remove of an assignee.
    ///
    /// Returns `true` when the assignee set changed.
    pub fn unassign(&mut self, user: &UserEmail) -> bool {
        self.assignees.remove(user)
    }
}
