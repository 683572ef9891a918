//! Repository port for board tasks.

use crate::board::domain::BoardId;
use crate::identity::domain::UserEmail;
use crate::task::domain::{Task, TaskEdit, TaskId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Tasks are addressed by board and task identifier together. Each write
/// touches only the fields it names; assignee changes are set primitives
/// applied atomically to the stored task.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task under its board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task of a board.
    ///
    /// Returns `None` when the board has no such task.
    async fn find(&self, board_id: BoardId, task_id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task of a board.
    async fn list_for_board(&self, board_id: BoardId) -> TaskRepositoryResult<Vec<Task>>;

    /// Counts the tasks of a board.
    async fn count_for_board(&self, board_id: BoardId) -> TaskRepositoryResult<usize>;

    /// Overwrites content and completion in one write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn apply_edit(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        edit: &TaskEdit,
    ) -> TaskRepositoryResult<()>;

    /// Marks a task complete at `completed_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn mark_completed(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        completed_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()>;

    /// Deletes a task. Deleting an absent task succeeds.
    async fn delete(&self, board_id: BoardId, task_id: TaskId) -> TaskRepositoryResult<()>;

    /// Adds `assignee` to the task's assignees if absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn add_assignee(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        assignee: &UserEmail,
    ) -> TaskRepositoryResult<()>;

    /// Removes `assignee` from the task's assignees if present.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn remove_assignee(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        assignee: &UserEmail,
    ) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found on the board.
    #[error("task {task_id} not found on board {board_id}")]
    NotFound {
        /// Board searched.
        board_id: BoardId,
        /// Missing task.
        task_id: TaskId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
