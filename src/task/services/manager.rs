//! Task management within a board.
//!
//! Every operation resolves the board, checks the requester against the
//! board access policy, and only then looks at the task.

use super::{TaskServiceError, TaskServiceResult};
use crate::board::{
    domain::{Board, BoardAction, BoardId, BoardRole},
    ports::BoardRepository,
    services::{AuthorizedBoard, authorize_board},
};
use crate::identity::domain::UserEmail;
use crate::task::{
    domain::{Task, TaskContent, TaskDomainError, TaskEdit, TaskId, TaskStatus},
    ports::TaskRepository,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRequest {
    content: TaskContent,
    assignees: Vec<String>,
}

impl NewTaskRequest {
    /// Creates a request without assignees.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            content: TaskContent::new(title, description, due_date),
            assignees: Vec::new(),
        }
    }

    /// Sets the initial assignees. Blank entries are ignored.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = String>) -> Self {
        self.assignees = assignees.into_iter().collect();
        self
    }
}

/// Request payload for editing a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskRequest {
    content: TaskContent,
    status: TaskStatus,
}

impl EditTaskRequest {
    /// Creates an edit request from submitted form values.
    ///
    /// `status` marks the task complete only when it is exactly `complete`.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
        status: &str,
    ) -> Self {
        Self {
            content: TaskContent::new(title, description, due_date),
            status: TaskStatus::from_submitted(status),
        }
    }

    /// Returns the parsed status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}

/// A task together with its board and the requester's role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    /// Owning board.
    pub board: Board,
    /// Role of the requester on the board.
    pub role: BoardRole,
    /// The task.
    pub task: Task,
}

/// Task orchestration service.
pub struct TaskService<B, T, C>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    boards: Arc<B>,
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<B, T, C> Clone for TaskService<B, T, C>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            boards: Arc::clone(&self.boards),
            tasks: Arc::clone(&self.tasks),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<B, T, C> TaskService<B, T, C>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(boards: Arc<B>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            boards,
            tasks,
            clock,
        }
    }

    async fn authorize(
        &self,
        board_id: BoardId,
        requester: &UserEmail,
        action: BoardAction,
    ) -> TaskServiceResult<AuthorizedBoard> {
        Ok(authorize_board(&*self.boards, board_id, requester, action).await?)
    }

    async fn require_task(&self, board_id: BoardId, task_id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .find(board_id, task_id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound { board_id, task_id })
    }

    /// Creates an open task authored by `requester`.
    ///
    /// Initial assignees are parsed as emails but not checked against the
    /// board's members. Entries that are not emails are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::BoardNotFound`] for unknown boards and
    /// [`TaskServiceError::Forbidden`] unless the requester is on the board.
    pub async fn add_task(
        &self,
        board_id: BoardId,
        requester: &UserEmail,
        request: NewTaskRequest,
    ) -> TaskServiceResult<Task> {
        self.authorize(board_id, requester, BoardAction::CreateTask)
            .await?;
        let mut assignees = Vec::with_capacity(request.assignees.len());
        let entries = request.assignees.iter().filter(|raw| !raw.trim().is_empty());
        for raw in entries {
            match UserEmail::new(raw.as_str()) {
                Ok(email) => assignees.push(email),
                Err(err) => {
                    debug!(%board_id, error = %err, "non-email assignee dropped");
                }
            }
        }

        let task = Task::new(
            board_id,
            requester.clone(),
            request.content,
            assignees,
            &*self.clock,
        );
        self.tasks.store(&task).await?;
        info!(%board_id, task_id = %task.id(), created_by = %requester, "task created");
        Ok(task)
    }

    /// Returns a task of a board the requester participates in.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::BoardNotFound`],
    /// [`TaskServiceError::Forbidden`], or [`TaskServiceError::TaskNotFound`]
    /// in that order of precedence.
    pub async fn get_task(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        requester: &UserEmail,
    ) -> TaskServiceResult<TaskView> {
        let AuthorizedBoard { board, role } = self
            .authorize(board_id, requester, BoardAction::View)
            .await?;
        let task = self.require_task(board_id, task_id).await?;
        Ok(TaskView { board, role, task })
    }

    /// Overwrites title, description, due date, and completion.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::BoardNotFound`],
    /// [`TaskServiceError::Forbidden`], or [`TaskServiceError::TaskNotFound`].
    pub async fn edit_task(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        requester: &UserEmail,
        request: EditTaskRequest,
    ) -> TaskServiceResult<Task> {
        self.authorize(board_id, requester, BoardAction::ModifyTask)
            .await?;
        let mut task = self.require_task(board_id, task_id).await?;
        let edit = TaskEdit::new(request.content, request.status, &*self.clock);
        self.tasks.apply_edit(board_id, task_id, &edit).await?;
        task.apply_edit(&edit);
        info!(%board_id, %task_id, status = request.status.as_str(), "task edited");
        Ok(task)
    }

    /// Marks a task complete now. Completing a completed task refreshes its
    /// completion time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::BoardNotFound`],
    /// [`TaskServiceError::Forbidden`], or [`TaskServiceError::TaskNotFound`].
    pub async fn complete_task(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        requester: &UserEmail,
    ) -> TaskServiceResult<Task> {
        self.authorize(board_id, requester, BoardAction::ModifyTask)
            .await?;
        let mut task = self.require_task(board_id, task_id).await?;
        let completed_at = self.clock.utc();
        self.tasks
            .mark_completed(board_id, task_id, completed_at)
            .await?;
        task.mark_completed(completed_at);
        info!(%board_id, %task_id, "task completed");
        Ok(task)
    }

    /// Deletes a task. Deleting a task that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::BoardNotFound`] or
    /// [`TaskServiceError::Forbidden`].
    pub async fn delete_task(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        requester: &UserEmail,
    ) -> TaskServiceResult<()> {
        self.authorize(board_id, requester, BoardAction::ModifyTask)
            .await?;
        self.tasks.delete(board_id, task_id).await?;
        info!(%board_id, %task_id, "task deleted");
        Ok(())
    }

    /// Adds `assignee` to a task's assignees. Assigning twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::BoardNotFound`] for unknown boards,
    /// [`TaskServiceError::Forbidden`] unless the requester is the creator,
    /// [`TaskServiceError::InvalidEmail`] for a malformed address,
    /// [`TaskServiceError::Domain`] when the assignee is not on the board,
    /// and a not-found [`TaskServiceError::Repository`] for unknown tasks.
    pub async fn assign_user(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        requester: &UserEmail,
        assignee: &str,
    ) -> TaskServiceResult<()> {
        let AuthorizedBoard { board, .. } = self
            .authorize(board_id, requester, BoardAction::AssignTask)
            .await?;
        let assignee_email = UserEmail::new(assignee)?;
        if !board.is_participant(&assignee_email) {
            return Err(TaskDomainError::AssigneeNotOnBoard(assignee_email).into());
        }
        self.tasks
            .add_assignee(board_id, task_id, &assignee_email)
            .await?;
        info!(%board_id, %task_id, assignee = %assignee_email, "user assigned");
        Ok(())
    }

    /// Removes `assignee` from a task's assignees. Removing an absent
    /// assignee is a no-op, and an address that is not an email is never
    /// assigned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::BoardNotFound`] for unknown boards,
    /// [`TaskServiceError::Forbidden`] unless the requester is the creator,
    /// and [`TaskServiceError::TaskNotFound`] or a not-found
    /// [`TaskServiceError::Repository`] for unknown tasks.
    pub async fn unassign_user(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        requester: &UserEmail,
        assignee: &str,
    ) -> TaskServiceResult<()> {
        self.authorize(board_id, requester, BoardAction::AssignTask)
            .await?;
        let Ok(assignee_email) = UserEmail::new(assignee) else {
            self.require_task(board_id, task_id).await?;
            debug!(%board_id, %task_id, "unassign of a non-email address ignored");
            return Ok(());
        };
        self.tasks
            .remove_assignee(board_id, task_id, &assignee_email)
            .await?;
        info!(%board_id, %task_id, assignee = %assignee_email, "user unassigned");
        Ok(())
    }
}
