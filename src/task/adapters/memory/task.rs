//! In-memory repository for board tasks.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::domain::BoardId;
use crate::identity::domain::UserEmail;
use crate::task::{
    domain::{Task, TaskEdit, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

type TaskKey = (BoardId, TaskId);

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskKey, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, HashMap<TaskKey, Task>>> {
        self.tasks.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, HashMap<TaskKey, Task>>> {
        self.tasks.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    /// Applies `mutate` to the stored task under the write lock.
    fn modify(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        mutate: impl FnOnce(&mut Task),
    ) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        let task = tasks
            .get_mut(&(board_id, task_id))
            .ok_or(TaskRepositoryError::NotFound { board_id, task_id })?;
        mutate(task);
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        let key = (task.board_id(), task.id());
        if tasks.contains_key(&key) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(key, task.clone());
        Ok(())
    }

    async fn find(&self, board_id: BoardId, task_id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.read()?;
        Ok(tasks.get(&(board_id, task_id)).cloned())
    }

    async fn list_for_board(&self, board_id: BoardId) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.read()?;
        let mut listed: Vec<Task> = tasks
            .values()
            .filter(|task| task.board_id() == board_id)
            .cloned()
            .collect();
        listed.sort_by_key(Task::created_at);
        Ok(listed)
    }

    async fn count_for_board(&self, board_id: BoardId) -> TaskRepositoryResult<usize> {
        let tasks = self.read()?;
        Ok(tasks.keys().filter(|(board, _)| *board == board_id).count())
    }

    async fn apply_edit(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        edit: &TaskEdit,
    ) -> TaskRepositoryResult<()> {
        self.modify(board_id, task_id, |task| task.apply_edit(edit))
    }

    async fn mark_completed(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        completed_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()> {
        self.modify(board_id, task_id, |task| task.mark_completed(completed_at))
    }

    async fn delete(&self, board_id: BoardId, task_id: TaskId) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        tasks.remove(&(board_id, task_id));
        Ok(())
    }

    async fn add_assignee(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        assignee: &UserEmail,
    ) -> TaskRepositoryResult<()> {
        self.modify(board_id, task_id, |task| {
            task.assign(assignee.clone());
        })
    }

    async fn remove_assignee(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        assignee: &UserEmail,
    ) -> TaskRepositoryResult<()> {
        self.modify(board_id, task_id, |task| {
            task.unassign(assignee);
        })
    }
}
