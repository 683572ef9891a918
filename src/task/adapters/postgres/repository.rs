//! `PostgreSQL` repository implementation for board tasks.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::board::domain::BoardId;
use crate::identity::domain::UserEmail;
use crate::task::{
    domain::{PersistedTaskData, Task, TaskContent, TaskEdit, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::{Text, Uuid as SqlUuid};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

const ADD_ASSIGNEE_SQL: &str = concat!(
    "UPDATE tasks SET assignees = CASE ",
    "WHEN $3 = ANY(assignees) THEN assignees ",
    "ELSE array_append(assignees, $3) END ",
    "WHERE board_id = $1 AND id = $2",
);

const REMOVE_ASSIGNEE_SQL: &str =
    "UPDATE tasks SET assignees = array_remove(assignees, $3) WHERE board_id = $1 AND id = $2";

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }

    async fn update_assignees(
        &self,
        sql: &'static str,
        board_id: BoardId,
        task_id: TaskId,
        assignee: &UserEmail,
    ) -> TaskRepositoryResult<()> {
        let assignee_value = assignee.as_str().to_owned();
        self.run_blocking(move |connection| {
            let updated = diesel::sql_query(sql)
                .bind::<SqlUuid, _>(board_id.into_inner())
                .bind::<SqlUuid, _>(task_id.into_inner())
                .bind::<Text, _>(assignee_value)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            require_row(updated, board_id, task_id)
        })
        .await
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);
        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find(&self, board_id: BoardId, task_id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::board_id.eq(board_id.into_inner()))
                .filter(tasks::id.eq(task_id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_for_board(&self, board_id: BoardId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            tasks::table
                .filter(tasks::board_id.eq(board_id.into_inner()))
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?
                .into_iter()
                .map(row_to_task)
                .collect()
        })
        .await
    }

    async fn count_for_board(&self, board_id: BoardId) -> TaskRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            let count: i64 = tasks::table
                .filter(tasks::board_id.eq(board_id.into_inner()))
                .count()
                .get_result(connection)
                .map_err(TaskRepositoryError::persistence)?;
            usize::try_from(count).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn apply_edit(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        edit: &TaskEdit,
    ) -> TaskRepositoryResult<()> {
        let content = edit.content().clone();
        let completed_at = edit.completed_at();
        self.run_blocking(move |connection| {
            let updated = diesel::update(
                tasks::table
                    .filter(tasks::board_id.eq(board_id.into_inner()))
                    .filter(tasks::id.eq(task_id.into_inner())),
            )
            .set((
                tasks::title.eq(content.title()),
                tasks::description.eq(content.description()),
                tasks::due_date.eq(content.due_date()),
                tasks::completed_at.eq(completed_at),
            ))
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            require_row(updated, board_id, task_id)
        })
        .await
    }

    async fn mark_completed(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        completed_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let updated = diesel::update(
                tasks::table
                    .filter(tasks::board_id.eq(board_id.into_inner()))
                    .filter(tasks::id.eq(task_id.into_inner())),
            )
            .set(tasks::completed_at.eq(Some(completed_at)))
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            require_row(updated, board_id, task_id)
        })
        .await
    }

    async fn delete(&self, board_id: BoardId, task_id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(
                tasks::table
                    .filter(tasks::board_id.eq(board_id.into_inner()))
                    .filter(tasks::id.eq(task_id.into_inner())),
            )
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn add_assignee(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        assignee: &UserEmail,
    ) -> TaskRepositoryResult<()> {
        self.update_assignees(ADD_ASSIGNEE_SQL, board_id, task_id, assignee)
            .await
    }

    async fn remove_assignee(
        &self,
        board_id: BoardId,
        task_id: TaskId,
        assignee: &UserEmail,
    ) -> TaskRepositoryResult<()> {
        self.update_assignees(REMOVE_ASSIGNEE_SQL, board_id, task_id, assignee)
            .await
    }
}

const fn require_row(
    affected: usize,
    board_id: BoardId,
    task_id: TaskId,
) -> TaskRepositoryResult<()> {
    if affected == 0 {
        Err(TaskRepositoryError::NotFound { board_id, task_id })
    } else {
        Ok(())
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    let content = task.content();
    NewTaskRow {
        board_id: task.board_id().into_inner(),
        id: task.id().into_inner(),
        title: content.title().to_owned(),
        description: content.description().to_owned(),
        due_date: content.due_date().to_owned(),
        created_by: task.created_by().as_str().to_owned(),
        created_at: task.created_at(),
        completed_at: task.completed_at(),
        assignees: task.assignees().iter().map(ToString::to_string).collect(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        board_id,
        id,
        title,
        description,
        due_date,
        created_by: persisted_author,
        created_at,
        completed_at,
        assignees: persisted_assignees,
    } = row;

    let created_by = UserEmail::new(persisted_author).map_err(TaskRepositoryError::persistence)?;
    let assignees = persisted_assignees
        .into_iter()
        .map(UserEmail::new)
        .collect::<Result<Vec<_>, _>>()
        .map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        board_id: BoardId::from_uuid(board_id),
        content: TaskContent::new(title, description, due_date),
        created_by,
        created_at,
        completed_at,
        assignees,
    }))
}
