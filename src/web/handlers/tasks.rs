//! Task pages and task mutations.

use super::{board_url, parse_board_id, parse_task_id, task_url};
use crate::board::domain::BoardId;
use crate::task::{
    domain::TaskId,
    services::{EditTaskRequest, NewTaskRequest, TaskView as ServiceTaskView},
};
use crate::web::{
    AppState, WebError,
    forms::{AssigneeForm, EditTaskForm, NewTaskForm},
    pages::{BoardView, TaskView},
    session::CurrentUser,
};
use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use minijinja::context;

type TaskPath = Path<(String, String)>;

fn parse_task_path(
    Path((raw_board_id, raw_task_id)): TaskPath,
) -> Result<(BoardId, TaskId), WebError> {
    Ok((parse_board_id(&raw_board_id)?, parse_task_id(&raw_task_id)?))
}

/// `GET /board/{board_id}/add_task`.
pub async fn add_task_page(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(raw_board_id): Path<String>,
) -> Result<Html<String>, WebError> {
    let board_id = parse_board_id(&raw_board_id)?;
    let view = state.directory.get_board(board_id, identity.email()).await?;
    let participants: Vec<String> = view
        .board
        .participants()
        .into_iter()
        .map(String::from)
        .collect();
    Ok(state.pages.render(
        "add_task.html",
        context! {
            user_email => identity.email().as_str(),
            board => BoardView::from(&view.board),
            participants => participants,
        },
    )?)
}

/// `POST /board/{board_id}/add_task`.
pub async fn add_task(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(raw_board_id): Path<String>,
    axum_extra::extract::Form(form): axum_extra::extract::Form<NewTaskForm>,
) -> Result<Redirect, WebError> {
    let board_id = parse_board_id(&raw_board_id)?;
    let request = NewTaskRequest::new(form.title, form.description, form.due_date)
        .with_assignees(form.assignees);
    state
        .tasks
        .add_task(board_id, identity.email(), request)
        .await?;
    Ok(Redirect::to(&board_url(board_id)))
}

fn render_task(
    state: &AppState,
    identity_email: &str,
    view: &ServiceTaskView,
    template: &str,
) -> Result<Html<String>, WebError> {
    let participants: Vec<String> = view
        .board
        .participants()
        .into_iter()
        .map(String::from)
        .collect();
    Ok(state.pages.render(
        template,
        context! {
            user_email => identity_email,
            board => BoardView::from(&view.board),
            task => TaskView::from(&view.task),
            is_creator => view.role.is_creator(),
            participants => participants,
        },
    )?)
}

/// `GET /board/{board_id}/task/{task_id}`.
pub async fn task_page(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    path: TaskPath,
) -> Result<Html<String>, WebError> {
    let (board_id, task_id) = parse_task_path(path)?;
    let view = state
        .tasks
        .get_task(board_id, task_id, identity.email())
        .await?;
    render_task(&state, identity.email().as_str(), &view, "task_detail.html")
}

/// `GET /board/{board_id}/task/{task_id}/edit`.
pub async fn edit_task_page(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    path: TaskPath,
) -> Result<Html<String>, WebError> {
    let (board_id, task_id) = parse_task_path(path)?;
    let view = state
        .tasks
        .get_task(board_id, task_id, identity.email())
        .await?;
    render_task(&state, identity.email().as_str(), &view, "edit_task.html")
}

/// `POST /board/{board_id}/task/{task_id}/edit`.
pub async fn edit_task(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    path: TaskPath,
    Form(form): Form<EditTaskForm>,
) -> Result<Redirect, WebError> {
    let (board_id, task_id) = parse_task_path(path)?;
    let request = EditTaskRequest::new(form.title, form.description, form.due_date, &form.status);
    state
        .tasks
        .edit_task(board_id, task_id, identity.email(), request)
        .await?;
    Ok(Redirect::to(&task_url(board_id, task_id)))
}

/// `POST /board/{board_id}/task/{task_id}/complete`.
pub async fn complete_task(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    path: TaskPath,
) -> Result<Redirect, WebError> {
    let (board_id, task_id) = parse_task_path(path)?;
    state
        .tasks
        .complete_task(board_id, task_id, identity.email())
        .await?;
    Ok(Redirect::to(&board_url(board_id)))
}

/// `POST /board/{board_id}/task/{task_id}/delete`.
pub async fn delete_task(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    path: TaskPath,
) -> Result<Redirect, WebError> {
    let (board_id, task_id) = parse_task_path(path)?;
    state
        .tasks
        .delete_task(board_id, task_id, identity.email())
        .await?;
    Ok(Redirect::to(&board_url(board_id)))
}

/// `POST /board/{board_id}/task/{task_id}/assign`.
pub async fn assign_user(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    path: TaskPath,
    Form(form): Form<AssigneeForm>,
) -> Result<Redirect, WebError> {
    let (board_id, task_id) = parse_task_path(path)?;
    state
        .tasks
        .assign_user(board_id, task_id, identity.email(), &form.assignee)
        .await?;
    Ok(Redirect::to(&task_url(board_id, task_id)))
}

/// `POST /board/{board_id}/task/{task_id}/unassign`.
pub async fn unassign_user(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    path: TaskPath,
    Form(form): Form<AssigneeForm>,
) -> Result<Redirect, WebError> {
    let (board_id, task_id) = parse_task_path(path)?;
    state
        .tasks
        .unassign_user(board_id, task_id, identity.email(), &form.assignee)
        .await?;
    Ok(Redirect::to(&task_url(board_id, task_id)))
}
