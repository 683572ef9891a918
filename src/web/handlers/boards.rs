//! Board pages: creation, detail, members, and settings.

use super::{board_url, parse_board_id};
use crate::board::{
    domain::BoardDetails,
    services::{BoardOverview, CreateBoardRequest},
};
use crate::web::{
    AppState, WebError,
    forms::{BoardForm, MemberForm},
    pages::{BoardView, CountsView, TaskView},
    session::CurrentUser,
};
use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use minijinja::context;
use tracing::debug;

/// `GET /create_board`.
pub async fn create_board_page(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Result<Html<String>, WebError> {
    Ok(state.pages.render(
        "create_board.html",
        context! { user_email => identity.email().as_str() },
    )?)
}

/// `POST /create_board`.
pub async fn create_board(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Form(form): Form<BoardForm>,
) -> Result<Redirect, WebError> {
    state
        .directory
        .create_board(
            identity.email(),
            CreateBoardRequest::new(form.board_name, form.description),
        )
        .await?;
    Ok(Redirect::to("/"))
}

/// `GET /board/{board_id}`.
pub async fn view_board(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(raw_board_id): Path<String>,
) -> Result<Html<String>, WebError> {
    let board_id = parse_board_id(&raw_board_id)?;
    let BoardOverview {
        board,
        role,
        tasks,
        counts,
    } = state
        .directory
        .board_overview(board_id, identity.email())
        .await?;
    let task_views: Vec<TaskView> = tasks.iter().map(TaskView::from).collect();
    Ok(state.pages.render(
        "board_detail.html",
        context! {
            user_email => identity.email().as_str(),
            board => BoardView::from(&board),
            is_creator => role.is_creator(),
            tasks => task_views,
            counts => CountsView::from(counts),
        },
    )?)
}

/// `GET /board/{board_id}/members`.
pub async fn members_page(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(raw_board_id): Path<String>,
) -> Result<Html<String>, WebError> {
    let board_id = parse_board_id(&raw_board_id)?;
    let view = state.directory.get_board(board_id, identity.email()).await?;
    Ok(state.pages.render(
        "board_members.html",
        context! {
            user_email => identity.email().as_str(),
            board => BoardView::from(&view.board),
            is_creator => view.role.is_creator(),
        },
    )?)
}

/// `POST /board/{board_id}/add_member`.
pub async fn add_member(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(raw_board_id): Path<String>,
    Form(form): Form<MemberForm>,
) -> Result<Redirect, WebError> {
    let board_id = parse_board_id(&raw_board_id)?;
    state
        .membership
        .add_member(board_id, identity.email(), &form.member_email)
        .await?;
    Ok(Redirect::to(&format!("{}/members", board_url(board_id))))
}

/// `POST /board/{board_id}/remove_member`.
pub async fn remove_member(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(raw_board_id): Path<String>,
    Form(form): Form<MemberForm>,
) -> Result<Redirect, WebError> {
    let board_id = parse_board_id(&raw_board_id)?;
    let removal = state
        .membership
        .remove_member(board_id, identity.email(), &form.member_email)
        .await?;
    debug!(
        %board_id,
        member = %removal.member,
        unassigned = removal.unassigned.len(),
        complete = removal.is_complete(),
        "member removal finished"
    );
    Ok(Redirect::to(&format!("{}/members", board_url(board_id))))
}

/// `GET /board/{board_id}/settings`.
pub async fn settings_page(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(raw_board_id): Path<String>,
) -> Result<Html<String>, WebError> {
    let board_id = parse_board_id(&raw_board_id)?;
    let settings = state
        .directory
        .board_settings(board_id, identity.email())
        .await?;
    Ok(state.pages.render(
        "board_settings.html",
        context! {
            user_email => identity.email().as_str(),
            board => BoardView::from(&settings.board),
            task_count => settings.task_count,
            member_count => settings.member_count,
            can_delete => settings.can_delete,
        },
    )?)
}

/// `POST /board/{board_id}/update_settings`.
pub async fn update_settings(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(raw_board_id): Path<String>,
    Form(form): Form<BoardForm>,
) -> Result<Redirect, WebError> {
    let board_id = parse_board_id(&raw_board_id)?;
    state
        .directory
        .update_board(
            board_id,
            identity.email(),
            BoardDetails::new(form.board_name, form.description),
        )
        .await?;
    Ok(Redirect::to(&format!("{}/settings", board_url(board_id))))
}

/// `POST /board/{board_id}/delete`.
pub async fn delete_board(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(raw_board_id): Path<String>,
) -> Result<Redirect, WebError> {
    let board_id = parse_board_id(&raw_board_id)?;
    state
        .directory
        .delete_board(board_id, identity.email())
        .await?;
    Ok(Redirect::to("/"))
}
