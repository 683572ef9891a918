//! Dashboard and the anonymous-only login and signup pages.

use crate::web::{AppState, WebError, pages::BoardCard, session::MaybeUser};
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use minijinja::context;

/// `GET /`: the dashboard, or the login page for anonymous visitors.
pub async fn home(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
) -> Result<Response, WebError> {
    let Some(identity) = user else {
        return Ok(state.pages.render("login.html", context! {})?.into_response());
    };

    let listings = state.directory.list_boards_for(identity.email()).await?;
    let boards: Vec<BoardCard> = listings.iter().map(BoardCard::from).collect();
    let page = state.pages.render(
        "dashboard.html",
        context! {
            user_email => identity.email().as_str(),
            boards => boards,
        },
    )?;
    Ok(page.into_response())
}

/// `GET /login`.
pub async fn login_page(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
) -> Result<Response, WebError> {
    anonymous_page(&state, user.is_some(), "login.html")
}

/// `GET /signup`.
pub async fn signup_page(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
) -> Result<Response, WebError> {
    anonymous_page(&state, user.is_some(), "signup.html")
}

fn anonymous_page(
    state: &AppState,
    authenticated: bool,
    template: &str,
) -> Result<Response, WebError> {
    if authenticated {
        return Ok(Redirect::to("/").into_response());
    }
    Ok(state.pages.render(template, context! {})?.into_response())
}
