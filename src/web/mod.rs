//! HTTP transport: server-rendered pages over the board and task services.
//!
//! Every route except `/`, `/login`, and `/signup` requires an
//! authenticated session; anonymous requests are redirected to `/login`.
//! Mutations answer with `303 See Other`.

pub mod error;
pub mod forms;
pub mod handlers;
pub mod pages;
pub mod session;
pub mod state;

pub use error::WebError;
pub use state::AppState;

use axum::Router;
use axum::routing::{get, post};
use handlers::{auth, boards, tasks};
use tower_http::trace::TraceLayer;

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(auth::home))
        .route("/login", get(auth::login_page))
        .route("/signup", get(auth::signup_page))
        .route(
            "/create_board",
            get(boards::create_board_page).post(boards::create_board),
        )
        .route("/board/{board_id}", get(boards::view_board))
        .route("/board/{board_id}/members", get(boards::members_page))
        .route("/board/{board_id}/add_member", post(boards::add_member))
        .route("/board/{board_id}/remove_member", post(boards::remove_member))
        .route("/board/{board_id}/settings", get(boards::settings_page))
        .route(
            "/board/{board_id}/update_settings",
            post(boards::update_settings),
        )
        .route("/board/{board_id}/delete", post(boards::delete_board))
        .route(
            "/board/{board_id}/add_task",
            get(tasks::add_task_page).post(tasks::add_task),
        )
        .route("/board/{board_id}/task/{task_id}", get(tasks::task_page))
        .route(
            "/board/{board_id}/task/{task_id}/edit",
            get(tasks::edit_task_page).post(tasks::edit_task),
        )
        .route(
            "/board/{board_id}/task/{task_id}/complete",
            post(tasks::complete_task),
        )
        .route(
            "/board/{board_id}/task/{task_id}/delete",
            post(tasks::delete_task),
        )
        .route(
            "/board/{board_id}/task/{task_id}/assign",
            post(tasks::assign_user),
        )
        .route(
            "/board/{board_id}/task/{task_id}/unassign",
            post(tasks::unassign_user),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
