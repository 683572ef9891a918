//! Request handlers, one module per page group.

pub mod auth;
pub mod boards;
pub mod tasks;

use super::WebError;
use crate::board::domain::BoardId;
use crate::task::domain::TaskId;

/// Parses a board path segment; unparsable identifiers name no board.
fn parse_board_id(raw: &str) -> Result<BoardId, WebError> {
    raw.parse().map_err(|_| WebError::UnknownResource)
}

/// Parses a task path segment; unparsable identifiers name no task.
fn parse_task_id(raw: &str) -> Result<TaskId, WebError> {
    raw.parse().map_err(|_| WebError::UnknownResource)
}

fn board_url(board_id: BoardId) -> String {
    format!("/board/{board_id}")
}

fn task_url(board_id: BoardId, task_id: TaskId) -> String {
    format!("/board/{board_id}/task/{task_id}")
}
