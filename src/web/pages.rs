//! Page templates and the view models rendered into them.

use crate::board::{
    domain::Board,
    services::{BoardListing, TaskCounts},
};
use crate::task::domain::Task;
use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

/// Display format of completion timestamps.
pub const COMPLETED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TEMPLATES: [(&str, &str); 11] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("login.html", include_str!("../../templates/login.html")),
    ("signup.html", include_str!("../../templates/signup.html")),
    ("dashboard.html", include_str!("../../templates/dashboard.html")),
    ("create_board.html", include_str!("../../templates/create_board.html")),
    ("board_detail.html", include_str!("../../templates/board_detail.html")),
    ("board_members.html", include_str!("../../templates/board_members.html")),
    ("board_settings.html", include_str!("../../templates/board_settings.html")),
    ("add_task.html", include_str!("../../templates/add_task.html")),
    ("task_detail.html", include_str!("../../templates/task_detail.html")),
    ("edit_task.html", include_str!("../../templates/edit_task.html")),
];

/// Compiled page templates.
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    /// Compiles every page template.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when a template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders template `name` with `context`.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] for unknown templates or rendering
    /// failures.
    pub fn render(
        &self,
        name: &str,
        context: impl Serialize,
    ) -> Result<Html<String>, minijinja::Error> {
        self.env.get_template(name)?.render(context).map(Html)
    }
}

/// Board as shown on pages.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    id: String,
    name: String,
    description: String,
    creator: String,
    members: Vec<String>,
}

impl From<&Board> for BoardView {
    fn from(board: &Board) -> Self {
        Self {
            id: board.id().to_string(),
            name: board.name().to_owned(),
            description: board.description().to_owned(),
            creator: board.creator().to_string(),
            members: board.members().iter().map(ToString::to_string).collect(),
        }
    }
}

/// Dashboard entry.
#[derive(Debug, Clone, Serialize)]
pub struct BoardCard {
    id: String,
    name: String,
    description: String,
    is_creator: bool,
}

impl From<&BoardListing> for BoardCard {
    fn from(listing: &BoardListing) -> Self {
        Self {
            id: listing.board.id().to_string(),
            name: listing.board.name().to_owned(),
            description: listing.board.description().to_owned(),
            is_creator: listing.is_creator(),
        }
    }
}

/// Task as shown on pages.
#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    id: String,
    title: String,
    description: String,
    due_date: String,
    created_by: String,
    completed: bool,
    completed_at: Option<String>,
    assignees: Vec<String>,
    unassigned: bool,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        let content = task.content();
        Self {
            id: task.id().to_string(),
            title: content.title().to_owned(),
            description: content.description().to_owned(),
            due_date: content.due_date().to_owned(),
            created_by: task.created_by().to_string(),
            completed: task.is_completed(),
            completed_at: task
                .completed_at()
                .map(|at| at.format(COMPLETED_AT_FORMAT).to_string()),
            assignees: task.assignees().iter().map(ToString::to_string).collect(),
            unassigned: task.is_unassigned(),
        }
    }
}

/// Task tallies as shown on the board page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CountsView {
    active: usize,
    completed: usize,
    total: usize,
}

impl From<TaskCounts> for CountsView {
    fn from(counts: TaskCounts) -> Self {
        Self {
            active: counts.active,
            completed: counts.completed,
            total: counts.total,
        }
    }
}
