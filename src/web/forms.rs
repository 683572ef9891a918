//! Form payloads submitted by the pages.

use serde::Deserialize;

/// Board name and description, for creation and settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardForm {
    /// Board name.
    pub board_name: String,
    /// Board description.
    #[serde(default)]
    pub description: String,
}

/// Member to add or remove.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberForm {
    /// Member email.
    pub member_email: String,
}

/// New task fields; `assignees` may repeat.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTaskForm {
    /// Task title.
    pub title: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
    /// Due date as entered.
    #[serde(default)]
    pub due_date: String,
    /// Initial assignees.
    #[serde(default)]
    pub assignees: Vec<String>,
}

/// Edited task fields.
#[derive(Debug, Clone, Deserialize)]
pub struct EditTaskForm {
    /// Task title.
    pub title: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
    /// Due date as entered.
    #[serde(default)]
    pub due_date: String,
    /// `complete` or anything else for open.
    #[serde(default)]
    pub status: String,
}

/// User to assign or unassign.
#[derive(Debug, Clone, Deserialize)]
pub struct AssigneeForm {
    /// Assignee email.
    pub assignee: String,
}
