//! Completion status submitted with task edits.

use serde::Serialize;

/// Completion status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// The task is done.
    Complete,
    /// The task is still open.
    Incomplete,
}

impl TaskStatus {
    /// Parses a submitted status. Only the exact literal `complete` marks a
    /// task complete; anything else is incomplete.
    #[must_use]
    pub fn from_submitted(value: &str) -> Self {
        if value == "complete" {
            Self::Complete
        } else {
            Self::Incomplete
        }
    }

    /// Returns the canonical form value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Incomplete => "incomplete",
        }
    }

    /// Returns `true` for [`Self::Complete`].
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}
