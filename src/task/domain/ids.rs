//! Identifier types for the task domain.

use crate::ids::uuid_identifier;

uuid_identifier! {
    /// Identifier of a task, unique within its board.
    TaskId, "task"
}
