//! Diesel schema for task persistence.

diesel::table! {
    /// Tasks keyed by their board and task identifiers.
    tasks (board_id, id) {
        /// Owning board.
        board_id -> Uuid,
        /// Task identifier, unique within the board.
        id -> Uuid,
        /// Task title.
        title -> Text,
        /// Task description.
        description -> Text,
        /// Free-form due date as submitted.
        due_date -> Text,
        /// Author email.
        #[max_length = 320]
        created_by -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Completion timestamp, set only for completed tasks.
        completed_at -> Nullable<Timestamptz>,
        /// Assignee emails.
        assignees -> Array<Text>,
    }
}
