//! Diesel schema for board persistence.

diesel::table! {
    /// Boards with their member sets.
    boards (id) {
        /// Board identifier.
        id -> Uuid,
        /// Board name.
        name -> Text,
        /// Board description.
        description -> Text,
        /// Owner email.
        #[max_length = 320]
        creator -> Varchar,
        /// Member emails, never including the creator.
        members -> Array<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
