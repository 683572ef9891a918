//! Diesel row models for board persistence.

use super::schema::boards;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for boards.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = boards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BoardRow {
    /// Board identifier.
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub id: uuid::Uuid,
    /// Board name.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub name: String,
    /// Board description.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub description: String,
    /// Owner email.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub creator: String,
    /// Member emails.
    #[diesel(sql_type = diesel::sql_types::Array<diesel::sql_types::Text>)]
    pub members: Vec<String>,
    /// Creation timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub created_at: DateTime<Utc>,
}

/// Insert model for boards.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = boards)]
pub struct NewBoardRow {
    /// Board identifier.
    pub id: uuid::Uuid,
    /// Board name.
    pub name: String,
    /// Board description.
    pub description: String,
    /// Owner email.
    pub creator: String,
    /// Member emails.
    pub members: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
