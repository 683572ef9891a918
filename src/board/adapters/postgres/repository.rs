//! `PostgreSQL` repository implementation for boards.
//!
//! Member changes run as single `UPDATE` statements over the `members`
//! array, so concurrent adds and removes never overwrite each other.

use super::{
    models::{BoardRow, NewBoardRow},
    schema::boards,
};
use crate::board::{
    domain::{Board, BoardDetails, BoardId, PersistedBoardData},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};
use crate::identity::domain::UserEmail;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::{Text, Uuid as SqlUuid};

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

const ADD_MEMBER_SQL: &str = concat!(
    "UPDATE boards SET members = CASE ",
    "WHEN $2 = ANY(members) OR creator = $2 THEN members ",
    "ELSE array_append(members, $2) END ",
    "WHERE id = $1",
);

const REMOVE_MEMBER_SQL: &str =
    "UPDATE boards SET members = array_remove(members, $2) WHERE id = $1";

const FIND_BY_MEMBER_SQL: &str = concat!(
    "SELECT id, name, description, creator, members, created_at FROM boards ",
    "WHERE $1 = ANY(members)",
);

/// `PostgreSQL`-backed board repository.
#[derive(Debug, Clone)]
pub struct PostgresBoardRepository {
    pool: BoardPgPool,
}

impl PostgresBoardRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> BoardRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> BoardRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(BoardRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(BoardRepositoryError::persistence)?
    }

    async fn update_members(
        &self,
        sql: &'static str,
        id: BoardId,
        member: &UserEmail,
    ) -> BoardRepositoryResult<()> {
        let member_value = member.as_str().to_owned();
        self.run_blocking(move |connection| {
            let updated = diesel::sql_query(sql)
                .bind::<SqlUuid, _>(id.into_inner())
                .bind::<Text, _>(member_value)
                .execute(connection)
                .map_err(BoardRepositoryError::persistence)?;
            require_row(updated, id)
        })
        .await
    }
}

#[async_trait]
impl BoardRepository for PostgresBoardRepository {
    async fn store(&self, board: &Board) -> BoardRepositoryResult<()> {
        let board_id = board.id();
        let new_row = to_new_row(board);
        self.run_blocking(move |connection| {
            diesel::insert_into(boards::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        BoardRepositoryError::DuplicateBoard(board_id)
                    }
                    _ => BoardRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>> {
        self.run_blocking(move |connection| {
            let row = boards::table
                .filter(boards::id.eq(id.into_inner()))
                .select(BoardRow::as_select())
                .first::<BoardRow>(connection)
                .optional()
                .map_err(BoardRepositoryError::persistence)?;
            row.map(row_to_board).transpose()
        })
        .await
    }

    async fn find_by_creator(&self, creator: &UserEmail) -> BoardRepositoryResult<Vec<Board>> {
        let creator_value = creator.as_str().to_owned();
        self.run_blocking(move |connection| {
            boards::table
                .filter(boards::creator.eq(creator_value))
                .select(BoardRow::as_select())
                .load::<BoardRow>(connection)
                .map_err(BoardRepositoryError::persistence)?
                .into_iter()
                .map(row_to_board)
                .collect()
        })
        .await
    }

    async fn find_by_member(&self, member: &UserEmail) -> BoardRepositoryResult<Vec<Board>> {
        let member_value = member.as_str().to_owned();
        self.run_blocking(move |connection| {
            diesel::sql_query(FIND_BY_MEMBER_SQL)
                .bind::<Text, _>(member_value)
                .load::<BoardRow>(connection)
                .map_err(BoardRepositoryError::persistence)?
                .into_iter()
                .map(row_to_board)
                .collect()
        })
        .await
    }

    async fn update_details(
        &self,
        id: BoardId,
        details: &BoardDetails,
    ) -> BoardRepositoryResult<()> {
        let name = details.name().to_owned();
        let description = details.description().to_owned();
        self.run_blocking(move |connection| {
            let updated = diesel::update(boards::table.filter(boards::id.eq(id.into_inner())))
                .set((boards::name.eq(name), boards::description.eq(description)))
                .execute(connection)
                .map_err(BoardRepositoryError::persistence)?;
            require_row(updated, id)
        })
        .await
    }

    async fn add_member(&self, id: BoardId, member: &UserEmail) -> BoardRepositoryResult<()> {
        self.update_members(ADD_MEMBER_SQL, id, member).await
    }

    async fn remove_member(&self, id: BoardId, member: &UserEmail) -> BoardRepositoryResult<()> {
        self.update_members(REMOVE_MEMBER_SQL, id, member).await
    }

    async fn delete(&self, id: BoardId) -> BoardRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(boards::table.filter(boards::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(BoardRepositoryError::persistence)?;
            require_row(deleted, id)
        })
        .await
    }
}

const fn require_row(affected: usize, id: BoardId) -> BoardRepositoryResult<()> {
    if affected == 0 {
        Err(BoardRepositoryError::NotFound(id))
    } else {
        Ok(())
    }
}

fn to_new_row(board: &Board) -> NewBoardRow {
    NewBoardRow {
        id: board.id().into_inner(),
        name: board.name().to_owned(),
        description: board.description().to_owned(),
        creator: board.creator().as_str().to_owned(),
        members: board.members().iter().map(ToString::to_string).collect(),
        created_at: board.created_at(),
    }
}

fn row_to_board(row: BoardRow) -> BoardRepositoryResult<Board> {
    let BoardRow {
        id,
        name,
        description,
        creator: persisted_creator,
        members: persisted_members,
        created_at,
    } = row;

    let creator = UserEmail::new(persisted_creator).map_err(BoardRepositoryError::persistence)?;
    let members = persisted_members
        .into_iter()
        .map(UserEmail::new)
        .collect::<Result<Vec<_>, _>>()
        .map_err(BoardRepositoryError::persistence)?;

    Ok(Board::from_persisted(PersistedBoardData {
        id: BoardId::from_uuid(id),
        details: BoardDetails::new(name, description),
        creator,
        members,
        created_at,
    }))
}
