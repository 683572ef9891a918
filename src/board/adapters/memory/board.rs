//! In-memory repository for boards.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    domain::{Board, BoardDetails, BoardId},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};
use crate::identity::domain::UserEmail;

/// Thread-safe in-memory board repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    boards: Arc<RwLock<HashMap<BoardId, Board>>>,
}

impl InMemoryBoardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> BoardRepositoryResult<RwLockReadGuard<'_, HashMap<BoardId, Board>>> {
        self.boards.read().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> BoardRepositoryResult<RwLockWriteGuard<'_, HashMap<BoardId, Board>>> {
        self.boards.write().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    /// Applies `mutate` to the stored board under the write lock.
    fn modify(
        &self,
        id: BoardId,
        mutate: impl FnOnce(&mut Board),
    ) -> BoardRepositoryResult<()> {
        let mut boards = self.write()?;
        let board = boards
            .get_mut(&id)
            .ok_or(BoardRepositoryError::NotFound(id))?;
        mutate(board);
        Ok(())
    }

    fn collect_where(
        &self,
        predicate: impl Fn(&Board) -> bool,
    ) -> BoardRepositoryResult<Vec<Board>> {
        let boards = self.read()?;
        Ok(boards
            .values()
            .filter(|board| predicate(board))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn store(&self, board: &Board) -> BoardRepositoryResult<()> {
        let mut boards = self.write()?;
        if boards.contains_key(&board.id()) {
            return Err(BoardRepositoryError::DuplicateBoard(board.id()));
        }
        boards.insert(board.id(), board.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: BoardId) -> BoardRepositoryResult<Option<Board>> {
        let boards = self.read()?;
        Ok(boards.get(&id).cloned())
    }

    async fn find_by_creator(&self, creator: &UserEmail) -> BoardRepositoryResult<Vec<Board>> {
        self.collect_where(|board| board.creator() == creator)
    }

    async fn find_by_member(&self, member: &UserEmail) -> BoardRepositoryResult<Vec<Board>> {
        self.collect_where(|board| board.members().contains(member))
    }

    async fn update_details(
        &self,
        id: BoardId,
        details: &BoardDetails,
    ) -> BoardRepositoryResult<()> {
        self.modify(id, |board| board.set_details(details.clone()))
    }

    async fn add_member(&self, id: BoardId, member: &UserEmail) -> BoardRepositoryResult<()> {
        self.modify(id, |board| {
            board.union_member(member.clone());
        })
    }

    async fn remove_member(&self, id: BoardId, member: &UserEmail) -> BoardRepositoryResult<()> {
        self.modify(id, |board| {
            board.remove_member(member);
        })
    }

    async fn delete(&self, id: BoardId) -> BoardRepositoryResult<()> {
        let mut boards = self.write()?;
        boards
            .remove(&id)
            .map(|_| ())
            .ok_or(BoardRepositoryError::NotFound(id))
    }
}
