//! Board directory: creation, listing, reading, settings, and deletion.

use super::{AuthorizedBoard, BoardServiceResult, authorize_board};
use crate::board::{
    domain::{Board, BoardAction, BoardDetails, BoardId, BoardRole},
    ports::BoardRepository,
};
use crate::identity::domain::UserEmail;
use crate::task::{domain::Task, ports::TaskRepository};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// Request payload for creating a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBoardRequest {
    name: String,
    description: String,
}

impl CreateBoardRequest {
    /// Creates a request with a name and description.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A board in a user's dashboard listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardListing {
    /// The listed board.
    pub board: Board,
    /// Role the listed user holds.
    pub role: BoardRole,
}

impl BoardListing {
    /// Returns whether the listed user created the board.
    #[must_use]
    pub const fn is_creator(&self) -> bool {
        self.role.is_creator()
    }
}

/// Task tallies of a board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    /// Open tasks.
    pub active: usize,
    /// Completed tasks.
    pub completed: usize,
    /// All tasks.
    pub total: usize,
}

impl TaskCounts {
    /// Tallies a task list.
    #[must_use]
    pub fn tally(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.is_completed()).count();
        Self {
            active: tasks.len() - completed,
            completed,
            total: tasks.len(),
        }
    }
}

/// A board with its tasks, as shown on the board page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardOverview {
    /// The board.
    pub board: Board,
    /// Role of the viewer.
    pub role: BoardRole,
    /// Tasks of the board.
    pub tasks: Vec<Task>,
    /// Task tallies.
    pub counts: TaskCounts,
}

/// Settings view of a board, available to its creator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSettings {
    /// The board.
    pub board: Board,
    /// Number of tasks on the board.
    pub task_count: usize,
    /// Number of members, excluding the creator.
    pub member_count: usize,
    /// Whether deletion preconditions currently hold.
    pub can_delete: bool,
}

/// Board directory orchestration service.
pub struct BoardDirectoryService<B, T, C>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    boards: Arc<B>,
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<B, T, C> Clone for BoardDirectoryService<B, T, C>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            boards: Arc::clone(&self.boards),
            tasks: Arc::clone(&self.tasks),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<B, T, C> BoardDirectoryService<B, T, C>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new board directory service.
    #[must_use]
    pub const fn new(boards: Arc<B>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            boards,
            tasks,
            clock,
        }
    }

    /// Lists the boards `user` created or belongs to.
    ///
    /// A board appears once; when the user is both creator and member of the
    /// same board it is listed with [`BoardRole::Creator`]. Order is
    /// unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardServiceError::Repository`] when a lookup fails.
    pub async fn list_boards_for(&self, user: &UserEmail) -> BoardServiceResult<Vec<BoardListing>> {
        let created = self.boards.find_by_creator(user).await?;
        let joined = self.boards.find_by_member(user).await?;

        let mut seen: HashSet<BoardId> = created.iter().map(Board::id).collect();
        let mut listings: Vec<BoardListing> = created
            .into_iter()
            .map(|board| BoardListing {
                board,
                role: BoardRole::Creator,
            })
            .collect();
        listings.extend(
            joined
                .into_iter()
                .filter(|board| seen.insert(board.id()))
                .map(|board| BoardListing {
                    board,
                    role: BoardRole::Member,
                }),
        );
        Ok(listings)
    }

    /// Creates a board owned by `creator`.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardServiceError::Repository`] when the repository
    /// rejects persistence.
    pub async fn create_board(
        &self,
        creator: &UserEmail,
        request: CreateBoardRequest,
    ) -> BoardServiceResult<Board> {
        let details = BoardDetails::new(request.name, request.description);
        let board = Board::new(creator.clone(), details, &*self.clock);
        self.boards.store(&board).await?;
        info!(board_id = %board.id(), creator = %creator, "board created");
        Ok(board)
    }

    /// Returns a board the requester participates in.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardServiceError::NotFound`] for unknown boards and
    /// [`super::BoardServiceError::Forbidden`] unless the requester is the
    /// creator or a member.
    pub async fn get_board(
        &self,
        board_id: BoardId,
        requester: &UserEmail,
    ) -> BoardServiceResult<AuthorizedBoard> {
        Ok(authorize_board(&*self.boards, board_id, requester, BoardAction::View).await?)
    }

    /// Returns a board with its tasks and task tallies.
    ///
    /// # Errors
    ///
    /// Fails like [`Self::get_board`], or with
    /// [`super::BoardServiceError::Tasks`] when listing tasks fails.
    pub async fn board_overview(
        &self,
        board_id: BoardId,
        requester: &UserEmail,
    ) -> BoardServiceResult<BoardOverview> {
        let AuthorizedBoard { board, role } = self.get_board(board_id, requester).await?;
        let tasks = self.tasks.list_for_board(board_id).await?;
        let counts = TaskCounts::tally(&tasks);
        Ok(BoardOverview {
            board,
            role,
            tasks,
            counts,
        })
    }

    /// Returns the settings view of a board.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardServiceError::NotFound`] for unknown boards and
    /// [`super::BoardServiceError::Forbidden`] unless the requester is the
    /// creator.
    pub async fn board_settings(
        &self,
        board_id: BoardId,
        requester: &UserEmail,
    ) -> BoardServiceResult<BoardSettings> {
        let AuthorizedBoard { board, .. } =
            authorize_board(&*self.boards, board_id, requester, BoardAction::ManageSettings)
                .await?;
        let task_count = self.tasks.count_for_board(board_id).await?;
        Ok(BoardSettings {
            member_count: board.members().len(),
            can_delete: board.can_delete(task_count),
            task_count,
            board,
        })
    }

    /// Overwrites the board's name and description.
    ///
    /// Members and tasks are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardServiceError::NotFound`] for unknown boards and
    /// [`super::BoardServiceError::Forbidden`] unless the requester is the
    /// creator.
    pub async fn update_board(
        &self,
        board_id: BoardId,
        requester: &UserEmail,
        details: BoardDetails,
    ) -> BoardServiceResult<Board> {
        let AuthorizedBoard { mut board, .. } =
            authorize_board(&*self.boards, board_id, requester, BoardAction::ManageSettings)
                .await?;
        self.boards.update_details(board_id, &details).await?;
        board.set_details(details);
        info!(%board_id, "board settings updated");
        Ok(board)
    }

    /// Deletes a board that has no members and no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardServiceError::NotFound`] for unknown boards,
    /// [`super::BoardServiceError::Forbidden`] unless the requester is the
    /// creator, and [`super::BoardServiceError::Domain`] when members or
    /// tasks remain.
    pub async fn delete_board(
        &self,
        board_id: BoardId,
        requester: &UserEmail,
    ) -> BoardServiceResult<()> {
        let AuthorizedBoard { board, .. } =
            authorize_board(&*self.boards, board_id, requester, BoardAction::Delete).await?;
        let task_count = self.tasks.count_for_board(board_id).await?;
        board.ensure_deletable(task_count)?;
        self.boards.delete(board_id).await?;
        info!(%board_id, "board deleted");
        Ok(())
    }
}
