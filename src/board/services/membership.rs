//! Membership management, including the assignee cleanup that follows a
//! member's removal.

use super::{AuthorizedBoard, BoardServiceResult, authorize_board};
use crate::board::{
    domain::{BoardAction, BoardDomainError, BoardId},
    ports::BoardRepository,
};
use crate::identity::domain::UserEmail;
use crate::task::{domain::TaskId, ports::TaskRepository};
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of removing a member.
///
/// The membership removal itself is committed whenever this value is
/// returned. The assignee cleanup is best-effort: tasks whose update failed
/// are listed in `failed`, and `scan_failed` is set when the board's tasks
/// could not be listed at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRemoval {
    /// The removed member.
    pub member: UserEmail,
    /// Tasks the member was unassigned from.
    pub unassigned: Vec<TaskId>,
    /// Tasks whose assignee cleanup failed.
    pub failed: Vec<TaskId>,
    /// Whether listing the board's tasks failed.
    pub scan_failed: bool,
}

impl MemberRemoval {
    const fn started(member: UserEmail) -> Self {
        Self {
            member,
            unassigned: Vec::new(),
            failed: Vec::new(),
            scan_failed: false,
        }
    }

    /// Returns whether the assignee cleanup reached every task.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failed.is_empty() && !self.scan_failed
    }
}

/// Membership orchestration service.
pub struct MembershipService<B, T>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
{
    boards: Arc<B>,
    tasks: Arc<T>,
}

impl<B, T> Clone for MembershipService<B, T>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            boards: Arc::clone(&self.boards),
            tasks: Arc::clone(&self.tasks),
        }
    }
}

impl<B, T> MembershipService<B, T>
where
    B: BoardRepository + ?Sized,
    T: TaskRepository + ?Sized,
{
    /// Creates a new membership service.
    #[must_use]
    pub const fn new(boards: Arc<B>, tasks: Arc<T>) -> Self {
        Self { boards, tasks }
    }

    /// Adds `member_email` to the board's members.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardServiceError::NotFound`] for unknown boards,
    /// [`super::BoardServiceError::Forbidden`] unless the requester is the
    /// creator, [`super::BoardServiceError::InvalidEmail`] for malformed
    /// addresses, and [`super::BoardServiceError::Domain`] when the address
    /// is the creator or already a member.
    pub async fn add_member(
        &self,
        board_id: BoardId,
        requester: &UserEmail,
        member_email: &str,
    ) -> BoardServiceResult<UserEmail> {
        let AuthorizedBoard { board, .. } =
            authorize_board(&*self.boards, board_id, requester, BoardAction::ManageMembers)
                .await?;
        let member = UserEmail::new(member_email)?;
        board.ensure_can_add_member(&member)?;
        self.boards.add_member(board_id, &member).await?;
        info!(%board_id, %member, "member added");
        Ok(member)
    }

    /// Removes `member_email` from the board, then unassigns it from every
    /// task of the board.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardServiceError::NotFound`] for unknown boards,
    /// [`super::BoardServiceError::Forbidden`] unless the requester is the
    /// creator, and [`super::BoardServiceError::Domain`] when the address
    /// is not a member, including addresses that are not emails. Cleanup failures are reported in the returned
    /// [`MemberRemoval`], never as an error.
    pub async fn remove_member(
        &self,
        board_id: BoardId,
        requester: &UserEmail,
        member_email: &str,
    ) -> BoardServiceResult<MemberRemoval> {
        let AuthorizedBoard { board, .. } =
            authorize_board(&*self.boards, board_id, requester, BoardAction::ManageMembers)
                .await?;
        let member = UserEmail::new(member_email)
            .map_err(|_| BoardDomainError::UnknownMember(member_email.to_owned()))?;
        board.ensure_removable_member(&member)?;
        self.boards.remove_member(board_id, &member).await?;
        info!(%board_id, %member, "member removed");

        Ok(self.unassign_everywhere(board_id, member).await)
    }

    async fn unassign_everywhere(&self, board_id: BoardId, member: UserEmail) -> MemberRemoval {
        let mut removal = MemberRemoval::started(member);
        let tasks = match self.tasks.list_for_board(board_id).await {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(
                    %board_id,
                    member = %removal.member,
                    error = %err,
                    "could not list tasks for assignee cleanup"
                );
                removal.scan_failed = true;
                return removal;
            }
        };

        for task in tasks.iter().filter(|task| task.is_assigned(&removal.member)) {
            match self
                .tasks
                .remove_assignee(board_id, task.id(), &removal.member)
                .await
            {
                Ok(()) => removal.unassigned.push(task.id()),
                Err(err) => {
                    warn!(
                        %board_id,
                        task_id = %task.id(),
                        member = %removal.member,
                        error = %err,
                        "assignee cleanup failed"
                    );
                    removal.failed.push(task.id());
                }
            }
        }
        removal
    }
}
