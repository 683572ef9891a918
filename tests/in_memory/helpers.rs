//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::BoardId,
    services::{BoardDirectoryService, CreateBoardRequest, MembershipService},
};
use taskboard::identity::domain::UserEmail;
use taskboard::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};

/// Directory service over in-memory repositories.
pub type Directory =
    BoardDirectoryService<InMemoryBoardRepository, InMemoryTaskRepository, DefaultClock>;
/// Membership service over in-memory repositories.
pub type Membership = MembershipService<InMemoryBoardRepository, InMemoryTaskRepository>;
/// Task service over in-memory repositories.
pub type Tasks = TaskService<InMemoryBoardRepository, InMemoryTaskRepository, DefaultClock>;

/// The three services wired to one shared store.
pub struct Workspace {
    /// Board directory.
    pub directory: Directory,
    /// Board membership.
    pub membership: Membership,
    /// Task manager.
    pub tasks: Tasks,
}

impl Workspace {
    /// Creates a board named `name` owned by `creator`.
    pub async fn board(&self, creator: &UserEmail, name: &str) -> BoardId {
        self.directory
            .create_board(creator, CreateBoardRequest::new(name, ""))
            .await
            .expect("create board")
            .id()
    }
}

/// Provides services sharing fresh in-memory repositories.
#[fixture]
pub fn workspace() -> Workspace {
    let boards = Arc::new(InMemoryBoardRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let clock = Arc::new(DefaultClock);
    Workspace {
        directory: BoardDirectoryService::new(
            Arc::clone(&boards),
            Arc::clone(&tasks),
            Arc::clone(&clock),
        ),
        membership: MembershipService::new(Arc::clone(&boards), Arc::clone(&tasks)),
        tasks: TaskService::new(boards, tasks, clock),
    }
}

/// Parses a known-good email.
pub fn email(value: &str) -> UserEmail {
    UserEmail::new(value).expect("valid email")
}
