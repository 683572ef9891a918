//! Shared world state for board collaboration BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::BoardId,
    services::{BoardDirectoryService, MembershipService},
};
use taskboard::error::FailureKind;
use taskboard::identity::domain::UserEmail;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository, domain::TaskId, services::TaskService,
};

/// Scenario world for board collaboration behaviour tests.
pub struct BoardWorld {
    /// Board directory under test.
    pub directory:
        BoardDirectoryService<InMemoryBoardRepository, InMemoryTaskRepository, DefaultClock>,
    /// Membership service under test.
    pub membership: MembershipService<InMemoryBoardRepository, InMemoryTaskRepository>,
    /// Task service under test.
    pub tasks: TaskService<InMemoryBoardRepository, InMemoryTaskRepository, DefaultClock>,
    /// Board and creator set up by the scenario.
    pub board: Option<(BoardId, UserEmail)>,
    /// Task most recently added.
    pub task_id: Option<TaskId>,
    /// Outcome of the last `When` action.
    pub last_outcome: Option<Result<(), FailureKind>>,
}

impl BoardWorld {
    /// Creates a world over empty in-memory repositories.
    #[must_use]
    pub fn new() -> Self {
        let boards = Arc::new(InMemoryBoardRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let clock = Arc::new(DefaultClock);
        Self {
            directory: BoardDirectoryService::new(
                Arc::clone(&boards),
                Arc::clone(&tasks),
                Arc::clone(&clock),
            ),
            membership: MembershipService::new(Arc::clone(&boards), Arc::clone(&tasks)),
            tasks: TaskService::new(boards, tasks, clock),
            board: None,
            task_id: None,
            last_outcome: None,
        }
    }

    /// Returns the scenario board and its creator.
    ///
    /// # Errors
    ///
    /// Returns an error when no board has been set up.
    pub fn board(&self) -> Result<(BoardId, UserEmail), eyre::Report> {
        self.board
            .clone()
            .ok_or_else(|| eyre::eyre!("no board in scenario world"))
    }

    /// Returns the most recently added task.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been added.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        self.task_id
            .ok_or_else(|| eyre::eyre!("no task in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a scenario email.
///
/// # Errors
///
/// Returns an error when the address is malformed.
pub fn email(value: &str) -> Result<UserEmail, eyre::Report> {
    UserEmail::new(value).map_err(|err| eyre::eyre!("bad scenario email '{value}': {err}"))
}
