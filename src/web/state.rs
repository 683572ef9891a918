//! Shared handler state.

use super::pages::Pages;
use crate::board::{
    ports::BoardRepository,
    services::{BoardDirectoryService, MembershipService},
};
use crate::identity::{ports::TokenVerifier, services::SessionResolver};
use crate::store::Repositories;
use crate::task::{ports::TaskRepository, services::TaskService};
use mockable::DefaultClock;
use std::sync::Arc;

/// Board directory service over the configured store.
pub type Directory = BoardDirectoryService<dyn BoardRepository, dyn TaskRepository, DefaultClock>;
/// Membership service over the configured store.
pub type Membership = MembershipService<dyn BoardRepository, dyn TaskRepository>;
/// Task service over the configured store.
pub type Tasks = TaskService<dyn BoardRepository, dyn TaskRepository, DefaultClock>;
/// Session resolver over the configured verifier.
pub type Sessions = SessionResolver<dyn TokenVerifier>;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub(crate) sessions: Sessions,
    pub(crate) directory: Directory,
    pub(crate) membership: Membership,
    pub(crate) tasks: Tasks,
    pub(crate) pages: Arc<Pages>,
}

impl AppState {
    /// Wires the services over one set of repositories and a verifier.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when a page template fails to compile.
    pub fn new(
        repositories: &Repositories,
        verifier: Arc<dyn TokenVerifier>,
    ) -> Result<Self, minijinja::Error> {
        let clock = Arc::new(DefaultClock);
        let boards = Arc::clone(&repositories.boards);
        let tasks = Arc::clone(&repositories.tasks);
        Ok(Self {
            sessions: SessionResolver::new(verifier),
            directory: BoardDirectoryService::new(
                Arc::clone(&boards),
                Arc::clone(&tasks),
                Arc::clone(&clock),
            ),
            membership: MembershipService::new(Arc::clone(&boards), Arc::clone(&tasks)),
            tasks: TaskService::new(boards, tasks, clock),
            pages: Arc::new(Pages::new()?),
        })
    }
}
