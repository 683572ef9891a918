//! Domain model for boards and board membership.

mod access;
mod board;
mod error;
mod ids;

pub use access::{AccessDenied, BoardAction, BoardRole, RequiredRole, authorize};
pub use board::{Board, BoardDetails, PersistedBoardData};
pub use error::BoardDomainError;
pub use ids::BoardId;
