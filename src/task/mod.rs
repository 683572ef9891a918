//! Task management within boards.
//!
//! Tasks belong to exactly one board and are addressed by the pair of board
//! and task identifiers. The creator and members of a board may create,
//! edit, complete, and delete its tasks; only the creator assigns users to
//! them, and only users already on the board can be assigned.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
