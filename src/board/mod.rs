//! Boards, their membership, and the access policy guarding them.
//!
//! A board is owned by its creator and shared with a set of members. The
//! creator alone manages settings, membership, deletion, and task
//! assignment; members and the creator share task editing. Every service
//! operation resolves the board first, then checks the requester against
//! [`domain::authorize`], then touches the store.
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
