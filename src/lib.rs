//! Taskboard: collaborative task boards with a creator/member permission
//! model.
//!
//! Users authenticate through an external identity provider, create boards,
//! invite members, and manage tasks with assignment and completion tracking.
//! Every mutation is authorized against the board it touches before the
//! store is written.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, identity
//!   provider, etc.)
//!
//! # Modules
//!
//! - [`identity`]: Session resolution from identity provider tokens
//! - [`board`]: Board directory, membership, and the access policy
//! - [`task`]: Task management within a board
//! - [`web`]: HTTP transport
//! - [`store`]: Repository construction for the configured backend

pub mod board;
pub mod config;
pub mod error;
pub mod identity;
mod ids;
pub mod store;
pub mod task;
pub mod telemetry;
pub mod web;
