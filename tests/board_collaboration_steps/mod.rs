//! Step definitions for board collaboration scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
