//! Application services for session resolution.

mod resolver;

pub use resolver::{SESSION_COOKIE, SessionResolver};
