//! Failure classification shared by every service.
//!
//! Service errors stay specific to their module; [`FailureKind`] is the
//! coarse category the transport layer maps to a response.

use std::fmt;

/// Coarse failure category of a service error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The board or task does not exist.
    NotFound,
    /// The requester lacks the role the action requires.
    Forbidden,
    /// The action violates a precondition on current state.
    InvalidState,
    /// The action would duplicate existing state.
    Conflict,
    /// An argument was rejected.
    InvalidArgument,
    /// Infrastructure failure.
    Internal,
}

impl FailureKind {
    /// Returns a stable lowercase label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Forbidden => "forbidden",
            Self::InvalidState => "invalid_state",
            Self::Conflict => "conflict",
            Self::InvalidArgument => "invalid_argument",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
