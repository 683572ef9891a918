//! Port contracts for identity token verification.

pub mod verifier;

pub use verifier::{TokenRejection, TokenVerifier};
