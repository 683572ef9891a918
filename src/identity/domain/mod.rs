//! Domain model for authenticated identities.

mod claims;
mod email;
mod error;
mod session;

pub use claims::{Identity, VerifiedClaims};
pub use email::UserEmail;
pub use error::IdentityDomainError;
pub use session::Session;
