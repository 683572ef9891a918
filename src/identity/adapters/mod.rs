//! Adapter implementations for the token verifier port.

pub mod jwks;
pub mod memory;

pub use jwks::{JwksSetupError, JwksTokenVerifier};
pub use memory::StaticTokenVerifier;
