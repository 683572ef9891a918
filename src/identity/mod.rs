//! Session resolution for inbound requests.
//!
//! A request carries an identity provider token in the `token` cookie. The
//! resolver verifies it through the [`ports::TokenVerifier`] port and yields
//! either an authenticated [`domain::Identity`] or an anonymous session.
//! Verification failures never surface as errors; they downgrade the
//! request to anonymous.
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
