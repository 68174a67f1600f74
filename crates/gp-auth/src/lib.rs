//! Ephemeral guest identity issuance.
//!
//! Visitors receive a disposable, anonymous identity so they can reach
//! gated functionality without registering. The signing key never lives
//! here: minting is delegated to an external trust authority behind the
//! [`TokenMinter`] capability, and the issued [`Token`] is opaque to this
//! crate end to end.
//!
//! ## Identity Types
//!
//! - [`Guest`] — Fresh anonymous identity, one per request
//! - [`Member`] — Registered identity, gate-equivalent to a guest
//! - [`User`] — Any established identity
//! - [`Session`] — Explicit client-side identity lifecycle
//!
//! ## Issuance
//!
//! - [`Issuer`] — Subject validation and the single authority call
//! - [`TokenMinter`] — Injected minting capability
//! - [`RemoteAuthority`] — HTTP client for the deployed authority
//! - [`Claims`] — Claim set bound into each token
//! - [`IssuanceError`] — The one failure taxonomy
//!
//! ## Gate
//!
//! - [`Access`] — Permit/deny decision over a session's state
mod authority;
mod claims;
mod dto;
mod error;
mod gate;
mod guest;
mod identity;
mod issuer;
mod member;
mod minter;
mod session;

pub use authority::*;
pub use claims::*;
pub use dto::*;
pub use error::*;
pub use gate::*;
pub use guest::*;
pub use identity::*;
pub use issuer::*;
pub use member::*;
pub use minter::*;
pub use session::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
