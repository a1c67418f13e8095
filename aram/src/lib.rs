// aram-rs/aram/src/lib.rs

//! aram
//!
//! Command/response engine of a secure-element access rule application
//! master: selection templates and access-rule payloads are delivered over
//! a channel that carries at most one short response per exchange.
#![warn(missing_docs)]

/// The applet entry point
pub mod applet;
pub mod catalog;
pub mod client;
/// Applet configuration
pub mod config;
pub mod constants;
/// Crate error type
pub mod error;
/// Convenience re-exports
pub mod prelude;
/// APDU framing and status words
pub mod protocol;
pub mod session;
pub mod test_support;
/// Requester-side channels
pub mod transport;
/// Payloads and selectors
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
