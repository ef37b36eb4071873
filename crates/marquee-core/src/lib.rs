//! Domain layer for Marquee.
//!
//! Holds the models shared by every other crate (sessions, accounts, routes,
//! the navbar state machine), the error type, and the traits through which
//! the application talks to its external collaborators.

pub mod account;
pub mod config;
pub mod error;
pub mod navbar;
pub mod navigation;
pub mod session;

// Re-export common error type
pub use error::{MarqueeError, Result};
