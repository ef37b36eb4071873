//! Session domain module.
//!
//! The session itself is issued by an external authentication provider;
//! Marquee only reads it and asks the provider to end it.

mod model;
mod provider;

pub use model::Session;
pub use provider::SessionProvider;
