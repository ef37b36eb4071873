//! Account (profile) domain module.
//!
//! # Module Structure
//!
//! - `model`: `Account`, the wire envelope and `FetchOutcome`
//! - `source`: `AccountSource` trait implemented by the infrastructure layer

mod model;
mod source;

// Re-export public API
pub use model::{Account, AccountsEnvelope, FetchOutcome};
pub use source::AccountSource;
