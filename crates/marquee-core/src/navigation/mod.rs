//! Navigation targets of the top bar.
//!
//! Paths are built from typed routes; a route that would need a missing or
//! malformed identifier is an error, never a path with a placeholder in it.

mod menu;
mod navigator;
mod route;

pub use menu::{MenuItem, MenuItemId, menu_items};
pub use navigator::Navigator;
pub use route::{NavigationError, Route, validate_segment};
