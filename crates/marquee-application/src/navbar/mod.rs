//! Top navigation view.
//!
//! # Module Structure
//!
//! - `controller`: lifecycle (mount/unmount), account fetch and scroll
//!   listener tasks, user interactions
//! - `render`: plain-data render model consumed by a front end

mod controller;
mod render;

pub use controller::{MountHandle, NavbarController};
pub use render::{AccountPopupModel, HeaderModel, NavbarRender};
