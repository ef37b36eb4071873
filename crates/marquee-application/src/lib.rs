pub mod navbar;
pub mod store;

pub use navbar::{MountHandle, NavbarController, NavbarRender};
pub use store::{AccountStore, StoreSnapshot};
