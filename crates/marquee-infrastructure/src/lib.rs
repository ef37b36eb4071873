pub mod config_service;
pub mod database;
pub mod http_account_source;
pub mod navigator;
pub mod paths;
pub mod session_provider;

pub use crate::config_service::ConfigService;
pub use crate::database::{DatabaseStatus, connect, connect_or_degrade};
pub use crate::http_account_source::HttpAccountSource;
pub use crate::navigator::HistoryNavigator;
pub use crate::session_provider::InMemorySessionProvider;
