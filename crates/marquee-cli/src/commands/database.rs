use colored::Colorize;
use marquee_core::config::AppConfig;
use marquee_infrastructure::{DatabaseStatus, connect_or_degrade};

/// Reports the database status. Never fails: an unavailable database is
/// printed, not propagated.
pub async fn check(config: &AppConfig) {
    match connect_or_degrade(&config.database).await {
        DatabaseStatus::Connected(db) => {
            println!("{} connected to '{}'", "ok".green().bold(), db.name());
        }
        DatabaseStatus::Unavailable(reason) => {
            println!("{} {}", "unavailable".red().bold(), reason);
        }
    }
}
