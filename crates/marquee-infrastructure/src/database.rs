//! Document database connection helper.
//!
//! Connects once at startup using the configured connection string and the
//! fixed logical database name. A failed connection is reported to the
//! caller as a value; the process keeps running without a database.

use marquee_core::config::DatabaseConfig;
use marquee_core::{MarqueeError, Result};
use mongodb::bson::doc;
use mongodb::{Client, Database};

/// Outcome of [`connect_or_degrade`].
#[derive(Debug, Clone)]
pub enum DatabaseStatus {
    Connected(Database),
    Unavailable(String),
}

impl DatabaseStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    pub fn database(&self) -> Option<&Database> {
        match self {
            Self::Connected(db) => Some(db),
            Self::Unavailable(_) => None,
        }
    }
}

/// Opens a client, selects the configured database and pings it.
pub async fn connect(config: &DatabaseConfig) -> Result<Database> {
    let uri = config
        .uri
        .as_deref()
        .filter(|uri| !uri.trim().is_empty())
        .ok_or_else(|| MarqueeError::config("MONGODB_URI is not set"))?;

    let client = Client::with_uri_str(uri)
        .await
        .map_err(|e| MarqueeError::database(format!("Invalid connection string: {}", e)))?;

    let database = client.database(&config.name);
    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| MarqueeError::database(format!("Ping failed: {}", e)))?;

    Ok(database)
}

/// Like [`connect`], but logs the result and never fails.
pub async fn connect_or_degrade(config: &DatabaseConfig) -> DatabaseStatus {
    match connect(config).await {
        Ok(database) => {
            tracing::info!(database = %config.name, "Database connected successfully");
            DatabaseStatus::Connected(database)
        }
        Err(e) => {
            tracing::error!(database = %config.name, error = %e, "Database connection failed");
            DatabaseStatus::Unavailable(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_without_uri_is_config_error() {
        let config = DatabaseConfig::default();
        let err = connect(&config).await.unwrap_err();
        assert!(err.is_config());
    }

    #[tokio::test]
    async fn test_malformed_uri_degrades() {
        let config = DatabaseConfig {
            uri: Some("not-a-connection-string".to_string()),
            ..DatabaseConfig::default()
        };

        let status = connect_or_degrade(&config).await;
        assert!(!status.is_connected());
        assert!(status.database().is_none());
        match status {
            DatabaseStatus::Unavailable(reason) => assert!(reason.contains("Database error")),
            DatabaseStatus::Connected(_) => panic!("expected Unavailable"),
        }
    }
}
