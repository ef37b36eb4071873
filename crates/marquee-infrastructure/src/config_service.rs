//! Configuration service implementation.
//!
//! Loads `AppConfig` from `config.toml` and layers environment variables on
//! top of it. The database connection string is consumed from
//! `MONGODB_URI` the same way.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use marquee_core::config::AppConfig;
use marquee_core::{MarqueeError, Result};

use crate::paths::MarqueePaths;

/// Connection string for the document database.
pub const DATABASE_URI_ENV: &str = "MONGODB_URI";
/// Origin of the account API.
pub const API_URL_ENV: &str = "MARQUEE_API_URL";
/// `tracing` filter directive.
pub const LOG_ENV: &str = "MARQUEE_LOG";

/// Configuration service that loads and caches the application config.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService for the default config location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(MarqueePaths::config_file()?))
    }

    /// Creates a ConfigService reading from an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// A missing or unreadable file yields the defaults (with environment
    /// overrides still applied).
    pub fn get_config(&self) -> AppConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let mut loaded = self.load_file().unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Falling back to default config");
            AppConfig::default()
        });
        apply_env_overrides(&mut loaded, |key| std::env::var(key).ok());

        {
            let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *write_lock = None;
    }

    /// Reads the config file without environment overrides.
    pub fn load_file(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "Config file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Writes `config` to the config file, creating parent directories.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)?;
        std::fs::write(&self.path, content).map_err(|e| {
            MarqueeError::config(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            ))
        })?;

        self.invalidate_cache();
        Ok(())
    }
}

/// Applies environment overrides on top of file values. Blank values are ignored.
pub fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(uri) = get(DATABASE_URI_ENV) {
        config.database.uri = Some(uri);
    }
    if let Some(url) = get(API_URL_ENV) {
        config.api.base_url = url;
    }
    if let Some(level) = get(LOG_ENV) {
        config.logging.level = level;
    }
}
