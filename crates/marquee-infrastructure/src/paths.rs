//! Path management for Marquee configuration files.
//!
//! ```text
//! ~/.config/marquee/         # Config directory (platform config dir)
//! └── config.toml            # Application configuration
//! ```
//!
//! `MARQUEE_CONFIG` replaces the whole file path when set.

use std::path::PathBuf;

use marquee_core::{MarqueeError, Result};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "MARQUEE_CONFIG";

const APP_DIR: &str = "marquee";
const CONFIG_FILE: &str = "config.toml";

pub struct MarqueePaths;

impl MarqueePaths {
    /// Returns the Marquee configuration directory (e.g. `~/.config/marquee/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| MarqueeError::config("Cannot find config directory"))
    }

    /// Returns the config file path, honoring `MARQUEE_CONFIG`.
    pub fn config_file() -> Result<PathBuf> {
        Self::config_file_with(|key| std::env::var(key).ok())
    }

    pub(crate) fn config_file_with(lookup: impl Fn(&str) -> Option<String>) -> Result<PathBuf> {
        match lookup(CONFIG_PATH_ENV).filter(|p| !p.trim().is_empty()) {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(Self::config_dir()?.join(CONFIG_FILE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override() {
        let path = MarqueePaths::config_file_with(|key| {
            (key == CONFIG_PATH_ENV).then(|| "/tmp/marquee.toml".to_string())
        })
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/marquee.toml"));
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let from_blank = MarqueePaths::config_file_with(|_| Some("  ".to_string()));
        let from_none = MarqueePaths::config_file_with(|_| None);
        // Both resolve the same way (or both fail on a home-less machine)
        assert_eq!(from_blank.ok(), from_none.ok());
    }
}
