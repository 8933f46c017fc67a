//! Data directory configuration.
//!
//! The base data directory is resolved once at startup and handed to
//! [`YahooData`](crate::storage::YahooData) explicitly.

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::DATA_DIR_ENV_VAR;

/// Where saved records live when a call does not override the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub data_dir: PathBuf,
}

impl DataConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load configuration from the environment (and a `.env` file if present).
    ///
    /// `YAHOO_FFL_DATA_DIR` wins; otherwise the platform data directory is used.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        match env::var(DATA_DIR_ENV_VAR) {
            Ok(dir) if !dir.trim().is_empty() => Self::new(dir.trim()),
            _ => Self::default(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for DataConfig {
    /// Path: ~/.local/share/yahoo-ffl (platform equivalent)
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| {
            let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.push(".local");
            home.push("share");
            home
        });
        Self::new(base.join("yahoo-ffl"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_dir() {
        let config = DataConfig::default();
        assert!(config.data_dir().ends_with("yahoo-ffl"));
    }

    #[test]
    fn test_new_keeps_path() {
        let config = DataConfig::new("/tmp/fantasy");
        assert_eq!(config.data_dir(), Path::new("/tmp/fantasy"));
    }

    #[test]
    fn test_from_env_override_and_fallback() {
        env::set_var(DATA_DIR_ENV_VAR, "/tmp/yahoo-ffl-test");
        assert_eq!(
            DataConfig::from_env().data_dir(),
            Path::new("/tmp/yahoo-ffl-test")
        );

        env::set_var(DATA_DIR_ENV_VAR, "   ");
        assert_eq!(DataConfig::from_env(), DataConfig::default());

        env::remove_var(DATA_DIR_ENV_VAR);
    }
}
