/// Runtime configuration
///
/// The only setting is where the database file lives. Values come from the
/// environment (optionally a `.env` file) with a fixed fallback filename.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the database file
pub const DB_PATH_VAR: &str = "QUESTIONS_DB";

/// Filename used when nothing else is configured
pub const DEFAULT_DB_FILE: &str = "questions.db";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_path: PathBuf,
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// Reads `.env` first if present. A missing file is not an error.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = lookup(DB_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));

        Self { database_path }
    }

    /// Replace the database path, e.g. from a command-line flag
    pub fn with_database_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.database_path = path;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DB_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.database_path, PathBuf::from("questions.db"));
    }

    #[test]
    fn test_env_path() {
        let config = Config::from_lookup(|key| {
            (key == DB_PATH_VAR).then(|| "/tmp/qa.db".to_string())
        });
        assert_eq!(config.database_path, PathBuf::from("/tmp/qa.db"));
    }

    #[test]
    fn test_blank_env_falls_back() {
        let config = Config::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DB_FILE));
    }

    #[test]
    fn test_override() {
        let config = Config::default().with_database_path(Some(PathBuf::from("other.db")));
        assert_eq!(config.database_path, PathBuf::from("other.db"));

        let config = config.with_database_path(None);
        assert_eq!(config.database_path, PathBuf::from("other.db"));
    }
}
