//! Storage location and log level resolution.
//!
//! # Responsibility
//! - Decide where the habits, quotes and log files live.
//! - Decide which log level a run uses.
//!
//! # Invariants
//! - Resolved paths are absolute.
//! - Precedence is explicit argument, then environment, then default.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Overrides the data directory when set.
pub const HOME_ENV: &str = "HABITLINE_HOME";
/// Overrides the log level when set.
pub const LOG_LEVEL_ENV: &str = "HABITLINE_LOG";

const APP_DIR_NAME: &str = "habitline";
const HABITS_FILE_NAME: &str = "habits.json";
const QUOTES_FILE_NAME: &str = "quotes.json";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug)]
pub enum ConfigError {
    /// No override was given and the platform has no data directory.
    NoDataDir,
    CurrentDir(std::io::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDataDir => write!(
                f,
                "cannot determine a data directory; set {HOME_ENV} or pass --data-dir"
            ),
            Self::CurrentDir(err) => write!(f, "cannot read current directory: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoDataDir => None,
            Self::CurrentDir(err) => Some(err),
        }
    }
}

/// File locations for one tracker run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub habits_file: PathBuf,
    pub quotes_file: PathBuf,
    pub log_dir: PathBuf,
}

impl AppPaths {
    /// Resolves paths from an explicit directory, `HABITLINE_HOME`, or the
    /// platform data directory, in that order.
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        let env_dir = std::env::var_os(HOME_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        let data_dir = override_dir
            .or(env_dir)
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME)))
            .ok_or(ConfigError::NoDataDir)?;

        let data_dir = if data_dir.is_absolute() {
            data_dir
        } else {
            std::env::current_dir()
                .map_err(ConfigError::CurrentDir)?
                .join(data_dir)
        };

        Ok(Self::in_dir(data_dir))
    }

    /// Lays out the fixed file names under `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            habits_file: data_dir.join(HABITS_FILE_NAME),
            quotes_file: data_dir.join(QUOTES_FILE_NAME),
            log_dir: data_dir.join(LOG_DIR_NAME),
            data_dir,
        }
    }
}

/// Picks the log level from an explicit value, `HABITLINE_LOG`, or the
/// build-mode default.
pub fn resolve_log_level(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var(LOG_LEVEL_ENV).ok())
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| crate::logging::default_log_level().to_string())
}

#[cfg(test)]
mod tests {
    use super::{resolve_log_level, AppPaths};
    use std::path::PathBuf;

    #[test]
    fn in_dir_uses_fixed_file_names() {
        let paths = AppPaths::in_dir("/var/lib/habitline");
        assert_eq!(paths.habits_file, PathBuf::from("/var/lib/habitline/habits.json"));
        assert_eq!(paths.quotes_file, PathBuf::from("/var/lib/habitline/quotes.json"));
        assert_eq!(paths.log_dir, PathBuf::from("/var/lib/habitline/logs"));
    }

    #[test]
    fn explicit_override_wins_and_is_made_absolute() {
        let paths = AppPaths::resolve(Some(PathBuf::from("relative/data"))).unwrap();
        assert!(paths.data_dir.is_absolute());
        assert!(paths.data_dir.ends_with("relative/data"));
    }

    #[test]
    fn explicit_log_level_wins() {
        assert_eq!(resolve_log_level(Some("warn")), "warn");
    }
}
