//! Settings of the command-line tool, read from an optional JSON file

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{self, ErrorKind::NotFound},
    path::Path,
    str::FromStr,
};
use thiserror::Error;

use crate::consts::DEFAULT_LOG_LEVEL;
use crate::models::Policy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub policy: Policy,
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read settings: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl Settings {
    /// Reads the settings at `path`. A missing file gives the defaults.
    pub fn open(path: &Path) -> Result<Self, ConfigError> {
        match File::open(path) {
            Ok(f) => Ok(serde_json::from_reader(f)?),
            Err(not_found) if not_found.kind() == NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CpfNormalization, EmailGrammar};
    use std::io::Write;
    use std::path::PathBuf;

    fn write_settings(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("validador-{}-{}.json", name, std::process::id()));
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("validador-does-not-exist.json");
        let settings = Settings::open(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_reads_policy_and_level() {
        let path = write_settings(
            "full",
            r#"{"policy": {"cpf": "digits_only", "email": "strict"}, "log_level": "debug"}"#,
        );
        let settings = Settings::open(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.policy.cpf, CpfNormalization::DigitsOnly);
        assert_eq!(settings.policy.email, EmailGrammar::Strict);
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = write_settings("partial", r#"{"policy": {"cpf": "digits_only"}}"#);
        let settings = Settings::open(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.policy.email, EmailGrammar::Permissive);
        assert_eq!(settings.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_malformed_file() {
        let path = write_settings("malformed", "{ not json");
        let result = Settings::open(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_log_level() {
        let settings = Settings {
            log_level: "loud".to_owned(),
            ..Settings::default()
        };
        assert!(matches!(settings.level_filter(), Err(ConfigError::InvalidLogLevel(level)) if level == "loud"));
    }
}
