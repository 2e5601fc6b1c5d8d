//! Configuration types for the logging system

use std::path::PathBuf;

use piste_core::Profile;
use serde::{Deserialize, Serialize};

/// Main logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default log level (can be overridden by RUST_LOG)
    pub default_level: String,

    /// Console output configuration
    pub console: ConsoleConfig,

    /// File output configuration
    pub file: Option<FileConfig>,

    /// Visible characters kept in the local part of logged email
    /// addresses; everything past this is replaced with `*`
    pub obfuscated_length: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            console: ConsoleConfig::default(),
            file: None,
            obfuscated_length: 0,
        }
    }
}

impl LogConfig {
    /// Config for development (verbose pretty console, partial
    /// obfuscation so addresses stay recognizable while debugging)
    pub fn development() -> Self {
        Self {
            default_level: "debug".to_string(),
            console: ConsoleConfig {
                enabled: true,
                pretty: true,
                ansi: true,
            },
            obfuscated_length: 2,
            ..Default::default()
        }
    }

    /// Config for production (JSON file output, full obfuscation)
    pub fn production(log_dir: PathBuf) -> Self {
        Self {
            default_level: "info".to_string(),
            console: ConsoleConfig {
                enabled: false,
                pretty: false,
                ansi: false,
            },
            file: Some(FileConfig {
                directory: log_dir,
                ..Default::default()
            }),
            obfuscated_length: 0,
        }
    }

    /// Config for testing (minimal output)
    pub fn testing() -> Self {
        Self {
            default_level: "warn".to_string(),
            ..Default::default()
        }
    }

    /// Map a configuration profile to its logging config
    pub fn for_profile(profile: Profile, log_dir: PathBuf) -> Self {
        match profile {
            Profile::Dev => Self::development(),
            Profile::Test => Self::testing(),
            Profile::Prod => Self::production(log_dir),
        }
    }
}

/// Console output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Enable console output
    pub enabled: bool,
    /// Use pretty (human-readable) format instead of JSON lines
    pub pretty: bool,
    /// Include ANSI colors
    pub ansi: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pretty: false,
            ansi: false,
        }
    }
}

/// File output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    /// Directory for log files
    pub directory: PathBuf,
    /// File name prefix
    pub prefix: String,
    /// Maximum rotated files to retain
    pub max_files: usize,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./logs"),
            prefix: "piste".to_string(),
            max_files: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.default_level, "info");
        assert!(config.console.enabled);
        assert!(!config.console.pretty);
        assert!(config.file.is_none());
        assert_eq!(config.obfuscated_length, 0);
    }

    #[test]
    fn test_development_config() {
        let config = LogConfig::development();
        assert_eq!(config.default_level, "debug");
        assert!(config.console.pretty);
        assert!(config.console.ansi);
        assert_eq!(config.obfuscated_length, 2);
    }

    #[test]
    fn test_production_config() {
        let config = LogConfig::production(PathBuf::from("/var/log/piste"));
        assert!(!config.console.enabled);
        let file = config.file.unwrap();
        assert_eq!(file.directory, PathBuf::from("/var/log/piste"));
        assert_eq!(file.max_files, 3);
        assert_eq!(config.obfuscated_length, 0);
    }

    #[test]
    fn test_profile_mapping() {
        assert_eq!(
            LogConfig::for_profile(Profile::Dev, PathBuf::from("logs")).obfuscated_length,
            2
        );
        assert_eq!(
            LogConfig::for_profile(Profile::Test, PathBuf::from("logs")).default_level,
            "warn"
        );
        assert!(LogConfig::for_profile(Profile::Prod, PathBuf::from("logs"))
            .file
            .is_some());
    }
}
