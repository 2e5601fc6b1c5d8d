//! Environment-profile configuration
//!
//! Settings come from the process environment, optionally seeded from a
//! `.env` file. The active profile is selected by `PISTE_ENV` and each
//! setting can be overridden per profile with a `DEV_`/`TEST_`/`PROD_`
//! prefix, e.g. `DEV_PISTE_DATA_PATH` beats `PISTE_DATA_PATH` when the
//! dev profile is active.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while resolving configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid profile: {0}. Expected one of: 'dev', 'test', 'prod'.")]
    InvalidProfile(String),
}

/// The three named configuration profiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Dev,
    Test,
    Prod,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Dev => "dev",
            Profile::Test => "test",
            Profile::Prod => "prod",
        }
    }

    /// Environment-variable prefix for profile-specific overrides
    pub fn env_prefix(&self) -> &'static str {
        match self {
            Profile::Dev => "DEV_",
            Profile::Test => "TEST_",
            Profile::Prod => "PROD_",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Profile::Dev),
            "test" => Ok(Profile::Test),
            "prod" => Ok(Profile::Prod),
            other => Err(ConfigError::InvalidProfile(other.to_string())),
        }
    }
}

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub profile: Profile,
    pub timezone: String,
    /// Path to the resort dataset CSV
    pub data_path: PathBuf,
    /// Bind address for the HTTP service
    pub http_addr: String,
    /// Directory for rotating log files
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Resolve configuration from the environment
    ///
    /// Loads `.env` first when one exists (a missing file is fine),
    /// then reads `PISTE_ENV` to pick the profile. An unset profile
    /// defaults to dev; an unrecognized one is a startup error.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let profile = match env::var("PISTE_ENV") {
            Ok(name) => name.parse()?,
            Err(_) => Profile::default(),
        };
        Ok(Self::for_profile(profile))
    }

    /// Resolve settings for a known profile, honouring prefixed overrides
    pub fn for_profile(profile: Profile) -> Self {
        Self {
            profile,
            timezone: lookup(profile, "PISTE_TIMEZONE").unwrap_or_else(|| "Asia/Taipei".into()),
            data_path: lookup(profile, "PISTE_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/resorts.csv")),
            http_addr: lookup(profile, "PISTE_HTTP_ADDR").unwrap_or_else(|| "0.0.0.0:8080".into()),
            log_dir: lookup(profile, "PISTE_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
        }
    }
}

/// Look up `name`, preferring the profile-prefixed variant
fn lookup(profile: Profile, name: &str) -> Option<String> {
    env::var(format!("{}{}", profile.env_prefix(), name))
        .or_else(|_| env::var(name))
        .ok()
}
