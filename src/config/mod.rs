//! Environment-based configuration.

use crate::locale::Locale;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Deployment environment name, defaulting to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .unwrap_or_else(|_| "sandbox".to_string())
}

/// Runtime configuration for the API server.
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    /// Directory holding `*.json` indicator dataset files.
    pub data_dir: PathBuf,
    /// Locale used when a request does not specify one.
    pub default_locale: Locale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            port: 8080,
            data_dir: PathBuf::from("data"),
            default_locale: Locale::Ne,
        }
    }
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: get_environment(),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            default_locale: env::var("DEFAULT_LOCALE")
                .ok()
                .and_then(|l| Locale::from_str(&l).ok())
                .unwrap_or(defaults.default_locale),
        }
    }
}
