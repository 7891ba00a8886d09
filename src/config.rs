// Configuration module for newsreel
// This module handles loading and parsing configuration from ~/.config/newsreel/config.toml

mod types;

pub use types::{CarouselConfig, Config};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::NewsreelError;

/// Result of loading configuration
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/newsreel/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    let config_path = get_config_path();

    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match parse_config(&contents) {
        Ok(result) => result,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e.message())),
            }
        }
    }
}

/// Loads configuration from a path given on the command line
///
/// Unlike [`load_config`], a missing or malformed file is an error: the user
/// asked for this file explicitly.
pub fn load_config_from(path: &Path) -> Result<ConfigResult, NewsreelError> {
    #[cfg(debug_assertions)]
    log::debug!("Loading explicit config from {:?}", path);

    let contents = fs::read_to_string(path).map_err(|source| NewsreelError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&contents).map_err(|e| NewsreelError::ConfigParse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

/// Parse TOML and replace out-of-range values with defaults
fn parse_config(contents: &str) -> Result<ConfigResult, toml::de::Error> {
    let mut config = toml::from_str::<Config>(contents)?;
    let warnings = config.carousel.sanitize();

    #[cfg(debug_assertions)]
    log::debug!(
        "Config parsed: {:?}, {} news items, {} social links",
        config.carousel,
        config.news.len(),
        config.social.len()
    );

    Ok(ConfigResult {
        config,
        warning: join_warnings(warnings),
    })
}

/// Collapse a list of warnings into one notification message
pub fn join_warnings(warnings: Vec<String>) -> Option<String> {
    if warnings.is_empty() {
        None
    } else {
        Some(warnings.join("; "))
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/newsreel/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("newsreel")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
