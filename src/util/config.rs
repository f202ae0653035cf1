use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "MergeSuggestions";
const APP_NAME: &str = "MergeSuggestions";

pub const FEED_ENV: &str = "MERGE_SUGGESTIONS_FEED";
pub const DELAY_ENV: &str = "MERGE_SUGGESTIONS_DELAY_MS";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON suggestion feed; the bundled sample is used when unset.
    pub feed_path: Option<PathBuf>,
    /// `info`, `debug`, ... or a full `EnvFilter` directive string.
    pub log_level: String,
    /// Simulated handler latency for the review inbox.
    pub handler_delay_ms: u64,
    /// Extra class appended to every card's root container.
    pub card_class: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_path: None,
            log_level: "info".to_string(),
            handler_delay_ms: 400,
            card_class: None,
        }
    }
}

impl AppConfig {
    pub fn handler_delay(&self) -> Duration {
        Duration::from_millis(self.handler_delay_ms)
    }

    fn apply_env(&mut self, feed: Option<String>, delay: Option<String>) -> Option<ConfigError> {
        if let Some(path) = feed.filter(|value| !value.trim().is_empty()) {
            self.feed_path = Some(PathBuf::from(path.trim()));
        }
        let raw = delay?;
        match raw.trim().parse::<u64>() {
            Ok(ms) => {
                self.handler_delay_ms = ms;
                None
            }
            Err(_) => Some(ConfigError::InvalidEnv {
                name: DELAY_ENV,
                value: raw,
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
    #[error("ignoring {name}={value:?}: expected milliseconds")]
    InvalidEnv { name: &'static str, value: String },
}

fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

/// Reads `config.json` from the platform config dir, then applies environment overrides.
///
/// Problems are returned next to the defaults they fell back to, so they can be
/// logged once tracing is up.
pub fn load_config() -> (AppConfig, Vec<ConfigError>) {
    let mut problems = Vec::new();
    let mut config = match config_file() {
        Some(path) => match read_config(&path) {
            Ok(found) => found.unwrap_or_default(),
            Err(err) => {
                problems.push(err);
                AppConfig::default()
            }
        },
        None => AppConfig::default(),
    };
    problems.extend(config.apply_env(std::env::var(FEED_ENV).ok(), std::env::var(DELAY_ENV).ok()));
    (config, problems)
}

pub fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_str(&data)?))
}
