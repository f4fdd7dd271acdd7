use crate::categories::DEFAULT_CATEGORY_LIMIT;
use crate::commands::search::SearchOptions;
use crate::debounce::DEFAULT_DEBOUNCE_MS;
use crate::error::{Result, SiftError};
use crate::paginate::DEFAULT_PAGE_SIZE;
use crate::store::DEFAULT_POSTS_PATH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BASE_PATH: &str = "/blog/";

pub const CONFIG_KEYS: &[&str] = &[
    "source",
    "base_path",
    "page_size",
    "category_limit",
    "debounce_ms",
];

/// Configuration for blogsift, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiftConfig {
    /// Where to read `posts-data.json` from: a file path or an http(s) URL
    #[serde(default = "default_source")]
    pub source: String,

    /// Path of the blog index page; shareable URLs are built on top of it
    #[serde(default = "default_base_path")]
    pub base_path: String,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// How many category buttons to show besides "All Posts"
    #[serde(default = "default_category_limit")]
    pub category_limit: usize,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_source() -> String {
    DEFAULT_POSTS_PATH.to_string()
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_category_limit() -> usize {
    DEFAULT_CATEGORY_LIMIT
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            base_path: default_base_path(),
            page_size: default_page_size(),
            category_limit: default_category_limit(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SiftConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SiftError::Io)?;
        let config: SiftConfig =
            serde_json::from_str(&content).map_err(SiftError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Hand-edited files bypass `set`, so limits are checked again on load.
    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("page_size", self.page_size),
            ("category_limit", self.category_limit),
        ] {
            if value == 0 {
                return Err(SiftError::Config(format!(
                    "{} in {} must be at least 1",
                    key, CONFIG_FILENAME
                )));
            }
        }
        Ok(())
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SiftError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SiftError::Serialization)?;
        fs::write(config_path, content).map_err(SiftError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "source" => Some(self.source.clone()),
            "base_path" => Some(self.base_path.clone()),
            "page_size" => Some(self.page_size.to_string()),
            "category_limit" => Some(self.category_limit.to_string()),
            "debounce_ms" => Some(self.debounce_ms.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "source" => self.source = value.to_string(),
            "base_path" => self.set_base_path(value),
            "page_size" => self.page_size = parse_positive(key, value)?,
            "category_limit" => self.category_limit = parse_positive(key, value)?,
            "debounce_ms" => {
                self.debounce_ms = value.parse().map_err(|_| {
                    SiftError::Config(format!("{} must be a number of milliseconds", key))
                })?
            }
            _ => return Err(SiftError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            page_size: self.page_size,
            category_limit: self.category_limit,
            base_path: self.base_path.clone(),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Set the base path (normalizes to start with a slash)
    pub fn set_base_path(&mut self, path: &str) {
        if path.starts_with('/') {
            self.base_path = path.to_string();
        } else {
            self.base_path = format!("/{}", path);
        }
    }
}

fn parse_positive(key: &str, value: &str) -> Result<usize> {
    value
        .parse::<usize>()
        .ok()
        .filter(|n| *n >= 1)
        .ok_or_else(|| SiftError::Config(format!("{} must be a whole number of at least 1", key)))
}
