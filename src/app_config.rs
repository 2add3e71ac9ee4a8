use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use url::Url;

use crate::translation::cache::{DEFAULT_CACHE_CAPACITY, TranslationCache};

/// Upper bound for `retry_count`; backoff doubles per retry
pub const MAX_RETRY_COUNT: u32 = 10;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Default source language code (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Default target language code (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation pipeline configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct TranslationConfig {
    /// Translation cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Neural model backend settings
    #[serde(default)]
    pub model: ModelConfig,
}

/// Translation cache settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CacheConfig {
    /// Whether translations are cached
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum number of cached translations; `null` means unbounded
    #[serde(default = "default_cache_capacity")]
    pub capacity: Option<usize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            capacity: default_cache_capacity(),
        }
    }
}

impl CacheConfig {
    /// Build the cache described by this configuration
    ///
    /// A zero capacity is rejected by `Config::validate`; here it falls back
    /// to an unbounded cache.
    pub fn build(&self) -> TranslationCache {
        TranslationCache::new(self.enabled, self.capacity.and_then(NonZeroUsize::new))
    }
}

/// Neural model backend settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModelConfig {
    /// Model identifier sent to the inference server
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// Inference server URL
    #[serde(default = "default_model_endpoint")]
    pub endpoint: String,

    /// Model directory holding `tokenizer.json`
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retry count for failed requests
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// Backoff multiplier for retries (in milliseconds)
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_name: default_model_name(),
            endpoint: default_model_endpoint(),
            model_dir: default_model_dir(),
            timeout_secs: default_timeout_secs(),
            retry_count: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Equivalent `log` filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "hi".to_string()
}

fn default_cache_capacity() -> Option<usize> {
    Some(DEFAULT_CACHE_CAPACITY)
}

fn default_model_name() -> String {
    "ai4bharat/IndicTrans-v2".to_string()
}

fn default_model_endpoint() -> String {
    "http://localhost:8008".to_string()
}

fn default_model_dir() -> PathBuf {
    PathBuf::from("models/en-indic")
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_retry_count() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    500 // doubled on each retry
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    ///
    /// Language codes are not checked here: unknown codes fall back to
    /// English at translation time.
    pub fn validate(&self) -> Result<()> {
        let model = &self.translation.model;

        if model.model_name.trim().is_empty() {
            return Err(anyhow!("Model name must not be empty"));
        }

        Url::parse(&model.endpoint)
            .map_err(|e| anyhow!("Invalid model endpoint '{}': {}", model.endpoint, e))?;

        if self.translation.cache.capacity == Some(0) {
            return Err(anyhow!("Cache capacity must be at least 1, or null for unbounded"));
        }

        if model.retry_count > MAX_RETRY_COUNT {
            return Err(anyhow!("Retry count must be at most {}, got {}", MAX_RETRY_COUNT, model.retry_count));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
