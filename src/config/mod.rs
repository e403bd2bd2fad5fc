//! Configuration management for jsonp
//!
//! Supports configuration via:
//! 1. Config file (~/.config/jsonp/config.toml)
//! 2. Environment variables (OLLAMA_URL, OLLAMA_MODEL)
//! 3. The `config [key] [value]` subcommand and the interactive slash commands

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::tui::theme::DEFAULT_THEME;

/// Model used until the user picks another one
pub const DEFAULT_MODEL: &str = "llama3:latest";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Unknown configuration key: {0} (expected prompt_model, theme or output_dir)")]
    UnknownKey(String),
}

/// Keys the interactive shell and the `config` subcommand may read or write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    PromptModel,
    Theme,
    OutputDir,
}

impl ConfigKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::PromptModel => "prompt_model",
            ConfigKey::Theme => "theme",
            ConfigKey::OutputDir => "output_dir",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prompt_model" | "model" => Ok(ConfigKey::PromptModel),
            "theme" => Ok(ConfigKey::Theme),
            "output_dir" | "output" => Ok(ConfigKey::OutputDir),
            other => Err(ConfigError::UnknownKey(other.to_string())),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model passed to the generation endpoint
    pub prompt_model: String,

    /// Active color theme
    pub theme: String,

    /// Where generated prompts are written (defaults to ~/jsonp-output)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Local LLM (Ollama) configuration
    pub ollama: OllamaSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt_model: DEFAULT_MODEL.to_string(),
            theme: DEFAULT_THEME.to_string(),
            output_dir: None,
            ollama: OllamaSettings::default(),
        }
    }
}

/// Local LLM (Ollama) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaSettings {
    /// Ollama server URL
    pub url: String,

    /// Upper bound for a single generation request
    pub timeout_secs: u64,
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            url: "http://localhost:11434".to_string(),
            timeout_secs: 120,
        }
    }
}

/// Values taken from `OLLAMA_URL` and `OLLAMA_MODEL`.
///
/// They apply to the running session only and are never written back.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub ollama_url: Option<String>,
    pub prompt_model: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            ollama_url: std::env::var("OLLAMA_URL").ok(),
            prompt_model: std::env::var("OLLAMA_MODEL").ok(),
        }
    }
}

impl Config {
    /// Get default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jsonp")
            .join("config.toml")
    }

    /// Read the file as written; a missing file yields the defaults
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply environment overrides
    pub fn with_overrides(mut self, overrides: &EnvOverrides) -> Self {
        if let Some(url) = &overrides.ollama_url {
            self.ollama.url = url.clone();
        }
        if let Some(model) = &overrides.prompt_model {
            self.prompt_model = model.clone();
        }
        self
    }

    /// Save config to specific path
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Directory for generated prompts
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(default_output_dir)
    }

    pub fn get(&self, key: ConfigKey) -> Option<String> {
        match key {
            ConfigKey::PromptModel => Some(self.prompt_model.clone()),
            ConfigKey::Theme => Some(self.theme.clone()),
            ConfigKey::OutputDir => self.output_dir.as_ref().map(|p| p.display().to_string()),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) {
        match key {
            ConfigKey::PromptModel => self.prompt_model = value.to_string(),
            ConfigKey::Theme => self.theme = value.to_string(),
            ConfigKey::OutputDir => self.output_dir = Some(PathBuf::from(value)),
        }
    }

    /// Generate example config content
    pub fn example() -> String {
        toml::to_string_pretty(&Config::default()).unwrap_or_default()
    }
}

/// `~/jsonp-output`, or `./jsonp-output` when there is no home directory
pub fn default_output_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jsonp-output")
}

/// Persisted key/value settings used by the interactive shell
pub trait ConfigStore: Send {
    fn get(&self, key: ConfigKey) -> Option<String>;

    fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError>;

    fn get_or(&self, key: ConfigKey, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Where the store lives, for display
    fn location(&self) -> String;
}

/// Config store backed by the TOML file.
///
/// `file` mirrors what is on disk; `config` is that plus the environment
/// overrides and is what the session reads.
#[derive(Debug)]
pub struct FileConfigStore {
    path: PathBuf,
    file: Config,
    config: Config,
}

impl FileConfigStore {
    pub fn open() -> Result<Self, ConfigError> {
        Self::open_at(Config::default_path())
    }

    pub fn open_at(path: PathBuf) -> Result<Self, ConfigError> {
        Self::open_with(path, &EnvOverrides::from_env())
    }

    pub fn open_with(path: PathBuf, overrides: &EnvOverrides) -> Result<Self, ConfigError> {
        let file = Config::read_from(&path)?;
        Ok(Self::from_parts(path, file, overrides))
    }

    /// Start from defaults for `path` without reading it
    pub fn with_defaults(path: PathBuf) -> Self {
        Self::from_parts(path, Config::default(), &EnvOverrides::from_env())
    }

    fn from_parts(path: PathBuf, file: Config, overrides: &EnvOverrides) -> Self {
        let config = file.clone().with_overrides(overrides);
        Self { path, file, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self, key: ConfigKey) -> Option<String> {
        self.config.get(key)
    }

    fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        self.file.set(key, value);
        self.file.save_to(&self.path)?;
        self.config.set(key, value);
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory store, handy for tests and one-off sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryConfigStore {
    values: HashMap<ConfigKey, String>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: ConfigKey) -> Option<String> {
        self.values.get(&key).cloned()
    }

    fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        self.values.insert(key, value.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "(memory)".to_string()
    }
}
