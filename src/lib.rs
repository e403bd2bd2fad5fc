//! jsonp - Generate structured JSON prompt templates with a local LLM
//!
//! Free-form requests typed into an interactive shell are sent to an Ollama
//! server wrapped in prompt-engineering instructions. The JSON template that
//! comes back is highlighted with the active color theme and saved to the
//! output directory.
//!
//! ## Key Features
//!
//! - **Themed terminal rendering**: six palettes, width-aware boxes, gradients
//! - **JSON highlighting**: recursive colorizer with a syntax-highlighting fallback
//! - **Slash commands**: switch model, theme and output directory mid-session
//! - **History**: every generated template is kept as `prompt-<millis>.json`

pub mod api;
pub mod config;
pub mod storage;
pub mod tui;

pub use api::{ApiError, Generator, OllamaClient};
pub use config::{Config, ConfigError, ConfigKey, ConfigStore, EnvOverrides, FileConfigStore};
pub use storage::{DirOutputStore, HistoryEntry, OutputStore, StorageError};
pub use tui::{InteractiveShell, LoopState};
