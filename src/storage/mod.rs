//! Saved prompt files and the history listing

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read history from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A prompt file that was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPrompt {
    pub file_name: String,
    pub path: PathBuf,
}

/// One line of `/history`
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub file_name: String,
    pub path: PathBuf,
    pub modified: DateTime<Local>,
}

/// Where generated prompts are kept
pub trait OutputStore: Send {
    /// Write `content` byte for byte to a new `prompt-<millis>.json` file
    fn save(&mut self, content: &str) -> Result<SavedPrompt, StorageError>;

    /// Most recent `.json` files, newest first
    fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>, StorageError>;

    fn dir(&self) -> &Path;

    fn set_dir(&mut self, dir: PathBuf);
}

/// Output store backed by a plain directory
#[derive(Debug, Clone)]
pub struct DirOutputStore {
    dir: PathBuf,
}

impl DirOutputStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::CreateDir {
                path: self.dir.clone(),
                source,
            })?;
            info!("Created output directory: {}", self.dir.display());
        }
        Ok(())
    }

    /// Name for a new file, bumped past any existing file with the same stamp
    fn next_file_name(&self) -> String {
        let mut millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        loop {
            let name = format!("prompt-{}.json", millis);
            if !self.dir.join(&name).exists() {
                return name;
            }
            millis += 1;
        }
    }
}

impl OutputStore for DirOutputStore {
    fn save(&mut self, content: &str) -> Result<SavedPrompt, StorageError> {
        self.ensure_dir()?;

        let file_name = self.next_file_name();
        let path = self.dir.join(&file_name);
        std::fs::write(&path, content).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;
        info!("JSON saved to {}", path.display());

        Ok(SavedPrompt { file_name, path })
    }

    fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>, StorageError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let read_err = |source| StorageError::Read {
            path: self.dir.clone(),
            source,
        };

        let mut names: Vec<String> = std::fs::read_dir(&self.dir)
            .map_err(read_err)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.ends_with(".json"))
            .collect();
        names.sort_unstable_by(|a, b| b.cmp(a));
        names.truncate(limit);

        let mut entries = Vec::with_capacity(names.len());
        for file_name in names {
            let path = self.dir.join(&file_name);
            let modified = match std::fs::metadata(&path).and_then(|m| m.modified()) {
                Ok(time) => DateTime::<Local>::from(time),
                Err(e) => {
                    debug!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };
            entries.push(HistoryEntry {
                file_name,
                path,
                modified,
            });
        }
        Ok(entries)
    }

    fn dir(&self) -> &Path {
        &self.dir
    }

    fn set_dir(&mut self, dir: PathBuf) {
        self.dir = dir;
    }
}
