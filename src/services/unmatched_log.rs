//! Append-only store for interactions that fell through to the fallback
//! responder.
//!
//! Entries are written as JSON Lines, one object per line. Every write goes
//! through a single async mutex, so concurrent requests never drop or
//! interleave each other's entries. A file in the older whole-array format
//! (`[{...}, {...}]`) is converted to JSON Lines when the store is opened.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::errors::AppError;
use crate::models::{Language, LogEntry};

pub struct LogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LogStore {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        migrate_legacy_array(&path).await?;

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a fallback interaction. `intent_detected` is always null here.
    pub async fn log_unmatched(
        &self,
        from: &str,
        message: &str,
        language: Language,
        response: &str,
    ) -> Result<(), AppError> {
        let entry = LogEntry::unmatched(from, message, language, response);
        self.append(&entry).await?;
        tracing::debug!(from = %from, language = language.as_str(), "unmatched message logged");
        Ok(())
    }

    pub async fn append(&self, entry: &LogEntry) -> Result<(), AppError> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }

    /// All entries in insertion order. A missing file is an empty log.
    pub async fn entries(&self) -> Result<Vec<LogEntry>, AppError> {
        let _guard = self.write_lock.lock().await;
        read_entries(&self.path).await
    }
}

async fn read_entries(path: &Path) -> Result<Vec<LogEntry>, AppError> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    parse_entries(&content)
}

fn parse_entries(content: &str) -> Result<Vec<LogEntry>, AppError> {
    if is_legacy_array(content) {
        return Ok(serde_json::from_str(content)?);
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|e| {
                AppError::LogStore(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("corrupt entry on line {}: {e}", idx + 1),
                ))
            })
        })
        .collect()
}

fn is_legacy_array(content: &str) -> bool {
    content.trim_start().starts_with('[')
}

async fn migrate_legacy_array(path: &Path) -> Result<(), AppError> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    if !is_legacy_array(&content) {
        return Ok(());
    }

    let entries: Vec<LogEntry> = serde_json::from_str(&content)?;
    let mut lines = String::new();
    for entry in &entries {
        lines.push_str(&serde_json::to_string(entry)?);
        lines.push('\n');
    }

    let mut tmp = OsString::from(path.as_os_str());
    tmp.push(".migrating");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, lines).await?;
    fs::rename(&tmp, path).await?;

    tracing::info!(
        path = %path.display(),
        entries = entries.len(),
        "migrated unmatched log from JSON array to JSON Lines"
    );
    Ok(())
}
