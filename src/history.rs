//! Append-only CSV log of published posts.
//!
//! Columns `timestamp,topic,text`, header written once on first append.
//! Single-writer, single-process assumption; no locking. A missing file
//! is an empty history, not an error.

use crate::error::HistoryError;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

/// One confirmed post. Written once, never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub timestamp: String,
    pub topic: String,
    pub text: String,
}

pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Prior post texts in file order.
    pub fn load(&self) -> Result<Vec<String>, HistoryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut texts = Vec::new();
        for record in reader.deserialize() {
            let record: HistoryRecord = record?;
            texts.push(record.text);
        }
        Ok(texts)
    }

    /// Append one record stamped with the current time, creating the file
    /// (and its parent directory) with a header row on first write.
    pub fn append(&self, topic: &str, text: &str) -> Result<(), HistoryError> {
        let write_header = !self.path.exists();

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);

        writer.serialize(HistoryRecord {
            timestamp: Local::now().to_rfc3339(),
            topic: topic.to_string(),
            text: text.to_string(),
        })?;
        writer.flush().map_err(HistoryError::Io)?;
        Ok(())
    }
}
