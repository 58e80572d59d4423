//! # Conversation History
//!
//! Recorders the dispatcher reports each resolved turn to.
//! `HistoryLog` keeps records in memory; `JsonlRecorder` appends one JSON object per line to a file.

use crate::domain::traits::Recorder;
use crate::domain::types::ChatRecord;
use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory history. Clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct HistoryLog {
    records: Arc<Mutex<Vec<ChatRecord>>>,
}

impl HistoryLog {
    pub fn records(&self) -> Vec<ChatRecord> {
        self.records
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Recorder for HistoryLog {
    fn record(&mut self, record: &ChatRecord) -> Result<()> {
        self.records
            .lock()
            .map_err(|_| anyhow::anyhow!("history log lock poisoned"))?
            .push(record.clone());
        Ok(())
    }
}

/// Append-only JSON-lines history file.
#[derive(Debug)]
pub struct JsonlRecorder {
    path: PathBuf,
    file: File,
}

impl JsonlRecorder {
    /// Opens (or creates) the file for appending, creating parent directories as needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open history file {}", path.display()))?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads back every record in the file, in order.
    pub fn read_all(path: impl AsRef<Path>) -> Result<Vec<ChatRecord>> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open history file {}", path.display()))?;
        let mut records = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line)
                .with_context(|| format!("Bad history record on line {}", idx + 1))?;
            records.push(record);
        }
        Ok(records)
    }
}

impl Recorder for JsonlRecorder {
    fn record(&mut self, record: &ChatRecord) -> Result<()> {
        // One write per record, so a crash never splits a line from its newline.
        let line = format!("{}\n", serde_json::to_string(record)?);
        self.file
            .write_all(line.as_bytes())
            .with_context(|| format!("Failed to append to {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::Message;
    use crate::domain::response::Response;
    use crate::domain::types::Role;
    use tempfile::TempDir;

    #[test]
    fn test_history_log_shares_between_clones() {
        let log = HistoryLog::default();
        let mut writer = log.clone();
        writer
            .record(&ChatRecord::user(1, &Message::new("hi")))
            .unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.records()[0].text, "hi");
    }

    #[test]
    fn test_jsonl_roundtrip_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("history.jsonl");

        let mut recorder = JsonlRecorder::open(&path).unwrap();
        recorder
            .record(&ChatRecord::user(1, &Message::new("hello")))
            .unwrap();
        recorder
            .record(&ChatRecord::bot(1, &Response::certain("greet", "hello to you too")))
            .unwrap();
        drop(recorder);

        // reopening appends instead of truncating
        let mut recorder = JsonlRecorder::open(&path).unwrap();
        recorder
            .record(&ChatRecord::user(2, &Message::new("bye")))
            .unwrap();

        let records = JsonlRecorder::read_all(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].role, Role::User);
        assert_eq!(records[1].responder.as_deref(), Some("greet"));
        assert_eq!(records[2].turn, 2);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.lines().next().unwrap().contains("\"role\":\"user\""));
    }

    #[test]
    fn test_every_record_ends_its_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.jsonl");
        let mut recorder = JsonlRecorder::open(&path).unwrap();
        for turn in 1..=3 {
            recorder
                .record(&ChatRecord::user(turn, &Message::new("line\nbreak")))
                .unwrap();
        }

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.ends_with('\n'));
        assert_eq!(raw.matches('\n').count(), 3);
        for line in raw.lines() {
            let record: ChatRecord = serde_json::from_str(line).unwrap();
            assert_eq!(record.text, "line\nbreak");
        }
    }
}
