//! File-based Answer Log Adapter
//!
//! Keeps the whole log as one pretty-printed JSON array, created as `[]`
//! on first use. Appends are whole-file read-modify-write cycles guarded
//! by an async mutex, so concurrent appends from one process serialize
//! and never interleave or drop entries.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::ports::{AnswerLog, AnswerLogError, LogEntry};

/// File-based storage for completed-run entries
#[derive(Debug)]
pub struct FileAnswerLog {
    path: PathBuf,
    // Guards the read-modify-write cycle, not the file contents.
    write_lock: Mutex<()>,
}

impl FileAnswerLog {
    /// Create a log backed by the given file path.
    ///
    /// The file is not touched until the first operation.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Vec<LogEntry>, AnswerLogError> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| AnswerLogError::DeserializationFailed(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(AnswerLogError::IoError(e.to_string())),
        }
    }

    async fn write_entries(&self, entries: &[LogEntry]) -> Result<(), AnswerLogError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AnswerLogError::IoError(e.to_string()))?;
            }
        }
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| AnswerLogError::SerializationFailed(e.to_string()))?;
        fs::write(&self.path, json)
            .await
            .map_err(|e| AnswerLogError::IoError(e.to_string()))
    }
}

#[async_trait]
impl AnswerLog for FileAnswerLog {
    async fn append(&self, entry: LogEntry) -> Result<(), AnswerLogError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.push(entry);
        self.write_entries(&entries).await?;
        debug!(path = %self.path.display(), total = entries.len(), "log entry appended");
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<LogEntry>, AnswerLogError> {
        self.read_entries().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::LoggedResponse;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn entry(disease: &str) -> LogEntry {
        LogEntry {
            disease: disease.to_string(),
            responses: vec![LoggedResponse {
                question: "Is the cow drooling or foaming at the mouth?".to_string(),
                answer: "Yes".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty_log() {
        let dir = TempDir::new().unwrap();
        let log = FileAnswerLog::new(dir.path().join("symptom_logs.json"));
        assert!(log.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_preserves_existing_entries_in_order() {
        let dir = TempDir::new().unwrap();
        let log = FileAnswerLog::new(dir.path().join("symptom_logs.json"));

        log.append(entry("fmd")).await.unwrap();
        log.append(entry("cbpp")).await.unwrap();
        log.append(entry("none")).await.unwrap();

        let entries = log.read_all().await.unwrap();
        let diseases: Vec<&str> = entries.iter().map(|e| e.disease.as_str()).collect();
        assert_eq!(diseases, vec!["fmd", "cbpp", "none"]);
    }

    #[tokio::test]
    async fn file_is_a_json_array_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("symptom_logs.json");
        let log = FileAnswerLog::new(&path);

        log.append(entry("lsd")).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(parsed.is_array());
        assert_eq!(parsed[0]["disease"], "lsd");
        assert_eq!(
            parsed[0]["responses"][0]["question"],
            "Is the cow drooling or foaming at the mouth?"
        );
    }

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let log = FileAnswerLog::new(dir.path().join("logs").join("symptom_logs.json"));
        log.append(entry("ecf")).await.unwrap();
        assert_eq!(log.read_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn corrupt_file_surfaces_deserialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("symptom_logs.json");
        std::fs::write(&path, "not json").unwrap();

        let log = FileAnswerLog::new(&path);
        let err = log.append(entry("fmd")).await.unwrap_err();
        assert!(matches!(err, AnswerLogError::DeserializationFailed(_)));
    }

    #[tokio::test]
    async fn concurrent_appends_lose_nothing() {
        let dir = TempDir::new().unwrap();
        let log = Arc::new(FileAnswerLog::new(dir.path().join("symptom_logs.json")));

        let mut handles = Vec::new();
        for i in 0..20 {
            let log = Arc::clone(&log);
            handles.push(tokio::spawn(async move {
                log.append(entry(&format!("disease_{i}"))).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(log.read_all().await.unwrap().len(), 20);
    }
}
