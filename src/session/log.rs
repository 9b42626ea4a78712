//! JSONL session log implementation.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// One append-only log entry: when the event arrived, what it was, and the
/// raw envelope as received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEventRecord {
    pub timestamp: DateTime<Utc>,
    pub event_name: String,
    pub session_id: String,
    pub envelope: Value,
}

impl SessionEventRecord {
    /// Build a record for an envelope, timestamped now. Empty session ids
    /// fall back to "unknown" so the record still lands somewhere findable.
    pub fn new(event_name: &str, session_id: &str, envelope: Value) -> Self {
        let session_id = if session_id.is_empty() {
            "unknown".to_string()
        } else {
            session_id.to_string()
        };
        Self {
            timestamp: Utc::now(),
            event_name: event_name.to_string(),
            session_id,
            envelope,
        }
    }
}

/// The session-log collaborator: a durable append-only log of hook
/// envelopes, keyed by session id.
#[async_trait]
pub trait SessionLog: Send + Sync {
    /// Append one record. Callers treat failure as best-effort: the
    /// dispatcher logs and ignores it.
    async fn append(&self, record: &SessionEventRecord) -> io::Result<()>;
}

/// File-backed session log: one JSONL file per session id under a data
/// directory, opened in append mode so overlapping invocations for the
/// same session serialize their single-line writes.
#[derive(Debug, Clone)]
pub struct JsonlSessionLog {
    sessions_dir: PathBuf,
}

impl JsonlSessionLog {
    /// Create a log rooted at `data_dir`; records land in
    /// `data_dir/sessions/<session_id>.jsonl`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            sessions_dir: data_dir.as_ref().join("sessions"),
        }
    }

    fn session_file(&self, session_id: &str) -> PathBuf {
        // Session ids come from the host; strip path separators so a
        // hostile id cannot escape the sessions directory.
        let safe: String = session_id
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.sessions_dir.join(format!("{safe}.jsonl"))
    }
}

#[async_trait]
impl SessionLog for JsonlSessionLog {
    async fn append(&self, record: &SessionEventRecord) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.sessions_dir).await?;

        let mut line = serde_json::to_string(record).map_err(io::Error::other)?;
        line.push('\n');

        let path = self.session_file(&record.session_id);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        debug!(
            "Appended {} event to session log {}",
            record.event_name,
            path.display()
        );
        Ok(())
    }
}

/// Resolve the default data directory, preferring `HOOKGUARD_DATA_DIR`
/// over the platform data dir.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("HOOKGUARD_DATA_DIR") {
        return PathBuf::from(dir);
    }
    if let Some(proj_dirs) = ProjectDirs::from("app", "HookGuard", "hookguard") {
        return proj_dirs.data_dir().to_path_buf();
    }
    // Last resort for stripped-down environments without a home dir.
    PathBuf::from(".hookguard")
}
