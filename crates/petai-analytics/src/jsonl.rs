//! File-backed event store: one JSON object per line.
//!
//! Appends are serialized through a mutex and written with a single
//! append-mode write, so concurrent writers never clobber each other the
//! way a whole-file read-modify-write would. A torn final line left by a
//! crash is terminated before the next append. Logs written as a single
//! JSON array are still readable and are converted to line format by
//! [`JsonlEventStore::open`], which keeps the original as `<file>.legacy`.

use std::io::SeekFrom;
use std::path::{Path, PathBuf};

use petai_core::AnalyticsEvent;
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tokio::sync::Mutex;

use crate::error::AnalyticsError;
use crate::store::EventStore;

pub struct JsonlEventStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlEventStore {
    /// Opens a store at `path`, creating parent directories and converting
    /// a legacy JSON-array log in place. A missing file is fine; it is
    /// created on first append.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Io`] if the directory cannot be created or
    /// an existing legacy log cannot be rewritten.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, AnalyticsError> {
        let store = Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        };

        if let Some(parent) = store.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| store.io_error(e))?;
        }

        store.migrate_legacy_array().await?;
        Ok(store)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> AnalyticsError {
        AnalyticsError::Io {
            path: self.path.clone(),
            source,
        }
    }

    async fn read_contents(&self) -> Result<String, AnalyticsError> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Where the untouched legacy array is kept after conversion. Entries
    /// that no longer decode survive only in this copy.
    async fn legacy_backup_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".legacy");
        let candidate = self.path.with_file_name(&name);
        if fs::try_exists(&candidate).await.unwrap_or(true) {
            name.push(format!(".{}", chrono::Utc::now().timestamp_millis()));
            return self.path.with_file_name(name);
        }
        candidate
    }

    async fn migrate_legacy_array(&self) -> Result<(), AnalyticsError> {
        let _guard = self.write_lock.lock().await;
        let contents = self.read_contents().await?;
        if !is_legacy_array(&contents) {
            return Ok(());
        }

        let events = parse_events(&contents);
        let mut lines = String::new();
        for event in &events {
            lines.push_str(&serde_json::to_string(event)?);
            lines.push('\n');
        }

        let backup = self.legacy_backup_path().await;
        fs::copy(&self.path, &backup)
            .await
            .map_err(|e| self.io_error(e))?;

        // Write beside the log and rename so a crash mid-rewrite leaves the
        // original intact.
        let tmp = self.path.with_extension("jsonl.tmp");
        fs::write(&tmp, lines).await.map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        tracing::info!(
            path = %self.path.display(),
            backup = %backup.display(),
            count = events.len(),
            "converted legacy analytics log to JSON lines"
        );
        Ok(())
    }

    /// Whether the log is non-empty and its last byte is not a newline,
    /// i.e. the previous write was torn.
    async fn ends_mid_line(&self, file: &mut fs::File) -> Result<bool, AnalyticsError> {
        let len = file.metadata().await.map_err(|e| self.io_error(e))?.len();
        if len == 0 {
            return Ok(false);
        }
        file.seek(SeekFrom::Start(len - 1))
            .await
            .map_err(|e| self.io_error(e))?;
        let mut last = [0_u8; 1];
        file.read_exact(&mut last)
            .await
            .map_err(|e| self.io_error(e))?;
        Ok(last[0] != b'\n')
    }
}

impl EventStore for JsonlEventStore {
    async fn append(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        let mut line = serde_json::to_vec(event)?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        // Terminate a torn final line so it cannot swallow this event.
        if self.ends_mid_line(&mut file).await? {
            line.insert(0, b'\n');
        }
        file.write_all(&line).await.map_err(|e| self.io_error(e))?;
        file.flush().await.map_err(|e| self.io_error(e))?;
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<AnalyticsEvent>, AnalyticsError> {
        let contents = {
            let _guard = self.write_lock.lock().await;
            self.read_contents().await?
        };
        Ok(parse_events(&contents))
    }
}

fn is_legacy_array(contents: &str) -> bool {
    contents.trim_start().starts_with('[')
}

/// Decodes a log in either line or legacy array form, skipping entries
/// that do not decode (unknown kinds, truncated final lines).
fn parse_events(contents: &str) -> Vec<AnalyticsEvent> {
    if is_legacy_array(contents) {
        let values: Vec<serde_json::Value> = match serde_json::from_str(contents) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(error = %e, "unreadable legacy analytics log; treating as empty");
                return Vec::new();
            }
        };
        return values
            .into_iter()
            .filter_map(|v| decode_entry(serde_json::from_value(v)))
            .collect();
    }

    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| decode_entry(serde_json::from_str(line)))
        .collect()
}

fn decode_entry(
    result: Result<AnalyticsEvent, serde_json::Error>,
) -> Option<AnalyticsEvent> {
    match result {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::warn!(error = %e, "skipping undecodable analytics entry");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_events_reads_lines_and_skips_garbage() {
        let contents = concat!(
            r#"{"id":"1","type":"business_click","category":"cafe","source":"list","timestamp":"2026-01-02T03:04:05Z"}"#,
            "\n\n",
            r#"{"id":"2","type":"page_view","source":"list","timestamp":"2026-01-02T03:04:06Z"}"#,
            "\n",
            r#"{"id":"3","type":"chat_recommendation","source":"chat","timest"#,
        );
        let events = parse_events(contents);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "1");
    }

    #[test]
    fn parse_events_reads_legacy_array() {
        let contents = r#"[
          {"id":"a","type":"business_map_click","businessName":"Cafe Wan","source":"detail","timestamp":"2026-01-02T03:04:05.123Z"},
          {"id":"b","type":"business_call_click","source":"detail","timestamp":"2026-01-03T00:00:00Z"}
        ]"#;
        let events = parse_events(contents);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].business_name.as_deref(), Some("Cafe Wan"));
    }

    #[test]
    fn empty_contents_parse_to_no_events() {
        assert!(parse_events("").is_empty());
        assert!(parse_events("\n  \n").is_empty());
    }
}
