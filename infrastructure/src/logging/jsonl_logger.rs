//! JSONL audit trail for roster mutations.
//!
//! Each [`MutationEvent`] becomes one JSON line carrying its payload fields
//! plus `type` and `timestamp`. The file is opened in append mode so the
//! trail accumulates across runs.

use roster_application::{MutationEvent, MutationLogger};
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Append-only JSONL mutation logger.
pub struct JsonlMutationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlMutationLogger {
    /// Open (or create) the audit file, creating parent directories.
    ///
    /// Returns `None` when the file cannot be opened; callers fall back to
    /// no audit logging.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create audit log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .inspect_err(|e| warn!("Could not open audit log {}: {}", path.display(), e))
            .ok()?;

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn record(event: MutationEvent, timestamp: String) -> Value {
    match event.payload {
        Value::Object(mut map) => {
            map.insert("type".to_string(), Value::from(event.event_type));
            map.insert("timestamp".to_string(), Value::String(timestamp));
            Value::Object(map)
        }
        other => serde_json::json!({
            "type": event.event_type,
            "timestamp": timestamp,
            "data": other,
        }),
    }
}

impl MutationLogger for JsonlMutationLogger {
    fn log(&self, event: MutationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let Ok(line) = serde_json::to_string(&record(event, timestamp)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlMutationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
