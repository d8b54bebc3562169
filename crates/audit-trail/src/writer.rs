use std::path::Path;

use tokio::io::AsyncWriteExt;

use crate::entry::AuditEntry;

/// Errors that can occur while exporting the trail.
#[derive(Debug, thiserror::Error)]
pub enum TrailWriteError {
    #[error("failed to create parent directories: {0}")]
    CreateDir(std::io::Error),

    #[error("failed to open export file: {0}")]
    OpenFile(std::io::Error),

    #[error("failed to serialize audit entry: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write to export file: {0}")]
    Write(std::io::Error),

    #[error("failed to flush export file: {0}")]
    Flush(std::io::Error),
}

/// Append-mode file writer that serialises [`AuditEntry`] values as
/// JSON-lines.
///
/// Each call to [`write`](Self::write) produces exactly one
/// newline-terminated JSON object in the output file.  This is a one-shot
/// export of a session's trail for review, not a durable store.
pub struct TrailWriter {
    file: tokio::fs::File,
}

impl TrailWriter {
    /// Open (or create) the export file at `path` in append mode.
    ///
    /// Parent directories are created automatically if they do not exist.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, TrailWriteError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(TrailWriteError::CreateDir)?;
        }

        let file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(TrailWriteError::OpenFile)?;

        Ok(Self { file })
    }

    /// Serialise `entry` as a single JSON line and append it to the file.
    pub async fn write(&mut self, entry: &AuditEntry) -> Result<(), TrailWriteError> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        self.file
            .write_all(&line)
            .await
            .map_err(TrailWriteError::Write)?;

        Ok(())
    }

    /// Write every entry of `trail` in order, then flush.
    pub async fn export(&mut self, trail: &[AuditEntry]) -> Result<(), TrailWriteError> {
        for entry in trail {
            self.write(entry).await?;
        }
        self.flush().await
    }

    /// Flush the underlying file, ensuring all buffered data reaches disk.
    pub async fn flush(&mut self) -> Result<(), TrailWriteError> {
        self.file.flush().await.map_err(TrailWriteError::Flush)
    }
}
