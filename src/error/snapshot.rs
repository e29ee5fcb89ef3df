use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while persisting a snapshot to disk.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Output directory could not be created.
    ///
    /// No snapshot is produced for the run; the connection is still closed normally.
    #[error("Failed to create dir \"{path}\": {source}")]
    CreateDir {
        /// The directory that could not be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file could not be written.
    #[error("Failed to write \"{path}\": {source}")]
    Write {
        /// The file that could not be written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Snapshot document could not be serialized to JSON.
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}
