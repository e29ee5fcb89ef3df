use std::path::{Path, PathBuf};

use crate::error::snapshot::SnapshotError;
use crate::model::snapshot::Snapshot;
use crate::util::slug::snapshot_file_name;

/// Writes snapshots into a single output directory.
///
/// The file name is derived from the bot's name, so repeated runs for the same
/// bot overwrite one file instead of accumulating new ones.
pub struct SnapshotWriter {
    dir: PathBuf,
}

impl SnapshotWriter {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Creates the output directory and any missing parents.
    pub async fn ensure_dir(&self) -> Result<(), SnapshotError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| SnapshotError::CreateDir {
                path: self.dir.clone(),
                source,
            })
    }

    /// Path the snapshot of the given bot is written to.
    pub fn path_for(&self, snapshot: &Snapshot) -> PathBuf {
        self.dir.join(snapshot_file_name([
            snapshot.bot.display_name.as_deref(),
            snapshot.bot.username.as_deref(),
        ]))
    }

    /// Serializes the snapshot as 2-space-indented JSON, replacing any previous file.
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Path of the written file
    /// - `Err(SnapshotError)` - Serialization or write failed
    pub async fn write(&self, snapshot: &Snapshot) -> Result<PathBuf, SnapshotError> {
        let path = self.path_for(snapshot);
        let json = serde_json::to_string_pretty(snapshot)?;

        tokio::fs::write(&path, json)
            .await
            .map_err(|source| SnapshotError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }
}
