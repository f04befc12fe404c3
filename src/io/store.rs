/*!
# Snapshot Store

A flat folder of named `.json` snapshot files. Names are caller-chosen
file stems (non-empty, no path separators, not `.` or `..`); the store
appends the extension itself and never looks outside its folder.
*/

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

use crate::model::GraphModel;

use super::{
    snapshot::{read_snapshot_file, write_snapshot_file, GraphSnapshot},
    Result, StoreError,
};

/// A listing entry: snapshot name and last modification time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotInfo {
    pub name: String,
    pub modified: DateTime<Utc>,
}

/// Directory-backed store of named snapshots.
///
/// # Examples
/// ```no_run
/// use graphpad::{io::SnapshotStore, prelude::*};
///
/// let store = SnapshotStore::create("./snapshots")?;
/// let mut graph = GraphModel::new(false);
/// graph.try_add_node("a", Position::default());
///
/// store.save("scratch", &graph)?;
/// let restored = store.load("scratch")?;
/// assert!(restored.contains_node("a"));
/// # Ok::<(), graphpad::io::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Opens the store at `dir`, creating the folder if needed.
    ///
    /// # Errors
    /// Returns an error if the folder cannot be created.
    pub fn create<P>(dir: P) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Saves `graph` under `name`, overwriting any previous snapshot.
    ///
    /// # Errors
    /// Fails on invalid names and on file or serialization errors.
    pub fn save(&self, name: &str, graph: &GraphModel) -> Result<()> {
        let path = self.path_of(name)?;
        write_snapshot_file(&GraphSnapshot::capture(graph), &path)?;
        info!("saved snapshot `{name}` to {}", path.display());
        Ok(())
    }

    /// Loads the snapshot saved under `name` and restores a model from it.
    ///
    /// # Errors
    /// Fails with [`StoreError::NotFound`] if no such snapshot exists.
    pub fn load(&self, name: &str) -> Result<GraphModel> {
        let path = self.path_of(name)?;
        if !path.is_file() {
            return Err(StoreError::NotFound(name.to_owned()));
        }
        Ok(read_snapshot_file(path)?.restore())
    }

    /// Deletes the snapshot saved under `name`.
    ///
    /// # Errors
    /// Fails with [`StoreError::NotFound`] if no such snapshot exists.
    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_of(name)?;
        if !path.is_file() {
            return Err(StoreError::NotFound(name.to_owned()));
        }
        fs::remove_file(path)?;
        info!("deleted snapshot `{name}`");
        Ok(())
    }

    /// Lists stored snapshots, newest first; ties break on name.
    ///
    /// Files without a `.json` extension are ignored.
    ///
    /// # Errors
    /// Fails if the folder cannot be read.
    pub fn list(&self) -> Result<Vec<SnapshotInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let modified = entry.metadata()?.modified()?;
            entries.push(SnapshotInfo {
                name: stem.to_owned(),
                modified: DateTime::from(modified),
            });
        }
        entries.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));
        Ok(entries)
    }

    fn path_of(&self, name: &str) -> Result<PathBuf> {
        let valid =
            !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\']);
        if !valid {
            return Err(StoreError::InvalidName(name.to_owned()));
        }
        Ok(self.dir.join(format!("{name}.json")))
    }
}
