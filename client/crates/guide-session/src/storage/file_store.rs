//! Single-file JSON storage with atomic writes.

use crate::storage::{KeyValueStore, StorageError, StorageResult};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Key-value storage persisted as one JSON object of strings.
///
/// Every write rewrites the whole file through a temp file + fsync + rename,
/// so a crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Opens storage at `path`, creating the parent directory if needed.
    /// The file itself is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::io("create directory", parent.to_path_buf(), e))?;
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Moves a corrupted file aside so storage can start fresh.
    ///
    /// Returns the backup path when a backup was made, `None` when the file
    /// is missing or healthy.
    pub fn recover(&self) -> StorageResult<Option<PathBuf>> {
        match self.read_entries() {
            Ok(_) => Ok(None),
            Err(StorageError::Corrupted { message, .. }) => {
                warn!("Storage file corrupted at {:?}: {message}", self.path);
                self.backup_corrupted()
            }
            Err(e) => Err(e),
        }
    }

    /// Renames the storage file to `<file>.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self) -> StorageResult<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let mut backup_name = self.path.as_os_str().to_os_string();
        backup_name.push(format!(".corrupted.{timestamp}"));
        let backup_path = PathBuf::from(backup_name);

        fs::rename(&self.path, &backup_path)
            .map_err(|e| StorageError::io("back up", self.path.clone(), e))?;

        warn!("Backed up corrupted storage to {backup_path:?}");
        Ok(Some(backup_path))
    }

    fn read_entries(&self) -> StorageResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::io("read", self.path.clone(), e))?;

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents)
            .map_err(|e| StorageError::corrupted(self.path.clone(), e.to_string()))
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("storage.json"));
        let temp_path = dir.join(format!("{file_name}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::io("write", temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StorageError::io("write", temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::io("write", temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::io("replace", self.path.clone(), e)
        })?;

        Ok(())
    }

    fn update<F>(&self, key: &str, apply: F) -> StorageResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self.write_lock.lock().map_err(|_| StorageError::poisoned())?;

        let mut entries = self.read_entries()?;
        apply(&mut entries);
        self.write_entries(&entries)?;

        info!("Updated storage key '{key}' in {:?}", self.path);
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.update(key, |entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.update(key, |entries| {
            entries.remove(key);
        })
    }
}
