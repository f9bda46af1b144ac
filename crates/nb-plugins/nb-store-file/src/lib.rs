//! # nb-store-file
//!
//! Filesystem implementation of `KvStore`: one file per key under a root
//! directory, the local-storage stand-in that survives restarts.
//!
//! Writes go through a temp file plus rename so a crash mid-write leaves
//! the previous value intact rather than a truncated entry.

use std::fs;
use std::path::PathBuf;

use nb_core::traits::KvStore;

pub struct FileStore {
    /// Root directory for all entries (e.g., "./data/board").
    root_path: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root_path: root }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        // Keys are fixed literals chosen by the app, not user input, so
        // no escaping is needed.
        self.root_path.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    /// Any failure (missing file, permissions, non-UTF-8 bytes) reads as
    /// absent: a broken store must never block startup.
    fn load(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("store entry '{key}' unreadable, treating as absent: {e}");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.root_path)?;
        let target = self.entry_path(key);
        let tmp = self.root_path.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        store.save("hjnj_notices_v1", "[1,2,3]").unwrap();
        assert_eq!(store.load("hjnj_notices_v1"), Some("[1,2,3]".to_string()));
    }

    #[test]
    fn test_absent_key_is_none_not_error() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.load("nope"), None);
    }

    #[test]
    fn test_missing_root_directory_is_absent() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("never-created"));
        assert_eq!(store.load("anything"), None);
    }

    #[test]
    fn test_save_creates_root_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("deep"));
        store.save("k", "old").unwrap();
        store.save("k", "new").unwrap();
        assert_eq!(store.load("k"), Some("new".to_string()));
    }

    #[test]
    fn test_remove_absent_key_succeeds() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        store.remove("ghost").unwrap();
        store.save("k", "v").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.load("k"), None);
    }
}
