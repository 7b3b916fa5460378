//! Directory-backed key-value storage, the server-side stand-in for the
//! browser's `localStorage`.

mod list;
mod preferences;

pub use list::LocalListBackend;
pub use preferences::PreferenceStore;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::error::StoreError;

/// Well-known key holding the serialized project list.
pub const PROJECTS_KEY: &str = "portfolio_projects";
pub const TESTIMONIALS_KEY: &str = "portfolio_testimonials";
pub const MESSAGES_KEY: &str = "portfolio_messages";

/// One file per key under a single directory.
///
/// Values are opaque strings. Writes land in a sibling temp file first and
/// are renamed into place, so a reader never sees half a value.
#[derive(Debug)]
pub struct LocalStorage {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl LocalStorage {
    /// Open (creating if needed) the storage directory. Called once at
    /// startup, before the runtime serves requests.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(self.path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let path = self.path(key);
        let tmp = self.dir.join(format!(".{key}.tmp"));
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        tracing::trace!(key, bytes = value.len(), "Stored local item");
        Ok(())
    }

    pub async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(self.path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path()).unwrap();
        assert_eq!(storage.get_item("nothing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites_and_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path()).unwrap();

        storage.set_item("language", "es").await.unwrap();
        storage.set_item("language", "en").await.unwrap();
        assert_eq!(
            storage.get_item("language").await.unwrap().as_deref(),
            Some("en")
        );

        storage.remove_item("language").await.unwrap();
        storage.remove_item("language").await.unwrap();
        assert_eq!(storage.get_item("language").await.unwrap(), None);
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        LocalStorage::open(dir.path())
            .unwrap()
            .set_item("theme", "light")
            .await
            .unwrap();

        let reopened = LocalStorage::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get_item("theme").await.unwrap().as_deref(),
            Some("light")
        );
    }

    #[tokio::test]
    async fn concurrent_writers_leave_one_whole_value() {
        let dir = tempfile::tempdir().unwrap();
        let storage = std::sync::Arc::new(LocalStorage::open(dir.path()).unwrap());

        let writers: Vec<_> = (0..8)
            .map(|i| {
                let storage = storage.clone();
                tokio::spawn(async move {
                    storage.set_item("k", &format!("value-{i}")).await.unwrap();
                })
            })
            .collect();
        for writer in writers {
            writer.await.unwrap();
        }

        let value = storage.get_item("k").await.unwrap().unwrap();
        assert!(value.starts_with("value-"));
        assert!(!dir.path().join(".k.tmp").exists());
    }
}
