use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use folio_core::entity::Entity;
use tokio::sync::Mutex;

use super::LocalStorage;
use crate::backend::Backend;
use crate::error::StoreError;

/// Keeps one entity kind as a single JSON list under one storage key.
///
/// Every mutation is load → modify → save of the whole list; there is no
/// merge, so concurrent writers from other processes overwrite each other.
pub struct LocalListBackend<E> {
    storage: Arc<LocalStorage>,
    key: String,
    seed: Vec<E>,
    guard: Mutex<()>,
    _kind: PhantomData<fn() -> E>,
}

impl<E: Entity> LocalListBackend<E> {
    pub fn new(storage: Arc<LocalStorage>, key: impl Into<String>, seed: Vec<E>) -> Self {
        Self {
            storage,
            key: key.into(),
            seed,
            guard: Mutex::new(()),
            _kind: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored list, or the seed on first run (persisted immediately so
    /// the next load returns the same thing).
    pub async fn load(&self) -> Result<Vec<E>, StoreError> {
        match self.storage.get_item(&self.key).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                key: self.key.clone(),
                source,
            }),
            None => {
                self.save(&self.seed).await?;
                tracing::debug!(key = %self.key, count = self.seed.len(), "Seeded local list");
                Ok(self.seed.clone())
            }
        }
    }

    /// Overwrite the stored list.
    pub async fn save(&self, list: &[E]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(list)?;
        self.storage.set_item(&self.key, &raw).await
    }

    /// Overwrite the stored list with the seed and return it.
    pub async fn reset_to_seed(&self) -> Result<Vec<E>, StoreError> {
        self.save(&self.seed).await?;
        tracing::info!(key = %self.key, "Local list reset to seed");
        Ok(self.seed.clone())
    }
}

/// Millisecond timestamp, bumped until it collides with nothing in `list`.
fn next_id<E: Entity>(list: &[E]) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    while list.iter().any(|e| e.id() == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

#[async_trait]
impl<E: Entity> Backend<E> for LocalListBackend<E> {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn fetch_all(&self) -> Result<Vec<E>, StoreError> {
        let _guard = self.guard.lock().await;
        self.load().await
    }

    async fn insert(&self, new: &E::New) -> Result<E, StoreError> {
        let _guard = self.guard.lock().await;
        let mut list = self.load().await?;
        let entity = E::from_new(next_id(&list), Utc::now(), new.clone());
        list.insert(0, entity.clone());
        self.save(&list).await?;
        Ok(entity)
    }

    async fn update(&self, id: &str, patch: &E::Patch) -> Result<(), StoreError> {
        let _guard = self.guard.lock().await;
        let mut list = self.load().await?;
        if let Some(entity) = list.iter_mut().find(|e| e.id() == id) {
            entity.apply(patch);
            self.save(&list).await?;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let _guard = self.guard.lock().await;
        let mut list = self.load().await?;
        let before = list.len();
        list.retain(|e| e.id() != id);
        if list.len() != before {
            self.save(&list).await?;
        }
        Ok(())
    }

    async fn reset(&self) -> Result<Vec<E>, StoreError> {
        let _guard = self.guard.lock().await;
        self.reset_to_seed().await
    }
}
