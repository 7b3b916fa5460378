use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use folio_core::entity::Entity;
use folio_core::error::CoreError;
use folio_core::i18n::TextKey;
use folio_db::{Backend, StoreError};
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::notify::Notifier;

/// One ordered list of one entity kind, kept in step with its backend.
///
/// The list only changes after the backend confirms a write, and newest
/// records sit first. The list lock is never held across a backend call,
/// so two concurrent writes to the same id land in response order.
pub struct EntityStore<E: Entity> {
    backend: Arc<dyn Backend<E>>,
    items: RwLock<Vec<E>>,
    loaded: AtomicBool,
    notifier: Notifier,
}

impl<E: Entity> EntityStore<E> {
    pub fn new(backend: Arc<dyn Backend<E>>, notifier: Notifier) -> Self {
        Self {
            backend,
            items: RwLock::new(Vec::new()),
            loaded: AtomicBool::new(false),
            notifier,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Initial fetch. A failure leaves the list empty and is only logged;
    /// the store counts as loaded either way.
    pub async fn load(&self) {
        let items = match self.backend.fetch_all().await {
            Ok(items) => {
                tracing::info!(kind = E::KIND, backend = self.backend.name(), count = items.len(), "Store loaded");
                items
            }
            Err(e) => {
                tracing::error!(kind = E::KIND, backend = self.backend.name(), error = %e, "Store load failed");
                Vec::new()
            }
        };

        *self.items.write().await = items;
        self.loaded.store(true, Ordering::Release);
    }

    /// Re-fetch with the same failure policy as [`load`](Self::load).
    pub async fn refresh(&self) {
        self.load().await;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    pub async fn list(&self) -> Vec<E> {
        self.items.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    pub async fn get(&self, id: &str) -> Option<E> {
        self.items.read().await.iter().find(|e| e.id() == id).cloned()
    }

    /// Persist a new record and put it at the front of the list.
    pub async fn add(&self, new: E::New) -> AppResult<E> {
        match self.insert(new).await {
            Ok(entity) => {
                if let Some(title) = E::NOTICES.created {
                    self.notifier.success(title, entity.label());
                }
                Ok(entity)
            }
            Err(e) => {
                self.notify_failure(TextKey::AdminCreateFailed, &e);
                Err(e.into())
            }
        }
    }

    /// Like [`add`](Self::add) but announces nothing. Failures are still
    /// returned to the caller.
    pub async fn add_quiet(&self, new: E::New) -> Result<E, StoreError> {
        self.insert(new).await
    }

    /// Merge `patch` into the record with `id` and return the result.
    ///
    /// A patch naming no field is not sent and announces nothing.
    pub async fn update(&self, id: &str, patch: E::Patch) -> AppResult<E> {
        let Some(current) = self.get(id).await else {
            return Err(not_found::<E>(id));
        };

        if E::patch_is_empty(&patch) {
            tracing::debug!(kind = E::KIND, id, "Empty patch ignored");
            return Ok(current);
        }

        if let Err(e) = self.backend.update(id, &patch).await {
            self.notify_failure(TextKey::AdminUpdateFailed, &e);
            return Err(e.into());
        }

        let updated = {
            let mut items = self.items.write().await;
            match items.iter_mut().find(|e| e.id() == id) {
                Some(entity) => {
                    entity.apply(&patch);
                    entity.clone()
                }
                // Deleted locally while the write was in flight.
                None => {
                    let mut entity = current;
                    entity.apply(&patch);
                    entity
                }
            }
        };

        self.notifier.success(E::NOTICES.updated, updated.label());
        Ok(updated)
    }

    /// Remove the record with `id`. Returns `false` without touching the
    /// backend when the id is not in the list.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let Some(existing) = self.get(id).await else {
            tracing::debug!(kind = E::KIND, id, "Delete of absent id ignored");
            return Ok(false);
        };

        if let Err(e) = self.backend.delete(id).await {
            self.notify_failure(TextKey::AdminDeleteFailed, &e);
            return Err(e.into());
        }

        self.items.write().await.retain(|e| e.id() != id);
        self.notifier.success(E::NOTICES.deleted, existing.label());
        Ok(true)
    }

    /// Replace everything with the backend's default content.
    pub async fn reset(&self) -> AppResult<Vec<E>> {
        let items = self.backend.reset().await?;
        *self.items.write().await = items.clone();
        tracing::info!(kind = E::KIND, count = items.len(), "Store reset");
        Ok(items)
    }

    async fn insert(&self, new: E::New) -> Result<E, StoreError> {
        let entity = self.backend.insert(&new).await?;
        let mut items = self.items.write().await;
        items.retain(|e| e.id() != entity.id());
        items.insert(0, entity.clone());
        Ok(entity)
    }

    fn notify_failure(&self, action: TextKey, err: &StoreError) {
        tracing::warn!(kind = E::KIND, error = %err, "Store write failed");
        self.notifier.error(
            TextKey::AdminErrorTitle,
            format!("{}: {err}", self.notifier.text(action)),
        );
    }
}

fn not_found<E: Entity>(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: E::KIND,
        id: id.to_string(),
    })
}
