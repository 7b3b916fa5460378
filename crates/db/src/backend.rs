use async_trait::async_trait;
use folio_core::entity::Entity;

use crate::error::StoreError;

/// A storage medium for one entity kind.
///
/// Implementations only persist; ordering of the in-memory list and
/// notifications are the caller's business.
#[async_trait]
pub trait Backend<E: Entity>: Send + Sync {
    /// Short name used in logs and errors (`"local"`, `"remote"`).
    fn name(&self) -> &'static str;

    /// Every stored record, newest first.
    async fn fetch_all(&self) -> Result<Vec<E>, StoreError>;

    /// Persist a new record; the backend assigns the identifier.
    async fn insert(&self, new: &E::New) -> Result<E, StoreError>;

    /// Merge `patch` into the record with `id`. Unknown ids are not an error.
    async fn update(&self, id: &str, patch: &E::Patch) -> Result<(), StoreError>;

    /// Remove the record with `id`. Unknown ids are not an error.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Replace everything with the backend's default content.
    async fn reset(&self) -> Result<Vec<E>, StoreError> {
        Err(StoreError::Unsupported(self.name()))
    }
}
