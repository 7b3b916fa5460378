use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::Method;

use super::rows::WireRecord;
use super::RemoteClient;
use crate::backend::Backend;
use crate::error::StoreError;

/// One backend table exposed as a [`Backend`].
pub struct RemoteTable<E> {
    client: RemoteClient,
    _kind: PhantomData<fn() -> E>,
}

impl<E: WireRecord> RemoteTable<E> {
    pub fn new(client: RemoteClient) -> Self {
        Self {
            client,
            _kind: PhantomData,
        }
    }

    fn path(query: &str) -> String {
        format!("/rest/v1/{}{}", E::TABLE, query)
    }

    fn by_id(id: &str) -> String {
        Self::path(&format!("?id=eq.{id}"))
    }
}

#[async_trait]
impl<E: WireRecord> Backend<E> for RemoteTable<E> {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn fetch_all(&self) -> Result<Vec<E>, StoreError> {
        let response = self
            .client
            .request(
                Method::GET,
                &Self::path("?select=*&order=created_at.desc"),
                None,
            )
            .send()
            .await?;

        let rows: Vec<E::Row> = RemoteClient::parse_response(response).await?;
        tracing::debug!(table = E::TABLE, count = rows.len(), "Fetched rows");
        Ok(rows.into_iter().map(E::from_row).collect())
    }

    async fn insert(&self, new: &E::New) -> Result<E, StoreError> {
        let response = self
            .client
            .request(Method::POST, &Self::path(""), None)
            .header("Prefer", "return=representation")
            .json(&E::insert_row(new))
            .send()
            .await?;

        let rows: Vec<E::Row> = RemoteClient::parse_response(response).await?;
        let row = rows.into_iter().next().ok_or(StoreError::EmptyResponse)?;
        let entity = E::from_row(row);
        tracing::debug!(table = E::TABLE, id = %entity.id(), "Inserted row");
        Ok(entity)
    }

    async fn update(&self, id: &str, patch: &E::Patch) -> Result<(), StoreError> {
        if E::patch_is_empty(patch) {
            return Ok(());
        }

        let response = self
            .client
            .request(Method::PATCH, &Self::by_id(id), None)
            .json(&E::patch_row(patch))
            .send()
            .await?;

        RemoteClient::check_status(response).await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .request(Method::DELETE, &Self::by_id(id), None)
            .send()
            .await?;

        RemoteClient::check_status(response).await
    }
}
