use reqwest::Method;

use super::RemoteClient;
use crate::error::StoreError;

/// Bucket holding uploaded project cover images.
pub const PROJECT_IMAGES_BUCKET: &str = "project-images";

/// Random object name that keeps the upload's extension.
pub fn object_name(file_name: &str) -> String {
    let id = uuid::Uuid::new_v4();
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!("{id}.{}", ext.to_ascii_lowercase())
        }
        _ => id.to_string(),
    }
}

/// Object storage on the hosted backend.
#[derive(Debug, Clone)]
pub struct StorageClient {
    client: RemoteClient,
}

impl StorageClient {
    pub fn new(client: RemoteClient) -> Self {
        Self { client }
    }

    /// Upload `bytes` under a fresh object name and return its public URL.
    pub async fn upload(
        &self,
        bucket: &str,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StoreError> {
        let object = object_name(file_name);
        let size = bytes.len();

        let response = self
            .client
            .request(
                Method::POST,
                &format!("/storage/v1/object/{bucket}/{object}"),
                None,
            )
            .header("x-upsert", "true")
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;
        RemoteClient::check_status(response).await?;

        tracing::info!(bucket, object = %object, size, "Uploaded object");
        Ok(self.public_url(bucket, &object))
    }

    pub fn public_url(&self, bucket: &str, object: &str) -> String {
        self.client
            .url(&format!("/storage/v1/object/public/{bucket}/{object}"))
    }
}
