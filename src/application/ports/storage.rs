// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Writes `bytes` as `namespace/file_name` and returns the public path.
    async fn put(
        &self,
        namespace: &str,
        file_name: &str,
        bytes: Bytes,
    ) -> ApplicationResult<String>;

    /// Removes the file behind a public path previously returned by `put`.
    async fn delete(&self, public_path: &str) -> ApplicationResult<()>;

    /// Whether `reference` points at a file this storage manages. Remote URLs never do.
    fn owns(&self, reference: &str) -> bool;
}
