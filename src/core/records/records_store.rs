use super::records_models::Record;
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Why a records file could not be turned into a collection.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Records file does not exist")]
    Missing,
    #[error("Records file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors surfaced to the user by record services.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Unsupported image type: {0} (use png, jpg or jpeg)")]
    UnsupportedImage(String),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Backing file for one record collection. Always read and written whole.
#[async_trait]
pub trait RecordFile<T: Record>: Send + Sync {
    async fn load(&self) -> Result<Vec<T>, LoadError>;
    async fn save(&self, records: &[T]) -> Result<(), StoreError>;
}

/// Storage for images attached to reports.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Write the image and return its relative path.
    async fn save(
        &self,
        extension: &str,
        bytes: &[u8],
        taken_at: NaiveDateTime,
    ) -> Result<String, StoreError>;

    /// Remove an image. A file that is already gone counts as removed.
    async fn delete(&self, path: &str) -> Result<(), StoreError>;

    /// Read an image back, `None` when it no longer exists.
    async fn read(&self, path: &str) -> Result<Option<Vec<u8>>, StoreError>;
}
