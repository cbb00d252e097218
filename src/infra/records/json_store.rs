use crate::core::records::{LoadError, Record, RecordFile, StoreError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;
use tokio::fs;

/// A record collection stored as one pretty-printed JSON array.
///
/// The file is rewritten wholesale on every save. serde_json writes UTF-8
/// as-is, so non-ASCII text stays readable in the file.
pub struct JsonRecordStore<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonRecordStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Record> RecordFile<T> for JsonRecordStore<T> {
    async fn load(&self) -> Result<Vec<T>, LoadError> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(LoadError::Missing),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&text)?)
    }

    async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let text = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, text).await?;
        Ok(())
    }
}
