// Write-through record collection.
//
// The whole collection lives in memory and is written back wholesale after
// every mutation. Mutations hold the write lock until the file is written, so
// inside one process the file always ends up matching memory. Separate
// processes sharing a file still race (last writer wins).

use super::records_models::Record;
use super::records_store::{LoadError, RecordFile, StoreError};
use tokio::sync::RwLock;

pub struct RecordCollection<T: Record, S: RecordFile<T>> {
    store: S,
    records: RwLock<Vec<T>>,
}

impl<T: Record, S: RecordFile<T>> RecordCollection<T, S> {
    /// Load the collection, falling back to `T::defaults()` when the file is
    /// missing or unreadable. Opening never fails.
    pub async fn open(store: S) -> Self {
        let records = match store.load().await {
            Ok(records) => {
                tracing::info!(kind = T::KIND, count = records.len(), "Loaded records");
                records
            }
            Err(LoadError::Missing) => {
                tracing::info!(kind = T::KIND, "No records file yet, using defaults");
                T::defaults()
            }
            Err(err) => {
                tracing::warn!(
                    kind = T::KIND,
                    error = %err,
                    "Records file unreadable, using defaults"
                );
                T::defaults()
            }
        };

        Self {
            store,
            records: RwLock::new(records),
        }
    }

    pub async fn snapshot(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    /// Append and persist. Returns the new record's index.
    pub async fn append(&self, record: T) -> Result<usize, StoreError> {
        let mut records = self.records.write().await;
        records.push(record);
        let index = records.len() - 1;
        self.store.save(&records).await?;
        tracing::info!(kind = T::KIND, index, "Record appended");
        Ok(index)
    }

    /// Swap in a complete edited collection and persist it.
    pub async fn replace_all(&self, replacement: Vec<T>) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        *records = replacement;
        self.store.save(&records).await?;
        tracing::info!(kind = T::KIND, count = records.len(), "Records replaced");
        Ok(())
    }

    /// Edit the collection in place and persist it under one write lock.
    ///
    /// `edit` returns `None` when it left the records untouched; nothing is
    /// written then.
    pub async fn update<R, F>(&self, edit: F) -> Result<Option<R>, StoreError>
    where
        F: FnOnce(&mut Vec<T>) -> Option<R> + Send,
        R: Send,
    {
        let mut records = self.records.write().await;
        let Some(outcome) = edit(&mut records) else {
            tracing::debug!(kind = T::KIND, "Update left records unchanged");
            return Ok(None);
        };

        self.store.save(&records).await?;
        tracing::info!(kind = T::KIND, count = records.len(), "Records updated");
        Ok(Some(outcome))
    }

    /// Remove the record at `index`. Out of range is a no-op that does not
    /// touch the file and returns `None`.
    pub async fn remove(&self, index: usize) -> Result<Option<T>, StoreError> {
        let mut records = self.records.write().await;
        if index >= records.len() {
            tracing::debug!(kind = T::KIND, index, "Remove ignored, index out of range");
            return Ok(None);
        }

        let removed = records.remove(index);
        self.store.save(&records).await?;
        tracing::info!(kind = T::KIND, index, "Record removed");
        Ok(Some(removed))
    }
}

/// In-memory `RecordFile` for service tests.
#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    pub(crate) struct MemoryFile<T> {
        pub contents: Arc<Mutex<Option<Vec<T>>>>,
        pub writes: Arc<Mutex<usize>>,
        pub malformed: bool,
        pub failing: bool,
    }

    impl<T> MemoryFile<T> {
        pub fn empty() -> Self {
            Self {
                contents: Arc::new(Mutex::new(None)),
                writes: Arc::new(Mutex::new(0)),
                malformed: false,
                failing: false,
            }
        }

        pub fn with(records: Vec<T>) -> Self {
            let file = Self::empty();
            *file.contents.lock().unwrap() = Some(records);
            file
        }

        pub fn malformed() -> Self {
            Self {
                malformed: true,
                ..Self::empty()
            }
        }

        /// Loads normally but every save fails.
        pub fn failing(records: Vec<T>) -> Self {
            Self {
                failing: true,
                ..Self::with(records)
            }
        }

        pub fn write_count(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    impl<T: Clone> MemoryFile<T> {
        pub fn stored(&self) -> Option<Vec<T>> {
            self.contents.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl<T: Record> RecordFile<T> for MemoryFile<T> {
        async fn load(&self) -> Result<Vec<T>, LoadError> {
            if self.malformed {
                let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
                return Err(LoadError::Malformed(err));
            }
            self.contents.lock().unwrap().clone().ok_or(LoadError::Missing)
        }

        async fn save(&self, records: &[T]) -> Result<(), StoreError> {
            if self.failing {
                return Err(std::io::Error::other("disk full").into());
            }
            *self.contents.lock().unwrap() = Some(records.to_vec());
            *self.writes.lock().unwrap() += 1;
            Ok(())
        }
    }
}
