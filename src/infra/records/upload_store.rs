use crate::core::records::{ImageStore, StoreError};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Report images kept as plain files in one directory.
///
/// Files are named after the local submission time, `YYYYMMDD_HHMMSS.ext`.
/// Two uploads in the same second get a `_1`, `_2`, ... suffix instead of
/// overwriting each other.
pub struct LocalUploadStore {
    dir: PathBuf,
}

impl LocalUploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Only paths that point inside the upload directory are served or
    /// deleted. Anything else read back from a records file is ignored.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let candidate = Path::new(path);
        if candidate
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }
        candidate.starts_with(&self.dir).then(|| candidate.to_path_buf())
    }
}

#[async_trait]
impl ImageStore for LocalUploadStore {
    async fn save(
        &self,
        extension: &str,
        bytes: &[u8],
        taken_at: NaiveDateTime,
    ) -> Result<String, StoreError> {
        fs::create_dir_all(&self.dir).await?;

        let stem = taken_at.format("%Y%m%d_%H%M%S").to_string();
        let mut attempt = 0u32;
        loop {
            let file_name = match attempt {
                0 => format!("{stem}.{extension}"),
                n => format!("{stem}_{n}.{extension}"),
            };
            let path = self.dir.join(&file_name);

            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(mut file) => {
                    file.write_all(bytes).await?;
                    file.flush().await?;
                    tracing::debug!(path = %path.display(), size = bytes.len(), "Saved report image");
                    return Ok(path.to_string_lossy().into_owned());
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }

    async fn delete(&self, path: &str) -> Result<(), StoreError> {
        let Some(resolved) = self.resolve(path) else {
            tracing::warn!(path, "Refusing to delete image outside the upload directory");
            return Ok(());
        };

        match fs::remove_file(&resolved).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path, "Report image already gone");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn read(&self, path: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let Some(resolved) = self.resolve(path) else {
            tracing::warn!(path, "Refusing to read image outside the upload directory");
            return Ok(None);
        };

        match fs::read(&resolved).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
