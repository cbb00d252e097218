// Citizen reports: validation, timestamps, image attachments.

use super::record_collection::RecordCollection;
use super::records_models::{NewReport, Report};
use super::records_store::{ImageStore, RecordError, RecordFile};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// `19 October 2026 14:05`
pub const REPORT_TIMESTAMP_FORMAT: &str = "%d %B %Y %H:%M";

pub struct ReportService<S: RecordFile<Report>, I: ImageStore> {
    reports: RecordCollection<Report, S>,
    images: I,
    timezone: Tz,
}

impl<S: RecordFile<Report>, I: ImageStore> ReportService<S, I> {
    pub async fn open(store: S, images: I, timezone: Tz) -> Self {
        Self {
            reports: RecordCollection::open(store).await,
            images,
            timezone,
        }
    }

    pub async fn list(&self) -> Vec<Report> {
        self.reports.snapshot().await
    }

    /// Store a report stamped with the current time. Returns its index.
    pub async fn submit(&self, new: NewReport) -> Result<(usize, Report), RecordError> {
        self.submit_at(new, Utc::now()).await
    }

    /// Validate and store a report as if submitted at `now`.
    ///
    /// Name, contact and description are required. Nothing is written (image
    /// included) unless validation passes. If the record cannot be persisted
    /// the saved image is removed again.
    pub async fn submit_at(
        &self,
        new: NewReport,
        now: DateTime<Utc>,
    ) -> Result<(usize, Report), RecordError> {
        let name = required("name", &new.name)?;
        let contact = required("contact", &new.contact)?;
        let description = required("description", &new.description)?;

        let extension = match &new.image {
            Some(upload) => Some(
                upload
                    .extension()
                    .ok_or_else(|| RecordError::UnsupportedImage(upload.file_name.clone()))?,
            ),
            None => None,
        };

        let local = now.with_timezone(&self.timezone);

        let image_path = match (&new.image, extension) {
            (Some(upload), Some(ext)) => Some(
                self.images
                    .save(&ext, &upload.bytes, local.naive_local())
                    .await?,
            ),
            _ => None,
        };

        let report = Report {
            name,
            contact,
            category: new.category,
            location: new.location.trim().to_string(),
            description,
            timestamp: local.format(REPORT_TIMESTAMP_FORMAT).to_string(),
            image_path,
        };

        match self.reports.append(report.clone()).await {
            Ok(index) => Ok((index, report)),
            Err(e) => {
                if let Some(path) = report.image_path.as_deref() {
                    self.discard_image(path).await;
                }
                Err(e.into())
            }
        }
    }

    /// Delete a report and its image. Out of range returns `None` and changes
    /// nothing.
    pub async fn delete(&self, index: usize) -> Result<Option<Report>, RecordError> {
        let removed = self.reports.remove(index).await?;
        if let Some(path) = removed.as_ref().and_then(|r| r.image_path.as_deref()) {
            self.discard_image(path).await;
        }
        Ok(removed)
    }

    /// Best-effort image removal; failures are only logged.
    async fn discard_image(&self, path: &str) {
        if let Err(e) = self.images.delete(path).await {
            tracing::warn!(path, error = %e, "Report image could not be deleted");
        }
    }

    /// Image bytes for display. `None` when the report has no image or the
    /// file has gone missing.
    pub async fn image(&self, report: &Report) -> Result<Option<Vec<u8>>, RecordError> {
        match &report.image_path {
            Some(path) => Ok(self.images.read(path).await?),
            None => Ok(None),
        }
    }
}

fn required(field: &'static str, value: &str) -> Result<String, RecordError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        tracing::debug!(field, "Report rejected, missing field");
        return Err(RecordError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::record_collection::test_support::MemoryFile;
    use crate::core::records::records_models::{ImageUpload, ReportCategory};
    use crate::core::records::records_store::StoreError;
    use async_trait::async_trait;
    use chrono::{NaiveDateTime, TimeZone};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MemoryImages {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    #[async_trait]
    impl ImageStore for MemoryImages {
        async fn save(
            &self,
            extension: &str,
            bytes: &[u8],
            taken_at: NaiveDateTime,
        ) -> Result<String, StoreError> {
            let path = format!("uploads/{}.{}", taken_at.format("%Y%m%d_%H%M%S"), extension);
            self.files.lock().unwrap().insert(path.clone(), bytes.to_vec());
            Ok(path)
        }

        async fn delete(&self, path: &str) -> Result<(), StoreError> {
            self.files.lock().unwrap().remove(path);
            Ok(())
        }

        async fn read(&self, path: &str) -> Result<Option<Vec<u8>>, StoreError> {
            Ok(self.files.lock().unwrap().get(path).cloned())
        }
    }

    fn budi() -> NewReport {
        NewReport {
            name: "Budi".to_string(),
            contact: "08xxxx".to_string(),
            category: ReportCategory::PestOutbreak,
            location: "Desa A".to_string(),
            description: "wereng menyerang".to_string(),
            image: None,
        }
    }

    fn submitted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 4, 5, 0).unwrap()
    }

    async fn service(
        file: MemoryFile<Report>,
        images: MemoryImages,
    ) -> ReportService<MemoryFile<Report>, MemoryImages> {
        ReportService::open(file, images, chrono_tz::Asia::Makassar).await
    }

    #[tokio::test]
    async fn test_submit_formats_local_timestamp() {
        let file = MemoryFile::empty();
        let reports = service(file.clone(), MemoryImages::default()).await;

        let (index, report) = reports.submit_at(budi(), submitted_at()).await.unwrap();
        assert_eq!(index, 0);

        // Asia/Makassar is UTC+8
        assert_eq!(report.timestamp, "19 October 2026 12:05");
        assert!(report.image_path.is_none());

        let stored = file.stored().unwrap();
        assert_eq!(stored, vec![report]);
    }

    #[tokio::test]
    async fn test_submit_trims_fields() {
        let reports = service(MemoryFile::empty(), MemoryImages::default()).await;
        let mut new = budi();
        new.name = "  Budi ".to_string();
        new.location = " Desa A\n".to_string();

        let (_, report) = reports.submit_at(new, submitted_at()).await.unwrap();
        assert_eq!(report.name, "Budi");
        assert_eq!(report.location, "Desa A");
    }

    #[tokio::test]
    async fn test_missing_fields_are_rejected_without_writing() {
        let file = MemoryFile::empty();
        let images = MemoryImages::default();
        let reports = service(file.clone(), images.clone()).await;

        let cases: [(fn(&mut NewReport), &str); 3] = [
            (|r| r.name = "   ".to_string(), "name"),
            (|r| r.contact.clear(), "contact"),
            (|r| r.description = "\t".to_string(), "description"),
        ];

        for (blank, field) in cases {
            let mut new = budi();
            new.image = Some(ImageUpload {
                file_name: "hama.jpg".to_string(),
                bytes: vec![1, 2, 3],
            });
            blank(&mut new);

            match reports.submit_at(new, submitted_at()).await {
                Err(RecordError::MissingField(missing)) => assert_eq!(missing, field),
                other => panic!("expected missing {field}, got {other:?}"),
            }
        }

        assert!(reports.list().await.is_empty());
        assert_eq!(file.write_count(), 0);
        assert!(images.files.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_location_is_optional() {
        let reports = service(MemoryFile::empty(), MemoryImages::default()).await;
        let mut new = budi();
        new.location = String::new();
        assert!(reports.submit_at(new, submitted_at()).await.is_ok());
    }

    #[tokio::test]
    async fn test_unsupported_image_is_rejected() {
        let file = MemoryFile::empty();
        let reports = service(file.clone(), MemoryImages::default()).await;
        let mut new = budi();
        new.image = Some(ImageUpload {
            file_name: "laporan.pdf".to_string(),
            bytes: vec![0],
        });

        assert!(matches!(
            reports.submit_at(new, submitted_at()).await,
            Err(RecordError::UnsupportedImage(_))
        ));
        assert_eq!(file.write_count(), 0);
    }

    #[tokio::test]
    async fn test_image_is_saved_and_removed_with_report() {
        let images = MemoryImages::default();
        let reports = service(MemoryFile::empty(), images.clone()).await;

        let mut new = budi();
        new.image = Some(ImageUpload {
            file_name: "Sawah.PNG".to_string(),
            bytes: vec![9, 9],
        });
        let (_, report) = reports.submit_at(new, submitted_at()).await.unwrap();

        assert_eq!(
            report.image_path.as_deref(),
            Some("uploads/20261019_120500.png")
        );
        assert_eq!(reports.image(&report).await.unwrap(), Some(vec![9, 9]));

        let removed = reports.delete(0).await.unwrap();
        assert_eq!(removed, Some(report));
        assert!(images.files.lock().unwrap().is_empty());
        assert!(reports.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_with_missing_image_succeeds() {
        let stored = Report {
            name: "Ani".to_string(),
            contact: "0812".to_string(),
            category: ReportCategory::IrrigationProblem,
            location: String::new(),
            description: "saluran tersumbat".to_string(),
            timestamp: "01 May 2025 08:00".to_string(),
            image_path: Some("uploads/hilang.jpg".to_string()),
        };
        let file = MemoryFile::with(vec![stored]);
        let reports = service(file.clone(), MemoryImages::default()).await;

        assert!(reports.delete(0).await.unwrap().is_some());
        assert_eq!(file.stored().unwrap(), Vec::<Report>::new());
    }

    #[tokio::test]
    async fn test_delete_out_of_range_is_noop() {
        let file = MemoryFile::empty();
        let reports = service(file.clone(), MemoryImages::default()).await;
        reports.submit_at(budi(), submitted_at()).await.unwrap();

        assert!(reports.delete(3).await.unwrap().is_none());
        assert_eq!(reports.list().await.len(), 1);
        assert_eq!(file.write_count(), 1);
    }

    #[tokio::test]
    async fn test_submit_returns_position_of_each_report() {
        let reports = service(MemoryFile::empty(), MemoryImages::default()).await;

        let (first, _) = reports.submit_at(budi(), submitted_at()).await.unwrap();
        let mut ani = budi();
        ani.name = "Ani".to_string();
        let (second, report) = reports.submit_at(ani, submitted_at()).await.unwrap();

        assert_eq!((first, second), (0, 1));
        assert_eq!(reports.list().await[second], report);
    }

    #[tokio::test]
    async fn test_failed_save_removes_uploaded_image() {
        let file = MemoryFile::failing(Vec::new());
        let images = MemoryImages::default();
        let reports = service(file.clone(), images.clone()).await;

        let mut new = budi();
        new.image = Some(ImageUpload {
            file_name: "wereng.jpg".to_string(),
            bytes: vec![7, 7, 7],
        });

        assert!(matches!(
            reports.submit_at(new, submitted_at()).await,
            Err(RecordError::Store(StoreError::Io(_)))
        ));
        assert!(images.files.lock().unwrap().is_empty());
        assert_eq!(file.stored().unwrap(), Vec::<Report>::new());
    }
}
