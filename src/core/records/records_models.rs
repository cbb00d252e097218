// Record types persisted by the bot.
//
// Field names on disk are fixed (`Name`, `PricePerKg`, ...) so existing JSON
// files keep loading; the Rust names follow the usual snake_case.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Anything stored as one element of a JSON array file.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Short label used in logs.
    const KIND: &'static str;

    /// Collection used when the file is missing or cannot be parsed.
    fn defaults() -> Vec<Self> {
        Vec::new()
    }
}

// ============================================================================
// CITIZEN REPORTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportCategory {
    #[serde(rename = "Masalah Irigasi")]
    IrrigationProblem,
    #[serde(rename = "Gangguan Hama")]
    PestOutbreak,
    #[serde(rename = "Kondisi Cuaca")]
    WeatherCondition,
    #[serde(rename = "Lainnya")]
    Other,
}

impl ReportCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ReportCategory::IrrigationProblem => "Masalah Irigasi",
            ReportCategory::PestOutbreak => "Gangguan Hama",
            ReportCategory::WeatherCondition => "Kondisi Cuaca",
            ReportCategory::Other => "Lainnya",
        }
    }
}

/// A stored citizen report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Report {
    pub name: String,
    pub contact: String,
    pub category: ReportCategory,
    pub location: String,
    pub description: String,
    /// Local submission time, e.g. `19 October 2026 14:05`.
    pub timestamp: String,
    /// Relative path of the attached image under the uploads directory.
    #[serde(default)]
    pub image_path: Option<String>,
}

impl Record for Report {
    const KIND: &'static str = "reports";
}

/// Raw image bytes attached to a report submission.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

impl ImageUpload {
    /// Lower-cased extension, if it is one we accept.
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.file_name.rsplit_once('.')?;
        let ext = ext.to_ascii_lowercase();
        ALLOWED_IMAGE_EXTENSIONS
            .contains(&ext.as_str())
            .then_some(ext)
    }
}

/// Form input for a new report, before validation.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub name: String,
    pub contact: String,
    pub category: ReportCategory,
    pub location: String,
    pub description: String,
    pub image: Option<ImageUpload>,
}

// ============================================================================
// COMMODITY PRICES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    #[serde(rename = "Commodity")]
    pub commodity: String,
    #[serde(rename = "PricePerKg")]
    pub price_per_kg: i64,
}

impl PriceEntry {
    pub fn new(commodity: impl Into<String>, price_per_kg: i64) -> Self {
        Self {
            commodity: commodity.into(),
            price_per_kg,
        }
    }
}

impl Record for PriceEntry {
    const KIND: &'static str = "prices";

    /// Typical Sidrap commodities with their reference prices (Rp/kg).
    fn defaults() -> Vec<Self> {
        vec![
            PriceEntry::new("Padi", 7000),
            PriceEntry::new("Jagung", 5300),
            PriceEntry::new("Kopi", 8500),
            PriceEntry::new("Kakao", 12000),
            PriceEntry::new("Kelapa", 2500),
            PriceEntry::new("Porang", 10000),
        ]
    }
}

// ============================================================================
// DAILY TO-DO
// ============================================================================

/// Stored on disk as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoItem {
    pub task: String,
}

impl Record for TodoItem {
    const KIND: &'static str = "todos";
}
