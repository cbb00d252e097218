// Runtime configuration, read from the environment (and `.env` via dotenv).

use crate::core::faq::DEFAULT_THRESHOLD;
use chrono_tz::Tz;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_TIMEZONE: &str = "Asia/Makassar";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing {0} environment variable! Create a .env file with your bot token.")]
    Missing(&'static str),
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub discord_token: String,
    pub reports_file: PathBuf,
    pub prices_file: PathBuf,
    pub todo_file: PathBuf,
    pub upload_dir: PathBuf,
    pub faq_threshold: f64,
    pub timezone: Tz,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let discord_token = get("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let data_dir = PathBuf::from(get("DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.into()));
        let file_in_data = |key: &str, default_name: &str| {
            get(key)
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join(default_name))
        };

        let faq_threshold = match get("FAQ_THRESHOLD") {
            Some(raw) => parse_threshold(&raw)?,
            None => DEFAULT_THRESHOLD,
        };

        let tz_name = get("REPORT_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.into());
        let timezone: Tz = tz_name.parse().map_err(|e| ConfigError::Invalid {
            key: "REPORT_TIMEZONE",
            value: tz_name.clone(),
            reason: format!("{}", e),
        })?;

        Ok(Self {
            discord_token,
            reports_file: file_in_data("REPORTS_FILE", "laporan_warga.json"),
            prices_file: file_in_data("PRICES_FILE", "harga_komoditas.json"),
            todo_file: file_in_data("TODO_FILE", "todo_harian.json"),
            upload_dir: PathBuf::from(
                get("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.into()),
            ),
            faq_threshold,
            timezone,
        })
    }
}

fn parse_threshold(raw: &str) -> Result<f64, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        key: "FAQ_THRESHOLD",
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid("not a number"))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(invalid("must be between 0 and 100"));
    }
    Ok(value)
}
