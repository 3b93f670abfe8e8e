// ============================================================
// ROSTER CONFIGURATION
// ============================================================
// Where the roster export lives and how its rows are read

use serde::{Deserialize, Serialize};
use url::Url;

use super::csv::TrimMode;
use super::error::{AppError, Result};

/// How the first decoded row is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// Always drop the first row (the published export always carries headings)
    #[default]
    Skip,

    /// Treat every row as data
    Keep,

    /// Drop the first row only when it contains one of the header markers
    Detect,
}

/// Configuration for loading the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Spreadsheet document id, used when `csv_url` is not set
    pub sheet_id: String,

    /// Worksheet id inside the spreadsheet (default: 0)
    pub gid: u64,

    /// Explicit CSV export URL; overrides `sheet_id`/`gid`
    pub csv_url: Option<String>,

    /// HTTP timeout for the export request (default: 30)
    pub request_timeout_secs: u64,

    /// Header row handling (default: skip)
    pub header_mode: HeaderMode,

    /// Labels that identify a header row in `HeaderMode::Detect`
    pub header_markers: Vec<String>,

    /// Field whitespace policy (default: all)
    pub trim_mode: TrimMode,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            sheet_id: String::new(),
            gid: 0,
            csv_url: None,
            request_timeout_secs: 30,
            header_mode: HeaderMode::Skip,
            header_markers: vec!["اسم الدارس".to_string(), "الاسم".to_string()],
            trim_mode: TrimMode::All,
        }
    }
}

impl RosterConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be > 0".to_string());
        }
        if !self
            .sheet_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err("sheet_id may only contain letters, digits, '-' and '_'".to_string());
        }
        if self.header_mode == HeaderMode::Detect
            && self.header_markers.iter().all(|m| m.trim().is_empty())
        {
            return Err("header_mode = detect requires at least one header marker".to_string());
        }
        Ok(())
    }

    /// Resolve the CSV export URL
    pub fn export_url(&self) -> Result<Url> {
        if let Some(explicit) = self.csv_url.as_deref().filter(|u| !u.trim().is_empty()) {
            return Url::parse(explicit.trim())
                .map_err(|e| AppError::ConfigError(format!("Invalid csv_url: {}", e)));
        }

        if self.sheet_id.is_empty() {
            return Err(AppError::ConfigError(
                "Either csv_url or sheet_id must be configured".to_string(),
            ));
        }

        let url = format!(
            "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:csv&gid={}",
            self.sheet_id, self.gid
        );
        Url::parse(&url).map_err(|e| AppError::ConfigError(format!("Invalid sheet url: {}", e)))
    }
}
