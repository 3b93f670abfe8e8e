// ============================================================
// ROSTER LOADER USE CASE
// ============================================================
// Fetch the export, decode it, drop the header and map rows to records

use std::time::Instant;

use tracing::{debug, info};

use crate::domain::csv::{Row, TrimMode};
use crate::domain::error::Result;
use crate::domain::roster_config::{HeaderMode, RosterConfig};
use crate::domain::student::Student;
use crate::infrastructure::csv::CsvDecoder;
use crate::infrastructure::sheets::SheetSource;
use crate::shared::arabic_search::matches;

/// Roster loading use case
pub struct RosterLoader {
    source: Box<dyn SheetSource>,
    decoder: CsvDecoder,
    header_mode: HeaderMode,
    header_markers: Vec<String>,
}

impl RosterLoader {
    /// Create a loader with default header and trim handling
    pub fn new(source: Box<dyn SheetSource>) -> Self {
        let defaults = RosterConfig::default();
        Self::from_config(source, &defaults)
    }

    pub fn from_config(source: Box<dyn SheetSource>, config: &RosterConfig) -> Self {
        Self {
            source,
            decoder: CsvDecoder::new().with_trim(config.trim_mode),
            header_mode: config.header_mode,
            header_markers: config.header_markers.clone(),
        }
    }

    pub fn with_header_mode(mut self, header_mode: HeaderMode) -> Self {
        self.header_mode = header_mode;
        self
    }

    pub fn with_header_markers(mut self, markers: Vec<String>) -> Self {
        self.header_markers = markers;
        self
    }

    pub fn with_trim(mut self, trim: TrimMode) -> Self {
        self.decoder = self.decoder.with_trim(trim);
        self
    }

    /// Fetch and map the whole roster
    pub async fn load(&self) -> Result<Vec<Student>> {
        let text = self.source.fetch_text().await?;
        debug!(source = %self.source.describe(), "Roster export received");
        Ok(self.load_text(&text))
    }

    /// Map an already fetched export
    pub fn load_text(&self, text: &str) -> Vec<Student> {
        let start = Instant::now();
        let (rows, report) = self.decoder.decode_with_report(text);
        let students = map_rows(rows, self.header_mode, &self.header_markers);

        info!(
            rows = report.row_count,
            students = students.len(),
            ragged = report.is_ragged(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Roster loaded"
        );
        students
    }
}

/// Whether a row looks like the sheet's heading row
pub fn is_header_row(row: &[String], markers: &[String]) -> bool {
    row.iter().any(|cell| {
        markers
            .iter()
            .filter(|marker| !marker.trim().is_empty())
            .any(|marker| matches(cell, marker))
    })
}

/// Positional mapping of decoded rows into records.
///
/// The first row is dropped per `header_mode`; rows whose fields are all
/// empty are skipped.
pub fn map_rows(rows: Vec<Row>, header_mode: HeaderMode, markers: &[String]) -> Vec<Student> {
    let skip_first = match header_mode {
        HeaderMode::Skip => !rows.is_empty(),
        HeaderMode::Keep => false,
        HeaderMode::Detect => rows.first().is_some_and(|row| is_header_row(row, markers)),
    };
    if skip_first {
        debug!(?header_mode, "Dropping header row");
    }

    rows.iter()
        .skip(usize::from(skip_first))
        .filter(|row| row.iter().any(|field| !field.is_empty()))
        .map(|row| Student::from_row(row))
        .collect()
}
