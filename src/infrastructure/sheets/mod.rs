mod google_sheets;

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::error::Result;

pub use google_sheets::SheetClient;

/// Anything that can hand over the raw roster export as text
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_text(&self) -> Result<String>;

    /// Human-readable origin, used in logs
    fn describe(&self) -> String;
}

/// In-memory export, for tests and piping
pub struct StaticSheetSource {
    text: String,
}

impl StaticSheetSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl SheetSource for StaticSheetSource {
    async fn fetch_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} bytes)", self.text.len())
    }
}

/// Export previously downloaded to a local file
pub struct FileSheetSource {
    path: PathBuf,
}

impl FileSheetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SheetSource for FileSheetSource {
    async fn fetch_text(&self) -> Result<String> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(decode_utf8(&bytes))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Decode export bytes as UTF-8, replacing malformed sequences.
///
/// A leading byte-order mark is kept; the CSV decoder strips it.
pub fn decode_utf8(bytes: &[u8]) -> String {
    let (text, had_errors) = encoding_rs::UTF_8.decode_without_bom_handling(bytes);
    if had_errors {
        warn!(bytes = bytes.len(), "Roster export contained invalid UTF-8; replaced");
    }
    text.into_owned()
}
