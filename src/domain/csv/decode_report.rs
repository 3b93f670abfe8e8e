// ============================================================
// DECODE REPORT
// ============================================================
// Shape statistics collected while decoding a buffer

use serde::{Deserialize, Serialize};

use super::Row;

/// Summary of a single decode pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeReport {
    /// Number of rows produced
    pub row_count: usize,

    /// Field count of the widest row (0 when there are no rows)
    pub max_width: usize,

    /// Field count of the narrowest row (0 when there are no rows)
    pub min_width: usize,

    /// Whether a leading byte-order mark was removed
    pub bom_stripped: bool,

    /// Whether the input ended while a quoted field was still open
    pub unterminated_quote: bool,
}

impl DecodeReport {
    pub(crate) fn from_rows(rows: &[Row], bom_stripped: bool, unterminated_quote: bool) -> Self {
        let max_width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let min_width = rows.iter().map(Vec::len).min().unwrap_or(0);

        Self {
            row_count: rows.len(),
            max_width,
            min_width,
            bom_stripped,
            unterminated_quote,
        }
    }

    /// Whether rows differ in field count
    pub fn is_ragged(&self) -> bool {
        self.max_width != self.min_width
    }
}
