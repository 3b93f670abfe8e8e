// ============================================================
// TRIM MODE
// ============================================================
// How the decoder strips whitespace from completed fields

use serde::{Deserialize, Serialize};

/// Whitespace policy applied to every completed field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimMode {
    /// Strip leading/trailing whitespace from every field, quoted or not
    /// (matches what the sheet export consumers have always seen)
    #[default]
    All,

    /// Strip only whitespace read outside quotes; quoted content is kept verbatim
    UnquotedOnly,

    /// Keep fields exactly as accumulated
    None,
}
