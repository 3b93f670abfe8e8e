// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Core types and value objects for delimited-text decoding
// No I/O, no async, no external dependencies

mod decode_report;
mod trim_mode;

pub use decode_report::DecodeReport;
pub use trim_mode::TrimMode;

/// One decoded row; rows may differ in length
pub type Row = Vec<String>;
