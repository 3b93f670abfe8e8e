// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Roster CSV decoding and export

mod csv_decoder;
mod csv_exporter;

pub use csv_decoder::{decode, CsvDecoder};
pub use csv_exporter::write_roster_csv;
