//! Roster ingestion core for the study-circle registry.
//!
//! Decodes the spreadsheet's CSV export into rows, maps rows into
//! [`Student`](domain::student::Student) records by position, and searches
//! them with Arabic-aware matching.

mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use app::run;
pub use domain::error::{AppError, Result};
pub use infrastructure::csv::{decode, CsvDecoder};
pub use shared::arabic_search::{matches, normalize, NormalizedQuery};
