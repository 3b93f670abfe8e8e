pub mod error;
pub mod roster_config;
pub mod roster_query;
pub mod student;

// Delimited-text decoding types
pub mod csv;
