pub mod use_cases;

pub use use_cases::roster_loader::RosterLoader;
pub use use_cases::roster_search::{distinct_values, RosterFilter};
