use std::collections::BTreeMap;

use super::student::StudentField;

/// Search box contents: one global query plus optional per-column filters.
///
/// Empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterQuery {
    pub global: String,
    pub columns: BTreeMap<StudentField, String>,
}

impl RosterQuery {
    pub fn global(query: impl Into<String>) -> Self {
        Self {
            global: query.into(),
            columns: BTreeMap::new(),
        }
    }

    pub fn with_column(mut self, field: StudentField, query: impl Into<String>) -> Self {
        self.columns.insert(field, query.into());
        self
    }
}
