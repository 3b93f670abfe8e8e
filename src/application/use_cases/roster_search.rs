//! Roster search: a global query across every column, AND-ed with optional
//! per-column filters. All comparisons go through the Arabic-aware matcher.

use std::collections::BTreeSet;

use crate::domain::roster_query::RosterQuery;
use crate::domain::student::{Student, StudentField};
use crate::shared::arabic_search::NormalizedQuery;

/// Compiled form of a [`RosterQuery`]; queries are normalized once
#[derive(Debug, Clone)]
pub struct RosterFilter {
    global: Option<NormalizedQuery>,
    columns: Vec<(StudentField, NormalizedQuery)>,
}

impl RosterFilter {
    pub fn new(query: &RosterQuery) -> Self {
        let global = Some(NormalizedQuery::new(&query.global)).filter(|q| !q.is_empty());
        let columns = query
            .columns
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(field, value)| (*field, NormalizedQuery::new(value)))
            .collect();

        Self { global, columns }
    }

    /// True when the filter lets every record through
    pub fn is_empty(&self) -> bool {
        self.global.is_none() && self.columns.is_empty()
    }

    pub fn accepts(&self, student: &Student) -> bool {
        let matches_global = self
            .global
            .as_ref()
            .map_or(true, |query| student.values().any(|value| query.matches(value)));

        matches_global
            && self
                .columns
                .iter()
                .all(|(field, query)| query.matches(student.get(*field)))
    }

    pub fn apply<'a>(&self, students: &'a [Student]) -> Vec<&'a Student> {
        students.iter().filter(|s| self.accepts(s)).collect()
    }
}

/// Sorted, de-duplicated non-empty values of one column
pub fn distinct_values(students: &[Student], field: StudentField) -> Vec<String> {
    students
        .iter()
        .map(|s| s.get(field))
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
