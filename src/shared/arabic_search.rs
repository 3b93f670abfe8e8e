//! Arabic-aware text normalization for search and filtering.
//!
//! Folds the spelling variation people actually type: harakat are dropped,
//! hamza-carrying alifs become a bare alif, teh marbuta becomes heh and alef
//! maksura becomes yeh. Whitespace is trimmed and collapsed. Text in other
//! scripts only has its whitespace touched.

use once_cell::sync::Lazy;
use regex::Regex;

/// Tanween, short vowels, shadda and sukun (U+064B..=U+0652)
static HARAKAT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\x{064B}-\x{0652}]").unwrap());

/// Whitespace runs, counting a stray U+FEFF as whitespace
static WHITESPACE_RUN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x{FEFF}]+").unwrap());

const BARE_ALIF: char = '\u{0627}';
const HEH: char = '\u{0647}';
const YEH: char = '\u{064A}';
const ZERO_WIDTH_NO_BREAK_SPACE: char = '\u{FEFF}';

fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == ZERO_WIDTH_NO_BREAK_SPACE
}

#[inline]
fn unify_letter(c: char) -> char {
    match c {
        // أ إ آ
        '\u{0623}' | '\u{0625}' | '\u{0622}' => BARE_ALIF,
        // ة
        '\u{0629}' => HEH,
        // ى
        '\u{0649}' => YEH,
        other => other,
    }
}

/// Canonical form of `text` for comparison. Idempotent.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let stripped = HARAKAT_PATTERN.replace_all(text, "");
    let unified: String = stripped.chars().map(unify_letter).collect();

    WHITESPACE_RUN_PATTERN
        .replace_all(unified.trim_matches(is_blank_char), " ")
        .into_owned()
}

/// Whether `query` occurs in `target` once both are normalized.
///
/// An empty query matches everything; an empty target matches nothing else.
pub fn matches(target: &str, query: &str) -> bool {
    NormalizedQuery::new(query).matches(target)
}

/// A query normalized once and tested against many targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    raw_empty: bool,
    normalized: String,
}

impl NormalizedQuery {
    pub fn new(query: &str) -> Self {
        Self {
            raw_empty: query.is_empty(),
            normalized: normalize(query),
        }
    }

    /// True when the raw query was empty, i.e. it matches every target
    pub fn is_empty(&self) -> bool {
        self.raw_empty
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn matches(&self, target: &str) -> bool {
        if self.raw_empty {
            return true;
        }
        if target.is_empty() {
            return false;
        }
        normalize(target).contains(self.normalized.as_str())
    }
}
