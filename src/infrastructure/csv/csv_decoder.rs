// ============================================================
// CSV DECODER
// ============================================================
// Permissive, single-pass decoder for spreadsheet CSV exports

use tracing::{debug, warn};

use crate::domain::csv::{DecodeReport, Row, TrimMode};

const BYTE_ORDER_MARK: char = '\u{FEFF}';
const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Decode a whole buffer with the default settings (trim every field)
pub fn decode(text: &str) -> Vec<Row> {
    CsvDecoder::new().decode(text)
}

/// Character-level CSV decoder.
///
/// Never fails: unbalanced quotes and ragged rows are passed through as
/// best-effort rows. `,` separates fields, `"` quotes, and any of `\r\n`,
/// `\r`, `\n` ends a row outside quotes. Lines that produce no content do
/// not produce rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvDecoder {
    trim: TrimMode,
}

impl CsvDecoder {
    /// Create a new decoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field whitespace policy
    pub fn with_trim(mut self, trim: TrimMode) -> Self {
        self.trim = trim;
        self
    }

    /// Decode a buffer into rows of fields
    pub fn decode(&self, text: &str) -> Vec<Row> {
        self.decode_with_report(text).0
    }

    /// Decode a buffer and describe the shape of the result
    pub fn decode_with_report(&self, text: &str) -> (Vec<Row>, DecodeReport) {
        let (body, bom_stripped) = match text.strip_prefix(BYTE_ORDER_MARK) {
            Some(rest) => (rest, true),
            None => (text, false),
        };

        let mut rows: Vec<Row> = Vec::new();
        let mut row: Row = Vec::new();
        let mut field = FieldBuffer::default();
        let mut in_quotes = false;
        let mut chars = body.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                QUOTE if in_quotes && chars.peek() == Some(&QUOTE) => {
                    chars.next();
                    field.push_quoted(QUOTE);
                }
                QUOTE => in_quotes = !in_quotes,
                DELIMITER if !in_quotes => row.push(field.finish(self.trim)),
                '\r' | '\n' if !in_quotes => {
                    if ch == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    if !field.is_empty() || !row.is_empty() {
                        row.push(field.finish(self.trim));
                        rows.push(std::mem::take(&mut row));
                    }
                }
                _ if in_quotes => field.push_quoted(ch),
                _ => field.push(ch),
            }
        }

        if !field.is_empty() || !row.is_empty() {
            row.push(field.finish(self.trim));
            rows.push(row);
        }

        if in_quotes {
            warn!(rows = rows.len(), "CSV input ended inside a quoted field");
        }

        let report = DecodeReport::from_rows(&rows, bom_stripped, in_quotes);
        debug!(
            rows = report.row_count,
            max_width = report.max_width,
            min_width = report.min_width,
            bom_stripped = report.bom_stripped,
            "Decoded CSV buffer"
        );

        (rows, report)
    }
}

/// Field accumulator that remembers which bytes were read inside quotes
#[derive(Debug, Default)]
struct FieldBuffer {
    text: String,
    /// Byte span from the first to the last quoted character
    quoted: Option<(usize, usize)>,
}

impl FieldBuffer {
    fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    fn push_quoted(&mut self, ch: char) {
        let start = self.text.len();
        self.text.push(ch);
        let end = self.text.len();

        self.quoted = Some(match self.quoted {
            Some((first, _)) => (first, end),
            None => (start, end),
        });
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Take the accumulated value, leaving the buffer empty
    fn finish(&mut self, trim: TrimMode) -> String {
        let FieldBuffer { text, quoted } = std::mem::take(self);

        match (trim, quoted) {
            (TrimMode::None, _) => text,
            (TrimMode::All, _) | (TrimMode::UnquotedOnly, None) => text.trim().to_string(),
            (TrimMode::UnquotedOnly, Some((start, end))) => {
                let mut value = String::with_capacity(text.len());
                value.push_str(text[..start].trim_start());
                value.push_str(&text[start..end]);
                value.push_str(text[end..].trim_end());
                value
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(expected: &[&[&str]]) -> Vec<Row> {
        expected
            .iter()
            .map(|row| row.iter().map(|f| f.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(decode("").is_empty());
        assert!(decode("\u{FEFF}").is_empty());
    }

    #[test]
    fn test_parse_simple_rows() {
        assert_eq!(
            decode("a,b,c\n1,2,3"),
            rows(&[&["a", "b", "c"], &["1", "2", "3"]])
        );
    }

    #[test]
    fn test_quoted_delimiter() {
        assert_eq!(decode("\"x,y\",z"), rows(&[&["x,y", "z"]]));
    }

    #[test]
    fn test_quoted_newline_is_content() {
        let decoded = decode("\"line1\nline2\",z");

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0][0], "line1\nline2");
        assert_eq!(decoded[0][1], "z");
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(
            decode("\"say \"\"hi\"\"\",ok"),
            rows(&[&["say \"hi\"", "ok"]])
        );
    }

    #[test]
    fn test_no_spurious_trailing_row() {
        assert_eq!(decode("a,b"), rows(&[&["a", "b"]]));
        assert_eq!(decode("a,b\n"), rows(&[&["a", "b"]]));
        assert_eq!(decode("a,b\r\n"), rows(&[&["a", "b"]]));
    }

    #[test]
    fn test_byte_order_mark_stripped() {
        assert_eq!(decode("\u{FEFF}a,b"), rows(&[&["a", "b"]]));

        let (_, report) = CsvDecoder::new().decode_with_report("\u{FEFF}a,b");
        assert!(report.bom_stripped);
    }

    #[test]
    fn test_only_leading_bom_is_stripped() {
        let decoded = decode("a,\u{FEFF}b");
        assert_eq!(decoded[0][1], "\u{FEFF}b");
    }

    #[test]
    fn test_line_terminators_are_equivalent() {
        let expected = rows(&[&["a", "b"], &["c", "d"]]);

        assert_eq!(decode("a,b\nc,d"), expected);
        assert_eq!(decode("a,b\r\nc,d"), expected);
        assert_eq!(decode("a,b\rc,d"), expected);
    }

    #[test]
    fn test_blank_lines_produce_no_rows() {
        assert_eq!(
            decode("a,b\n\n\r\n\nc,d\n"),
            rows(&[&["a", "b"], &["c", "d"]])
        );
    }

    #[test]
    fn test_ragged_rows_preserved() {
        let (decoded, report) = CsvDecoder::new().decode_with_report("a,b,c\nd\ne,f");

        assert_eq!(decoded, rows(&[&["a", "b", "c"], &["d"], &["e", "f"]]));
        assert_eq!(report.max_width, 3);
        assert_eq!(report.min_width, 1);
        assert!(report.is_ragged());
    }

    #[test]
    fn test_empty_fields_kept() {
        assert_eq!(decode("a,,c,"), rows(&[&["a", "", "c", ""]]));
        assert_eq!(decode(",\n"), rows(&[&["", ""]]));
    }

    #[test]
    fn test_fields_trimmed_by_default() {
        assert_eq!(
            decode("  a  , \" b \" ,c\t"),
            rows(&[&["a", "b", "c"]])
        );
    }

    #[test]
    fn test_unquoted_only_keeps_quoted_whitespace() {
        let decoder = CsvDecoder::new().with_trim(TrimMode::UnquotedOnly);

        assert_eq!(decoder.decode("\" a \",b"), rows(&[&[" a ", "b"]]));
        assert_eq!(decoder.decode("  \" a \"  , b "), rows(&[&[" a ", "b"]]));
    }

    #[test]
    fn test_trim_none_keeps_everything() {
        let decoder = CsvDecoder::new().with_trim(TrimMode::None);
        assert_eq!(decoder.decode(" a , b "), rows(&[&[" a ", " b "]]));
    }

    #[test]
    fn test_unbalanced_quote_is_accepted() {
        let (decoded, report) = CsvDecoder::new().decode_with_report("a,\"b,c\nd");

        assert_eq!(decoded, rows(&[&["a", "b,c\nd"]]));
        assert!(report.unterminated_quote);
    }

    #[test]
    fn test_arabic_content() {
        let decoded = decode("م,اسم الدارس\n1,\"عبدالله، الأحمد\"");

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[1][1], "عبدالله، الأحمد");
    }
}
