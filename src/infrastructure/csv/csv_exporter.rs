// ============================================================
// CSV EXPORTER
// ============================================================
// Write roster records as a spreadsheet-friendly CSV file

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};
use tracing::debug;

use crate::domain::error::Result;
use crate::domain::student::{Student, StudentField};

/// UTF-8 byte-order mark; spreadsheet tools need it to detect Arabic text
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write records as CSV: BOM, a row of sheet headings, then one row per record.
///
/// Every field is quoted so edge whitespace survives a reload with
/// `TrimMode::UnquotedOnly`. Records with no non-empty field are not written;
/// the loader would drop them as blank rows anyway.
pub fn write_roster_csv<W: Write>(students: &[Student], mut writer: W) -> Result<()> {
    writer.write_all(UTF8_BOM)?;

    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);
    csv_writer.write_record(StudentField::ALL.iter().map(|field| field.label()))?;

    let mut written = 0usize;
    for student in students.iter().filter(|s| !is_blank(s)) {
        csv_writer.write_record(student.values())?;
        written += 1;
    }

    csv_writer.flush()?;
    debug!(
        rows = written,
        skipped_blank = students.len() - written,
        "Wrote roster CSV"
    );

    Ok(())
}

fn is_blank(student: &Student) -> bool {
    student.values().all(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::csv::TrimMode;
    use crate::infrastructure::csv::{decode, CsvDecoder};

    fn sample() -> Vec<Student> {
        vec![
            Student {
                id: "1".to_string(),
                name: "عبدالله الأحمد".to_string(),
                address: "الرياض, حي النسيم".to_string(),
                teacher: "الشيخ \"أبو محمد\"".to_string(),
                ..Default::default()
            },
            Student {
                id: "2".to_string(),
                name: "فاطمة".to_string(),
                job: "معلمة\nمتقاعدة".to_string(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_export_starts_with_bom_and_headings() {
        let mut buffer = Vec::new();
        write_roster_csv(&sample(), &mut buffer).unwrap();

        assert!(buffer.starts_with(UTF8_BOM));
        let text = String::from_utf8(buffer).unwrap();
        let first_line = text.trim_start_matches('\u{FEFF}').lines().next().unwrap();
        assert!(first_line.starts_with("\"م\",\"اسم الدارس\",\"الجنسية\""));
    }

    #[test]
    fn test_export_decodes_back_to_same_records() {
        let students = sample();
        let mut buffer = Vec::new();
        write_roster_csv(&students, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let rows = decode(&text);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 20);
        let decoded: Vec<Student> = rows[1..].iter().map(|row| Student::from_row(row)).collect();
        assert_eq!(decoded, students);
    }

    #[test]
    fn test_export_keeps_edge_whitespace() {
        let students = vec![Student {
            id: "1".to_string(),
            name: " padded ".to_string(),
            ..Default::default()
        }];
        let mut buffer = Vec::new();
        write_roster_csv(&students, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let rows = CsvDecoder::new()
            .with_trim(TrimMode::UnquotedOnly)
            .decode(&text);
        assert_eq!(Student::from_row(&rows[1]).name, " padded ");
    }

    #[test]
    fn test_export_skips_blank_records() {
        let students = vec![
            Student::default(),
            Student {
                id: "2".to_string(),
                ..Default::default()
            },
        ];
        let mut buffer = Vec::new();
        write_roster_csv(&students, &mut buffer).unwrap();

        let rows = decode(&String::from_utf8(buffer).unwrap());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "2");
    }

    #[test]
    fn test_export_empty_roster_writes_headings_only() {
        let mut buffer = Vec::new();
        write_roster_csv(&[], &mut buffer).unwrap();

        let rows = decode(&String::from_utf8(buffer).unwrap());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][19], "نسبة اكتمال المعلومات");
    }
}
