//! Student roster record and its positional column schema.
//!
//! The sheet export carries no stable header names, so every column is bound
//! purely by index. `StudentField::ALL` is that index order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::AppError;

/// A single roster row mapped into the fixed 20-column schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub nationality: String,
    pub dob: String,
    pub phone: String,
    pub age: String,
    pub qualification: String,
    pub job: String,
    pub address: String,
    pub reg_date: String,
    pub level: String,
    pub part: String,
    pub national_id: String,
    pub category: String,
    pub period: String,
    pub expiry_id: String,
    pub teacher: String,
    pub fees: String,
    pub circle: String,
    pub completion: String,
}

impl Student {
    /// Map a decoded row by position.
    ///
    /// Indices past the end of the row become empty strings; fields beyond
    /// the twentieth are ignored.
    pub fn from_row(row: &[String]) -> Self {
        let cell = |field: StudentField| row.get(field.index()).cloned().unwrap_or_default();

        Self {
            id: cell(StudentField::Id),
            name: cell(StudentField::Name),
            nationality: cell(StudentField::Nationality),
            dob: cell(StudentField::Dob),
            phone: cell(StudentField::Phone),
            age: cell(StudentField::Age),
            qualification: cell(StudentField::Qualification),
            job: cell(StudentField::Job),
            address: cell(StudentField::Address),
            reg_date: cell(StudentField::RegDate),
            level: cell(StudentField::Level),
            part: cell(StudentField::Part),
            national_id: cell(StudentField::NationalId),
            category: cell(StudentField::Category),
            period: cell(StudentField::Period),
            expiry_id: cell(StudentField::ExpiryId),
            teacher: cell(StudentField::Teacher),
            fees: cell(StudentField::Fees),
            circle: cell(StudentField::Circle),
            completion: cell(StudentField::Completion),
        }
    }

    pub fn get(&self, field: StudentField) -> &str {
        match field {
            StudentField::Id => &self.id,
            StudentField::Name => &self.name,
            StudentField::Nationality => &self.nationality,
            StudentField::Dob => &self.dob,
            StudentField::Phone => &self.phone,
            StudentField::Age => &self.age,
            StudentField::Qualification => &self.qualification,
            StudentField::Job => &self.job,
            StudentField::Address => &self.address,
            StudentField::RegDate => &self.reg_date,
            StudentField::Level => &self.level,
            StudentField::Part => &self.part,
            StudentField::NationalId => &self.national_id,
            StudentField::Category => &self.category,
            StudentField::Period => &self.period,
            StudentField::ExpiryId => &self.expiry_id,
            StudentField::Teacher => &self.teacher,
            StudentField::Fees => &self.fees,
            StudentField::Circle => &self.circle,
            StudentField::Completion => &self.completion,
        }
    }

    /// All field values in column order
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        StudentField::ALL.into_iter().map(move |field| self.get(field))
    }
}

/// Column of the roster schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StudentField {
    Id,
    Name,
    Nationality,
    Dob,
    Phone,
    Age,
    Qualification,
    Job,
    Address,
    RegDate,
    Level,
    Part,
    NationalId,
    Category,
    Period,
    ExpiryId,
    Teacher,
    Fees,
    Circle,
    Completion,
}

impl StudentField {
    /// Every column, in sheet order
    pub const ALL: [StudentField; 20] = [
        StudentField::Id,
        StudentField::Name,
        StudentField::Nationality,
        StudentField::Dob,
        StudentField::Phone,
        StudentField::Age,
        StudentField::Qualification,
        StudentField::Job,
        StudentField::Address,
        StudentField::RegDate,
        StudentField::Level,
        StudentField::Part,
        StudentField::NationalId,
        StudentField::Category,
        StudentField::Period,
        StudentField::ExpiryId,
        StudentField::Teacher,
        StudentField::Fees,
        StudentField::Circle,
        StudentField::Completion,
    ];

    /// Zero-based column index in the sheet export
    pub fn index(self) -> usize {
        self as usize
    }

    /// JSON key of the column
    pub fn key(self) -> &'static str {
        match self {
            StudentField::Id => "id",
            StudentField::Name => "name",
            StudentField::Nationality => "nationality",
            StudentField::Dob => "dob",
            StudentField::Phone => "phone",
            StudentField::Age => "age",
            StudentField::Qualification => "qualification",
            StudentField::Job => "job",
            StudentField::Address => "address",
            StudentField::RegDate => "regDate",
            StudentField::Level => "level",
            StudentField::Part => "part",
            StudentField::NationalId => "nationalId",
            StudentField::Category => "category",
            StudentField::Period => "period",
            StudentField::ExpiryId => "expiryId",
            StudentField::Teacher => "teacher",
            StudentField::Fees => "fees",
            StudentField::Circle => "circle",
            StudentField::Completion => "completion",
        }
    }

    /// Column heading as it appears in the sheet
    pub fn label(self) -> &'static str {
        match self {
            StudentField::Id => "م",
            StudentField::Name => "اسم الدارس",
            StudentField::Nationality => "الجنسية",
            StudentField::Dob => "تاريخ الميلاد",
            StudentField::Phone => "رقم الهاتف",
            StudentField::Age => "العمر",
            StudentField::Qualification => "المؤهل الدراسي",
            StudentField::Job => "العمل",
            StudentField::Address => "السكن",
            StudentField::RegDate => "تاريخ التسجيل",
            StudentField::Level => "المستوى",
            StudentField::Part => "الجزء",
            StudentField::NationalId => "رقم الهوية",
            StudentField::Category => "الفئة",
            StudentField::Period => "الفترة",
            StudentField::ExpiryId => "انتهاء الهوية",
            StudentField::Teacher => "اسم المحفظ",
            StudentField::Fees => "الرسوم",
            StudentField::Circle => "الحلقة",
            StudentField::Completion => "نسبة اكتمال المعلومات",
        }
    }
}

impl fmt::Display for StudentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StudentField {
    type Err = AppError;

    /// Accepts the JSON key (ASCII case-insensitive) or the sheet heading
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StudentField::ALL
            .iter()
            .copied()
            .find(|field| field.key().eq_ignore_ascii_case(wanted) || field.label() == wanted)
            .ok_or_else(|| AppError::ValidationError(format!("Unknown roster column: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_from_row_pads_short_rows() {
        let student = Student::from_row(&row(&["7", "أحمد علي", "مصري"]));

        assert_eq!(student.id, "7");
        assert_eq!(student.name, "أحمد علي");
        assert_eq!(student.nationality, "مصري");
        assert_eq!(student.dob, "");
        assert_eq!(student.completion, "");
    }

    #[test]
    fn test_from_row_ignores_extra_fields() {
        let mut values: Vec<String> = (0..25).map(|i| i.to_string()).collect();
        values[19] = "90%".to_string();
        let student = Student::from_row(&values);

        assert_eq!(student.completion, "90%");
        assert_eq!(student.values().count(), 20);
    }

    #[test]
    fn test_field_index_follows_sheet_order() {
        for (position, field) in StudentField::ALL.iter().enumerate() {
            assert_eq!(field.index(), position);
        }
        assert_eq!(StudentField::Teacher.index(), 16);
        assert_eq!(StudentField::Completion.index(), 19);
    }

    #[test]
    fn test_get_matches_from_row_position() {
        let values: Vec<String> = (0..20).map(|i| format!("v{}", i)).collect();
        let student = Student::from_row(&values);

        for field in StudentField::ALL {
            assert_eq!(student.get(field), format!("v{}", field.index()));
        }
    }

    #[test]
    fn test_field_from_key_and_label() {
        assert_eq!("teacher".parse::<StudentField>().unwrap(), StudentField::Teacher);
        assert_eq!("NATIONALID".parse::<StudentField>().unwrap(), StudentField::NationalId);
        assert_eq!("اسم المحفظ".parse::<StudentField>().unwrap(), StudentField::Teacher);
        assert!("salary".parse::<StudentField>().is_err());
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let student = Student {
            reg_date: "2024-01-01".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&student).unwrap();

        assert_eq!(json["regDate"], "2024-01-01");
        assert!(json.get("expiryId").is_some());
    }
}
