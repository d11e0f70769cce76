//! # Student Record
//!
//! The student data embedded in an issued document. Once embedded, the
//! record is covered by the document's integrity digest: any later edit
//! to these fields is detectable at verification time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Academic track of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcademicTrack {
    /// Primary education (classes 1-7).
    Primary,
    /// Secondary education (classes 8-12).
    Secondary,
}

impl std::fmt::Display for AcademicTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Secondary => f.write_str("secondary"),
        }
    }
}

/// A student as embedded in a transfer document.
///
/// Scores in [`grades`](Self::grades) are kept as strings exactly as
/// entered ("15", "17,5"); they are displayed, never computed with, and
/// string form keeps the canonical digest input stable.
///
/// The shape is closed (`deny_unknown_fields`): these fields feed the
/// integrity digest, so an unrecognized field in stored data is corruption,
/// not extensibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentRecord {
    /// Full legal name.
    #[serde(rename = "nomeCompleto")]
    pub full_name: String,

    /// National identity number (Bilhete de Identidade).
    #[serde(rename = "numeroBi")]
    pub id_number: String,

    /// Date of enrollment at the origin school, ISO `YYYY-MM-DD`.
    #[serde(rename = "dataMatricula")]
    pub enrollment_date: String,

    /// Grade level ("classe"), e.g. `"11"`.
    #[serde(rename = "classe")]
    pub grade_level: String,

    /// Academic track, duplicated onto the document at issuance.
    #[serde(rename = "nivelAcademico")]
    pub track: AcademicTrack,

    /// Per-subject scores, subject key → score string.
    /// A `BTreeMap` keeps serialization order stable.
    #[serde(rename = "notas", default)]
    pub grades: BTreeMap<String, String>,

    /// Free-text remarks from the issuing school.
    #[serde(rename = "observacoes", default)]
    pub remarks: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StudentRecord {
        StudentRecord {
            full_name: "Maria Silva".to_string(),
            id_number: "987654321".to_string(),
            enrollment_date: "2023-02-01".to_string(),
            grade_level: "11".to_string(),
            track: AcademicTrack::Secondary,
            grades: BTreeMap::from([
                ("matematica".to_string(), "15".to_string()),
                ("portugues".to_string(), "14".to_string()),
            ]),
            remarks: String::new(),
        }
    }

    #[test]
    fn test_serializes_with_portuguese_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["nomeCompleto"], "Maria Silva");
        assert_eq!(json["numeroBi"], "987654321");
        assert_eq!(json["nivelAcademico"], "secondary");
        assert_eq!(json["notas"]["matematica"], "15");
    }

    #[test]
    fn test_roundtrip() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let back: StudentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = r#"{
            "nomeCompleto": "x", "numeroBi": "1", "dataMatricula": "2023-02-01",
            "classe": "8", "nivelAcademico": "primary", "notas": {},
            "observacoes": "", "extra": true
        }"#;
        assert!(serde_json::from_str::<StudentRecord>(json).is_err());
    }

    #[test]
    fn test_missing_optional_collections_default() {
        let json = r#"{
            "nomeCompleto": "x", "numeroBi": "1", "dataMatricula": "2023-02-01",
            "classe": "8", "nivelAcademico": "primary"
        }"#;
        let record: StudentRecord = serde_json::from_str(json).unwrap();
        assert!(record.grades.is_empty());
        assert!(record.remarks.is_empty());
    }

    #[test]
    fn test_track_serialization() {
        assert_eq!(
            serde_json::to_string(&AcademicTrack::Primary).unwrap(),
            "\"primary\""
        );
        assert_eq!(AcademicTrack::Secondary.to_string(), "secondary");
    }
}
