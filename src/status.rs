//! Translation status classification.
//!
//! Statuses and severities are closed sets with a catch-all `Unknown` arm, so
//! reports written by a newer exporter still load and render.

use crate::models::TranslationRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MatrixError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationStatus {
    UpToDate,
    Outdated,
    NotTranslated,
    #[serde(other)]
    Unknown,
}

impl TranslationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationStatus::UpToDate => "up_to_date",
            TranslationStatus::Outdated => "outdated",
            TranslationStatus::NotTranslated => "not_translated",
            TranslationStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationStatus {
    type Err = MatrixError;

    /// Strict parse for user input; `unknown` is not a filterable status.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up_to_date" => Ok(TranslationStatus::UpToDate),
            "outdated" => Ok(TranslationStatus::Outdated),
            "not_translated" => Ok(TranslationStatus::NotTranslated),
            other => Err(MatrixError::InvalidParameter {
                param: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// Staleness grade of an outdated translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Current,
    Minor,
    Moderate,
    Significant,
    Critical,
    #[serde(other)]
    Unknown,
}

/// Symbol and label used to render a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDescriptor {
    pub symbol: &'static str,
    pub label: &'static str,
}

pub fn classify_status(status: TranslationStatus) -> StatusDescriptor {
    match status {
        TranslationStatus::UpToDate => StatusDescriptor {
            symbol: "✓",
            label: "Up to date",
        },
        TranslationStatus::Outdated => StatusDescriptor {
            symbol: "!",
            label: "Outdated",
        },
        TranslationStatus::NotTranslated => StatusDescriptor {
            symbol: "—",
            label: "Not translated",
        },
        TranslationStatus::Unknown => StatusDescriptor {
            symbol: "-",
            label: "Unknown",
        },
    }
}

/// Badge for a record. Total over every status value.
pub fn classify(record: &TranslationRecord) -> StatusDescriptor {
    classify_status(record.status)
}

/// Status with a severity consistent with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub status: TranslationStatus,
    pub severity: Severity,
}

/// Pair the record's status with a normalized severity.
///
/// Up-to-date translations are always `Current`; outdated translations are at
/// least `Minor`. Other statuses keep whatever severity the exporter wrote.
pub fn grade(record: &TranslationRecord) -> Classification {
    let severity = match (record.status, record.severity) {
        (TranslationStatus::UpToDate, _) => Severity::Current,
        (TranslationStatus::Outdated, Severity::Current | Severity::Unknown) => Severity::Minor,
        (_, severity) => severity,
    };

    Classification {
        status: record.status,
        severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: TranslationStatus, severity: Severity) -> TranslationRecord {
        let mut record = TranslationRecord::new(status);
        record.severity = severity;
        record
    }

    // ==================== classify Tests ====================

    #[test]
    fn test_classify_up_to_date() {
        let descriptor = classify(&record(TranslationStatus::UpToDate, Severity::Current));
        assert_eq!(descriptor.symbol, "✓");
        assert_eq!(descriptor.label, "Up to date");
    }

    #[test]
    fn test_classify_outdated() {
        let descriptor = classify(&record(TranslationStatus::Outdated, Severity::Critical));
        assert_eq!(descriptor.symbol, "!");
        assert_eq!(descriptor.label, "Outdated");
    }

    #[test]
    fn test_classify_not_translated() {
        let descriptor = classify(&record(TranslationStatus::NotTranslated, Severity::Current));
        assert_eq!(descriptor.symbol, "—");
        assert_eq!(descriptor.label, "Not translated");
    }

    #[test]
    fn test_classify_unknown_status_from_json() {
        let record: TranslationRecord =
            serde_json::from_str(r#"{"status": "machine_translated"}"#).unwrap();
        let descriptor = classify(&record);
        assert_eq!(descriptor.symbol, "-");
        assert_eq!(descriptor.label, "Unknown");
    }

    // ==================== grade Tests ====================

    #[test]
    fn test_grade_up_to_date_is_always_current() {
        let graded = grade(&record(TranslationStatus::UpToDate, Severity::Critical));
        assert_eq!(graded.severity, Severity::Current);
    }

    #[test]
    fn test_grade_outdated_is_at_least_minor() {
        assert_eq!(
            grade(&record(TranslationStatus::Outdated, Severity::Current)).severity,
            Severity::Minor
        );
        assert_eq!(
            grade(&record(TranslationStatus::Outdated, Severity::Unknown)).severity,
            Severity::Minor
        );
        assert_eq!(
            grade(&record(TranslationStatus::Outdated, Severity::Significant)).severity,
            Severity::Significant
        );
    }

    #[test]
    fn test_grade_not_translated_keeps_severity() {
        let graded = grade(&record(TranslationStatus::NotTranslated, Severity::Moderate));
        assert_eq!(graded.status, TranslationStatus::NotTranslated);
        assert_eq!(graded.severity, Severity::Moderate);
    }

    // ==================== Parsing Tests ====================

    #[test]
    fn test_from_str_accepts_wire_names() {
        assert_eq!(
            "outdated".parse::<TranslationStatus>().unwrap(),
            TranslationStatus::Outdated
        );
        assert_eq!(
            "not_translated".parse::<TranslationStatus>().unwrap(),
            TranslationStatus::NotTranslated
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("unknown".parse::<TranslationStatus>().is_err());
        assert!("Outdated".parse::<TranslationStatus>().is_err());
    }

    #[test]
    fn test_display_round_trips_wire_name() {
        assert_eq!(TranslationStatus::UpToDate.to_string(), "up_to_date");
    }
}
