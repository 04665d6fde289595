//! Report consistency checks.
//!
//! The engine tolerates malformed reports (missing languages read as not
//! translated, unknown statuses get a fallback badge), so validation never
//! fails. It only collects what the exporter got wrong.

use crate::i18n::LanguageRegistry;
use crate::models::TranslationStatusReport;
use crate::status::{Severity, TranslationStatus};
use std::collections::HashSet;

/// Validation report containing errors and warnings about a report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Problems that break an invariant the matrix relies on
    pub errors: Vec<String>,

    /// Problems the matrix papers over
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

pub fn validate_report(
    report: &TranslationStatusReport,
    catalog: &LanguageRegistry,
) -> ValidationReport {
    let mut result = ValidationReport::new();
    let canonical = catalog.canonical().code;
    let mut seen: HashSet<&str> = HashSet::new();

    for article in &report.articles {
        let path = article.english_path.as_str();

        if !seen.insert(path) {
            result.errors.push(format!("Duplicate article path: {path}"));
        }

        if !article.translations.contains_key(canonical) {
            result
                .errors
                .push(format!("{path}: missing '{canonical}' source record"));
        }

        let missing: Vec<&str> = catalog
            .list_all()
            .iter()
            .map(|lang| lang.code)
            .filter(|code| *code != canonical && !article.translations.contains_key(*code))
            .collect();
        if !missing.is_empty() {
            result
                .warnings
                .push(format!("{path}: missing languages {missing:?}"));
        }

        let mut codes: Vec<&String> = article.translations.keys().collect();
        codes.sort();
        for code in codes {
            let record = &article.translations[code];

            if !catalog.contains(code) {
                result
                    .warnings
                    .push(format!("{path}: language '{code}' is not in the catalog"));
            }
            if record.status == TranslationStatus::Unknown {
                result
                    .warnings
                    .push(format!("{path} [{code}]: unknown status"));
            }
            if record.severity == Severity::Unknown {
                result
                    .warnings
                    .push(format!("{path} [{code}]: unknown severity"));
            }
            if record.status == TranslationStatus::UpToDate
                && record.severity != Severity::Current
            {
                result.warnings.push(format!(
                    "{path} [{code}]: up to date but severity is {:?}",
                    record.severity
                ));
            }
        }
    }

    result
}
