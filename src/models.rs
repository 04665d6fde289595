//! Serde types for the exporter's category reports.

use crate::i18n::Language;
use crate::status::{Severity, TranslationStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One category report as produced by the upstream exporter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationStatusReport {
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// An open pull request touching a translated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// Freshness of one article in one language.
///
/// Analytics fields are only populated on the `en` record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub status: TranslationStatus,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub days_behind: u32,
    #[serde(default)]
    pub commits_behind: u32,
    #[serde(default)]
    pub total_change_lines: u32,
    #[serde(default)]
    pub target_latest_date: Option<String>,
    #[serde(default)]
    pub english_latest_date: String,
    #[serde(default)]
    pub translation_url: Option<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub new_users: u64,
    #[serde(default)]
    pub average_session_duration: f64,
    #[serde(default)]
    pub prs: Vec<PullRequest>,
}

impl TranslationRecord {
    /// A record with the given status and every other field zeroed.
    pub fn new(status: TranslationStatus) -> Self {
        Self {
            status,
            severity: Severity::default(),
            days_behind: 0,
            commits_behind: 0,
            total_change_lines: 0,
            target_latest_date: None,
            english_latest_date: String::new(),
            translation_url: None,
            views: 0,
            new_users: 0,
            average_session_duration: 0.0,
            prs: Vec::new(),
        }
    }

    pub fn has_pull_requests(&self) -> bool {
        !self.prs.is_empty()
    }
}

/// An English source article and its per-language records.
///
/// `english_path` is the primary key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub english_path: String,
    #[serde(default)]
    pub english_url: Option<String>,
    #[serde(default)]
    pub translations: HashMap<String, TranslationRecord>,
}

impl Article {
    pub fn new(english_path: impl Into<String>) -> Self {
        Self {
            english_path: english_path.into(),
            english_url: None,
            translations: HashMap::new(),
        }
    }

    /// Builder-style insert, mostly for fixtures.
    pub fn with_record(mut self, language: Language, record: TranslationRecord) -> Self {
        self.translations.insert(language.code().to_string(), record);
        self
    }

    pub fn record(&self, language: Language) -> Option<&TranslationRecord> {
        self.translations.get(language.code())
    }

    /// The English source record, which carries the analytics.
    pub fn english(&self) -> Option<&TranslationRecord> {
        self.record(Language::ENGLISH)
    }

    /// Status of the translation; a missing record reads as not translated.
    pub fn status_for(&self, language: Language) -> TranslationStatus {
        self.record(language)
            .map(|record| record.status)
            .unwrap_or(TranslationStatus::NotTranslated)
    }

    pub fn has_pull_requests_for(&self, language: Language) -> bool {
        self.record(language)
            .is_some_and(TranslationRecord::has_pull_requests)
    }

    /// Path of the translated file in the website content tree.
    pub fn translation_path(&self, language: Language) -> String {
        self.english_path
            .replacen("/en/", &format!("/{}/", language.code()), 1)
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.english_path == other.english_path
    }
}

impl Eq for Article {}
