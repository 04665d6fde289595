//! Per-language coverage counts over a set of articles.

use crate::i18n::LanguageRegistry;
use crate::models::Article;
use crate::status::TranslationStatus;
use serde::Serialize;

/// Status counts for one target language.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageCoverage {
    pub code: &'static str,
    pub label: &'static str,
    pub up_to_date: usize,
    pub outdated: usize,
    /// Includes articles with no record for the language.
    pub not_translated: usize,
    pub unknown: usize,
    /// Share of articles with a translation, outdated or not (0-100).
    pub coverage_rate: f64,
    /// Share of articles whose translation is up to date (0-100).
    pub up_to_date_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSummary {
    pub total_articles: usize,
    pub languages: Vec<LanguageCoverage>,
}

impl CoverageSummary {
    pub fn language(&self, code: &str) -> Option<&LanguageCoverage> {
        self.languages.iter().find(|lang| lang.code == code)
    }
}

fn rate(count: usize, total: usize) -> f64 {
    if total > 0 {
        (count as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Count statuses for every target language of `catalog`, in catalog order.
pub fn summarize<'a, I>(articles: I, catalog: &LanguageRegistry) -> CoverageSummary
where
    I: IntoIterator<Item = &'a Article>,
{
    let articles: Vec<&Article> = articles.into_iter().collect();
    let total = articles.len();

    let languages = catalog
        .targets()
        .map(|target| {
            let mut coverage = LanguageCoverage {
                code: target.code,
                label: target.label,
                up_to_date: 0,
                outdated: 0,
                not_translated: 0,
                unknown: 0,
                coverage_rate: 0.0,
                up_to_date_rate: 0.0,
            };

            for article in &articles {
                let status = article
                    .translations
                    .get(target.code)
                    .map(|record| record.status)
                    .unwrap_or(TranslationStatus::NotTranslated);
                match status {
                    TranslationStatus::UpToDate => coverage.up_to_date += 1,
                    TranslationStatus::Outdated => coverage.outdated += 1,
                    TranslationStatus::NotTranslated => coverage.not_translated += 1,
                    TranslationStatus::Unknown => coverage.unknown += 1,
                }
            }

            coverage.coverage_rate = rate(coverage.up_to_date + coverage.outdated, total);
            coverage.up_to_date_rate = rate(coverage.up_to_date, total);
            coverage
        })
        .collect();

    CoverageSummary {
        total_articles: total,
        languages,
    }
}
