//! Filter pipeline over one category's articles.
//!
//! Stages run in a fixed order and each one narrows the previous result:
//! status, language existence (only when no status filter is active), pull
//! requests, then path search.

use crate::error::MatrixError;
use crate::i18n::{Language, LanguageRegistry};
use crate::models::Article;
use crate::status::TranslationStatus;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TranslationStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageFilter {
    #[default]
    All,
    Only(Language),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrFilter {
    #[default]
    All,
    WithPr,
    WithoutPr,
}

/// Everything the user can narrow the matrix by.
///
/// `search` holds the committed (debounced) query, not the raw input text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub status: StatusFilter,
    pub language: LanguageFilter,
    pub pr: PrFilter,
    pub search: String,
}

impl FilterState {
    /// Whether a status, language or search filter is set.
    ///
    /// The pull request filter does not count.
    pub fn is_filtered(&self) -> bool {
        self.status != StatusFilter::All
            || self.language != LanguageFilter::All
            || !self.search.trim().is_empty()
    }
}

impl FromStr for StatusFilter {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(StatusFilter::All),
            other => other.parse().map(StatusFilter::Only),
        }
    }
}

impl FromStr for LanguageFilter {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(LanguageFilter::All),
            code => Language::from_code(code).map(LanguageFilter::Only),
        }
    }
}

impl FromStr for PrFilter {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(PrFilter::All),
            "withPr" => Ok(PrFilter::WithPr),
            "withoutPr" => Ok(PrFilter::WithoutPr),
            other => Err(MatrixError::InvalidParameter {
                param: "pr",
                value: other.to_string(),
            }),
        }
    }
}

fn matches_status(article: &Article, status: TranslationStatus, language: LanguageFilter) -> bool {
    match language {
        LanguageFilter::Only(language) => article.status_for(language) == status,
        LanguageFilter::All => LanguageRegistry::get().targets().any(|target| {
            let found = article
                .translations
                .get(target.code)
                .map(|record| record.status)
                .unwrap_or(TranslationStatus::NotTranslated);
            found == status
        }),
    }
}

fn has_pull_requests(article: &Article, language: LanguageFilter) -> bool {
    match language {
        LanguageFilter::Only(language) => article.has_pull_requests_for(language),
        LanguageFilter::All => LanguageRegistry::get().targets().any(|target| {
            article
                .translations
                .get(target.code)
                .is_some_and(|record| record.has_pull_requests())
        }),
    }
}

/// Apply `filter` to `articles`, preserving their relative order.
pub fn filter_articles<'a, I>(articles: I, filter: &FilterState) -> Vec<&'a Article>
where
    I: IntoIterator<Item = &'a Article>,
{
    let mut filtered: Vec<&'a Article> = articles.into_iter().collect();
    let total = filtered.len();

    match (filter.status, filter.language) {
        (StatusFilter::Only(status), language) => {
            filtered.retain(|article| matches_status(article, status, language));
        }
        (StatusFilter::All, LanguageFilter::Only(language)) => {
            filtered.retain(|article| article.record(language).is_some());
        }
        (StatusFilter::All, LanguageFilter::All) => {}
    }

    match filter.pr {
        PrFilter::All => {}
        PrFilter::WithPr => filtered.retain(|article| has_pull_requests(article, filter.language)),
        PrFilter::WithoutPr => {
            filtered.retain(|article| !has_pull_requests(article, filter.language))
        }
    }

    if !filter.search.trim().is_empty() {
        let query = filter.search.to_lowercase();
        filtered.retain(|article| article.english_path.to_lowercase().contains(&query));
    }

    debug!("Filtered {} of {} articles", filtered.len(), total);
    filtered
}
