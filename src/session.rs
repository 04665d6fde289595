//! Interaction session: the user-mutable filter, sort and page parameters.
//!
//! Every parameter change sends the user back to page 1 and every derivation
//! runs filter, sort and paginate exactly once over the snapshot it is given.

use crate::filter::{filter_articles, FilterState, LanguageFilter, PrFilter, StatusFilter};
use crate::models::Article;
use crate::pagination::{paginate, Page, PageSize, PageState};
use crate::sort::{sort_articles, SortMode, SortState};
use serde::Serialize;
use tracing::debug;

/// What the presentation layer renders for one derivation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixView<'a> {
    pub page: Page<&'a Article>,
    pub filtered_count: usize,
    pub total_count: usize,
    /// Whether a status, language or search filter narrowed the list.
    pub is_filtered: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSession {
    filter: FilterState,
    sort: SortState,
    page: PageState,
}

impl ViewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            page: PageState::new(1, page_size),
            ..Self::default()
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.page.set_active_page(1);
    }

    pub fn set_language_filter(&mut self, language: LanguageFilter) {
        self.filter.language = language;
        self.page.set_active_page(1);
    }

    pub fn set_pr_filter(&mut self, pr: PrFilter) {
        self.filter.pr = pr;
        self.page.set_active_page(1);
    }

    /// Commit a (debounced) search query.
    pub fn commit_search(&mut self, query: impl Into<String>) {
        self.filter.search = query.into();
        self.page.set_active_page(1);
    }

    pub fn select_sort(&mut self, mode: SortMode) {
        self.sort.select(mode);
        self.page.set_active_page(1);
    }

    /// Replace the sort outright, for callers restoring a known state.
    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
        self.page.set_active_page(1);
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page.page_size = page_size;
        self.page.set_active_page(1);
    }

    pub fn set_page(&mut self, page: usize) {
        self.page.set_active_page(page);
    }

    /// Back to every default except the page size.
    pub fn reset(&mut self) {
        let page_size = self.page.page_size;
        *self = Self::with_page_size(page_size);
    }

    pub fn derive<'a>(&self, articles: &'a [Article]) -> MatrixView<'a> {
        let filtered = filter_articles(articles, &self.filter);
        let sorted = sort_articles(&filtered, &self.sort);
        let page = paginate(&sorted, &self.page);

        debug!(
            "Derived page {} ({} items) from {} filtered of {} articles",
            self.page.active_page(),
            page.items.len(),
            sorted.len(),
            articles.len()
        );

        MatrixView {
            page,
            filtered_count: sorted.len(),
            total_count: articles.len(),
            is_filtered: self.filter.is_filtered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::models::TranslationRecord;
    use crate::sort::SortDirection;
    use crate::status::TranslationStatus;

    fn catalog(n: usize) -> Vec<Article> {
        (0..n)
            .map(|i| {
                let mut en = TranslationRecord::new(TranslationStatus::UpToDate);
                en.views = i as u64;
                let ja = if i % 3 == 0 {
                    TranslationStatus::Outdated
                } else {
                    TranslationStatus::UpToDate
                };
                Article::new(format!("content/en/docs/page-{i:03}.md"))
                    .with_record(Language::ENGLISH, en)
                    .with_record(Language::JAPANESE, TranslationRecord::new(ja))
            })
            .collect()
    }

    // ==================== Page Reset Tests ====================

    #[test]
    fn test_every_parameter_change_resets_page() {
        let mut session = ViewSession::new();
        let changes: Vec<Box<dyn Fn(&mut ViewSession)>> = vec![
            Box::new(|s: &mut ViewSession| {
                s.set_status_filter(StatusFilter::Only(TranslationStatus::Outdated))
            }),
            Box::new(|s: &mut ViewSession| {
                s.set_language_filter(LanguageFilter::Only(Language::JAPANESE))
            }),
            Box::new(|s: &mut ViewSession| s.set_pr_filter(PrFilter::WithPr)),
            Box::new(|s: &mut ViewSession| s.commit_search("pods")),
            Box::new(|s: &mut ViewSession| s.select_sort(SortMode::Views)),
            Box::new(|s: &mut ViewSession| s.set_page_size(PageSize::Fifty)),
        ];

        for change in changes {
            session.set_page(3);
            change(&mut session);
            assert_eq!(session.page().active_page(), 1);
        }
    }

    #[test]
    fn test_set_page_keeps_filters() {
        let mut session = ViewSession::new();
        session.commit_search("pods");
        session.set_page(2);
        assert_eq!(session.page().active_page(), 2);
        assert_eq!(session.filter().search, "pods");
    }

    #[test]
    fn test_reset_restores_defaults_but_keeps_page_size() {
        let mut session = ViewSession::with_page_size(PageSize::Hundred);
        session.set_status_filter(StatusFilter::Only(TranslationStatus::Outdated));
        session.set_pr_filter(PrFilter::WithoutPr);
        session.select_sort(SortMode::UpdatedAt);
        session.commit_search("ingress");
        session.set_page(4);

        session.reset();

        assert_eq!(session.filter(), &FilterState::default());
        assert_eq!(session.sort().mode, SortMode::Default);
        assert_eq!(session.sort().direction, SortDirection::Desc);
        assert_eq!(session.page().active_page(), 1);
        assert_eq!(session.page().page_size, PageSize::Hundred);
    }

    // ==================== Derivation Tests ====================

    #[test]
    fn test_derive_filters_sorts_and_paginates() {
        let articles = catalog(95);
        let mut session = ViewSession::new();
        session.set_status_filter(StatusFilter::Only(TranslationStatus::Outdated));
        session.select_sort(SortMode::Views);

        let view = session.derive(&articles);

        // 0, 3, ..., 93 are outdated in Japanese.
        assert_eq!(view.filtered_count, 32);
        assert_eq!(view.total_count, 95);
        assert!(view.is_filtered);
        assert_eq!(view.page.items.len(), 30);
        assert_eq!(view.page.total_pages, 2);
        assert_eq!(
            view.page.items[0].english_path,
            "content/en/docs/page-093.md"
        );
    }

    #[test]
    fn test_stale_page_yields_empty_view() {
        let articles = catalog(95);
        let mut session = ViewSession::new();
        session.set_page(4);
        assert_eq!(session.derive(&articles).page.items.len(), 5);

        // Narrowing through the raw page state would leave page 4 dangling;
        // the session setters prevent that, but a stale page is still empty.
        session.commit_search("page-00");
        session.set_page(4);
        let view = session.derive(&articles);
        assert!(view.page.is_empty());
        assert_eq!(view.filtered_count, 10);
    }

    #[test]
    fn test_pr_filter_alone_does_not_mark_filtered() {
        let articles = catalog(3);
        let mut session = ViewSession::new();
        session.set_pr_filter(PrFilter::WithoutPr);
        let view = session.derive(&articles);
        assert!(!view.is_filtered);
        assert_eq!(view.filtered_count, 3);
    }
}
