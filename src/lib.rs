//! Translation Status Matrix: freshness of translated documentation articles.
//!
//! The engine takes one category's articles and the user's filter, sort and
//! page parameters, and derives exactly which articles to render:
//!
//! ```rust
//! use translation_status_matrix::{filter_articles, paginate, sort_articles};
//! use translation_status_matrix::{Article, FilterState, PageState, SortState};
//!
//! let articles: Vec<Article> = Vec::new();
//! let filtered = filter_articles(&articles, &FilterState::default());
//! let sorted = sort_articles(&filtered, &SortState::default());
//! let page = paginate(&sorted, &PageState::default());
//! assert_eq!(page.total_pages, 1);
//! ```

pub mod category;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod format;
pub mod i18n;
pub mod models;
pub mod pagination;
pub mod server;
pub mod session;
pub mod sort;
pub mod status;
pub mod summary;
pub mod validator;

pub use error::{MatrixError, Result};
pub use filter::{filter_articles, FilterState, LanguageFilter, PrFilter, StatusFilter};
pub use i18n::{order_languages, order_with_preferred, Language, LanguageRegistry};
pub use models::{Article, PullRequest, TranslationRecord, TranslationStatusReport};
pub use pagination::{paginate, Page, PageSize, PageState};
pub use session::{MatrixView, ViewSession};
pub use sort::{sort_articles, SortDirection, SortMode, SortState};
pub use status::{classify, grade, Severity, StatusDescriptor, TranslationStatus};
