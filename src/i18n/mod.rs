//! Language catalog for the translation matrix.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all tracked languages, in column order
//! - `language`: Validated `Language` code type
//! - `locale`: RFC 5646 locale tag mapping for preferred-language detection
//! - `ordering`: Pinned column ordering for user-selected languages
//!
//! # Example
//!
//! ```rust
//! use translation_status_matrix::i18n::{order_languages, Language, LanguageRegistry};
//!
//! let japanese = Language::from_code("ja").unwrap();
//! let columns = order_languages(LanguageRegistry::get(), &[japanese]);
//! assert_eq!(columns[0].code, "en");
//! assert_eq!(columns[1].code, "ja");
//! ```

mod language;
mod locale;
mod ordering;
mod registry;

pub use language::{parse_language_list, Language};
pub use locale::{detect_preferred_language, resolve_locale_tag};
pub use ordering::{order_languages, order_with_preferred, toggle_preferred};
pub use registry::{LanguageConfig, LanguageRegistry};
