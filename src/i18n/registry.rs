//! Language registry: Single source of truth for all tracked languages.
//!
//! The registry holds the fixed, ordered catalog of languages that every
//! article is tracked in. The catalog order is the default column order of the
//! matrix. It uses a singleton pattern with `OnceLock`; custom catalogs can be
//! built with [`LanguageRegistry::new`] for tests and tooling.

use crate::error::{MatrixError, Result};
use serde::Serialize;
use std::sync::OnceLock;

/// Metadata for a tracked language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageConfig {
    /// Language code as used in the website content tree (e.g., "en", "zh-cn")
    pub code: &'static str,

    /// Display label (e.g., "English", "Chinese")
    pub label: &'static str,

    /// Whether this is the source language all articles are written in
    #[serde(skip)]
    pub is_canonical: bool,
}

/// Ordered language catalog.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Build a custom catalog.
    ///
    /// # Errors
    /// Returns `MatrixError::InvalidCatalog` unless exactly one language is
    /// marked canonical.
    pub fn new(languages: Vec<LanguageConfig>) -> Result<Self> {
        let canonical = languages.iter().filter(|lang| lang.is_canonical).count();
        if canonical != 1 {
            return Err(MatrixError::InvalidCatalog(canonical));
        }
        Ok(Self { languages })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Check if a code belongs to this catalog.
    pub fn contains(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// All languages in catalog order, canonical included.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Translation targets in catalog order (everything but the canonical language).
    pub fn targets(&self) -> impl Iterator<Item = &LanguageConfig> {
        self.languages.iter().filter(|lang| !lang.is_canonical)
    }

    /// Number of languages in the catalog.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Never for catalogs built through [`LanguageRegistry::get`] or
    /// [`LanguageRegistry::new`], both of which guarantee exactly one
    /// canonical entry.
    pub fn canonical(&self) -> &LanguageConfig {
        self.languages
            .iter()
            .find(|lang| lang.is_canonical)
            .expect("catalog is validated to hold one canonical language")
    }
}

const fn lang(code: &'static str, label: &'static str) -> LanguageConfig {
    LanguageConfig {
        code,
        label,
        is_canonical: false,
    }
}

/// Default language catalog, in display order.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            label: "English",
            is_canonical: true,
        },
        lang("bn", "Bengali"),
        lang("zh-cn", "Chinese"),
        lang("fr", "French"),
        lang("de", "German"),
        lang("hi", "Hindi"),
        lang("id", "Indonesian"),
        lang("it", "Italian"),
        lang("ja", "Japanese"),
        lang("ko", "Korean"),
        lang("pl", "Polish"),
        lang("pt-br", "Portuguese"),
        lang("ru", "Russian"),
        lang("es", "Spanish"),
        lang("uk", "Ukrainian"),
        lang("vi", "Vietnamese"),
    ]
}
