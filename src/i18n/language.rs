//! Language type: validated language code.
//!
//! A `Language` can only be constructed for codes present in the global
//! [`LanguageRegistry`], so holding one means the code is part of the catalog.

use crate::error::{MatrixError, Result};
use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub struct Language {
    code: &'static str,
}

impl Language {
    /// The canonical source language.
    pub const ENGLISH: Language = Language { code: "en" };

    pub const JAPANESE: Language = Language { code: "ja" };

    /// Create a Language from a code string.
    ///
    /// # Errors
    /// Returns `MatrixError::UnknownLanguage` if the code is not in the catalog.
    /// Matching is exact: codes are lowercase (`"pt-br"`, not `"pt-BR"`).
    pub fn from_code(code: &str) -> Result<Language> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| Language { code: config.code })
            .ok_or_else(|| MatrixError::UnknownLanguage(code.to_string()))
    }

    /// Get the canonical (source) language.
    pub fn canonical() -> Language {
        Language {
            code: LanguageRegistry::get().canonical().code,
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for values built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn label(&self) -> &'static str {
        self.config().label
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Language {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_code(s)
    }
}

impl TryFrom<String> for Language {
    type Error = MatrixError;

    fn try_from(value: String) -> Result<Self> {
        Language::from_code(&value)
    }
}

impl From<Language> for &'static str {
    fn from(language: Language) -> Self {
        language.code
    }
}

/// Parse a comma separated list of codes, ignoring blank entries.
///
/// # Errors
/// Fails on the first unknown code.
pub fn parse_language_list(input: &str) -> Result<Vec<Language>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(Language::from_code)
        .collect()
}
