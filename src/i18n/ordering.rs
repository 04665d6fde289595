//! Column ordering for the matrix.
//!
//! The canonical language is always the first column. Languages the user
//! picked are pinned right after it in the order they were picked, and the rest
//! of the catalog follows in catalog order. No catalog language is ever
//! dropped, whatever the selection contains.

use crate::i18n::{Language, LanguageConfig, LanguageRegistry};

/// Order the catalog with `selected` languages pinned after the canonical one.
///
/// Duplicates, the canonical language itself, and codes not present in
/// `catalog` are ignored in `selected`.
pub fn order_languages<'a>(
    catalog: &'a LanguageRegistry,
    selected: &[Language],
) -> Vec<&'a LanguageConfig> {
    let canonical = catalog.canonical();
    let mut head: Vec<&'a LanguageConfig> = vec![canonical];

    for language in selected {
        let Some(config) = catalog.get_by_code(language.code()) else {
            continue;
        };
        if !head.iter().any(|pinned| pinned.code == config.code) {
            head.push(config);
        }
    }

    let rest: Vec<&'a LanguageConfig> = catalog
        .list_all()
        .into_iter()
        .filter(|lang| !head.iter().any(|pinned| pinned.code == lang.code))
        .collect();

    head.extend(rest);
    head
}

/// Single preferred language variant of [`order_languages`].
pub fn order_with_preferred(
    catalog: &LanguageRegistry,
    preferred: Option<Language>,
) -> Vec<&LanguageConfig> {
    match preferred {
        Some(language) => order_languages(catalog, &[language]),
        None => order_languages(catalog, &[]),
    }
}

/// Choosing the already preferred language switches back to English.
pub fn toggle_preferred(current: Option<Language>, chosen: Language) -> Language {
    if current == Some(chosen) {
        Language::ENGLISH
    } else {
        chosen
    }
}
