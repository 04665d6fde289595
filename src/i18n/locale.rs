//! Mapping from RFC 5646 locale tags to catalog languages.
//!
//! See <http://tools.ietf.org/html/rfc5646>. Regional variants collapse onto
//! the single language the website is translated into (e.g. `pt-PT` and
//! `pt-BR` both map to `pt-br`, every Chinese variant maps to `zh-cn`).

use crate::i18n::Language;

static LOCALE_TAGS: &[(&str, &str)] = &[
    // English
    ("en", "en"),
    ("en-US", "en"),
    ("en-GB", "en"),
    ("en-AU", "en"),
    ("en-CA", "en"),
    ("en-IE", "en"),
    ("en-NZ", "en"),
    ("en-ZA", "en"),
    // Bengali
    ("bn", "bn"),
    ("bn-BD", "bn"),
    ("bn-IN", "bn"),
    // Chinese
    ("zh", "zh-cn"),
    ("zh-CN", "zh-cn"),
    ("zh-SG", "zh-cn"),
    ("zh-TW", "zh-cn"),
    ("zh-HK", "zh-cn"),
    ("zh-MO", "zh-cn"),
    // French
    ("fr", "fr"),
    ("fr-FR", "fr"),
    ("fr-CA", "fr"),
    ("fr-BE", "fr"),
    ("fr-CH", "fr"),
    ("fr-LU", "fr"),
    ("fr-MC", "fr"),
    // German
    ("de", "de"),
    ("de-DE", "de"),
    ("de-AT", "de"),
    ("de-CH", "de"),
    ("de-LI", "de"),
    ("de-LU", "de"),
    // Hindi
    ("hi", "hi"),
    ("hi-IN", "hi"),
    // Indonesian
    ("id", "id"),
    ("id-ID", "id"),
    // Italian
    ("it", "it"),
    ("it-IT", "it"),
    ("it-CH", "it"),
    // Japanese
    ("ja", "ja"),
    ("ja-JP", "ja"),
    // Korean
    ("ko", "ko"),
    ("ko-KR", "ko"),
    // Polish
    ("pl", "pl"),
    ("pl-PL", "pl"),
    // Portuguese
    ("pt", "pt-br"),
    ("pt-BR", "pt-br"),
    ("pt-PT", "pt-br"),
    // Russian
    ("ru", "ru"),
    ("ru-RU", "ru"),
    // Spanish
    ("es", "es"),
    ("es-ES", "es"),
    ("es-AR", "es"),
    ("es-BO", "es"),
    ("es-CL", "es"),
    ("es-CO", "es"),
    ("es-CR", "es"),
    ("es-DO", "es"),
    ("es-EC", "es"),
    ("es-GT", "es"),
    ("es-HN", "es"),
    ("es-MX", "es"),
    ("es-NI", "es"),
    ("es-PA", "es"),
    ("es-PE", "es"),
    ("es-PR", "es"),
    ("es-PY", "es"),
    ("es-SV", "es"),
    ("es-UY", "es"),
    ("es-VE", "es"),
    // Ukrainian
    ("uk", "uk"),
    ("uk-UA", "uk"),
    // Vietnamese
    ("vi", "vi"),
    ("vi-VN", "vi"),
];

fn lookup(tag: &str) -> Option<Language> {
    LOCALE_TAGS
        .iter()
        .find(|(known, _)| *known == tag)
        .and_then(|(_, code)| Language::from_code(code).ok())
}

/// Resolve a single locale tag: exact match first, then the base subtag.
pub fn resolve_locale_tag(tag: &str) -> Option<Language> {
    let tag = tag.trim();
    lookup(tag).or_else(|| tag.split('-').next().and_then(lookup))
}

/// Pick the first tag that maps onto the catalog, falling back to English.
pub fn detect_preferred_language<S: AsRef<str>>(tags: &[S]) -> Language {
    tags.iter()
        .find_map(|tag| resolve_locale_tag(tag.as_ref()))
        .unwrap_or(Language::ENGLISH)
}
