use crate::i18n::{parse_language_list, Language};
use crate::pagination::PageSize;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Data
    pub data_dir: PathBuf,

    // Server
    pub port: u16,

    // View defaults
    pub default_page_size: PageSize,
    pub preferred_languages: Vec<Language>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_page_size = match std::env::var("DEFAULT_PAGE_SIZE") {
            Ok(value) => {
                let size: u32 = value
                    .parse()
                    .with_context(|| format!("DEFAULT_PAGE_SIZE is not a number: {value}"))?;
                PageSize::try_from(size).context("Invalid DEFAULT_PAGE_SIZE")?
            }
            Err(_) => PageSize::default(),
        };

        let preferred_languages = match std::env::var("PREFERRED_LANGUAGES") {
            Ok(value) => parse_language_list(&value).context("Invalid PREFERRED_LANGUAGES")?,
            Err(_) => Vec::new(),
        };

        Ok(Self {
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/matrix")),

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            default_page_size,
            preferred_languages,
        })
    }
}
