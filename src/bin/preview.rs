//! Preview binary - prints one page of a category's matrix as text
//!
//! Usage:
//!   cargo run --bin preview -- blog
//!   cargo run --bin preview -- docsTask --status outdated --language ja
//!   cargo run --bin preview -- blog --sort views --asc --page 2 --page-size 50
//!   cargo run --bin preview -- blog --languages ja,ko --summary --validate
//!
//! Optional environment variables:
//! - DATA_DIR (defaults to data/matrix)
//! - DEFAULT_PAGE_SIZE (defaults to 30)
//! - PREFERRED_LANGUAGES (used when --languages is not passed)

use anyhow::{Context, Result};
use tracing::info;
use translation_status_matrix::category::{load_report, ArticleCategory};
use translation_status_matrix::config::Config;
use translation_status_matrix::format::{
    behind_summary, change_summary, format_date_iso, format_seconds_mmss,
};
use translation_status_matrix::i18n::{order_languages, parse_language_list, Language};
use translation_status_matrix::sort::SortDirection;
use translation_status_matrix::status::classify;
use translation_status_matrix::summary::summarize;
use translation_status_matrix::validator::validate_report;
use translation_status_matrix::{
    Article, LanguageRegistry, PageSize, SortState, TranslationStatus, ViewSession,
};

const PATH_WIDTH: usize = 48;

const USAGE: &str = "Usage: preview <category> [--status S] [--language L] [--pr P] \
    [--search Q] [--sort M] [--asc] [--page N] [--page-size N] [--languages ja,ko] \
    [--summary] [--validate]";

#[derive(Debug, Default)]
struct PreviewArgs {
    category: Option<String>,
    status: Option<String>,
    language: Option<String>,
    pr: Option<String>,
    search: Option<String>,
    sort: Option<String>,
    ascending: bool,
    page: Option<usize>,
    page_size: Option<u32>,
    languages: Option<String>,
    summary: bool,
    validate: bool,
}

impl PreviewArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .with_context(|| format!("{flag} expects a value"))
            };
            match arg.as_str() {
                "--status" => parsed.status = Some(value("--status")?),
                "--language" => parsed.language = Some(value("--language")?),
                "--pr" => parsed.pr = Some(value("--pr")?),
                "--search" => parsed.search = Some(value("--search")?),
                "--sort" => parsed.sort = Some(value("--sort")?),
                "--asc" => parsed.ascending = true,
                "--page" => {
                    let raw = value("--page")?;
                    parsed.page = Some(
                        raw.parse()
                            .with_context(|| format!("--page is not a number: {raw}"))?,
                    );
                }
                "--page-size" => {
                    let raw = value("--page-size")?;
                    parsed.page_size = Some(
                        raw.parse()
                            .with_context(|| format!("--page-size is not a number: {raw}"))?,
                    );
                }
                "--languages" => parsed.languages = Some(value("--languages")?),
                "--summary" => parsed.summary = true,
                "--validate" => parsed.validate = true,
                flag if flag.starts_with("--") => anyhow::bail!("Unknown flag: {flag}"),
                category => {
                    if parsed.category.is_some() {
                        anyhow::bail!("Unexpected argument: {category}");
                    }
                    parsed.category = Some(category.to_string());
                }
            }
        }

        Ok(parsed)
    }

    fn to_session(&self, default_page_size: PageSize) -> Result<ViewSession> {
        let page_size = match self.page_size {
            Some(size) => PageSize::try_from(size)?,
            None => default_page_size,
        };

        let mut session = ViewSession::with_page_size(page_size);
        session.set_status_filter(self.status.as_deref().unwrap_or("").parse()?);
        session.set_language_filter(self.language.as_deref().unwrap_or("").parse()?);
        session.set_pr_filter(self.pr.as_deref().unwrap_or("").parse()?);
        session.commit_search(self.search.clone().unwrap_or_default());
        session.set_sort(SortState {
            mode: self.sort.as_deref().unwrap_or("").parse()?,
            direction: if self.ascending {
                SortDirection::Asc
            } else {
                SortDirection::Desc
            },
        });
        session.set_page(self.page.unwrap_or(1));
        Ok(session)
    }
}

/// Shorten a content path to fit the first column.
fn short_path(path: &str) -> String {
    let trimmed = path.strip_prefix("content/en/").unwrap_or(path);
    let count = trimmed.chars().count();
    if count <= PATH_WIDTH {
        return trimmed.to_string();
    }
    let tail: String = trimmed.chars().skip(count - (PATH_WIDTH - 1)).collect();
    format!("…{tail}")
}

fn cell(article: &Article, language: Language) -> &'static str {
    match article.record(language) {
        Some(record) => classify(record).symbol,
        None => "—",
    }
}

fn print_matrix(articles: &[&Article], columns: &[Language]) {
    print!("{:<width$}", "article", width = PATH_WIDTH);
    for language in columns {
        print!(" {:>5}", language.code());
    }
    println!();
    println!("{}", "-".repeat(PATH_WIDTH + columns.len() * 6));

    for article in articles {
        print!("{:<width$}", short_path(&article.english_path), width = PATH_WIDTH);
        for language in columns {
            print!(" {:>5}", cell(article, *language));
        }
        println!();

        for line in detail_lines(article, columns) {
            println!("    {line}");
        }
    }
}

/// English analytics, then one line per outdated non-canonical column.
fn detail_lines(article: &Article, columns: &[Language]) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(en) = article.english() {
        lines.push(format!(
            "en: {} views, {} new users, {} avg session",
            en.views,
            en.new_users,
            format_seconds_mmss(en.average_session_duration)
        ));
    }

    for language in columns.iter().filter(|l| !l.is_canonical()) {
        let Some(record) = article.record(*language) else {
            continue;
        };
        if record.status != TranslationStatus::Outdated {
            continue;
        }
        let details: Vec<String> = [behind_summary(record), change_summary(record)]
            .into_iter()
            .flatten()
            .collect();
        let details = if details.is_empty() {
            "outdated".to_string()
        } else {
            details.join(", ")
        };
        lines.push(format!(
            "{}: {} ({})",
            language.code(),
            article.translation_path(*language),
            details
        ));
    }

    lines
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translation_status_matrix=info".parse()?),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    let args = PreviewArgs::parse(std::env::args().skip(1))?;
    let config = Config::from_env()?;

    let category: ArticleCategory = args
        .category
        .as_deref()
        .context(USAGE)?
        .parse()?;

    let path = config.data_dir.join(category.file_name());
    info!("Loading {} report from {}", category, path.display());
    let report = load_report(&path)
        .with_context(|| format!("Failed to load {} report", category))?;

    let selected = match args.languages.as_deref() {
        Some(list) => parse_language_list(list).context("Invalid --languages")?,
        None => config.preferred_languages.clone(),
    };

    let catalog = LanguageRegistry::get();
    let columns: Vec<Language> = order_languages(catalog, &selected)
        .into_iter()
        .filter_map(|lang| Language::from_code(lang.code).ok())
        .collect();

    let session = args.to_session(config.default_page_size)?;
    let view = session.derive(&report.articles);

    println!();
    println!("{} ({})", category.label(), category);
    println!(
        "Last updated: {}",
        format_date_iso(&report.last_updated).unwrap_or_else(|| report.last_updated.clone())
    );
    println!(
        "Showing {} (page {} of {}){}",
        view.page.showing(),
        session.page().active_page(),
        view.page.total_pages,
        if view.is_filtered {
            format!(", filtered from {}", view.total_count)
        } else {
            String::new()
        }
    );
    println!();

    if view.page.is_empty() {
        println!("No articles match the current filters.");
    } else {
        print_matrix(&view.page.items, &columns);
    }
    println!();

    if args.summary {
        let summary = summarize(&report.articles, catalog);
        println!("--- Coverage ({} articles) ---", summary.total_articles);
        for lang in &summary.languages {
            println!(
                "{:>6} {:<12} {:>5.1}% translated, {:>5.1}% up to date ({} outdated, {} missing)",
                lang.code,
                lang.label,
                lang.coverage_rate,
                lang.up_to_date_rate,
                lang.outdated,
                lang.not_translated
            );
        }
        println!();
    }

    if args.validate {
        let validation = validate_report(&report, catalog);
        if validation.is_clean() {
            println!("Report is clean.");
        }
        for error in &validation.errors {
            println!("error: {error}");
        }
        for warning in &validation.warnings {
            println!("warning: {warning}");
        }
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use translation_status_matrix::sort::SortMode;
    use translation_status_matrix::{PrFilter, StatusFilter, TranslationRecord};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_full_command_line() {
        let parsed = PreviewArgs::parse(args(&[
            "blog",
            "--status",
            "outdated",
            "--pr",
            "withoutPr",
            "--sort",
            "views",
            "--asc",
            "--page",
            "2",
            "--page-size",
            "50",
        ]))
        .unwrap();

        assert_eq!(parsed.category.as_deref(), Some("blog"));
        let session = parsed.to_session(PageSize::Thirty).unwrap();
        assert_eq!(
            session.filter().status,
            StatusFilter::Only(TranslationStatus::Outdated)
        );
        assert_eq!(session.filter().pr, PrFilter::WithoutPr);
        assert_eq!(session.sort().mode, SortMode::Views);
        assert_eq!(session.sort().direction, SortDirection::Asc);
        assert_eq!(session.page().active_page(), 2);
        assert_eq!(session.page().page_size, PageSize::Fifty);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(PreviewArgs::parse(args(&["blog", "--page"])).is_err());
        assert!(PreviewArgs::parse(args(&["blog", "--bogus"])).is_err());
        assert!(PreviewArgs::parse(args(&["blog", "news"])).is_err());

        let parsed = PreviewArgs::parse(args(&["blog", "--page-size", "40"])).unwrap();
        assert!(parsed.to_session(PageSize::Thirty).is_err());
    }

    #[test]
    fn test_detail_lines() {
        let mut en = TranslationRecord::new(TranslationStatus::UpToDate);
        en.views = 1200;
        en.new_users = 300;
        en.average_session_duration = 75.4;

        let mut ja = TranslationRecord::new(TranslationStatus::Outdated);
        ja.commits_behind = 3;
        ja.days_behind = 12;
        ja.total_change_lines = 120;

        let ko = Language::from_code("ko").unwrap();
        let article = Article::new("content/en/docs/concepts/pods.md")
            .with_record(Language::ENGLISH, en)
            .with_record(Language::JAPANESE, ja)
            .with_record(ko, TranslationRecord::new(TranslationStatus::UpToDate));

        let lines = detail_lines(&article, &[Language::ENGLISH, Language::JAPANESE, ko]);
        assert_eq!(
            lines,
            vec![
                "en: 1200 views, 300 new users, 01:15 avg session".to_string(),
                "ja: content/ja/docs/concepts/pods.md \
                 (3 commits / 12 days behind, 120 lines changed)"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_detail_lines_outdated_without_counts() {
        let article = Article::new("content/en/blog/post.md").with_record(
            Language::JAPANESE,
            TranslationRecord::new(TranslationStatus::Outdated),
        );
        assert_eq!(
            detail_lines(&article, &[Language::JAPANESE]),
            vec!["ja: content/ja/blog/post.md (outdated)".to_string()]
        );
    }

    #[test]
    fn test_short_path() {
        assert_eq!(short_path("content/en/blog/a.md"), "blog/a.md");
        let long = format!("content/en/{}", "x".repeat(80));
        assert_eq!(short_path(&long).chars().count(), PATH_WIDTH);
    }
}
