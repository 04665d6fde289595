//! Article categories and loading their reports from disk.

use crate::error::{MatrixError, Result};
use crate::models::TranslationStatusReport;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArticleCategory {
    DocsConcept,
    DocsTask,
    DocsSetup,
    DocsReference,
    DocsTutorial,
    DocsContribute,
    Blog,
    Community,
    CaseStudy,
    Examples,
    Includes,
    Release,
    Partner,
    Training,
}

impl ArticleCategory {
    /// All categories in selector order.
    pub const ALL: [ArticleCategory; 14] = [
        ArticleCategory::DocsConcept,
        ArticleCategory::DocsTask,
        ArticleCategory::DocsSetup,
        ArticleCategory::DocsReference,
        ArticleCategory::DocsTutorial,
        ArticleCategory::DocsContribute,
        ArticleCategory::Blog,
        ArticleCategory::Community,
        ArticleCategory::CaseStudy,
        ArticleCategory::Examples,
        ArticleCategory::Includes,
        ArticleCategory::Release,
        ArticleCategory::Partner,
        ArticleCategory::Training,
    ];

    /// Identifier used in URLs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleCategory::DocsConcept => "docsConcept",
            ArticleCategory::DocsTask => "docsTask",
            ArticleCategory::DocsSetup => "docsSetup",
            ArticleCategory::DocsReference => "docsReference",
            ArticleCategory::DocsTutorial => "docsTutorial",
            ArticleCategory::DocsContribute => "docsContribute",
            ArticleCategory::Blog => "blog",
            ArticleCategory::Community => "community",
            ArticleCategory::CaseStudy => "caseStudy",
            ArticleCategory::Examples => "examples",
            ArticleCategory::Includes => "includes",
            ArticleCategory::Release => "release",
            ArticleCategory::Partner => "partner",
            ArticleCategory::Training => "training",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArticleCategory::DocsConcept => "Docs / Concept",
            ArticleCategory::DocsTask => "Docs / Task",
            ArticleCategory::DocsSetup => "Docs / Setup",
            ArticleCategory::DocsReference => "Docs / Reference",
            ArticleCategory::DocsTutorial => "Docs / Tutorial",
            ArticleCategory::DocsContribute => "Docs / Contribution",
            ArticleCategory::Blog => "Blog",
            ArticleCategory::Community => "Community",
            ArticleCategory::CaseStudy => "Case Study",
            ArticleCategory::Examples => "Examples",
            ArticleCategory::Includes => "Includes",
            ArticleCategory::Release => "Release",
            ArticleCategory::Partner => "Partner",
            ArticleCategory::Training => "Training",
        }
    }

    /// Name of the exporter's output file for this category.
    pub fn file_name(&self) -> &'static str {
        match self {
            ArticleCategory::DocsConcept => "docs_concepts.json",
            ArticleCategory::DocsTask => "docs_tasks.json",
            ArticleCategory::DocsSetup => "docs_setup.json",
            ArticleCategory::DocsReference => "docs_reference.json",
            ArticleCategory::DocsTutorial => "docs_tutorials.json",
            ArticleCategory::DocsContribute => "docs_contribute.json",
            ArticleCategory::Blog => "blog.json",
            ArticleCategory::Community => "community.json",
            ArticleCategory::CaseStudy => "case-studies.json",
            ArticleCategory::Examples => "examples.json",
            ArticleCategory::Includes => "includes.json",
            ArticleCategory::Release => "releases.json",
            ArticleCategory::Partner => "partners.json",
            ArticleCategory::Training => "training.json",
        }
    }
}

impl fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleCategory {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        ArticleCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| MatrixError::UnknownCategory(s.to_string()))
    }
}

/// Read and parse one category report.
pub fn load_report(path: &Path) -> Result<TranslationStatusReport> {
    let content = std::fs::read_to_string(path).map_err(|source| MatrixError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| MatrixError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Immutable snapshot of every category report that was found on disk.
#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    reports: BTreeMap<ArticleCategory, TranslationStatusReport>,
}

impl ReportStore {
    /// Load every category file present in `dir`. Missing files are skipped.
    ///
    /// # Errors
    /// Fails on unreadable or malformed files.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut reports = BTreeMap::new();

        for category in ArticleCategory::ALL {
            let path = dir.join(category.file_name());
            if !path.exists() {
                warn!("No report for {} at {}", category, path.display());
                continue;
            }
            let report = load_report(&path)?;
            info!(
                "Loaded {} articles for {} (updated {})",
                report.articles.len(),
                category,
                report.last_updated
            );
            reports.insert(category, report);
        }

        Ok(Self { reports })
    }

    pub fn get(&self, category: ArticleCategory) -> Option<&TranslationStatusReport> {
        self.reports.get(&category)
    }

    /// Loaded categories in selector order.
    pub fn categories(&self) -> impl Iterator<Item = (ArticleCategory, &TranslationStatusReport)> {
        self.reports.iter().map(|(category, report)| (*category, report))
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
