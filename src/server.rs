//! Read-only JSON API over the loaded reports.

use crate::category::{ArticleCategory, ReportStore};
use crate::error::MatrixError;
use crate::i18n::{order_languages, parse_language_list, Language, LanguageConfig, LanguageRegistry};
use crate::pagination::PageSize;
use crate::session::{MatrixView, ViewSession};
use crate::sort::SortState;
use crate::summary::summarize;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<ReportStore>,
    pub default_page_size: PageSize,
    /// Pinned columns used when a request does not pass `selected`.
    pub preferred_languages: Vec<Language>,
}

/// Error response: `{"error": "..."}` with a status matching the cause.
#[derive(Debug)]
pub struct ApiError(pub MatrixError);

impl From<MatrixError> for ApiError {
    fn from(err: MatrixError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            MatrixError::UnknownCategory(_) => StatusCode::NOT_FOUND,
            MatrixError::UnknownLanguage(_)
            | MatrixError::InvalidPageSize(_)
            | MatrixError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!("Request failed: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Query parameters of the articles endpoint. Everything is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixQuery {
    pub status: Option<String>,
    pub language: Option<String>,
    pub pr: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<u32>,
    pub selected: Option<String>,
}

impl MatrixQuery {
    /// Build the session these parameters describe.
    pub fn to_session(&self, default_page_size: PageSize) -> Result<ViewSession, MatrixError> {
        let page_size = match self.page_size {
            Some(size) => PageSize::try_from(size)?,
            None => default_page_size,
        };

        let mut session = ViewSession::with_page_size(page_size);
        session.set_status_filter(self.status.as_deref().unwrap_or("").parse()?);
        session.set_language_filter(self.language.as_deref().unwrap_or("").parse()?);
        session.set_pr_filter(self.pr.as_deref().unwrap_or("").parse()?);
        session.commit_search(self.q.clone().unwrap_or_default());
        session.set_sort(SortState {
            mode: self.sort.as_deref().unwrap_or("").parse()?,
            direction: self.direction.as_deref().unwrap_or("").parse()?,
        });
        session.set_page(self.page.unwrap_or(1));
        Ok(session)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LanguagesQuery {
    pub selected: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ArticlesResponse<'a> {
    category: ArticleCategory,
    last_updated: &'a str,
    columns: Vec<&'a LanguageConfig>,
    #[serde(flatten)]
    view: MatrixView<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub category: ArticleCategory,
    pub label: &'static str,
    pub last_updated: String,
    pub article_count: usize,
}

fn selected_languages(
    selected: Option<&str>,
    fallback: &[Language],
) -> Result<Vec<Language>, MatrixError> {
    match selected {
        Some(list) => parse_language_list(list),
        None => Ok(fallback.to_vec()),
    }
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn list_languages(
    State(state): State<AppState>,
    Query(query): Query<LanguagesQuery>,
) -> Result<Response, ApiError> {
    let selected = selected_languages(query.selected.as_deref(), &state.preferred_languages)?;
    let columns = order_languages(LanguageRegistry::get(), &selected);
    Ok(Json(columns).into_response())
}

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategoryInfo>> {
    let categories = state
        .store
        .categories()
        .map(|(category, report)| CategoryInfo {
            category,
            label: category.label(),
            last_updated: report.last_updated.clone(),
            article_count: report.articles.len(),
        })
        .collect();
    Json(categories)
}

pub async fn list_articles(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<MatrixQuery>,
) -> Result<Response, ApiError> {
    let category: ArticleCategory = category.parse()?;
    let report = state
        .store
        .get(category)
        .ok_or_else(|| MatrixError::UnknownCategory(category.to_string()))?;

    let session = query.to_session(state.default_page_size)?;
    let selected = selected_languages(query.selected.as_deref(), &state.preferred_languages)?;

    let response = ArticlesResponse {
        category,
        last_updated: &report.last_updated,
        columns: order_languages(LanguageRegistry::get(), &selected),
        view: session.derive(&report.articles),
    };
    Ok(Json(&response).into_response())
}

pub async fn category_summary(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Response, ApiError> {
    let category: ArticleCategory = category.parse()?;
    let report = state
        .store
        .get(category)
        .ok_or_else(|| MatrixError::UnknownCategory(category.to_string()))?;

    let summary = summarize(&report.articles, LanguageRegistry::get());
    Ok(Json(summary).into_response())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/languages", get(list_languages))
        .route("/api/categories", get(list_categories))
        .route("/api/categories/:category/articles", get(list_articles))
        .route("/api/categories/:category/summary", get(category_summary))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
