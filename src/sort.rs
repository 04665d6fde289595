//! Sort stage. Every metric is read from the article's English record.

use crate::error::MatrixError;
use crate::models::{Article, TranslationRecord};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Catalog order; the direction only decides whether it is reversed.
    #[default]
    Default,
    Views,
    NewUsers,
    UpdatedAt,
    AverageSessionDuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub mode: SortMode,
    pub direction: SortDirection,
}

impl SortState {
    /// Picking the active mode again flips the direction; a new mode starts descending.
    pub fn select(&mut self, mode: SortMode) {
        if self.mode == mode {
            self.direction = self.direction.toggled();
        } else {
            self.mode = mode;
            self.direction = SortDirection::Desc;
        }
    }
}

impl FromStr for SortMode {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "default" => Ok(SortMode::Default),
            "views" => Ok(SortMode::Views),
            "newUsers" => Ok(SortMode::NewUsers),
            "updatedAt" => Ok(SortMode::UpdatedAt),
            "averageSessionDuration" => Ok(SortMode::AverageSessionDuration),
            other => Err(MatrixError::InvalidParameter {
                param: "sort",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for SortDirection {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "" | "desc" => Ok(SortDirection::Desc),
            other => Err(MatrixError::InvalidParameter {
                param: "direction",
                value: other.to_string(),
            }),
        }
    }
}

/// Parse the exporter's date strings. Returns `None` for anything unrecognized.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn english_metric(article: &Article, metric: impl Fn(&TranslationRecord) -> f64) -> f64 {
    article.english().map(metric).unwrap_or(0.0)
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

fn sort_by_metric(
    articles: &mut [&Article],
    direction: SortDirection,
    metric: impl Fn(&TranslationRecord) -> f64,
) {
    articles.sort_by(|a, b| {
        let ordering = english_metric(a, &metric).total_cmp(&english_metric(b, &metric));
        directed(ordering, direction)
    });
}

/// Sort articles with a parseable date among themselves, leaving the others
/// at the slots they already occupy.
fn sort_by_updated_at(articles: &mut [&Article], direction: SortDirection) {
    let dated: Vec<(usize, DateTime<Utc>)> = articles
        .iter()
        .enumerate()
        .filter_map(|(slot, article)| {
            article
                .english()
                .and_then(|record| parse_timestamp(&record.english_latest_date))
                .map(|date| (slot, date))
        })
        .collect();

    let slots: Vec<usize> = dated.iter().map(|(slot, _)| *slot).collect();
    let mut ordered = dated;
    ordered.sort_by(|(_, a), (_, b)| directed(a.cmp(b), direction));

    let originals: Vec<&Article> = articles.to_vec();
    for (slot, (from, _)) in slots.into_iter().zip(ordered) {
        articles[slot] = originals[from];
    }
}

/// Order the filtered articles. The sort is stable in every mode.
pub fn sort_articles<'a>(filtered: &[&'a Article], sort: &SortState) -> Vec<&'a Article> {
    let mut sorted = filtered.to_vec();

    match sort.mode {
        SortMode::Default => {
            if sort.direction == SortDirection::Asc {
                sorted.reverse();
            }
        }
        SortMode::Views => sort_by_metric(&mut sorted, sort.direction, |r| r.views as f64),
        SortMode::NewUsers => sort_by_metric(&mut sorted, sort.direction, |r| r.new_users as f64),
        SortMode::AverageSessionDuration => {
            sort_by_metric(&mut sorted, sort.direction, |r| r.average_session_duration)
        }
        SortMode::UpdatedAt => sort_by_updated_at(&mut sorted, sort.direction),
    }

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::status::TranslationStatus;
    use proptest::prelude::*;

    fn article(path: &str, views: u64, date: &str) -> Article {
        let mut en = TranslationRecord::new(TranslationStatus::UpToDate);
        en.views = views;
        en.new_users = views / 2;
        en.average_session_duration = views as f64 / 10.0;
        en.english_latest_date = date.to_string();
        Article::new(path).with_record(Language::ENGLISH, en)
    }

    fn paths<'a>(articles: &[&'a Article]) -> Vec<&'a str> {
        articles.iter().map(|a| a.english_path.as_str()).collect()
    }

    fn sort(articles: &[Article], state: SortState) -> Vec<&Article> {
        let refs: Vec<&Article> = articles.iter().collect();
        sort_articles(&refs, &state)
    }

    // ==================== Selection Tests ====================

    #[test]
    fn test_select_new_mode_resets_to_desc() {
        let mut state = SortState {
            mode: SortMode::Views,
            direction: SortDirection::Asc,
        };
        state.select(SortMode::NewUsers);
        assert_eq!(state.mode, SortMode::NewUsers);
        assert_eq!(state.direction, SortDirection::Desc);
    }

    #[test]
    fn test_select_same_mode_toggles() {
        let mut state = SortState::default();
        state.select(SortMode::Views);
        assert_eq!(state.direction, SortDirection::Desc);
        state.select(SortMode::Views);
        assert_eq!(state.direction, SortDirection::Asc);
        state.select(SortMode::Views);
        assert_eq!(state.direction, SortDirection::Desc);
    }

    // ==================== Metric Sort Tests ====================

    #[test]
    fn test_views_toggle_sequence() {
        let articles = vec![
            article("a.md", 100, "2025-01-01"),
            article("b.md", 50, "2025-01-01"),
            article("c.md", 200, "2025-01-01"),
        ];
        let mut state = SortState::default();

        state.select(SortMode::Views);
        assert_eq!(paths(&sort(&articles, state)), vec!["c.md", "a.md", "b.md"]);

        state.select(SortMode::Views);
        assert_eq!(paths(&sort(&articles, state)), vec!["b.md", "a.md", "c.md"]);
    }

    #[test]
    fn test_new_users_and_session_duration() {
        let articles = vec![
            article("a.md", 10, ""),
            article("b.md", 30, ""),
            article("c.md", 20, ""),
        ];
        let desc = |mode| SortState {
            mode,
            direction: SortDirection::Desc,
        };
        assert_eq!(
            paths(&sort(&articles, desc(SortMode::NewUsers))),
            vec!["b.md", "c.md", "a.md"]
        );
        assert_eq!(
            paths(&sort(&articles, desc(SortMode::AverageSessionDuration))),
            vec!["b.md", "c.md", "a.md"]
        );
    }

    #[test]
    fn test_missing_english_record_sorts_as_zero() {
        let articles = vec![Article::new("no-en.md"), article("a.md", 5, "")];
        let state = SortState {
            mode: SortMode::Views,
            direction: SortDirection::Asc,
        };
        assert_eq!(paths(&sort(&articles, state)), vec!["no-en.md", "a.md"]);
    }

    #[test]
    fn test_equal_views_keep_original_order() {
        let articles = vec![
            article("first.md", 7, ""),
            article("big.md", 9, ""),
            article("second.md", 7, ""),
            article("third.md", 7, ""),
        ];
        let desc = SortState {
            mode: SortMode::Views,
            direction: SortDirection::Desc,
        };
        assert_eq!(
            paths(&sort(&articles, desc)),
            vec!["big.md", "first.md", "second.md", "third.md"]
        );

        let asc = SortState {
            mode: SortMode::Views,
            direction: SortDirection::Asc,
        };
        assert_eq!(
            paths(&sort(&articles, asc)),
            vec!["first.md", "second.md", "third.md", "big.md"]
        );
    }

    // ==================== Default Mode Tests ====================

    #[test]
    fn test_default_desc_keeps_order() {
        let articles = vec![article("a.md", 1, ""), article("b.md", 2, "")];
        assert_eq!(
            paths(&sort(&articles, SortState::default())),
            vec!["a.md", "b.md"]
        );
    }

    #[test]
    fn test_default_asc_reverses() {
        let articles = vec![
            article("a.md", 1, ""),
            article("b.md", 2, ""),
            article("c.md", 3, ""),
        ];
        let state = SortState {
            mode: SortMode::Default,
            direction: SortDirection::Asc,
        };
        assert_eq!(paths(&sort(&articles, state)), vec!["c.md", "b.md", "a.md"]);
    }

    // ==================== Date Sort Tests ====================

    #[test]
    fn test_updated_at_desc() {
        let articles = vec![
            article("old.md", 0, "2023-03-01T00:00:00Z"),
            article("new.md", 0, "2025-03-01T08:30:00+09:00"),
            article("mid.md", 0, "2024-03-01"),
        ];
        let state = SortState {
            mode: SortMode::UpdatedAt,
            direction: SortDirection::Desc,
        };
        assert_eq!(
            paths(&sort(&articles, state)),
            vec!["new.md", "mid.md", "old.md"]
        );
    }

    #[test]
    fn test_unparseable_dates_keep_their_slots() {
        let articles = vec![
            article("late.md", 0, "2025-01-01"),
            article("garbage.md", 0, "not a date"),
            article("early.md", 0, "2020-01-01"),
            article("empty.md", 0, ""),
        ];
        let state = SortState {
            mode: SortMode::UpdatedAt,
            direction: SortDirection::Asc,
        };
        assert_eq!(
            paths(&sort(&articles, state)),
            vec!["early.md", "garbage.md", "late.md", "empty.md"]
        );
    }

    #[test]
    fn test_equal_dates_are_stable() {
        let articles = vec![
            article("a.md", 0, "2024-05-05"),
            article("b.md", 0, "2024-05-05T00:00:00Z"),
        ];
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let state = SortState {
                mode: SortMode::UpdatedAt,
                direction,
            };
            assert_eq!(paths(&sort(&articles, state)), vec!["a.md", "b.md"]);
        }
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2024-06-01T12:00:00Z").is_some());
        assert!(parse_timestamp("2024-06-01T12:00:00").is_some());
        assert!(parse_timestamp("2024-06-01").is_some());
        assert!(parse_timestamp("06/01/2024").is_none());
        assert!(parse_timestamp("").is_none());
    }

    // ==================== Parsing Tests ====================

    #[test]
    fn test_parse_sort_params() {
        assert_eq!("views".parse::<SortMode>().unwrap(), SortMode::Views);
        assert_eq!("".parse::<SortMode>().unwrap(), SortMode::Default);
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert!("sideways".parse::<SortDirection>().is_err());
        assert!("likes".parse::<SortMode>().is_err());
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_views_sort_is_stable(views in proptest::collection::vec(0u64..4, 0..30)) {
            let articles: Vec<Article> = views
                .iter()
                .enumerate()
                .map(|(i, v)| article(&format!("{i}.md"), *v, ""))
                .collect();
            let state = SortState { mode: SortMode::Views, direction: SortDirection::Desc };
            let sorted = sort(&articles, state);

            for pair in sorted.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let (va, vb) = (a.english().unwrap().views, b.english().unwrap().views);
                prop_assert!(va >= vb);
                if va == vb {
                    let ia: usize = a.english_path.trim_end_matches(".md").parse().unwrap();
                    let ib: usize = b.english_path.trim_end_matches(".md").parse().unwrap();
                    prop_assert!(ia < ib);
                }
            }
        }
    }
}
