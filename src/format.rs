//! Display helpers shared by the API and the preview binary.

use crate::models::TranslationRecord;
use crate::sort::parse_timestamp;
use crate::status::TranslationStatus;

/// `YYYY-MM-DD` for a timestamp string, or `None` if it does not parse.
pub fn format_date_iso(value: &str) -> Option<String> {
    parse_timestamp(value).map(|date| date.format("%Y-%m-%d").to_string())
}

/// Seconds as `MM:SS`, rounded to the nearest second.
pub fn format_seconds_mmss(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

fn plural(count: u32, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// "3 commits / 12 days behind" for outdated records.
pub fn behind_summary(record: &TranslationRecord) -> Option<String> {
    if record.status != TranslationStatus::Outdated || record.days_behind == 0 {
        return None;
    }
    Some(format!(
        "{} / {} behind",
        plural(record.commits_behind, "commit"),
        plural(record.days_behind, "day")
    ))
}

/// "120 lines changed" for outdated records with a known diff size.
pub fn change_summary(record: &TranslationRecord) -> Option<String> {
    if record.status != TranslationStatus::Outdated || record.total_change_lines == 0 {
        return None;
    }
    Some(format!("{} lines changed", record.total_change_lines))
}
