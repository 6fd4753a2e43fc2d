//! Display-only formatting shared by every view.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Placeholder for empty or missing values.
pub const EMPTY_VALUE: &str = "—";

/// Class suffix for a status label: lower-cased, every run of characters
/// outside `[a-z0-9]` collapsed to a single hyphen, hyphens trimmed at the ends.
///
/// `"In Review!"` becomes `"in-review"`. Applying it twice changes nothing.
pub fn status_class(status: &str) -> String {
    let lowered = status.to_lowercase();
    NON_ALNUM_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Split a comma-separated skills string, trimming entries and dropping blanks.
pub fn normalize_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Round a confidence score to two decimal places.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Rounded score in its shortest form: `0.8675` → `"0.87"`, `1.0` → `"1"`.
pub fn format_score(score: f64) -> String {
    format!("{}", round_score(score))
}

/// Render an ISO-8601 timestamp in local time.
///
/// Offsets are honoured; timestamps without one are taken as local time.
/// Anything unparseable is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.with_timezone(&Local).format(FORMAT).to_string();
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|ts| ts.format(FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// The value itself, or [`EMPTY_VALUE`] when it is missing or blank.
pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => EMPTY_VALUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_class_collapses_runs() {
        assert_eq!(status_class("In Review!"), "in-review");
        assert_eq!(status_class("Completed"), "completed");
        assert_eq!(status_class("needs -- manual   review"), "needs-manual-review");
        assert_eq!(status_class("PAN_verified"), "pan-verified");
    }

    #[test]
    fn status_class_is_idempotent() {
        for input in ["In Review!", "  Pending ", "Extraction: 50% done", "ok"] {
            let once = status_class(input);
            assert_eq!(status_class(&once), once);
        }
    }

    #[test]
    fn skills_normalization_drops_blanks() {
        assert_eq!(normalize_skills("Go, Rust,  , C++"), vec!["Go", "Rust", "C++"]);
        assert!(normalize_skills(" , ,").is_empty());
        assert!(normalize_skills("").is_empty());
    }

    #[test]
    fn scores_round_to_two_places() {
        assert_eq!(format_score(0.8675), "0.87");
        assert_eq!(format_score(1.0), "1");
        assert_eq!(format_score(0.5), "0.5");
        assert_eq!(round_score(0.333333), 0.33);
    }

    #[test]
    fn unparseable_timestamp_is_kept() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn timestamps_are_reformatted() {
        let naive = format_timestamp("2024-05-01T10:15:30");
        assert_eq!(naive, "2024-05-01 10:15:30");
        let zoned = format_timestamp("2024-05-01T10:15:30Z");
        assert_eq!(zoned.len(), "2024-05-01 10:15:30".len());
    }

    #[test]
    fn blank_values_render_as_dash() {
        assert_eq!(or_dash(None), EMPTY_VALUE);
        assert_eq!(or_dash(Some("  ")), EMPTY_VALUE);
        assert_eq!(or_dash(Some("Acme")), "Acme");
    }
}
