//! Text helpers shared by the list pipeline and the article views.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

const WORDS_PER_MINUTE: usize = 200;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex pattern"));

/// Remove `<...>` markup. A `<` with no closing `>` is kept verbatim.
pub fn strip_html(html: &str) -> String { HTML_TAG.replace_all(html, "").into_owned() }

/// Cut `text` to `max_chars` characters, appending "..." when it was longer.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

pub fn count_words(text: &str) -> usize { text.split_whitespace().count() }

/// Minutes to read an article body at 200 words per minute; never below one.
pub fn reading_time_minutes(content: &str) -> usize {
    count_words(&strip_html(content)).div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Only absolute http(s) URLs with a host render as images; `blob:` previews do not.
pub fn is_valid_image_url(url: Option<&str>) -> bool {
    let Some(url) = url.map(str::trim) else { return false };
    if url.starts_with("blob:") { return false; }
    let lower = url.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"));
    match rest {
        Some(rest) => rest.split(['/', '?', '#']).next().is_some_and(|host| !host.is_empty()),
        None => false,
    }
}

/// RFC 3339, or an ISO date / date-time without offset read as UTC.
pub fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    let ts = ts.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(ts) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(t.and_utc());
    }
    NaiveDate::parse_from_str(ts, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0)).map(|t| t.and_utc())
}

/// Epoch milliseconds of a timestamp accepted by `parse_timestamp`.
pub fn timestamp_millis(ts: &str) -> Option<i64> { parse_timestamp(ts).map(|t| t.timestamp_millis()) }

/// "Jan 5, 2024". Unparseable input is returned unchanged.
pub fn format_date(ts: &str) -> String {
    match parse_timestamp(ts) {
        Some(t) => t.format("%b %-d, %Y").to_string(),
        None => ts.to_string(),
    }
}
