//! Small text helpers shared by the page modules.

use chrono::{DateTime, Utc};
use minijinja::HtmlEscape;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .unwrap_or_else(|err| panic!("invalid email regex: {err}"))
});

/// Escapes text for insertion into HTML markup, the same way the project
/// templates escape interpolated values.
///
/// ```rust
/// use folio_site::escape_html;
///
/// assert_eq!(escape_html("Tom & <b>Jerry"), "Tom &amp; &lt;b&gt;Jerry");
/// ```
pub fn escape_html(text: &str) -> String {
    HtmlEscape(text).to_string()
}

/// Whether `email` looks like `name@domain.tld`.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Formats a timestamp the way the site shows dates: `March 5, 2024`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}
