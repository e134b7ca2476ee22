//! URL Feature Extraction
//!
//! Trích xuất các signals từ raw URL string. Total function: never fails,
//! never performs I/O, tolerates malformed and scheme-less input.

use once_cell::sync::Lazy;
use regex::Regex;

use super::vector::UrlFeatures;

/// Keywords whose presence (any case, anywhere) marks a URL suspicious
pub const LOGIN_KEYWORDS: &[&str] = &["login", "signin", "secure", "account", "verify"];

/// Dotted-quad at the start of the host, optional scheme.
/// Deliberately loose: four 1-3 digit groups, no octet bounds check.
static IP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:https?://)?\d{1,3}(?:\.\d{1,3}){3}").unwrap());

static LOGIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("(?i)({})", LOGIN_KEYWORDS.join("|"))).unwrap()
});

/// Extract the full feature set from a raw URL string.
///
/// Leading/trailing whitespace is stripped before any signal is computed,
/// so `" http://a.b "` and `"http://a.b"` yield identical vectors.
pub fn extract(url: &str) -> UrlFeatures {
    let u = url.trim();

    UrlFeatures {
        url_length: u.chars().count() as u32,
        has_at_symbol: u.contains('@'),
        // non-overlapping count; a single scheme "//" does not trigger this
        has_double_slash: u.matches("//").count() > 1,
        num_dots: u.matches('.').count() as u32,
        has_ip: IP_PATTERN.is_match(u),
        has_login_keyword: LOGIN_PATTERN.is_match(u),
    }
}
