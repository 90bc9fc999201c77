//! Utility functions and helpers.

pub mod http;

use url::Url;

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Extract the problem short code from a problem URL.
///
/// The short code is the trailing path segment, e.g.
/// `https://codeforces.com/contest/123/problem/D2` yields `D2`.
pub fn short_code(link: &str) -> String {
    link.rsplit('/').next().unwrap_or(link).trim().to_string()
}
