//! Service layer for the harvester.
//!
//! This module contains the scraping logic:
//! - Page fetching (`PageFetcher`, `HttpFetcher`)
//! - Contest listing extraction (`ContestListExtractor`)
//! - Problem link and detail extraction (`ProblemExtractor`)

mod contests;
mod fetch;
mod problems;

pub use contests::ContestListExtractor;
pub use fetch::{HttpFetcher, PageFetcher};
pub use problems::ProblemExtractor;

use scraper::Selector;

use crate::error::{AppError, Result};

/// Parse a CSS selector, mapping failures to [`AppError::Selector`].
pub(crate) fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("div.class").is_ok());
        assert!(parse_selector("tr:has(a)").is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(parse_selector("[[invalid").is_err());
    }
}
