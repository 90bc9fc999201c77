//! Contest listing extraction.
//!
//! Pulls contest name/link pairs out of a listing page, preserving row
//! order. The listing is newest-first, so row order doubles as
//! reverse-chronological order.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::Result;
use crate::models::ContestSummary;
use crate::services::parse_selector;
use crate::utils::resolve_url;

const ROW_SELECTOR: &str = "div.contests-table div.datatable table tbody tr";
const NAME_CELL_SELECTOR: &str = "td:nth-child(1)";
const LINK_SELECTOR: &str = "a[href]";

/// Extracts contest summaries from listing pages.
pub struct ContestListExtractor {
    base: Url,
    row_sel: Selector,
    cell_sel: Selector,
    link_sel: Selector,
}

impl ContestListExtractor {
    /// Create an extractor resolving relative links against `base`.
    pub fn new(base: Url) -> Result<Self> {
        Ok(Self {
            base,
            row_sel: parse_selector(ROW_SELECTOR)?,
            cell_sel: parse_selector(NAME_CELL_SELECTOR)?,
            link_sel: parse_selector(LINK_SELECTOR)?,
        })
    }

    /// Extract all contests on the page, in document order.
    ///
    /// Rows that do not carry a name and link are skipped.
    pub fn extract(&self, document: &Html) -> Vec<ContestSummary> {
        document
            .select(&self.row_sel)
            .filter_map(|row| self.extract_row(&row))
            .collect()
    }

    fn extract_row(&self, row: &ElementRef) -> Option<ContestSummary> {
        let cell = row.select(&self.cell_sel).next()?;

        // The contest name is the cell's own text; anchor text inside the
        // cell (registration links etc.) must not bleed into it.
        let name = cell.children().find_map(|node| {
            node.value()
                .as_text()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
        })?;

        let href = cell.select(&self.link_sel).next()?.value().attr("href")?;

        Some(ContestSummary {
            name,
            link: resolve_url(&self.base, href.trim()),
        })
    }
}
