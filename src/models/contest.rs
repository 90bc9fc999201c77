//! Contest data structures.

use serde::{Deserialize, Serialize};

/// A contest entry scraped from a listing page.
///
/// Listing order is reverse-chronological (newest first), which callers
/// rely on when collecting the latest N contests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContestSummary {
    /// Contest display name, trimmed
    pub name: String,

    /// Absolute URL of the contest page
    pub link: String,
}
