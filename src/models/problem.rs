//! Problem data structures.

use serde::{Deserialize, Serialize};

use crate::models::ContestSummary;

/// Sentinel difficulty value for problem pages without a difficulty marker.
pub const DIFFICULTY_NA: &str = "NA";

/// Metadata scraped from a single problem page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetail {
    /// Problem name, e.g. "Hard Problem"
    pub name: String,

    /// Problem short code, e.g. "D2"
    pub code: String,

    /// Difficulty rating digits, or [`DIFFICULTY_NA`] when the page has none
    pub difficulty: String,

    /// Absolute URL of the problem page
    pub link: String,
}

impl ProblemDetail {
    /// Whether the page yielded a usable title.
    ///
    /// Pages without a parsable `<code>. <name>` title produce empty code
    /// and name; emitting such rows would corrupt the output, so the crawl
    /// skips them.
    pub fn has_title(&self) -> bool {
        !self.code.is_empty() && !self.name.is_empty()
    }
}

/// One output row: a problem that survived both filters, joined with its
/// contest. Field order matches the CSV column order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchedRecord {
    pub problem_name: String,
    pub problem_link: String,
    pub problem_code: String,
    pub problem_difficulty: String,
    pub contest_name: String,
    pub contest_link: String,
}

impl MatchedRecord {
    /// Flatten a contest/problem pair into an output row.
    pub fn new(contest: &ContestSummary, problem: ProblemDetail) -> Self {
        Self {
            problem_name: problem.name,
            problem_link: problem.link,
            problem_code: problem.code,
            problem_difficulty: problem.difficulty,
            contest_name: contest.name.clone(),
            contest_link: contest.link.clone(),
        }
    }
}
