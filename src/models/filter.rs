//! Contest and problem filter configuration.
//!
//! Divisions and code letters are fixed enumerations; each resolves to the
//! concrete pattern or code set the crawl filters with. The resolved
//! [`FilterConfig`] is passed into the harvester at construction, so tests
//! can inject custom patterns without touching the named tables.

use regex::Regex;

use crate::error::{AppError, Result};

/// Contest division categories, filtered by contest title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Division {
    Div1,
    Div2,
    Div3,
}

impl Division {
    /// Regex source matched against contest titles, case-insensitive.
    pub fn pattern_source(&self) -> &'static str {
        match self {
            Division::Div1 => r"(?i)Codeforces Round #... \(Div\. 1\)",
            Division::Div2 => r"(?i)Codeforces Round #... \(Div\. 2\)",
            Division::Div3 => r"(?i)Codeforces Round #... \(Div\. 3\)",
        }
    }
}

/// Problem code letters; each letter accepts its split variants too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", value(rename_all = "UPPER"))]
pub enum CodeLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl CodeLetter {
    fn as_str(&self) -> &'static str {
        match self {
            CodeLetter::A => "A",
            CodeLetter::B => "B",
            CodeLetter::C => "C",
            CodeLetter::D => "D",
            CodeLetter::E => "E",
            CodeLetter::F => "F",
            CodeLetter::G => "G",
        }
    }

    /// Accepted short codes for this letter, e.g. `D` accepts `D`, `D1`, `D2`.
    pub fn accepted_codes(&self) -> Vec<String> {
        let letter = self.as_str();
        vec![
            letter.to_string(),
            format!("{letter}1"),
            format!("{letter}2"),
        ]
    }
}

/// Resolved filter parameters for one crawl run.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Pattern tested against contest titles
    pub contest_pattern: Regex,

    /// Accepted problem short codes
    pub problem_codes: Vec<String>,
}

impl FilterConfig {
    /// Build the filter for a division and code letter.
    pub fn new(division: Division, code: CodeLetter) -> Result<Self> {
        let contest_pattern = Regex::new(division.pattern_source())
            .map_err(|e| AppError::config(format!("invalid division pattern: {e}")))?;
        Ok(Self {
            contest_pattern,
            problem_codes: code.accepted_codes(),
        })
    }

    /// Build a filter from an arbitrary pattern and code set.
    pub fn custom(contest_pattern: Regex, problem_codes: Vec<String>) -> Self {
        Self {
            contest_pattern,
            problem_codes,
        }
    }

    /// Test the contest-name filter.
    pub fn matches_contest(&self, name: &str) -> bool {
        self.contest_pattern.is_match(name)
    }

    /// Test the problem-code filter.
    pub fn accepts_code(&self, code: &str) -> bool {
        self.problem_codes.iter().any(|c| c == code)
    }
}
