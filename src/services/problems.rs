//! Problem link and detail extraction.
//!
//! Two concerns share the selectors here: enumerating problem links from a
//! contest page, and scraping one problem page into a [`ProblemDetail`].
//! Both are lenient; missing elements degrade to sentinels instead of
//! failing the crawl.

use scraper::{Html, Selector};
use url::Url;

use crate::error::Result;
use crate::models::{DIFFICULTY_NA, ProblemDetail};
use crate::services::parse_selector;
use crate::utils::resolve_url;

const PROBLEM_LINK_SELECTOR: &str =
    "div.datatable table tbody tr > td:nth-child(1) > a:nth-child(1)";
const DIFFICULTY_SELECTOR: &str = r#"span[title="Difficulty"]"#;
const TITLE_SELECTOR: &str = "div.problemindexholder div.header div.title";

/// Extracts problem links from contest pages and metadata from problem
/// pages.
pub struct ProblemExtractor {
    base: Url,
    link_sel: Selector,
    difficulty_sel: Selector,
    title_sel: Selector,
}

impl ProblemExtractor {
    /// Create an extractor resolving relative links against `base`.
    pub fn new(base: Url) -> Result<Self> {
        Ok(Self {
            base,
            link_sel: parse_selector(PROBLEM_LINK_SELECTOR)?,
            difficulty_sel: parse_selector(DIFFICULTY_SELECTOR)?,
            title_sel: parse_selector(TITLE_SELECTOR)?,
        })
    }

    /// Extract absolute problem links from a contest page, in statement
    /// order.
    pub fn extract_links(&self, document: &Html) -> Vec<String> {
        document
            .select(&self.link_sel)
            .filter_map(|a| a.value().attr("href"))
            .map(|href| resolve_url(&self.base, href.trim()))
            .collect()
    }

    /// Scrape name, code and difficulty from a problem page.
    ///
    /// The difficulty marker text has the form `<prefix>*<digits>`; a page
    /// without the marker yields [`DIFFICULTY_NA`]. A page without a
    /// `<code>. <name>` title yields empty code and name, which callers
    /// treat as an extraction gap.
    pub fn extract_detail(&self, document: &Html, link: &str) -> ProblemDetail {
        let difficulty = document
            .select(&self.difficulty_sel)
            .next()
            .and_then(|el| {
                let text: String = el.text().collect();
                text.split('*').nth(1).map(|d| d.trim().to_string())
            })
            .unwrap_or_else(|| DIFFICULTY_NA.to_string());

        let (code, name) = document
            .select(&self.title_sel)
            .next()
            .and_then(|el| {
                let text: String = el.text().collect();
                let (code, name) = text.trim().split_once('.')?;
                Some((code.trim().to_string(), name.trim().to_string()))
            })
            .unwrap_or_default();

        ProblemDetail {
            name,
            code,
            difficulty,
            link: link.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ProblemExtractor {
        ProblemExtractor::new(Url::parse("https://codeforces.com").unwrap()).unwrap()
    }

    fn contest_page(rows: &str) -> Html {
        Html::parse_document(&format!(
            r#"<div class="datatable"><table><tbody>{rows}</tbody></table></div>"#
        ))
    }

    fn problem_page(title: &str, difficulty: &str) -> Html {
        Html::parse_document(&format!(
            r#"<div class="problemindexholder">
                 <div class="header"><div class="title">{title}</div></div>
                 {difficulty}
               </div>"#
        ))
    }

    #[test]
    fn test_extract_links_in_order() {
        let doc = contest_page(
            r#"<tr><td><a href="/contest/123/problem/A">A</a></td><td>Easy</td></tr>
               <tr><td><a href="/contest/123/problem/B">B</a></td><td>Medium</td></tr>
               <tr><td><a href="/contest/123/problem/D">D</a></td><td>Hard</td></tr>"#,
        );

        let links = extractor().extract_links(&doc);
        assert_eq!(
            links,
            vec![
                "https://codeforces.com/contest/123/problem/A",
                "https://codeforces.com/contest/123/problem/B",
                "https://codeforces.com/contest/123/problem/D",
            ]
        );
    }

    #[test]
    fn test_extract_links_skips_rows_without_anchor() {
        let doc = contest_page(r#"<tr><td>plain cell</td></tr>"#);
        assert!(extractor().extract_links(&doc).is_empty());
    }

    #[test]
    fn test_extract_detail_full() {
        let doc = problem_page("D2. Hard Problem", r#"<span title="Difficulty"> *1800 </span>"#);
        let link = "https://codeforces.com/contest/123/problem/D2";

        let detail = extractor().extract_detail(&doc, link);
        assert_eq!(detail.code, "D2");
        assert_eq!(detail.name, "Hard Problem");
        assert_eq!(detail.difficulty, "1800");
        assert_eq!(detail.link, link);
    }

    #[test]
    fn test_extract_detail_missing_difficulty_is_na() {
        let doc = problem_page("A. Trivial", "");
        let detail = extractor().extract_detail(&doc, "https://x/problem/A");
        assert_eq!(detail.difficulty, "NA");
        assert_eq!(detail.code, "A");
        assert_eq!(detail.name, "Trivial");
    }

    #[test]
    fn test_extract_detail_missing_title_yields_empty_fields() {
        let doc = Html::parse_document(r#"<span title="Difficulty">*900</span>"#);
        let detail = extractor().extract_detail(&doc, "https://x/problem/A");
        assert!(detail.code.is_empty());
        assert!(detail.name.is_empty());
        assert!(!detail.has_title());
        assert_eq!(detail.difficulty, "900");
    }

    #[test]
    fn test_extract_detail_title_without_separator() {
        let doc = problem_page("Untitled", "");
        let detail = extractor().extract_detail(&doc, "https://x/problem/A");
        assert!(!detail.has_title());
    }

    #[test]
    fn test_extract_detail_name_keeps_later_dots() {
        let doc = problem_page("C. Mr. Kitayuta's Gift", "");
        let detail = extractor().extract_detail(&doc, "https://x/problem/C");
        assert_eq!(detail.code, "C");
        assert_eq!(detail.name, "Mr. Kitayuta's Gift");
    }
}
