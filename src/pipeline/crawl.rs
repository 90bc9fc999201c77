// src/pipeline/crawl.rs

//! Problem harvesting pipeline.
//!
//! The harvester walks the contest listing page by page, gates every
//! expensive fetch behind a filter, and streams matched problems into a
//! record sink. Filters run cheapest-first: the contest-name pattern is
//! tested before the contest page is fetched, and the problem short code
//! (read from the link itself) is tested before the problem page is
//! fetched. The match limit is re-checked at every nesting level so the
//! crawl can stop mid-page or mid-contest.

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use url::Url;

use crate::error::Result;
use crate::models::{Config, CrawlerConfig, FilterConfig, MatchedRecord};
use crate::services::{ContestListExtractor, HttpFetcher, PageFetcher, ProblemExtractor};
use crate::storage::{CsvSink, RecordSink};
use crate::utils::short_code;

/// Mutable crawl position. Both fields only increase.
#[derive(Debug)]
struct CrawlState {
    current_page: u32,
    matched: u32,
}

impl CrawlState {
    fn new() -> Self {
        Self {
            current_page: 1,
            matched: 0,
        }
    }
}

/// Summary of a harvest run.
#[derive(Debug)]
pub struct HarvestOutcome {
    /// Records written to the sink
    pub matched: u32,

    /// Listing pages that yielded contests
    pub pages_scanned: u32,

    /// Contests that passed the name filter
    pub contests_matched: u32,

    /// Problem pages skipped because their title could not be parsed
    pub skipped_untitled: u32,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl HarvestOutcome {
    /// Wall-clock duration of the run.
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Crawl orchestrator: pagination, filtering, extraction and output.
pub struct Harvester<'a> {
    filter: FilterConfig,
    limit: u32,
    max_pages: Option<u32>,
    delay: Duration,
    fetcher: &'a dyn PageFetcher,
    contests: ContestListExtractor,
    problems: ProblemExtractor,
}

impl<'a> Harvester<'a> {
    /// Create a harvester crawling through `fetcher` until `limit` records
    /// match `filter`.
    pub fn new(
        config: &CrawlerConfig,
        filter: FilterConfig,
        limit: u32,
        fetcher: &'a dyn PageFetcher,
    ) -> Result<Self> {
        let base = Url::parse(&config.base_url)?;
        Ok(Self {
            filter,
            limit,
            max_pages: config.max_pages,
            delay: Duration::from_millis(config.request_delay_ms),
            fetcher,
            contests: ContestListExtractor::new(base.clone())?,
            problems: ProblemExtractor::new(base)?,
        })
    }

    /// Run the crawl, streaming matched records into `sink`.
    ///
    /// Terminates when the limit is reached, the listing is exhausted
    /// (empty page), or the optional page bound is hit. Any fetch failure
    /// aborts the run; records already written to the sink stay on disk.
    pub async fn run(&self, sink: &mut dyn RecordSink) -> Result<HarvestOutcome> {
        let started_at = Utc::now();
        let mut state = CrawlState::new();
        let mut pages_scanned = 0u32;
        let mut contests_matched = 0u32;
        let mut skipped_untitled = 0u32;

        'crawl: while state.matched < self.limit {
            if let Some(max) = self.max_pages {
                if state.current_page > max {
                    log::warn!(
                        "Stopping at page bound {max} with {}/{} matches",
                        state.matched,
                        self.limit
                    );
                    break;
                }
            }

            let contests = {
                let doc = self.fetcher.fetch_listing(state.current_page).await?;
                self.contests.extract(&doc)
            };
            if contests.is_empty() {
                log::info!("Listing exhausted at page {}", state.current_page);
                break;
            }
            pages_scanned += 1;
            log::debug!(
                "Page {}: {} contests listed",
                state.current_page,
                contests.len()
            );

            for contest in &contests {
                if state.matched >= self.limit {
                    break 'crawl;
                }
                if !self.filter.matches_contest(&contest.name) {
                    continue;
                }
                contests_matched += 1;
                log::info!("Contest found: {}", contest.name);

                self.pause().await;
                let links = {
                    let doc = self.fetcher.fetch_url(&contest.link).await?;
                    self.problems.extract_links(&doc)
                };

                for link in &links {
                    if state.matched >= self.limit {
                        break 'crawl;
                    }
                    if !self.filter.accepts_code(&short_code(link)) {
                        continue;
                    }

                    self.pause().await;
                    let detail = {
                        let doc = self.fetcher.fetch_url(link).await?;
                        self.problems.extract_detail(&doc, link)
                    };
                    if !detail.has_title() {
                        skipped_untitled += 1;
                        log::warn!("Skipping problem page without a parsable title: {link}");
                        continue;
                    }

                    sink.write(&MatchedRecord::new(contest, detail))?;
                    state.matched += 1;
                    log::info!("Found problem {}: {link}", state.matched);
                }
            }

            state.current_page += 1;
            self.pause().await;
        }

        Ok(HarvestOutcome {
            matched: state.matched,
            pages_scanned,
            contests_matched,
            skipped_untitled,
            started_at,
            finished_at: Utc::now(),
        })
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Run a harvest against the live site, writing a CSV file at `output`.
pub async fn run_harvest(
    config: &Config,
    filter: FilterConfig,
    limit: u32,
    output: &Path,
) -> Result<HarvestOutcome> {
    let fetcher = HttpFetcher::new(&config.crawler)?;
    let mut sink = CsvSink::create(output)?;
    let harvester = Harvester::new(&config.crawler, filter, limit, &fetcher)?;

    log::info!("Harvesting into {}", output.display());
    harvester.run(&mut sink).await
}
