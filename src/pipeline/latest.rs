// src/pipeline/latest.rs

//! Latest-contest collection.
//!
//! Scans listing pages from the front (newest first) and collects the
//! first N contest summaries, with no problem filtering.

use std::time::Duration;

use url::Url;

use crate::error::Result;
use crate::models::{Config, ContestSummary};
use crate::services::{ContestListExtractor, HttpFetcher, PageFetcher};

/// Collect the latest `count` contests from the listing.
///
/// Stops early if the listing runs out of pages.
pub async fn collect_latest(
    fetcher: &dyn PageFetcher,
    extractor: &ContestListExtractor,
    count: usize,
    delay: Duration,
) -> Result<Vec<ContestSummary>> {
    let mut contests = Vec::with_capacity(count);
    let mut page = 1u32;

    while contests.len() < count {
        let batch = {
            let doc = fetcher.fetch_listing(page).await?;
            extractor.extract(&doc)
        };
        if batch.is_empty() {
            log::info!("Listing exhausted at page {page}");
            break;
        }

        for contest in batch {
            if contests.len() >= count {
                break;
            }
            contests.push(contest);
        }

        page += 1;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    Ok(contests)
}

/// Collect the latest `count` contests from the live site.
pub async fn run_latest(config: &Config, count: usize) -> Result<Vec<ContestSummary>> {
    let fetcher = HttpFetcher::new(&config.crawler)?;
    let extractor = ContestListExtractor::new(Url::parse(&config.crawler.base_url)?)?;
    collect_latest(
        &fetcher,
        &extractor,
        count,
        Duration::from_millis(config.crawler.request_delay_ms),
    )
    .await
}
