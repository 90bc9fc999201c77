//! Page fetching.
//!
//! The crawl issues every request through the [`PageFetcher`] trait so tests
//! can substitute canned documents and count fetches. The production
//! implementation wraps a single `reqwest::Client`.

use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;
use url::Url;

use crate::error::Result;
use crate::models::CrawlerConfig;
use crate::utils::http;

/// Retrieves remote documents, either a listing page by index or an
/// arbitrary page by absolute URL.
///
/// One outbound request per call; no retries, no caching. A failed fetch is
/// fatal to the crawl that issued it.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the contest listing page at the given 1-based index.
    async fn fetch_listing(&self, page: u32) -> Result<Html>;

    /// Fetch a page by absolute URL.
    async fn fetch_url(&self, url: &str) -> Result<Html>;
}

/// HTTP-backed fetcher over a configured `reqwest::Client`.
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    /// Build a fetcher from crawler configuration.
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        Ok(Self {
            client: http::create_client(config)?,
            base: Url::parse(&config.base_url)?,
        })
    }

    fn listing_url(&self, page: u32) -> Result<Url> {
        Ok(self.base.join(&format!("/contests/page/{page}"))?)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_listing(&self, page: u32) -> Result<Html> {
        let url = self.listing_url(page)?;
        log::debug!("Fetching listing page {page}: {url}");
        http::fetch_page(&self.client, url.as_str()).await
    }

    async fn fetch_url(&self, url: &str) -> Result<Html> {
        log::debug!("Fetching {url}");
        http::fetch_page(&self.client, url).await
    }
}
