use std::ops::Range;
use std::time::Duration;

use super::error::ApiError;
use super::types::{Comment, HnItem, Story, StoryPage};

pub const DEFAULT_API_BASE: &str = "https://hacker-news.firebaseio.com/v0";
pub const DEFAULT_PAGE_SIZE: usize = 20;
const FEED_ENDPOINT: &str = "topstories";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub page_size: usize,
    pub timeout: Duration,
}

/// Resolve a requested page against the id list length.
///
/// A page that starts past the end snaps back to the last full page
/// (`total_ids / page_size - 1`, never below 0) instead of failing.
pub fn page_range(total_ids: usize, page: usize, page_size: usize) -> (usize, Range<usize>) {
    let page_size = page_size.max(1);
    let mut page = page;
    let mut start = page.saturating_mul(page_size);
    if start >= total_ids {
        page = (total_ids / page_size).saturating_sub(1);
        start = page * page_size;
    }
    let end = (start + page_size).min(total_ids);
    (page, start..end)
}

#[derive(Clone)]
pub struct HnClient {
    http: reqwest::Client,
    api_base: String,
    page_size: usize,
}

impl HnClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            page_size: config.page_size.max(1),
        })
    }

    pub async fn fetch_feed_ids(&self) -> Result<Vec<u64>, ApiError> {
        let url = format!("{}/{}.json", self.api_base, FEED_ENDPOINT);
        let ids: Vec<u64> = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(ids)
    }

    async fn fetch_item(&self, id: u64) -> Result<HnItem, ApiError> {
        let url = format!("{}/item/{}.json", self.api_base, id);
        let item: HnItem = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(item)
    }

    pub async fn fetch_story_page(&self, page: usize) -> Result<StoryPage, ApiError> {
        let ids = self.fetch_feed_ids().await?;
        let (served, range) = page_range(ids.len(), page, self.page_size);
        if served != page {
            tracing::debug!(requested = page, served, total = ids.len(), "page snapped");
        }

        let stories = self.fetch_stories_by_ids(&ids[range]).await?;
        Ok(StoryPage {
            page: served,
            total_ids: ids.len(),
            stories,
        })
    }

    /// Fetch items concurrently, keeping rank order. A slot whose item fails
    /// to load stays `Story::default()`; only a batch where every item fails
    /// is an error.
    pub async fn fetch_stories_by_ids(&self, ids: &[u64]) -> Result<Vec<Story>, ApiError> {
        self.fetch_batch(ids, Story::from_item, "story").await
    }

    /// Fetch top-level comments in `ids` order. Failed items become
    /// `Comment::default()`.
    pub async fn fetch_comments(&self, ids: &[u64]) -> Result<Vec<Comment>, ApiError> {
        self.fetch_batch(ids, Comment::from_item, "comment").await
    }

    async fn fetch_batch<T: Default>(
        &self,
        ids: &[u64],
        convert: fn(HnItem) -> T,
        kind: &'static str,
    ) -> Result<Vec<T>, ApiError> {
        let futures: Vec<_> = ids.iter().map(|&id| self.fetch_item(id)).collect();
        let results = futures::future::join_all(futures).await;

        if let Some(Err(first)) = results.first()
            && results.iter().all(Result::is_err)
        {
            tracing::warn!(kind, count = ids.len(), error = %first, "every item in batch failed");
            return Err(first.clone());
        }

        Ok(results
            .into_iter()
            .zip(ids)
            .map(|(result, id)| match result {
                Ok(item) => convert(item),
                Err(e) => {
                    tracing::debug!(kind, id, error = %e, "item failed to load");
                    T::default()
                }
            })
            .collect())
    }
}
