mod client;
mod error;
mod types;

use std::future::Future;

pub use client::{ClientConfig, DEFAULT_API_BASE, DEFAULT_PAGE_SIZE, HnClient};
pub use error::ApiError;
pub use types::{Comment, Story, StoryPage};

/// Asynchronous source of story pages and comment threads.
///
/// Implementations must be cheap to clone; the executor clones one into
/// every spawned fetch.
pub trait DataSource: Clone + Send + Sync + 'static {
    fn fetch_story_page(
        &self,
        page: usize,
    ) -> impl Future<Output = Result<StoryPage, ApiError>> + Send;

    fn fetch_comments(
        &self,
        ids: Vec<u64>,
    ) -> impl Future<Output = Result<Vec<Comment>, ApiError>> + Send;
}

impl DataSource for HnClient {
    async fn fetch_story_page(&self, page: usize) -> Result<StoryPage, ApiError> {
        HnClient::fetch_story_page(self, page).await
    }

    async fn fetch_comments(&self, ids: Vec<u64>) -> Result<Vec<Comment>, ApiError> {
        HnClient::fetch_comments(self, &ids).await
    }
}
